//! PHP class generation for classforge.
//!
//! This crate turns a [`ClassSpec`](classforge_ir::ClassSpec) into the text
//! of a PHP source file, and [`Literal`](classforge_ir::Literal) values into
//! PHP literal expressions. Nothing here performs I/O; [`ClassFile`] hands
//! rendered text to the `classforge-core` writer.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, Indent)
//! - [`literal`] - Literal serializer and serde capture
//! - [`emitter`] - Class emitter
//! - [`validate`] - Structural rules checked before emission

pub mod builder;
pub mod emitter;
mod error;
mod file;
pub mod literal;
pub mod validate;

pub use emitter::{ClassEmitter, EmitOptions, build};
pub use error::{Error, Result};
pub use file::ClassFile;
pub use literal::to_source;
