//! Class specification types for the classforge generator.
//!
//! This crate holds the input model consumed by `classforge-codegen`.
//! A [`ClassSpec`] describes one generated file: its namespace, imports,
//! inheritance, properties and methods. Default values are expressed as
//! [`Literal`] trees.
//!
//! # Architecture
//!
//! ```text
//! caller (code / serde) → classforge-ir (ClassSpec) → classforge-codegen → String
//! ```
//!
//! The types are plain data:
//! - Immutable once handed to the emitter (it only borrows them)
//! - Order-preserving (members are emitted in declaration order)
//! - Deserializable from any serde format, in map or list form

mod class;
mod literal;
mod member;
mod serde_helpers;

pub use class::{ClassKind, ClassSpec};
pub use literal::Literal;
pub use member::{ArgumentSpec, MethodSpec, Modifiers, PropertySpec};
