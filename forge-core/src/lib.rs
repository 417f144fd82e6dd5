//! File persistence for classforge output.
//!
//! The generators in `classforge-codegen` never touch the file system.
//! This crate is the collaborator that takes rendered text and writes it
//! to disk according to per-file [`FileRules`].

mod file;

pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
