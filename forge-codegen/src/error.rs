use std::fmt::Display;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for literal rendering and class emission.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("cannot render {kind} as a literal")]
    #[diagnostic(
        code(classforge::invalid_literal_kind),
        help("literals must be strings, numbers, booleans, null, lists or maps")
    )]
    InvalidLiteralKind { kind: String },

    #[error("malformed class spec: {message}")]
    #[diagnostic(code(classforge::malformed_spec))]
    MalformedSpec { message: String },

    #[error("failed to capture value: {message}")]
    #[diagnostic(code(classforge::capture))]
    Capture { message: String },
}

impl Error {
    /// Create an invalid literal kind error.
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        Error::InvalidLiteralKind { kind: kind.into() }
    }

    /// Create a malformed spec error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedSpec {
            message: message.into(),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Capture {
            message: msg.to_string(),
        }
    }
}
