//! Error types for array/object conversions
//!
//! Every message is a fixed literal so callers matching on the text keep
//! working across releases.

use std::fmt;

/// Which public conversion raised an input-shape error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Array to object conversion
    ToObject,
    /// Object to array conversion
    ToArray,
}

impl Operation {
    fn accepted(&self) -> &'static str {
        match self {
            Operation::ToObject => "arrays",
            Operation::ToArray => "objects",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ToObject => write!(f, "toObject"),
            Operation::ToArray => write!(f, "toArray"),
        }
    }
}

/// Fieldless discriminant of [`ConversionError`], handy for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    InvalidInputType,
    ConflictingOptions,
    MalformedPair,
    InvalidKeyType,
    DuplicateKey,
    InvalidOptions,
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(
        "The first argument supplied for {}() method is invalid. Only {} are accepted.",
        .operation,
        .operation.accepted()
    )]
    InvalidInputType { operation: Operation },

    #[error("Only one mapping option can be passed at a time.")]
    ConflictingOptions { enabled: Vec<&'static str> },

    #[error("Invalid array supplied. Expected an array of key-value pairs.")]
    MalformedPair { index: usize },

    #[error("The array supplied has an invalid key (only number and string are allowed).")]
    InvalidKeyType,

    #[error("The array supplied has duplicate keys.")]
    DuplicateKey { key: String },

    #[error("Invalid options supplied: {message}")]
    InvalidOptions { message: String },
}

impl ConversionError {
    pub fn invalid_input(operation: Operation) -> Self {
        Self::InvalidInputType { operation }
    }

    pub fn conflicting(enabled: Vec<&'static str>) -> Self {
        Self::ConflictingOptions { enabled }
    }

    pub fn invalid_options(message: String) -> Self {
        Self::InvalidOptions { message }
    }

    /// Get the kind of this error without its payload
    pub fn kind(&self) -> ConversionErrorKind {
        match self {
            Self::InvalidInputType { .. } => ConversionErrorKind::InvalidInputType,
            Self::ConflictingOptions { .. } => ConversionErrorKind::ConflictingOptions,
            Self::MalformedPair { .. } => ConversionErrorKind::MalformedPair,
            Self::InvalidKeyType => ConversionErrorKind::InvalidKeyType,
            Self::DuplicateKey { .. } => ConversionErrorKind::DuplicateKey,
            Self::InvalidOptions { .. } => ConversionErrorKind::InvalidOptions,
        }
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_options(err.to_string())
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
