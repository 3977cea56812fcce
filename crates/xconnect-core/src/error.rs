//! # Error Types
//!
//! One error enum for the whole core. The resolver distinguishes two
//! recoverable failures:
//!
//! - `NotFound` — the path resolves to nothing at some level
//! - `TypeMismatch` — the path resolves to a value of an unexpected type
//!
//! Decode and I/O failures abort loading a single document; callers in batch
//! mode log and skip, they never crash.

use thiserror::Error;

/// Errors produced while decoding, resolving, or emitting xconnect documents.
#[derive(Debug, Error)]
pub enum XConnectError {
    /// The path resolves to nothing at some level of the document tree.
    #[error("path not found: [{0}]")]
    NotFound(String),

    /// The path resolves to a value of an unexpected type.
    #[error("type mismatch at [{path}]: expected {expected}, found {actual}")]
    TypeMismatch {
        /// The path that was resolved.
        path: String,
        /// The requested value type.
        expected: &'static str,
        /// The type actually found at the path.
        actual: &'static str,
    },

    /// A required key is absent from a wrapper document.
    #[error("missing key: [{0}]")]
    MissingKey(String),

    /// Malformed YAML or JSON input.
    #[error("decode error: {0}")]
    Decode(String),

    /// A file read or write failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// An outbound HTTP delivery failed.
    #[error("network error: {0}")]
    Network(String),
}

impl From<serde_yaml::Error> for XConnectError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<serde_json::Error> for XConnectError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<std::io::Error> for XConnectError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
