//! Error types for the Orthos library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`OrthosError`] enum. Routine "nothing found" outcomes (an unseen context, an
//! ambiguous autocomplete, an empty candidate pool) are expressed as `Option` or
//! empty collections, never as errors.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Orthos operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common cases.
#[derive(Error, Debug)]
pub enum OrthosError {
    /// I/O errors (corpus or dictionary file loading)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, normalization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Context-model errors (construction, retrieval)
    #[error("Model error: {0}")]
    Model(String),

    /// Dictionary-related errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OrthosError.
pub type Result<T> = std::result::Result<T, OrthosError>;

impl OrthosError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        OrthosError::Analysis(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        OrthosError::Model(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        OrthosError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        OrthosError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new internal error for broken invariants.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        OrthosError::Other(format!("Internal error: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OrthosError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = OrthosError::model("Test model error");
        assert_eq!(error.to_string(), "Model error: Test model error");

        let error = OrthosError::dictionary("Test dictionary error");
        assert_eq!(error.to_string(), "Dictionary error: Test dictionary error");

        let error = OrthosError::invalid_argument("bad slot");
        assert_eq!(error.to_string(), "Error: Invalid argument: bad slot");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let orthos_error = OrthosError::from(io_error);

        match orthos_error {
            OrthosError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
