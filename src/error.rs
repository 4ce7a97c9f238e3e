//! Error types for the difflog CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Malformed diff content is never an error here: the parser records it as a
//! skip event instead.

use crate::embed::EmbedError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for difflog operations.
#[derive(Error, Debug)]
pub enum DiffLogError {
    /// User provided invalid arguments, input, or configuration.
    #[error("{0}")]
    UserError(String),

    /// Diff input could not be decoded.
    #[error("Invalid diff input: {0}")]
    InvalidInput(String),

    /// The diff text could not be obtained (e.g. `git diff` failed).
    #[error("Diff source unavailable: {0}")]
    SourceUnavailable(String),

    /// The embedding service call failed or timed out.
    #[error("Embedding service failure: {0}")]
    EmbeddingServiceFailure(#[from] EmbedError),
}

impl DiffLogError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffLogError::UserError(_) => exit_codes::USER_ERROR,
            DiffLogError::InvalidInput(_) => exit_codes::USER_ERROR,
            DiffLogError::SourceUnavailable(_) => exit_codes::SOURCE_FAILURE,
            DiffLogError::EmbeddingServiceFailure(_) => exit_codes::EMBEDDING_FAILURE,
        }
    }
}

/// Result type alias for difflog operations.
pub type Result<T> = std::result::Result<T, DiffLogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = DiffLogError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn invalid_input_has_correct_exit_code() {
        let err = DiffLogError::InvalidInput("not utf-8".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn source_unavailable_has_correct_exit_code() {
        let err = DiffLogError::SourceUnavailable("git diff failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::SOURCE_FAILURE);
    }

    #[test]
    fn embedding_failure_converts_and_maps_exit_code() {
        let err: DiffLogError = EmbedError::TimedOut(Duration::from_secs(5)).into();
        assert_eq!(err.exit_code(), exit_codes::EMBEDDING_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = DiffLogError::SourceUnavailable("git diff failed (exit code 128)".to_string());
        assert_eq!(
            err.to_string(),
            "Diff source unavailable: git diff failed (exit code 128)"
        );

        let err: DiffLogError = EmbedError::Unavailable("connection refused".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Embedding service failure: embedding service unavailable: connection refused"
        );
    }
}
