//! Unified error handling for otis core.
//!
//! Wraps domain and application errors behind one type with
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for otis core operations.
#[derive(Debug, Error, Clone)]
pub enum OtisError {
    /// Malformed manuscripts, unresolvable paths, bad usage.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O and orchestration failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl OtisError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file and OTIS__* environment variables".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in otis".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Structural => ErrorCategory::Structural,
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Structural,
    Validation,
    NotFound,
    Io,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type OtisResult<T> = Result<T, OtisError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_keep_their_message() {
        let err: OtisError = DomainError::UnexpectedFile {
            path: PathBuf::from("manuscript/cover.png"),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "unexpected file in manuscript: manuscript/cover.png"
        );
        assert_eq!(err.category(), ErrorCategory::Structural);
    }

    #[test]
    fn io_errors_are_categorised() {
        let err: OtisError = ApplicationError::FilesystemError {
            path: PathBuf::from("ms/00-a.md"),
            reason: "permission denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(!err.suggestions().is_empty());
    }
}
