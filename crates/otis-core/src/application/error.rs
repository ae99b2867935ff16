//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not manuscript
//! structure. Structural errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed. `reason` is the underlying I/O message.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A work list stopped partway. The first `applied` operations remain
    /// on disk.
    #[error("stopped after {applied} of {total} changes; `{operation}` failed: {reason}")]
    PartialExecution {
        applied: usize,
        total: usize,
        operation: String,
        reason: String,
    },

    /// No ancestor directory carries the project file.
    #[error("not inside an otis project (searched upward from {start})")]
    ProjectNotFound { start: PathBuf },

    /// The confirmation prompt could not be read.
    #[error("could not read confirmation: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::PartialExecution { applied, .. } => vec![
                format!("The first {} change(s) were applied and remain on disk", applied),
                "Inspect the manuscript and finish the renumbering by hand".into(),
            ],
            Self::ProjectNotFound { .. } => vec![
                "Run otis from inside a directory containing otis.yml".into(),
                "Or pass --manuscript <PATH> explicitly".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Re-run with --force to skip the confirmation prompt".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::PartialExecution { .. } => ErrorCategory::Io,
            Self::ProjectNotFound { .. } => ErrorCategory::NotFound,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
