// ============================================================================
// domain/error.rs - STRUCTURAL AND RESOLUTION ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI re-renders them)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Structural Errors (malformed manuscript, detected at load time)
    // ========================================================================
    #[error("missing manuscript: {path} does not exist or is not a directory")]
    MissingManuscript { path: PathBuf },

    #[error("{path} is missing required number prefix")]
    MissingFileNumber { path: PathBuf },

    #[error("unexpected file in manuscript: {path}")]
    UnexpectedFile { path: PathBuf },

    #[error("work {path} has scenes before the first chapter")]
    ScenesBeforeFirstChapter { path: PathBuf },

    #[error("manuscript {path} does not contain any works (no work.yml found)")]
    NoWorks { path: PathBuf },

    #[error("invalid metadata in {path}: {reason}")]
    InvalidMetadata { path: PathBuf, reason: String },

    // ========================================================================
    // Resolution Errors (user-supplied path not in the model)
    // ========================================================================
    #[error("path {path} does not exist or is not a folder")]
    FolderPathNotFound { path: PathBuf },

    #[error("path {path} does not exist or is not a scene")]
    ScenePathNotFound { path: PathBuf },

    #[error("{path} is not one of the entries being reordered")]
    EntryNotInGroup { path: PathBuf },

    #[error("cannot move {path} into itself or one of its own folders")]
    MoveIntoItself { path: PathBuf },

    // ========================================================================
    // Usage Errors
    // ========================================================================
    #[error("title {title:?} has no letters to build a file name from")]
    InvalidTitle { title: String },

    #[error("either a target folder or --at must be specified (or both)")]
    PathOrAtRequired,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingManuscript { path } => vec![
                format!("Expected a manuscript directory at {}", path.display()),
                "Run otis from inside a project (a directory containing otis.yml)".into(),
                "Or pass --manuscript <PATH> explicitly".into(),
            ],
            Self::MissingFileNumber { path } => vec![
                format!("Rename {} so it starts with a number", path.display()),
                "Example: 03-the-long-night.md".into(),
            ],
            Self::UnexpectedFile { path } => vec![
                format!("Move {} out of the manuscript", path.display()),
                "Only .md scenes, numbered folders, work.yml and chapter.yml belong here".into(),
                "Files starting with '.' are ignored".into(),
            ],
            Self::ScenesBeforeFirstChapter { .. } => vec![
                "Every scene in a work with chapters must follow a chapter.yml waypoint".into(),
                "Add a chapter.yml (numbered: false for a prologue) ahead of the first scene".into(),
            ],
            Self::NoWorks { .. } => vec![
                "Add a work.yml to the manuscript directory (single work)".into(),
                "Or to each top-level folder (one work per folder)".into(),
            ],
            Self::InvalidMetadata { reason, .. } => vec![
                format!("YAML problem: {}", reason),
                "work.yml accepts: title, runningTitle, author, authorSurname".into(),
                "chapter.yml accepts: title, numbered".into(),
            ],
            Self::FolderPathNotFound { path } | Self::ScenePathNotFound { path } => vec![
                format!("Check that {} exists inside the manuscript", path.display()),
                "Try: otis wordcount to list the manuscript structure".into(),
            ],
            Self::InvalidTitle { .. } => vec![
                "Titles are kebab-cased from their letters a-z".into(),
                "Example: otis touch . \"The Long Night\"".into(),
            ],
            Self::MoveIntoItself { .. } => vec![
                "Pick a target folder outside the folder being moved".into(),
            ],
            Self::PathOrAtRequired => vec![
                "Example: otis mv 02-scene.md --at 0".into(),
                "Example: otis mv 02-scene.md ../01-act-two".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingFileNumber { .. }
            | Self::UnexpectedFile { .. }
            | Self::ScenesBeforeFirstChapter { .. }
            | Self::NoWorks { .. }
            | Self::InvalidMetadata { .. } => ErrorCategory::Structural,
            Self::MissingManuscript { .. }
            | Self::FolderPathNotFound { .. }
            | Self::ScenePathNotFound { .. } => ErrorCategory::NotFound,
            Self::PathOrAtRequired | Self::MoveIntoItself { .. } | Self::InvalidTitle { .. } => {
                ErrorCategory::Validation
            }
            Self::EntryNotInGroup { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Structural,
    Validation,
    NotFound,
    Internal,
}
