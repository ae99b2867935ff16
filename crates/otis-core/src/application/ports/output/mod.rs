//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::error::OtisResult;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `otis_adapters::filesystem::LocalFilesystem` (production)
/// - `otis_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Mutations never overwrite: `rename`, `create_new_file` and `create_dir`
/// fail when the destination already exists.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// List a directory, sorted by name.
    fn read_dir(&self, path: &Path) -> OtisResult<Vec<DirEntry>>;

    fn read_to_string(&self, path: &Path) -> OtisResult<String>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Rename or move `from` to `to`. Directories carry their contents.
    fn rename(&self, from: &Path, to: &Path) -> OtisResult<()>;

    /// Create an empty file.
    fn create_new_file(&self, path: &Path) -> OtisResult<()>;

    /// Create an empty directory. The parent must exist.
    fn create_dir(&self, path: &Path) -> OtisResult<()>;
}

/// Port for the interactive yes/no gate.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer: Send + Sync {
    /// Show `prompt` and return `true` only for an explicit affirmative.
    fn confirm(&self, prompt: &str) -> OtisResult<bool>;
}
