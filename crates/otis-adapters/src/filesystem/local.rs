//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use otis_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, Filesystem},
    },
    error::{OtisError, OtisResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_dir(&self, path: &Path) -> OtisResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))? {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory"))?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                // Follows symlinks, like the loader expects.
                is_dir: entry.path().is_dir(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> OtisResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn rename(&self, from: &Path, to: &Path) -> OtisResult<()> {
        trace!(from = %from.display(), to = %to.display(), "rename");
        // std::fs::rename silently replaces files on unix.
        if fs::symlink_metadata(to).is_ok() {
            return Err(map_io_error(
                to,
                io::Error::from(io::ErrorKind::AlreadyExists),
                "rename onto existing entry",
            ));
        }
        fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename"))
    }

    fn create_new_file(&self, path: &Path) -> OtisResult<()> {
        trace!(path = %path.display(), "create file");
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(drop)
            .map_err(|e| map_io_error(path, e, "create file"))
    }

    fn create_dir(&self, path: &Path) -> OtisResult<()> {
        trace!(path = %path.display(), "create directory");
        fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> OtisError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("failed to {}: {}", operation, e),
    }
    .into()
}
