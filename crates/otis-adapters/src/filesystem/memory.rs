//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use otis_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, Filesystem},
    },
    error::{OtisError, OtisResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can keep a handle while the
/// service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all its parents (testing helper).
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        if let Ok(mut inner) = self.inner.write() {
            for ancestor in path.as_ref().ancestors() {
                if !ancestor.as_os_str().is_empty() {
                    inner.directories.insert(ancestor.to_path_buf());
                }
            }
        }
        self
    }

    /// Add a file, creating its parents (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) -> &Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Names directly inside `dir`, sorted.
    pub fn list(&self, dir: &Path) -> Vec<String> {
        self.read_dir(dir)
            .map(|entries| entries.into_iter().map(|e| e.name).collect())
            .unwrap_or_default()
    }

    /// Every file path, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> OtisResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> OtisResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_dir(&self, path: &Path) -> OtisResult<Vec<DirEntry>> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(fs_error(path, "not a directory"));
        }

        let is_child = |p: &Path| p.parent() == Some(path);
        let mut entries: Vec<DirEntry> = inner
            .directories
            .iter()
            .filter(|p| is_child(p))
            .filter_map(|p| p.file_name())
            .map(|n| DirEntry::dir(n.to_string_lossy()))
            .chain(
                inner
                    .files
                    .keys()
                    .filter(|p| is_child(p))
                    .filter_map(|p| p.file_name())
                    .map(|n| DirEntry::file(n.to_string_lossy())),
            )
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> OtisResult<String> {
        self.read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| fs_error(path, "no such file"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.read().is_ok_and(|inner| inner.contains(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read().is_ok_and(|inner| inner.directories.contains(path))
    }

    fn rename(&self, from: &Path, to: &Path) -> OtisResult<()> {
        let mut inner = self.write()?;
        if inner.contains(to) {
            return Err(fs_error(to, "destination already exists"));
        }
        if !inner.parent_exists(to) {
            return Err(fs_error(to, "parent directory does not exist"));
        }

        if let Some(content) = inner.files.remove(from) {
            inner.files.insert(to.to_path_buf(), content);
            return Ok(());
        }
        if !inner.directories.contains(from) {
            return Err(fs_error(from, "no such file or directory"));
        }

        let moved_dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for dir in moved_dirs {
            inner.directories.remove(&dir);
            inner.directories.insert(rebase(&dir, from, to));
        }

        let moved_files: Vec<PathBuf> = inner
            .files
            .keys()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for file in moved_files {
            if let Some(content) = inner.files.remove(&file) {
                inner.files.insert(rebase(&file, from, to), content);
            }
        }
        Ok(())
    }

    fn create_new_file(&self, path: &Path) -> OtisResult<()> {
        let mut inner = self.write()?;
        if inner.contains(path) {
            return Err(fs_error(path, "file already exists"));
        }
        if !inner.parent_exists(path) {
            return Err(fs_error(path, "parent directory does not exist"));
        }
        inner.files.insert(path.to_path_buf(), String::new());
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> OtisResult<()> {
        let mut inner = self.write()?;
        if inner.contains(path) {
            return Err(fs_error(path, "directory already exists"));
        }
        if !inner.parent_exists(path) {
            return Err(fs_error(path, "parent directory does not exist"));
        }
        inner.directories.insert(path.to_path_buf());
        Ok(())
    }
}

fn rebase(path: &Path, from: &Path, to: &Path) -> PathBuf {
    match path.strip_prefix(from) {
        Ok(rest) if rest.as_os_str().is_empty() => to.to_path_buf(),
        Ok(rest) => to.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

fn fs_error(path: &Path, reason: &str) -> OtisError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

fn poisoned() -> OtisError {
    OtisError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_never_overwrites() {
        let fs = MemoryFilesystem::new();
        fs.add_file("ms/00-a.md", "a").add_file("ms/01-b.md", "b");

        assert!(fs.rename(Path::new("ms/00-a.md"), Path::new("ms/01-b.md")).is_err());
        assert_eq!(fs.read_file(Path::new("ms/01-b.md")).as_deref(), Some("b"));
    }

    #[test]
    fn renaming_a_directory_carries_its_contents() {
        let fs = MemoryFilesystem::new();
        fs.add_file("ms/00-act/00-a.md", "a")
            .add_dir("ms/00-act/00-inner");

        fs.rename(Path::new("ms/00-act"), Path::new("ms/01-act")).unwrap();

        assert!(fs.is_dir(Path::new("ms/01-act/00-inner")));
        assert!(!fs.exists(Path::new("ms/00-act")));
        assert_eq!(fs.read_file(Path::new("ms/01-act/00-a.md")).as_deref(), Some("a"));
    }

    #[test]
    fn read_dir_is_sorted_and_typed() {
        let fs = MemoryFilesystem::new();
        fs.add_file("ms/01-b.md", "")
            .add_dir("ms/00-act")
            .add_file("ms/work.yml", "");

        let entries = fs.read_dir(Path::new("ms")).unwrap();
        assert_eq!(
            entries,
            vec![
                DirEntry::dir("00-act"),
                DirEntry::file("01-b.md"),
                DirEntry::file("work.yml"),
            ]
        );
    }

    #[test]
    fn create_requires_parent_and_fresh_path() {
        let fs = MemoryFilesystem::new();
        fs.add_dir("ms");
        assert!(fs.create_new_file(Path::new("nope/00-a.md")).is_err());
        fs.create_new_file(Path::new("ms/00-a.md")).unwrap();
        assert!(fs.create_new_file(Path::new("ms/00-a.md")).is_err());
        fs.create_dir(Path::new("ms/00-act")).unwrap();
        assert!(fs.create_dir(Path::new("ms/00-act")).is_err());
    }
}
