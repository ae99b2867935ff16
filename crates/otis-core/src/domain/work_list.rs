//! Work-list: a descriptive batch of pending filesystem operations.
//!
//! Building a [`WorkList`] never touches the disk. The executor in
//! `crate::application::services` applies it later, strictly in order.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// One pending filesystem mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Change the basename of `path`, staying in the same directory.
    Rename { path: PathBuf, new_name: String },
    /// Create an empty file. Fails if it already exists.
    AddFile { path: PathBuf },
    /// Create an empty directory.
    AddDirectory { path: PathBuf },
    /// Rename across directories (also used for temp-name shuffles).
    Move { from: PathBuf, to: PathBuf },
}

impl Operation {
    /// Short verb used in previews.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Rename { .. } => "RENAME",
            Self::AddFile { .. } | Self::AddDirectory { .. } => "ADD",
            Self::Move { .. } => "MOVE",
        }
    }

    /// Where the renamed entry ends up.
    pub fn rename_target(path: &Path, new_name: &str) -> PathBuf {
        match path.parent() {
            Some(parent) => parent.join(new_name),
            None => PathBuf::from(new_name),
        }
    }

    /// The path this operation reads from or creates first.
    pub fn source(&self) -> &Path {
        match self {
            Self::Rename { path, .. } | Self::AddFile { path } | Self::AddDirectory { path } => path,
            Self::Move { from, .. } => from,
        }
    }

    fn describe(&self, base: Option<&Path>) -> String {
        let show = |p: &Path| -> String {
            base.and_then(|b| p.strip_prefix(b).ok())
                .unwrap_or(p)
                .display()
                .to_string()
        };

        match self {
            Self::Rename { path, new_name } => format!(
                "{:>6} {} → {}",
                self.verb(),
                show(path),
                show(&Self::rename_target(path, new_name))
            ),
            Self::AddFile { path } | Self::AddDirectory { path } => {
                format!("{:>6} {}", self.verb(), show(path))
            }
            Self::Move { from, to } => {
                format!("{:>6} {} → {}", self.verb(), show(from), show(to))
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe(None).trim_start())
    }
}

/// Ordered list of operations, applied exactly in construction order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkList {
    operations: Vec<Operation>,
}

impl WorkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    pub fn rename(&mut self, path: impl Into<PathBuf>, new_name: impl Into<String>) {
        self.push(Operation::Rename {
            path: path.into(),
            new_name: new_name.into(),
        });
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        self.push(Operation::AddFile { path: path.into() });
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.push(Operation::AddDirectory { path: path.into() });
    }

    pub fn move_entry(&mut self, from: impl Into<PathBuf>, to: impl Into<PathBuf>) {
        self.push(Operation::Move {
            from: from.into(),
            to: to.into(),
        });
    }

    /// Append every operation of `other`, keeping its order.
    pub fn append(&mut self, other: WorkList) {
        self.operations.extend(other.operations);
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Where an entry currently at `path` ends up once the list is applied.
    ///
    /// Renaming or moving one of its ancestor directories carries it along.
    pub fn final_path(&self, path: &Path) -> PathBuf {
        let mut current = path.to_path_buf();
        for op in &self.operations {
            let (from, to) = match op {
                Operation::Rename { path, new_name } => {
                    (path.as_path(), Operation::rename_target(path, new_name))
                }
                Operation::Move { from, to } => (from.as_path(), to.clone()),
                Operation::AddFile { .. } | Operation::AddDirectory { .. } => continue,
            };
            if let Ok(rest) = current.strip_prefix(from) {
                current = if rest.as_os_str().is_empty() {
                    to
                } else {
                    to.join(rest)
                };
            }
        }
        current
    }

    /// Multi-line, human-readable preview with paths shown relative to
    /// `base` where possible.
    pub fn preview(&self, base: Option<&Path>) -> String {
        let mut out = String::new();
        for op in &self.operations {
            out.push_str(&op.describe(base));
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a WorkList {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

impl IntoIterator for WorkList {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WorkList {
        let mut list = WorkList::new();
        list.rename("manuscript/01-b.md", "02-b.md");
        list.add_file("manuscript/01-new.md");
        list.move_entry("manuscript/02-c.md", "manuscript/01-act/00-c.md");
        list
    }

    #[test]
    fn building_keeps_construction_order() {
        let list = sample();
        assert_eq!(list.len(), 3);
        let verbs: Vec<_> = list.iter().map(Operation::verb).collect();
        assert_eq!(verbs, ["RENAME", "ADD", "MOVE"]);
    }

    #[test]
    fn preview_aligns_verbs_and_strips_base() {
        let preview = sample().preview(Some(Path::new("manuscript")));
        let lines: Vec<_> = preview.lines().collect();
        assert_eq!(lines[0], "RENAME 01-b.md → 02-b.md");
        assert_eq!(lines[1], "   ADD 01-new.md");
        assert_eq!(lines[2], "  MOVE 02-c.md → 01-act/00-c.md");
    }

    #[test]
    fn display_has_no_padding() {
        let op = Operation::AddDirectory {
            path: PathBuf::from("ms/03-act"),
        };
        assert_eq!(op.to_string(), "ADD ms/03-act");
    }

    #[test]
    fn final_path_follows_renames_and_moves() {
        let mut list = WorkList::new();
        list.move_entry("ms/02-c.md", "ms/.02-c.md.otis-move");
        list.rename("ms/01-b.md", "02-b.md");
        list.move_entry("ms/.02-c.md.otis-move", "ms/01-c.md");
        assert_eq!(list.final_path(Path::new("ms/02-c.md")), Path::new("ms/01-c.md"));
        assert_eq!(list.final_path(Path::new("ms/00-a.md")), Path::new("ms/00-a.md"));
    }

    #[test]
    fn final_path_follows_renamed_ancestors() {
        let mut list = WorkList::new();
        list.move_entry("ms/00-a", "ms/.00-a.otis-move");
        list.rename("ms/01-b", "00-b");
        list.rename("ms/02-c", "01-c");
        list.move_entry("ms/.00-a.otis-move", "ms/01-c/00-a");
        assert_eq!(list.final_path(Path::new("ms/00-a")), Path::new("ms/01-c/00-a"));
        assert_eq!(
            list.final_path(Path::new("ms/00-a/03-x.md")),
            Path::new("ms/01-c/00-a/03-x.md")
        );
        assert_eq!(list.final_path(Path::new("ms/02-c/00-y.md")), Path::new("ms/01-c/00-y.md"));
        // Component-wise: a sibling sharing a name prefix is untouched.
        assert_eq!(list.final_path(Path::new("ms/00-ab")), Path::new("ms/00-ab"));
    }

    #[test]
    fn append_concatenates() {
        let mut a = WorkList::new();
        a.add_file("x.md");
        let mut b = WorkList::new();
        b.add_directory("d");
        a.append(b);
        assert_eq!(a.len(), 2);
        assert!(matches!(a.operations()[1], Operation::AddDirectory { .. }));
    }

    #[test]
    fn serializes_with_operation_tag() {
        let mut list = WorkList::new();
        list.add_file("ms/00-a.md");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"op":"add_file","path":"ms/00-a.md"}]"#);
    }
}
