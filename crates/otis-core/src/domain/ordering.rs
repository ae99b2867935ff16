//! Ordering engine.
//!
//! Pure functions over one sibling group of numbered entries. Nothing here
//! touches the disk: every function returns a [`WorkList`] that, applied in
//! order, keeps the group's numbers unique and in sequence.
//!
//! Shifts that open a slot run in descending number order; shifts that
//! close a hole run in ascending order. Either way each rename lands on a
//! number that is already free.

use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    node::Node,
    numbering::{base_name, renumber_filename},
    work_list::{Operation, WorkList},
};

/// Suffix for the holding name used while an entry moves within its group.
const HOLDING_SUFFIX: &str = "otis-move";

/// A sibling taking part in ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    /// `None` for unnumbered entries; they are never shifted.
    pub number: Option<u32>,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, number: Option<u32>) -> Self {
        Self {
            path: path.into(),
            number,
        }
    }

    pub fn name(&self) -> String {
        base_name(&self.path)
    }

    fn renamed(&self, number: u32) -> String {
        renumber_filename(&self.name(), number)
    }
}

impl From<&Node> for Entry {
    fn from(node: &Node) -> Self {
        Self::new(node.path(), node.file_number())
    }
}

/// The number a new entry appended to the group should take.
///
/// An empty group starts at 0.
pub fn next_index(entries: &[Entry]) -> u32 {
    entries
        .iter()
        .filter_map(|e| e.number)
        .max()
        .map_or(0, |max| max + 1)
}

/// Renames that vacate `index`.
///
/// Only the contiguous run of numbers starting at `index` is shifted up;
/// a gap above the run already absorbs the shift.
pub fn make_room(entries: &[Entry], index: u32) -> WorkList {
    let mut list = WorkList::new();

    let mut end = index;
    while entries.iter().any(|e| e.number == Some(end)) {
        end += 1;
    }

    for n in (index..end).rev() {
        for entry in entries.iter().filter(|e| e.number == Some(n)) {
            list.rename(&entry.path, entry.renamed(n + 1));
        }
    }
    list
}

/// Reorder `path` to `target` within its own group.
///
/// The entry is parked under a dot-prefixed holding name, the entries in
/// between shift by one toward the vacated slot, and the entry is then
/// moved into `target`. Moving later clamps `target` to the highest
/// existing number. Targeting the current slot yields an empty list.
pub fn move_to_index(entries: &[Entry], path: &Path, target: u32) -> Result<WorkList, DomainError> {
    let entry = find(entries, path)?;

    let Some(current) = entry.number else {
        // Unnumbered: insert it as if it were new.
        let target = target.min(next_index(entries));
        let mut list = make_room(entries, target);
        list.rename(&entry.path, entry.renamed(target));
        return Ok(list);
    };

    let target = if target > current {
        target.min(next_index(entries).saturating_sub(1))
    } else {
        target
    };
    if target == current {
        return Ok(WorkList::new());
    }

    let holding = holding_path(entry);
    let mut list = WorkList::new();
    list.move_entry(&entry.path, &holding);

    if target < current {
        for n in (target..current).rev() {
            shift(&mut list, entries, n, n + 1);
        }
    } else {
        for n in current + 1..=target {
            shift(&mut list, entries, n, n - 1);
        }
    }

    list.move_entry(holding, sibling(&entry.path, entry.renamed(target)));
    Ok(list)
}

/// Move `path` out of `source` into the directory `dest_dir` at
/// `dest_index`.
///
/// The entry is parked under a holding name beside itself, the source
/// closes the hole it left, the destination makes room, and the parked
/// entry moves into its slot. Each step addresses entries where the
/// earlier steps left them, so a destination that sits above or inside
/// a renumbered folder is still reached. `dest_index` is clamped to the
/// destination's next free index. When `dest_dir` is the entry's own
/// directory this is a plain [`move_to_index`].
pub fn move_across(
    source: &[Entry],
    path: &Path,
    dest_dir: &Path,
    dest: &[Entry],
    dest_index: u32,
) -> Result<WorkList, DomainError> {
    let entry = find(source, path)?;

    if entry.path.parent() == Some(dest_dir) {
        return move_to_index(source, path, dest_index);
    }
    if dest_dir.starts_with(&entry.path) {
        return Err(DomainError::MoveIntoItself {
            path: entry.path.clone(),
        });
    }

    let dest_index = dest_index.min(next_index(dest));

    let holding = holding_path(entry);
    let mut list = WorkList::new();
    list.move_entry(&entry.path, &holding);

    if let Some(current) = entry.number {
        let mut later: Vec<&Entry> = source
            .iter()
            .filter(|e| e.number.is_some_and(|n| n > current))
            .collect();
        later.sort_by_key(|e| e.number);
        for e in later {
            if let Some(n) = e.number {
                let at = list.final_path(&e.path);
                list.rename(at, e.renamed(n - 1));
            }
        }
    }

    for op in make_room(dest, dest_index) {
        if let Operation::Rename { path, new_name } = op {
            let at = list.final_path(&path);
            list.rename(at, new_name);
        }
    }

    let parked = list.final_path(&holding);
    let target = list.final_path(dest_dir).join(entry.renamed(dest_index));
    list.move_entry(parked, target);
    Ok(list)
}

fn find<'a>(entries: &'a [Entry], path: &Path) -> Result<&'a Entry, DomainError> {
    entries
        .iter()
        .find(|e| e.path == path)
        .ok_or_else(|| DomainError::EntryNotInGroup {
            path: path.to_path_buf(),
        })
}

fn shift(list: &mut WorkList, entries: &[Entry], from: u32, to: u32) {
    for entry in entries.iter().filter(|e| e.number == Some(from)) {
        list.rename(&entry.path, entry.renamed(to));
    }
}

fn holding_path(entry: &Entry) -> PathBuf {
    sibling(&entry.path, format!(".{}.{HOLDING_SUFFIX}", entry.name()))
}

fn sibling(path: &Path, name: String) -> PathBuf {
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
