//! Filename conventions for numbered manuscript entries.
//!
//! Every orderable entry is named `NN-kebab-title` (folders) or
//! `NN-kebab-title.md` (scenes), where `NN` is zero-padded to at least two
//! digits. Renumbering only ever touches the leading digit run.

use std::path::Path;

use crate::domain::text::{kebab_to_sentence, to_kebab};

/// Extension for scene files.
pub const SCENE_EXTENSION: &str = "md";

/// Parse the leading digit run of a file name.
///
/// Returns `None` for unnumbered names.
pub fn file_number(name: &str) -> Option<u32> {
    let digits = leading_digits(name);
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// The part of `name` after the numeric prefix and its dash, or `None` if
/// `name` is unnumbered.
pub fn name_without_number(name: &str) -> Option<&str> {
    let digits = leading_digits(name);
    if digits.is_empty() {
        return None;
    }
    let rest = &name[digits.len()..];
    Some(rest.strip_prefix('-').unwrap_or(rest))
}

/// Replace the numeric prefix of `name` with `number`.
///
/// Unnumbered names are brought into the convention by prefixing them.
pub fn renumber_filename(name: &str, number: u32) -> String {
    let rest = name_without_number(name).unwrap_or(name);
    if rest.is_empty() || rest.starts_with('.') {
        format!("{number:02}{rest}")
    } else {
        format!("{number:02}-{rest}")
    }
}

/// File name for a new scene titled `title` at `number`.
pub fn scene_filename(title: &str, number: u32) -> String {
    format!("{number:02}-{}.{SCENE_EXTENSION}", to_kebab(title))
}

/// Directory name for a new folder titled `title` at `number`.
pub fn folder_dirname(title: &str, number: u32) -> String {
    format!("{number:02}-{}", to_kebab(title))
}

/// Human-readable name derived from a path: numeric prefix and extension
/// stripped, kebab case turned into a sentence.
pub fn pretty_file_name(path: &Path) -> String {
    let base = base_name(path);
    let name = name_without_number(&base).unwrap_or(&base);
    let stem = match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    };
    kebab_to_sentence(stem)
}

/// Final path component as an owned string (lossy for non-UTF-8 names).
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn leading_digits(name: &str) -> &str {
    let end = name
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(name.len(), |(i, _)| i);
    &name[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_leading_numbers() {
        assert_eq!(file_number("00-a.md"), Some(0));
        assert_eq!(file_number("12-later.md"), Some(12));
        assert_eq!(file_number("123"), Some(123));
        assert_eq!(file_number("notes.md"), None);
        assert_eq!(file_number(""), None);
    }

    #[test]
    fn renumber_preserves_the_rest_of_the_name() {
        assert_eq!(renumber_filename("01-b.md", 2), "02-b.md");
        assert_eq!(renumber_filename("9-old-style.md", 10), "10-old-style.md");
        assert_eq!(renumber_filename("03-act-three", 1), "01-act-three");
    }

    #[test]
    fn renumber_brings_unnumbered_names_into_convention() {
        assert_eq!(renumber_filename("notes.md", 4), "04-notes.md");
    }

    #[test]
    fn renumber_without_title() {
        assert_eq!(renumber_filename("07", 8), "08");
        assert_eq!(renumber_filename("07.md", 8), "08.md");
    }

    #[test]
    fn new_names_are_kebab_cased() {
        assert_eq!(scene_filename("The Long Night", 3), "03-the-long-night.md");
        assert_eq!(folder_dirname("Act Two!", 1), "01-act-two");
    }

    #[test]
    fn pretty_names() {
        assert_eq!(pretty_file_name(&PathBuf::from("ms/02-the-end.md")), "The end");
        assert_eq!(pretty_file_name(&PathBuf::from("ms/00-act-1")), "Act 1");
        assert_eq!(pretty_file_name(&PathBuf::from("ms/01-on-the-way")), "On the way");
    }
}
