//! Sidecar metadata: `work.yml` and `chapter.yml`.

use std::path::Path;

use serde::{Deserialize, de::DeserializeOwned};

use crate::domain::error::DomainError;

/// Sidecar that marks a directory as a Work root.
pub const WORK_FILENAME: &str = "work.yml";

/// Sidecar that marks a directory as a Chapter waypoint.
pub const CHAPTER_FILENAME: &str = "chapter.yml";

/// Contents of `work.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkMetadata {
    pub title: String,
    pub running_title: Option<String>,
    pub author: String,
    pub author_surname: Option<String>,
}

/// Contents of `chapter.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChapterMetadata {
    pub title: String,
    /// Unnumbered chapters (prologues, epilogues) don't advance the count.
    pub numbered: bool,
}

impl Default for ChapterMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            numbered: true,
        }
    }
}

/// Parse a sidecar file's YAML. An empty file yields the defaults.
pub fn parse<T>(path: &Path, content: &str) -> Result<T, DomainError>
where
    T: DeserializeOwned + Default,
{
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(content).map_err(|e| DomainError::InvalidMetadata {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_metadata_uses_camel_case_keys() {
        let meta: WorkMetadata = parse(
            Path::new("work.yml"),
            "title: Flat Example\nrunningTitle: Flat\nauthor: Geoff Coffey\nauthorSurname: Coffey\n",
        )
        .unwrap();
        assert_eq!(meta.title, "Flat Example");
        assert_eq!(meta.running_title.as_deref(), Some("Flat"));
        assert_eq!(meta.author_surname.as_deref(), Some("Coffey"));
    }

    #[test]
    fn chapters_are_numbered_by_default() {
        let meta: ChapterMetadata = parse(Path::new("chapter.yml"), "title: My Chapter\n").unwrap();
        assert!(meta.numbered);

        let meta: ChapterMetadata =
            parse(Path::new("chapter.yml"), "title: Epilogue\nnumbered: false\n").unwrap();
        assert!(!meta.numbered);
    }

    #[test]
    fn empty_sidecar_is_default() {
        let meta: ChapterMetadata = parse(Path::new("chapter.yml"), "").unwrap();
        assert!(meta.numbered);
        assert!(meta.title.is_empty());
    }

    #[test]
    fn malformed_yaml_is_invalid_metadata() {
        let err = parse::<WorkMetadata>(Path::new("x/work.yml"), "title: [unclosed").unwrap_err();
        assert!(matches!(err, DomainError::InvalidMetadata { .. }));
    }
}
