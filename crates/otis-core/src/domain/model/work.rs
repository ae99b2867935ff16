use std::fmt;
use std::path::Path;

use crate::{
    application::ports::Filesystem,
    domain::{
        error::DomainError,
        metadata::WorkMetadata,
        model::{Chapter, Folder, Scene},
        node::Node,
    },
    error::OtisResult,
};

/// A top-level manuscript unit rooted at a directory carrying `work.yml`.
#[derive(Clone, Copy)]
pub struct Work<'a> {
    node: &'a Node,
    meta: &'a WorkMetadata,
    fs: &'a dyn Filesystem,
}

impl<'a> Work<'a> {
    pub(crate) fn new(node: &'a Node, meta: &'a WorkMetadata, fs: &'a dyn Filesystem) -> Self {
        Self { node, meta, fs }
    }

    pub fn path(&self) -> &'a Path {
        self.node.path()
    }

    pub fn number(&self) -> Option<u32> {
        self.node.file_number()
    }

    pub fn pretty_file_name(&self) -> String {
        self.node.pretty_file_name()
    }

    pub fn title(&self) -> &'a str {
        &self.meta.title
    }

    /// Falls back to the full title.
    pub fn running_title(&self) -> &'a str {
        self.meta.running_title.as_deref().unwrap_or(&self.meta.title)
    }

    pub fn author(&self) -> &'a str {
        &self.meta.author
    }

    /// Falls back to the last word of the author's name.
    pub fn author_surname(&self) -> &'a str {
        match &self.meta.author_surname {
            Some(surname) => surname,
            None => self.meta.author.split_whitespace().last().unwrap_or_default(),
        }
    }

    /// Scenes directly inside the work directory.
    pub fn scenes(&self) -> Vec<Scene<'a>> {
        self.as_folder().scenes()
    }

    /// Folders directly inside the work directory.
    pub fn folders(&self) -> Vec<Folder<'a>> {
        self.as_folder().folders()
    }

    pub fn all_scenes(&self) -> Vec<Scene<'a>> {
        self.as_folder().all_scenes()
    }

    /// Every chapter waypoint in walk order.
    ///
    /// Numbering starts at 1 and only advances for numbered chapters.
    pub fn chapters(&self) -> Vec<Chapter<'a>> {
        let mut chapters = Vec::new();
        let mut next_number = 1;

        self.node.walk(&mut |n: &'a Node| {
            if let Some(meta) = n.chapter_metadata() {
                let number = meta.numbered.then(|| {
                    let number = next_number;
                    next_number += 1;
                    number
                });
                chapters.push(Chapter::new(n, meta, self.node, number, self.fs));
            }
        });

        chapters
    }

    pub fn word_count(&self) -> OtisResult<u64> {
        super::total_words(self.all_scenes())
    }

    /// Word count rounded for the title page.
    pub fn approximate_word_count(&self) -> OtisResult<u64> {
        self.word_count().map(super::approximate_word_count)
    }

    /// The work directory viewed as a plain folder.
    pub fn as_folder(&self) -> Folder<'a> {
        Folder::new(self.node, self.fs)
    }

    /// A work with chapters may not have scenes ahead of its first waypoint.
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        let mut seen_chapter = false;
        let mut stray_scene = false;

        self.node.walk(&mut |n: &Node| {
            if n.chapter_metadata().is_some() {
                seen_chapter = true;
            } else if !n.is_dir() && !seen_chapter {
                stray_scene = true;
            }
        });

        if seen_chapter && stray_scene {
            return Err(DomainError::ScenesBeforeFirstChapter {
                path: self.path().to_path_buf(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Work<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Work{{{}}}", self.path().display())
    }
}
