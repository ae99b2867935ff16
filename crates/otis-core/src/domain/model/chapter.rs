use std::fmt;
use std::path::Path;

use crate::{
    application::ports::Filesystem,
    domain::{metadata::ChapterMetadata, model::Scene, node::Node},
    error::OtisResult,
};

/// A positional waypoint marked by `chapter.yml`.
///
/// A chapter is not a subtree: it covers every scene from its own node up to
/// the next waypoint in walk order, across as many folders as that takes.
#[derive(Clone, Copy)]
pub struct Chapter<'a> {
    node: &'a Node,
    meta: &'a ChapterMetadata,
    work_root: &'a Node,
    number: Option<u32>,
    fs: &'a dyn Filesystem,
}

impl<'a> Chapter<'a> {
    pub(crate) fn new(
        node: &'a Node,
        meta: &'a ChapterMetadata,
        work_root: &'a Node,
        number: Option<u32>,
        fs: &'a dyn Filesystem,
    ) -> Self {
        Self {
            node,
            meta,
            work_root,
            number,
            fs,
        }
    }

    pub fn title(&self) -> &'a str {
        &self.meta.title
    }

    /// `None` for chapters marked `numbered: false`.
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    pub fn path(&self) -> &'a Path {
        self.node.path()
    }

    /// Scenes from this waypoint up to (not including) the next one.
    pub fn scenes(&self) -> Vec<Scene<'a>> {
        let mut scenes = Vec::new();
        let mut capturing = false;

        self.work_root.walk(&mut |n: &'a Node| {
            if std::ptr::eq(n, self.node) {
                capturing = true;
            } else if capturing && n.chapter_metadata().is_some() {
                capturing = false;
            }
            if capturing && !n.is_dir() {
                scenes.push(Scene::new(n, self.fs));
            }
        });

        scenes
    }

    pub fn word_count(&self) -> OtisResult<u64> {
        super::total_words(self.scenes())
    }
}

impl fmt::Debug for Chapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chapter")
            .field("title", &self.title())
            .field("number", &self.number)
            .field("path", &self.path())
            .finish()
    }
}
