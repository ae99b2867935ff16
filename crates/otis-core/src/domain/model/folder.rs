use std::fmt;
use std::path::Path;

use crate::{
    application::ports::Filesystem,
    domain::{model::Scene, node::Node},
    error::OtisResult,
};

/// A numbered directory grouping scenes and sub-folders.
#[derive(Clone, Copy)]
pub struct Folder<'a> {
    node: &'a Node,
    fs: &'a dyn Filesystem,
}

impl<'a> Folder<'a> {
    pub(crate) fn new(node: &'a Node, fs: &'a dyn Filesystem) -> Self {
        Self { node, fs }
    }

    pub fn path(&self) -> &'a Path {
        self.node.path()
    }

    /// `None` for work or chapter roots that carry no prefix.
    pub fn number(&self) -> Option<u32> {
        self.node.file_number()
    }

    pub fn pretty_file_name(&self) -> String {
        self.node.pretty_file_name()
    }

    /// Scenes directly inside this folder.
    pub fn scenes(&self) -> Vec<Scene<'a>> {
        self.node
            .child_files()
            .map(|n| Scene::new(n, self.fs))
            .collect()
    }

    /// Sub-folders directly inside this folder.
    pub fn folders(&self) -> Vec<Folder<'a>> {
        self.node
            .child_dirs()
            .map(|n| Folder::new(n, self.fs))
            .collect()
    }

    /// Every scene below this folder, in walk order.
    pub fn all_scenes(&self) -> Vec<Scene<'a>> {
        let mut scenes = Vec::new();
        self.node.walk(&mut |n: &'a Node| {
            if !n.is_dir() {
                scenes.push(Scene::new(n, self.fs));
            }
        });
        scenes
    }

    pub fn word_count(&self) -> OtisResult<u64> {
        super::total_words(self.all_scenes())
    }

    pub(crate) fn node(&self) -> &'a Node {
        self.node
    }
}

impl fmt::Debug for Folder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Folder{{{}}}", self.path().display())
    }
}
