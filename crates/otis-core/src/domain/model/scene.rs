use std::fmt;
use std::path::Path;

use crate::{
    application::ports::Filesystem, domain::node::Node, domain::text, error::OtisResult,
};

/// A leaf Markdown file: the unit of prose.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    node: &'a Node,
    fs: &'a dyn Filesystem,
}

impl<'a> Scene<'a> {
    pub(crate) fn new(node: &'a Node, fs: &'a dyn Filesystem) -> Self {
        Self { node, fs }
    }

    pub fn path(&self) -> &'a Path {
        self.node.path()
    }

    /// Numeric prefix of the file name. Scenes are always numbered once loaded.
    pub fn number(&self) -> u32 {
        self.node.file_number().unwrap_or_default()
    }

    pub fn pretty_file_name(&self) -> String {
        self.node.pretty_file_name()
    }

    /// Raw Markdown, read on first access.
    pub fn text(&self) -> OtisResult<&'a str> {
        self.node.text(self.fs)
    }

    pub fn word_count(&self) -> OtisResult<u64> {
        Ok(text::word_count(self.text()?))
    }

    pub(crate) fn node(&self) -> &'a Node {
        self.node
    }
}

impl fmt::Debug for Scene<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("number", &self.number())
            .field("path", &self.path())
            .finish()
    }
}
