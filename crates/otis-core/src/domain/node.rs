//! Node and tree walker.
//!
//! A [`Node`] is one filesystem entry under the manuscript root: a directory
//! (possibly carrying `work.yml` / `chapter.yml` sidecars) or a Markdown
//! scene. The tree is read fresh from disk for every command; nothing is
//! cached between invocations. Scene text is read lazily through the
//! [`Filesystem`] port and then kept for the node's lifetime.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::{
    application::ports::Filesystem,
    domain::{
        error::DomainError,
        metadata::{self, CHAPTER_FILENAME, ChapterMetadata, WORK_FILENAME, WorkMetadata},
        numbering::{self, SCENE_EXTENSION},
    },
    error::OtisResult,
};

/// One entry of the manuscript tree.
#[derive(Debug)]
pub struct Node {
    path: PathBuf,
    is_dir: bool,
    file_number: Option<u32>,
    work: Option<WorkMetadata>,
    chapter: Option<ChapterMetadata>,
    children: Vec<Node>,
    content: OnceCell<String>,
}

impl Node {
    /// Recursively load the tree rooted at `path`.
    ///
    /// The root itself needs no number prefix. Below it, every directory
    /// that isn't a work or chapter root and every scene must be numbered.
    pub fn load(fs: &dyn Filesystem, path: &Path) -> OtisResult<Self> {
        if !fs.is_dir(path) {
            return Err(DomainError::MissingManuscript {
                path: path.to_path_buf(),
            }
            .into());
        }
        Self::load_dir(fs, path, true)
    }

    fn load_dir(fs: &dyn Filesystem, path: &Path, is_root: bool) -> OtisResult<Self> {
        trace!(path = %path.display(), "loading directory");

        let mut node = Node {
            path: path.to_path_buf(),
            is_dir: true,
            file_number: None,
            work: None,
            chapter: None,
            children: Vec::new(),
            content: OnceCell::new(),
        };

        for entry in fs.read_dir(path)? {
            let child_path = path.join(&entry.name);

            if entry.name.starts_with('.') {
                continue;
            }
            if entry.is_dir {
                node.children.push(Self::load_dir(fs, &child_path, false)?);
            } else if entry.name == WORK_FILENAME {
                let content = fs.read_to_string(&child_path)?;
                node.work = Some(metadata::parse(&child_path, &content)?);
            } else if entry.name == CHAPTER_FILENAME {
                let content = fs.read_to_string(&child_path)?;
                node.chapter = Some(metadata::parse(&child_path, &content)?);
            } else if has_scene_extension(&entry.name) {
                node.children.push(Self::load_file(&child_path, &entry.name)?);
            } else {
                return Err(DomainError::UnexpectedFile { path: child_path }.into());
            }
        }

        let name = numbering::base_name(path);
        node.file_number = numbering::file_number(&name);
        if !is_root && node.file_number.is_none() && node.work.is_none() && node.chapter.is_none()
        {
            return Err(DomainError::MissingFileNumber {
                path: path.to_path_buf(),
            }
            .into());
        }

        Ok(node)
    }

    fn load_file(path: &Path, name: &str) -> OtisResult<Self> {
        let file_number = numbering::file_number(name).ok_or_else(|| DomainError::MissingFileNumber {
            path: path.to_path_buf(),
        })?;

        Ok(Node {
            path: path.to_path_buf(),
            is_dir: false,
            file_number: Some(file_number),
            work: None,
            chapter: None,
            children: Vec::new(),
            content: OnceCell::new(),
        })
    }

    /// Depth-first, pre-order traversal including `self`.
    ///
    /// Children are visited in directory enumeration order.
    pub fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Node),
    {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Raw text of a scene file, read on first access.
    pub fn text(&self, fs: &dyn Filesystem) -> OtisResult<&str> {
        if let Some(text) = self.content.get() {
            return Ok(text);
        }
        let text = fs.read_to_string(&self.path)?;
        Ok(self.content.get_or_init(|| text))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn file_number(&self) -> Option<u32> {
        self.file_number
    }

    pub fn work_metadata(&self) -> Option<&WorkMetadata> {
        self.work.as_ref()
    }

    pub fn chapter_metadata(&self) -> Option<&ChapterMetadata> {
        self.chapter.as_ref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct children that are directories.
    pub fn child_dirs(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|c| c.is_dir)
    }

    /// Direct children that are scene files.
    pub fn child_files(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|c| !c.is_dir)
    }

    pub fn pretty_file_name(&self) -> String {
        numbering::pretty_file_name(&self.path)
    }
}

fn has_scene_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == SCENE_EXTENSION)
}
