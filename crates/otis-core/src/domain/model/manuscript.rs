use std::fmt;
use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        error::DomainError,
        model::{Folder, Scene, Work},
        node::Node,
    },
    error::OtisResult,
};

/// The whole manuscript tree, loaded fresh from the filesystem.
pub struct Manuscript<'fs> {
    root: Node,
    fs: &'fs dyn Filesystem,
}

impl<'fs> Manuscript<'fs> {
    /// Load and structurally validate the manuscript rooted at `path`.
    #[instrument(skip(fs), fields(path = %path.display()))]
    pub fn load(fs: &'fs dyn Filesystem, path: &Path) -> OtisResult<Self> {
        let root = Node::load(fs, path)?;
        let manuscript = Self { root, fs };

        let works = manuscript.works();
        if works.is_empty() {
            return Err(DomainError::NoWorks {
                path: path.to_path_buf(),
            }
            .into());
        }
        for work in &works {
            work.validate()?;
        }
        debug!(works = works.len(), "manuscript loaded");
        drop(works);

        Ok(manuscript)
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The root and/or its direct children, whichever carry `work.yml`.
    pub fn works(&self) -> Vec<Work<'_>> {
        std::iter::once(&self.root)
            .chain(self.root.child_dirs())
            .filter_map(|n| n.work_metadata().map(|meta| Work::new(n, meta, self.fs)))
            .collect()
    }

    /// Every scene in the manuscript, in walk order.
    pub fn scenes(&self) -> Vec<Scene<'_>> {
        self.as_folder().all_scenes()
    }

    pub fn word_count(&self) -> OtisResult<u64> {
        self.as_folder().word_count()
    }

    /// Find the directory whose path is exactly `path`.
    ///
    /// Work roots and the manuscript root count as folders here so that
    /// scenes can be added to a flat work.
    pub fn resolve_folder(&self, path: &Path) -> OtisResult<Folder<'_>> {
        self.find(|n| n.is_dir() && n.path() == path)
            .map(|n| Folder::new(n, self.fs))
            .ok_or_else(|| {
                DomainError::FolderPathNotFound {
                    path: path.to_path_buf(),
                }
                .into()
            })
    }

    /// Find the scene whose path is exactly `path`.
    pub fn resolve_scene(&self, path: &Path) -> OtisResult<Scene<'_>> {
        self.find(|n| !n.is_dir() && n.path() == path)
            .map(|n| Scene::new(n, self.fs))
            .ok_or_else(|| {
                DomainError::ScenePathNotFound {
                    path: path.to_path_buf(),
                }
                .into()
            })
    }

    /// The parent directory of a node, if it is inside the manuscript.
    pub(crate) fn parent_of(&self, node: &Node) -> Option<&Node> {
        self.find(|n| n.children().iter().any(|c| std::ptr::eq(c, node)))
    }

    pub(crate) fn as_folder(&self) -> Folder<'_> {
        Folder::new(&self.root, self.fs)
    }

    fn find(&self, mut predicate: impl FnMut(&Node) -> bool) -> Option<&Node> {
        let mut found = None;
        self.root.walk(&mut |n| {
            if found.is_none() && predicate(n) {
                found = Some(n);
            }
        });
        found
    }
}

impl fmt::Debug for Manuscript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Manuscript{{{}}}", self.path().display())
    }
}
