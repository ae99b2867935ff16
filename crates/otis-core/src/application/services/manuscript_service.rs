//! Manuscript Service - plans and applies manuscript changes.
//!
//! Every command follows the same workflow:
//! 1. Load the manuscript fresh from disk (validates structure)
//! 2. Resolve the user-supplied paths against the model
//! 3. Ask the ordering engine for the renames that free or close a slot
//! 4. Append the command's own add/move and hand the list to the executor

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Confirmer, Filesystem},
        services::executor::{ExecutionOutcome, WorkListExecutor},
    },
    domain::{
        DomainError, Entry, Manuscript, Node, WorkList, make_room, move_across, next_index,
        numbering::{folder_dirname, scene_filename},
        text::to_kebab,
    },
    error::OtisResult,
};

/// Create a new scene in `folder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchRequest {
    pub folder: PathBuf,
    pub title: String,
    /// Defaults to appending after the last scene.
    pub at: Option<u32>,
}

/// Create a new sub-folder in `folder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MkdirRequest {
    pub folder: PathBuf,
    pub title: String,
    pub at: Option<u32>,
}

/// Reorder a scene or folder, optionally into another folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub entry: PathBuf,
    pub target: Option<PathBuf>,
    pub at: Option<u32>,
}

/// A planned change plus where its subject ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedChange {
    pub work_list: WorkList,
    pub result_path: PathBuf,
}

/// Main manuscript service.
pub struct ManuscriptService {
    filesystem: Box<dyn Filesystem>,
    confirmer: Box<dyn Confirmer>,
    confirm_changes: bool,
}

impl ManuscriptService {
    pub fn new(filesystem: Box<dyn Filesystem>, confirmer: Box<dyn Confirmer>) -> Self {
        Self {
            filesystem,
            confirmer,
            confirm_changes: true,
        }
    }

    /// With `false`, every change runs as if forced.
    pub fn with_confirmation(mut self, confirm_changes: bool) -> Self {
        self.confirm_changes = confirm_changes;
        self
    }

    pub fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    /// Nearest ancestor of `start` (inclusive) containing `project_file`.
    #[instrument(skip(self))]
    pub fn locate_project(&self, start: &Path, project_file: &str) -> OtisResult<PathBuf> {
        start
            .ancestors()
            .find(|dir| self.filesystem.exists(&dir.join(project_file)))
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                ApplicationError::ProjectNotFound {
                    start: start.to_path_buf(),
                }
                .into()
            })
    }

    /// Load and validate the manuscript at `path`.
    pub fn load(&self, path: &Path) -> OtisResult<Manuscript<'_>> {
        Manuscript::load(self.filesystem.as_ref(), path)
    }

    #[instrument(skip(self), fields(manuscript = %manuscript.display()))]
    pub fn plan_touch(&self, manuscript: &Path, request: &TouchRequest) -> OtisResult<PlannedChange> {
        let slug = slug(&request.title)?;
        let manuscript = self.load(manuscript)?;
        let folder = manuscript.resolve_folder(&request.folder)?;

        let siblings: Vec<Entry> = folder.scenes().iter().map(|s| Entry::from(s.node())).collect();
        let (index, mut work_list) = insertion(&siblings, request.at);

        let path = folder.path().join(scene_filename(&slug, index));
        work_list.add_file(&path);

        debug!(index, path = %path.display(), "planned new scene");
        Ok(PlannedChange {
            work_list,
            result_path: path,
        })
    }

    #[instrument(skip(self), fields(manuscript = %manuscript.display()))]
    pub fn plan_mkdir(&self, manuscript: &Path, request: &MkdirRequest) -> OtisResult<PlannedChange> {
        let slug = slug(&request.title)?;
        let manuscript = self.load(manuscript)?;
        let folder = manuscript.resolve_folder(&request.folder)?;

        let siblings: Vec<Entry> = folder.folders().iter().map(|f| Entry::from(f.node())).collect();
        let (index, mut work_list) = insertion(&siblings, request.at);

        let path = folder.path().join(folder_dirname(&slug, index));
        work_list.add_directory(&path);

        debug!(index, path = %path.display(), "planned new folder");
        Ok(PlannedChange {
            work_list,
            result_path: path,
        })
    }

    #[instrument(skip(self), fields(manuscript = %manuscript.display()))]
    pub fn plan_move(&self, manuscript: &Path, request: &MoveRequest) -> OtisResult<PlannedChange> {
        if request.target.is_none() && request.at.is_none() {
            return Err(DomainError::PathOrAtRequired.into());
        }

        let manuscript = self.load(manuscript)?;
        let node = if let Ok(scene) = manuscript.resolve_scene(&request.entry) {
            scene.node()
        } else if let Ok(folder) = manuscript.resolve_folder(&request.entry) {
            folder.node()
        } else {
            return Err(DomainError::ScenePathNotFound {
                path: request.entry.clone(),
            }
            .into());
        };
        let parent = manuscript
            .parent_of(node)
            .ok_or_else(|| DomainError::EntryNotInGroup {
                path: request.entry.clone(),
            })?;

        let source = group_of(parent, node.is_dir());
        let (dest_dir, dest) = match &request.target {
            Some(target) => {
                let folder = manuscript.resolve_folder(target)?;
                (folder.path().to_path_buf(), group_of(folder.node(), node.is_dir()))
            }
            None => (parent.path().to_path_buf(), source.clone()),
        };
        let index = request.at.unwrap_or_else(|| next_index(&dest));

        let work_list = move_across(&source, node.path(), &dest_dir, &dest, index)?;
        let result_path = work_list.final_path(node.path());

        debug!(
            operations = work_list.len(),
            to = %result_path.display(),
            "planned move"
        );
        Ok(PlannedChange {
            work_list,
            result_path,
        })
    }

    /// Apply a planned work list.
    ///
    /// `base` only affects how paths appear in the confirmation preview.
    #[instrument(skip_all, fields(operations = work_list.len(), force = force))]
    pub fn apply(
        &self,
        work_list: &WorkList,
        force: bool,
        base: Option<&Path>,
    ) -> OtisResult<ExecutionOutcome> {
        let mut executor = WorkListExecutor::new(self.filesystem.as_ref(), self.confirmer.as_ref());
        if let Some(base) = base {
            executor = executor.with_base(base);
        }

        let outcome = executor.execute(work_list, force || !self.confirm_changes)?;
        info!(?outcome, "work list finished");
        Ok(outcome)
    }
}

fn slug(title: &str) -> OtisResult<String> {
    let slug = to_kebab(title);
    if slug.is_empty() {
        return Err(DomainError::InvalidTitle {
            title: title.to_string(),
        }
        .into());
    }
    Ok(slug)
}

/// Slot for a new entry (clamped to the end of the group) and the renames
/// that free it.
fn insertion(siblings: &[Entry], at: Option<u32>) -> (u32, WorkList) {
    let next = next_index(siblings);
    let index = at.map_or(next, |at| at.min(next));
    (index, make_room(siblings, index))
}

/// Scenes or folders directly inside `dir`, matching the kind being moved.
fn group_of(dir: &Node, folders: bool) -> Vec<Entry> {
    dir.children()
        .iter()
        .filter(|c| c.is_dir() == folders)
        .map(Entry::from)
        .collect()
}
