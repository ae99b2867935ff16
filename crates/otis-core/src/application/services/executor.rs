//! Work-list executor.
//!
//! Applies a [`WorkList`] strictly in construction order. Lists longer than
//! one operation are previewed and gated on the [`Confirmer`] unless forced.
//! The first failing operation stops the run; nothing already applied is
//! rolled back.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Confirmer, Filesystem},
    },
    domain::{Operation, WorkList},
    error::OtisResult,
};

/// How a run ended when no operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Every operation was applied.
    Committed { applied: usize },
    /// The prompt was answered with anything but yes. Nothing changed.
    Declined,
}

pub struct WorkListExecutor<'a> {
    filesystem: &'a dyn Filesystem,
    confirmer: &'a dyn Confirmer,
    base: Option<PathBuf>,
}

impl<'a> WorkListExecutor<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, confirmer: &'a dyn Confirmer) -> Self {
        Self {
            filesystem,
            confirmer,
            base: None,
        }
    }

    /// Show preview paths relative to `base`.
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    #[instrument(skip_all, fields(operations = list.len(), force = force))]
    pub fn execute(&self, list: &WorkList, force: bool) -> OtisResult<ExecutionOutcome> {
        if list.len() > 1 && !force {
            let prompt = format!(
                "About to change:\n\n{}\nOK to proceed?",
                list.preview(self.base.as_deref())
            );
            if !self.confirmer.confirm(&prompt)? {
                info!("changes declined");
                return Ok(ExecutionOutcome::Declined);
            }
        }

        let total = list.len();
        for (applied, op) in list.iter().enumerate() {
            debug!(%op, "applying");
            if let Err(err) = self.apply(op) {
                if applied == 0 {
                    return Err(err);
                }
                warn!(applied, total, %op, "work list stopped partway");
                return Err(ApplicationError::PartialExecution {
                    applied,
                    total,
                    operation: op.to_string(),
                    reason: err.to_string(),
                }
                .into());
            }
        }

        info!(applied = total, "changes committed");
        Ok(ExecutionOutcome::Committed { applied: total })
    }

    fn apply(&self, op: &Operation) -> OtisResult<()> {
        match op {
            Operation::Rename { path, new_name } => self
                .filesystem
                .rename(path, &Operation::rename_target(path, new_name)),
            Operation::AddFile { path } => self.filesystem.create_new_file(path),
            Operation::AddDirectory { path } => self.filesystem.create_dir(path),
            Operation::Move { from, to } => self.filesystem.rename(from, to),
        }
    }
}
