//! Command handlers.
//!
//! Each handler translates CLI arguments into a core request, calls the
//! [`ManuscriptService`], and renders the result. No manuscript logic
//! lives here.

pub mod completions;
pub mod config;
pub mod mkdir;
pub mod mv;
pub mod touch;
pub mod wordcount;

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, info};

use otis_adapters::LocalFilesystem;
use otis_core::application::{ExecutionOutcome, ManuscriptService, PlannedChange};

use crate::{
    cli::{ChangeArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::ConsoleConfirmer,
};

/// A loaded service plus the manuscript it works on.
///
/// All paths handed to the core are canonical, so they compare equal to
/// the paths of the nodes it loads from disk.
pub struct Session {
    service: ManuscriptService,
    manuscript: PathBuf,
    cwd: PathBuf,
}

impl Session {
    /// Locate the manuscript from `--manuscript` or by searching upward for
    /// the project file.
    pub fn open(global: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let service = ManuscriptService::new(
            Box::new(LocalFilesystem::new()),
            Box::new(ConsoleConfirmer),
        )
        .with_confirmation(config.changes.confirm);

        let cwd = std::env::current_dir()
            .and_then(std::fs::canonicalize)
            .with_cli_context(|| "reading the current directory")?;

        let manuscript = match &global.manuscript {
            Some(path) => canonical(path)?,
            None => {
                let project = service.locate_project(&cwd, &config.manuscript.project_file)?;
                project.join(&config.manuscript.dir_name)
            }
        };
        debug!(manuscript = %manuscript.display(), "manuscript located");

        Ok(Self {
            service,
            manuscript,
            cwd,
        })
    }

    pub fn service(&self) -> &ManuscriptService {
        &self.service
    }

    pub fn manuscript(&self) -> &Path {
        &self.manuscript
    }

    /// Canonical form of a user-supplied path.
    pub fn resolve(&self, path: &Path) -> CliResult<PathBuf> {
        canonical(&self.cwd.join(path))
    }

    /// `path` relative to the working directory when it is below it.
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.cwd)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Preview or apply a planned change and report the outcome.
    ///
    /// A declined confirmation is a normal abort, not an error.
    pub fn finish(
        &self,
        planned: PlannedChange,
        change: &ChangeArgs,
        output: &OutputManager,
        done: &str,
    ) -> CliResult<()> {
        let result = self.display(&planned.result_path);

        if change.dry_run {
            if output.is_json() {
                output.json(&json!({
                    "dry_run": true,
                    "operations": planned.work_list,
                    "result": result,
                }))?;
            } else {
                output.header("Planned changes:")?;
                output.dim(planned.work_list.preview(Some(self.cwd.as_path())).trim_end())?;
                output.info("Dry run: nothing was changed")?;
            }
            return Ok(());
        }

        let outcome = self
            .service
            .apply(&planned.work_list, change.force, Some(self.cwd.as_path()))?;

        match outcome {
            ExecutionOutcome::Committed { applied } => {
                info!(applied, result = %result, "changes applied");
                if output.is_json() {
                    output.json(&json!({ "applied": applied, "result": result }))?;
                } else {
                    output.success(&format!("{done} {result}"))?;
                }
            }
            ExecutionOutcome::Declined => {
                if output.is_json() {
                    output.json(&json!({ "applied": 0, "declined": true }))?;
                } else {
                    output.warning("Cancelled; nothing was changed")?;
                }
            }
        }
        Ok(())
    }
}

fn canonical(path: &Path) -> CliResult<PathBuf> {
    std::fs::canonicalize(path).map_err(|_| CliError::PathNotFound {
        path: path.to_path_buf(),
    })
}
