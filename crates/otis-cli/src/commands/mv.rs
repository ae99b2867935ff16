//! `otis mv`: reorder a scene or folder, optionally into another folder.
//!
//! Without a target the entry stays in its folder and `--at` is required.
//! With a target and no `--at`, it is appended after the target's last
//! entry of the same kind.

use tracing::instrument;

use otis_core::application::MoveRequest;

use crate::{
    cli::{GlobalArgs, MoveArgs},
    commands::Session,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(path = %args.path.display(), at = ?args.at))]
pub fn execute(
    args: MoveArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let session = Session::open(&global, &config)?;
    let request = MoveRequest {
        entry: session.resolve(&args.path)?,
        target: args
            .target
            .as_deref()
            .map(|t| session.resolve(t))
            .transpose()?,
        at: args.at,
    };

    let planned = session
        .service()
        .plan_move(session.manuscript(), &request)?;
    session.finish(planned, &args.change, &output, "Moved to")
}
