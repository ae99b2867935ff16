//! `otis mkdir`: create a new numbered folder.

use tracing::instrument;

use otis_core::application::MkdirRequest;

use crate::{
    cli::{CreateArgs, GlobalArgs},
    commands::Session,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(title = %args.title))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let session = Session::open(&global, &config)?;
    let request = MkdirRequest {
        folder: session.resolve(&args.folder)?,
        title: args.title,
        at: args.at,
    };

    let planned = session
        .service()
        .plan_mkdir(session.manuscript(), &request)?;
    session.finish(planned, &args.change, &output, "Created")
}
