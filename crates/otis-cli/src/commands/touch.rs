//! `otis touch`: create a new numbered scene.

use tracing::instrument;

use otis_core::application::TouchRequest;

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
    let request = TouchRequest {
        folder: session.resolve(&args.folder)?,
        title: args.title,
        at: args.at,
    };

    let planned = session
        .service()
        .plan_touch(session.manuscript(), &request)?;
    session.finish(planned, &args.change, &output, "Created")
}
