//! Implementation of the `breakdown paths` command.

use tracing::instrument;

use crate::{
    cli::{OutputFormat, TokenArgs},
    commands::{Session, describe},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Validate the tokens and print every resolved path. Reads no files.
#[instrument(skip_all, fields(directive = %args.directive, layer = %args.layer))]
pub fn execute(args: TokenArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let session = Session::open(config)?;
    let input = args.into_input(&config.profile);

    let bag = session
        .service
        .prepare(&session.paths, &input)
        .map_err(|e| CliError::from_core(e, &config.profile))?;

    match output.format() {
        OutputFormat::Json => output.json(&bag)?,
        _ => describe(&bag, output)?,
    }
    Ok(())
}
