//! Implementation of the `breakdown run` command.
//!
//! Dispatch sequence:
//! 1. Validate tokens and resolve paths for the active profile
//! 2. Read the input document (file, or stdin when piped)
//! 3. Render the prompt template
//! 4. Write to `--destination`, or print to stdout

use std::io::{self, IsTerminal, Read};

use tracing::{debug, info, instrument};

use crate::{
    cli::{OutputFormat, RunArgs},
    commands::{Session, describe},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(directive = %args.tokens.directive, layer = %args.tokens.layer))]
pub fn execute(args: RunArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let session = Session::open(config)?;
    let to_file = args.tokens.destination.is_some();
    let input = args.tokens.into_input(&config.profile);

    let bag = session
        .service
        .prepare(&session.paths, &input)
        .map_err(|e| CliError::from_core(e, &config.profile))?;

    let stdin_text = if bag.input_path().is_stdin() {
        read_stdin()?
    } else {
        None
    };
    let content = session.service.render(&bag, stdin_text.as_deref())?;
    debug!(bytes = content.len(), "Prompt rendered");

    if args.dry_run {
        if output.format() == OutputFormat::Json {
            output.json(&bag)?;
        } else {
            describe(&bag, output)?;
            let target = if to_file {
                bag.output_path().to_string()
            } else {
                "stdout".to_string()
            };
            output.info(&format!(
                "Dry run: would write {} bytes to {target}",
                content.len()
            ))?;
        }
        return Ok(());
    }

    if to_file {
        let path = session.service.write_output(&bag, &content)?;
        info!(path = %path.display(), "Prompt written");
        output.success(&format!("Prompt written to {}", path.display()))?;
    } else {
        output.emit(&content)?;
    }

    Ok(())
}

/// Whole stdin when it is piped; `None` for an interactive terminal.
fn read_stdin() -> CliResult<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .with_cli_context(|| "Failed to read stdin")?;
    Ok(Some(buf))
}
