//! `breakdown config` - inspect the active profile.

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            let profile = config.load_profile()?;
            if output.format() == OutputFormat::Json {
                output.json(&profile)?;
                return Ok(());
            }

            output.header(&format!("Profile '{}':", config.profile))?;
            let serialised =
                toml::to_string_pretty(&profile).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.emit(&serialised)?;
        }

        ConfigCommands::Path => {
            let loader = config.loader();
            output.field("profile", &config.profile)?;
            output.field("config dir", &loader.config_dir().display().to_string())?;
            for (label, path) in [
                ("app", loader.app_file(&config.profile)),
                ("user", loader.user_file(&config.profile)),
            ] {
                let state = if path.is_file() { "found" } else { "missing" };
                output.field(label, &format!("{} ({state})", path.display()))?;
            }
        }
    }

    Ok(())
}
