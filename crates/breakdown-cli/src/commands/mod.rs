//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and display results.
//! No business logic lives here.

pub mod completions;
pub mod config;
pub mod paths;
pub mod run;

use breakdown_adapters::{LocalFilesystem, ProfilePatternProvider, SimpleRenderer};
use breakdown_core::{
    application::{PromptService, TypeFactory, VariablesFactory},
    domain::{ParameterBag, PathConfig},
};
use tracing::debug;

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

/// A prompt service wired for the active profile, plus its directories.
pub struct Session {
    pub service: PromptService,
    pub paths: PathConfig,
}

impl Session {
    /// Load the active profile and wire the local adapters.
    pub fn open(app: &AppConfig) -> CliResult<Self> {
        let profile = app.load_profile()?;
        let paths = app.path_config(&profile)?;
        let patterns = ProfilePatternProvider::from_config(app.profile.as_str(), &profile);
        debug!(profile = %app.profile, dir = %app.config_dir.display(), "Session opened");

        let service = PromptService::new(
            TypeFactory::new(Box::new(patterns)),
            VariablesFactory::new(Box::new(LocalFilesystem::new())),
            Box::new(LocalFilesystem::new()),
            Box::new(SimpleRenderer::new()),
        );
        Ok(Self { service, paths })
    }
}

/// Human-readable listing of a parameter bag.
pub fn describe(bag: &ParameterBag, output: &OutputManager) -> std::io::Result<()> {
    output.header(&format!(
        "Resolved paths ({} {})",
        bag.directive_value(),
        bag.layer_value()
    ))?;
    for (label, path) in [
        ("prompt", bag.prompt_path()),
        ("schema", bag.schema_path()),
        ("input", bag.input_path()),
        ("output", bag.output_path()),
    ] {
        output.field(label, &format!("{path} ({})", path.kind()))?;
    }
    if let Some(adaptation) = bag.options().adaptation() {
        output.field("adaptation", adaptation)?;
    }
    for (key, value) in &bag.options().extra {
        output.field(key, value)?;
    }
    Ok(())
}
