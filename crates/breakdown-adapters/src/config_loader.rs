//! Profile configuration loader.
//!
//! Reads the YAML files of one configuration profile and merges them with
//! built-in defaults and environment overrides.
//!
//! # Layers (later wins)
//!
//! 1. Built-in defaults (the `default` profile only)
//! 2. `{config_dir}/{profile}-app.yml` (required for named profiles)
//! 3. `{config_dir}/{profile}-user.yml` (optional)
//! 4. `BREAKDOWN__SECTION__KEY` environment variables
//!
//! # File format
//!
//! ```yaml
//! working_dir: .
//! app_prompt: { base_dir: prompts }
//! app_schema: { base_dir: schema }
//! app_input:  { base_dir: input }
//! app_output: { base_dir: output }
//! params:
//!   two:
//!     directive_type: { pattern: "^(to|summary|defect)$" }
//!     layer_type:     { pattern: "^(project|issue|task)$" }
//! ```

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use breakdown_core::{
    domain::{
        PathConfig,
        common::{is_absolute, join},
    },
    error::{BreakdownError, BreakdownResult},
};

/// Name of the profile that works without any file on disk.
pub const DEFAULT_PROFILE: &str = "default";

/// Directive pattern of the built-in defaults.
pub const DEFAULT_DIRECTIVE_PATTERN: &str = "^(to|summary|defect)$";

/// Layer pattern of the built-in defaults.
pub const DEFAULT_LAYER_PATTERN: &str = "^(project|issue|task)$";

const ENV_PREFIX: &str = "BREAKDOWN";
const ENV_SEPARATOR: &str = "__";

// ── Profile shape ────────────────────────────────────────────────────────────

/// One profile's merged configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
    pub app_prompt: BaseDirSection,
    pub app_schema: BaseDirSection,
    pub app_input: BaseDirSection,
    pub app_output: BaseDirSection,
    pub params: ParamsSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseDirSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsSection {
    pub two: TwoParamsSection,
}

/// Patterns for the two-token form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoParamsSection {
    pub directive_type: PatternSection,
    pub layer_type: PatternSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl ProfileConfig {
    /// Project the directory settings into the resolver configuration.
    ///
    /// When the profile sets `working_dir`, its relative base directories are
    /// anchored there too, so conventional paths and `dir/file` candidates
    /// share one root. Otherwise `fallback_working_dir` (the process cwd) is
    /// used and base directories stay relative to it.
    pub fn to_path_config(&self, fallback_working_dir: &str) -> PathConfig {
        let root = self.working_dir.as_deref();
        let anchor = |dir: &String| match root {
            Some(root) if !is_absolute(dir) => join(&[root, dir.as_str()]),
            _ => dir.clone(),
        };

        let mut config =
            PathConfig::new().with_working_dir(root.unwrap_or(fallback_working_dir));
        if let Some(dir) = &self.app_prompt.base_dir {
            config = config.with_prompt_base_dir(anchor(dir));
        }
        if let Some(dir) = &self.app_schema.base_dir {
            config = config.with_schema_base_dir(anchor(dir));
        }
        if let Some(dir) = &self.app_input.base_dir {
            config = config.with_input_base_dir(anchor(dir));
        }
        if let Some(dir) = &self.app_output.base_dir {
            config = config.with_output_base_dir(anchor(dir));
        }
        config
    }

    pub fn directive_pattern(&self) -> Option<&str> {
        self.params.two.directive_type.pattern.as_deref()
    }

    pub fn layer_pattern(&self) -> Option<&str> {
        self.params.two.layer_type.pattern.as_deref()
    }
}

// ── Loader ───────────────────────────────────────────────────────────────────

/// Loads profiles from one configuration directory.
///
/// ```no_run
/// use breakdown_adapters::ConfigLoader;
///
/// let loader = ConfigLoader::new(".agent/breakdown/config");
/// let profile = loader.load("production")?;
/// println!("{:?}", profile.app_prompt.base_dir);
/// # Ok::<(), breakdown_core::error::BreakdownError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    /// Create a loader for `config_dir`. The directory need not exist when
    /// only the `default` profile is used.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            environment: None,
        }
    }

    /// Read overrides from `vars` instead of the process environment.
    pub fn with_environment(mut self, vars: HashMap<String, String>) -> Self {
        self.environment = Some(vars);
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// `{config_dir}/{profile}-app.yml`
    pub fn app_file(&self, profile: &str) -> PathBuf {
        self.config_dir.join(format!("{profile}-app.yml"))
    }

    /// `{config_dir}/{profile}-user.yml`
    pub fn user_file(&self, profile: &str) -> PathBuf {
        self.config_dir.join(format!("{profile}-user.yml"))
    }

    /// Load and merge every layer of `profile`.
    ///
    /// # Errors
    ///
    /// Returns [`BreakdownError::Configuration`] if:
    /// - a named profile has no app file
    /// - a file is not valid YAML or has the wrong shape
    #[instrument(skip(self), fields(dir = %self.config_dir.display()))]
    pub fn load(&self, profile: &str) -> BreakdownResult<ProfileConfig> {
        let app_file = self.app_file(profile);
        let is_default = profile == DEFAULT_PROFILE;

        if !is_default && !app_file.is_file() {
            return Err(BreakdownError::Configuration {
                message: format!(
                    "profile '{profile}' not found: expected {}",
                    app_file.display()
                ),
            });
        }

        let mut builder = Config::builder();
        if is_default {
            builder = with_builtin_defaults(builder).map_err(config_error)?;
        }

        let merged = builder
            .add_source(
                File::from(app_file.as_path())
                    .format(FileFormat::Yaml)
                    .required(false),
            )
            .add_source(
                File::from(self.user_file(profile).as_path())
                    .format(FileFormat::Yaml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .source(self.environment.clone()),
            )
            .build()
            .map_err(config_error)?;

        let profile_config: ProfileConfig = merged.try_deserialize().map_err(config_error)?;
        debug!(profile, "Profile configuration loaded");
        Ok(profile_config)
    }
}

fn with_builtin_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    builder
        .set_default("app_prompt.base_dir", "prompts")?
        .set_default("app_schema.base_dir", "schema")?
        .set_default("app_input.base_dir", "input")?
        .set_default("app_output.base_dir", "output")?
        .set_default("params.two.directive_type.pattern", DEFAULT_DIRECTIVE_PATTERN)?
        .set_default("params.two.layer_type.pattern", DEFAULT_LAYER_PATTERN)
}

fn config_error(e: config::ConfigError) -> BreakdownError {
    BreakdownError::Configuration {
        message: e.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
