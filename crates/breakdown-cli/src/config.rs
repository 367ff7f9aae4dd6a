//! Application configuration.
//!
//! [`AppConfig`] is resolved once at startup and passed down by reference.
//! It knows where profile files live and which profile is active; reading
//! those files is left to `breakdown_adapters::ConfigLoader`.
//!
//! # Config directory (highest priority first)
//!
//! 1. `--config-dir` / `BREAKDOWN_CONFIG_DIR`
//! 2. `{cwd}/.agent/breakdown/config`, if it exists
//! 3. the platform config directory (`directories::ProjectDirs`), if it exists
//! 4. `{cwd}/.agent/breakdown/config`

use std::path::{Path, PathBuf};

use breakdown_adapters::{ConfigLoader, ProfileConfig};
use breakdown_core::domain::PathConfig;

use crate::{
    cli::global::GlobalArgs,
    error::{CliError, CliResult, IntoCli},
};

/// Project-local configuration directory, relative to the working directory.
pub const LOCAL_CONFIG_DIR: &str = ".agent/breakdown/config";

/// Resolved startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Active profile name.
    pub profile: String,
    /// Directory the profile files are read from.
    pub config_dir: PathBuf,
    /// Process working directory; fallback for the profile's `working_dir`.
    pub working_dir: PathBuf,
}

impl AppConfig {
    /// Resolve the configuration directory and active profile.
    pub fn load(args: &GlobalArgs) -> CliResult<Self> {
        let working_dir = std::env::current_dir()
            .with_cli_context(|| "Failed to determine the current directory")?;
        let config_dir = resolve_config_dir(args.config_dir.as_deref(), &working_dir);

        Ok(Self {
            profile: args.profile.clone(),
            config_dir,
            working_dir,
        })
    }

    /// Loader bound to [`Self::config_dir`].
    pub fn loader(&self) -> ConfigLoader {
        ConfigLoader::new(&self.config_dir)
    }

    /// Load and merge every layer of the active profile.
    pub fn load_profile(&self) -> CliResult<ProfileConfig> {
        self.loader()
            .load(&self.profile)
            .with_cli_context(|| format!("loading profile '{}'", self.profile))
    }

    /// Resolver configuration for a loaded profile.
    pub fn path_config(&self, profile: &ProfileConfig) -> CliResult<PathConfig> {
        let working_dir = self.working_dir.to_str().ok_or_else(|| CliError::ConfigError {
            message: format!(
                "working directory is not valid UTF-8: {}",
                self.working_dir.display()
            ),
            source: None,
        })?;
        Ok(profile.to_path_config(working_dir))
    }
}

fn resolve_config_dir(explicit: Option<&Path>, working_dir: &Path) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    let local = working_dir.join(LOCAL_CONFIG_DIR);
    if local.is_dir() {
        return local;
    }

    directories::ProjectDirs::from("dev", "breakdown", "breakdown")
        .map(|d| d.config_dir().to_path_buf())
        .filter(|dir| dir.is_dir())
        .unwrap_or(local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let cwd = TempDir::new().unwrap();
        let dir = resolve_config_dir(Some(Path::new("/etc/breakdown")), cwd.path());
        assert_eq!(dir, PathBuf::from("/etc/breakdown"));
    }

    #[test]
    fn local_dir_used_when_present() {
        let cwd = TempDir::new().unwrap();
        std::fs::create_dir_all(cwd.path().join(LOCAL_CONFIG_DIR)).unwrap();
        assert_eq!(
            resolve_config_dir(None, cwd.path()),
            cwd.path().join(LOCAL_CONFIG_DIR)
        );
    }

    #[test]
    fn default_profile_loads_without_files() {
        let cwd = TempDir::new().unwrap();
        let config = AppConfig {
            profile: "default".into(),
            config_dir: cwd.path().join("absent"),
            working_dir: cwd.path().to_path_buf(),
        };
        let profile = config.load_profile().unwrap();
        assert_eq!(profile.app_prompt.base_dir.as_deref(), Some("prompts"));
    }

    #[test]
    fn missing_named_profile_is_config_error() {
        let cwd = TempDir::new().unwrap();
        let config = AppConfig {
            profile: "production".into(),
            config_dir: cwd.path().to_path_buf(),
            working_dir: cwd.path().to_path_buf(),
        };
        let err = config.load_profile().unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }
}
