//! Read-only view of the configuration the path resolvers need.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base directories for one profile.
///
/// Every field is optional: configuration loading is done elsewhere, and a
/// missing field is reported by the resolver that needed it rather than
/// silently defaulted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    pub working_dir: Option<String>,
    pub prompt_base_dir: Option<String>,
    pub schema_base_dir: Option<String>,
    pub input_base_dir: Option<String>,
    pub output_base_dir: Option<String>,
}

impl PathConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_working_dir(mut self, dir: impl Into<String>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_prompt_base_dir(mut self, dir: impl Into<String>) -> Self {
        self.prompt_base_dir = Some(dir.into());
        self
    }

    pub fn with_schema_base_dir(mut self, dir: impl Into<String>) -> Self {
        self.schema_base_dir = Some(dir.into());
        self
    }

    pub fn with_input_base_dir(mut self, dir: impl Into<String>) -> Self {
        self.input_base_dir = Some(dir.into());
        self
    }

    pub fn with_output_base_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_base_dir = Some(dir.into());
        self
    }

    /// Value of `field`, treating blank strings as missing.
    pub fn get(&self, field: ConfigField) -> Option<&str> {
        let value = match field {
            ConfigField::WorkingDir => &self.working_dir,
            ConfigField::PromptBaseDir => &self.prompt_base_dir,
            ConfigField::SchemaBaseDir => &self.schema_base_dir,
            ConfigField::InputBaseDir => &self.input_base_dir,
            ConfigField::OutputBaseDir => &self.output_base_dir,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }
}

/// Names a [`PathConfig`] field by its key in the profile file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConfigField {
    WorkingDir,
    PromptBaseDir,
    SchemaBaseDir,
    InputBaseDir,
    OutputBaseDir,
}

impl ConfigField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WorkingDir => "working_dir",
            Self::PromptBaseDir => "app_prompt.base_dir",
            Self::SchemaBaseDir => "app_schema.base_dir",
            Self::InputBaseDir => "app_input.base_dir",
            Self::OutputBaseDir => "app_output.base_dir",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
