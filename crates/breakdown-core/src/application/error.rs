//! Application layer errors.
//!
//! These errors represent failures in orchestration: path resolution against
//! an incomplete configuration, and the template/input plumbing around the
//! renderer. Token validation errors are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::domain::ConfigField;
use crate::error::ErrorCategory;

/// The four resolver stages, in assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathCategory {
    Prompt,
    Schema,
    Input,
    Output,
}

impl PathCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Schema => "schema",
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl fmt::Display for PathCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A base directory the resolver needed is absent from the configuration.
    #[error("{category} path cannot be resolved: '{field}' is not configured")]
    ConfigurationIncomplete {
        category: PathCategory,
        field: ConfigField,
    },

    /// First failure while assembling the parameter bag.
    #[error("failed to assemble parameters at the {stage} stage: {source}")]
    Aggregate {
        stage: PathCategory,
        #[source]
        source: Box<ApplicationError>,
    },

    /// The resolved prompt template does not exist.
    #[error("Prompt template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// The resolved input document does not exist.
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Unwrap any `Aggregate` layers down to the error that caused them.
    pub fn root_cause(&self) -> &ApplicationError {
        match self {
            Self::Aggregate { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigurationIncomplete { field, .. } => vec![
                format!("Set '{field}' in the active profile's app config"),
                "Run: breakdown config show to inspect the effective configuration".into(),
            ],
            Self::Aggregate { source, .. } => source.suggestions(),
            Self::TemplateNotFound { path } => vec![
                format!("Expected a template at: {}", path.display()),
                "Check app_prompt.base_dir and the directive/layer spelling".into(),
                "Use --template to point at a template explicitly".into(),
            ],
            Self::InputNotFound { path } => vec![
                format!("No input document at: {}", path.display()),
                "Pass --from - to read from stdin".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Check the template for syntax errors".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationIncomplete { .. } => ErrorCategory::Configuration,
            Self::Aggregate { source, .. } => source.category(),
            Self::TemplateNotFound { .. } | Self::InputNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
