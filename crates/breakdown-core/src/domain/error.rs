// ============================================================================
// domain/error.rs - TOKEN VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::TokenKind;

/// Root domain error type.
///
/// Every variant that concerns a raw token carries the [`TokenKind`] it was
/// raised for, so callers can tell a directive-stage failure from a
/// layer-stage failure without parsing the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("{kind} cannot be empty")]
    EmptyInput { kind: TokenKind },

    #[error("'{value}' is not a valid {kind} (pattern: {pattern})")]
    PatternMismatch {
        kind: TokenKind,
        value: String,
        pattern: String,
    },

    #[error("'{value}' is not a valid --{option} value: path separators and '..' are not allowed")]
    UnsafeOptionValue { option: &'static str, value: String },

    // ========================================================================
    // Configuration Gaps
    // ========================================================================
    #[error("no {kind} pattern is configured for the active profile")]
    PatternNotFound { kind: TokenKind },

    #[error("invalid pattern '{source_text}': {reason}")]
    InvalidPattern { source_text: String, reason: String },
}

impl DomainError {
    /// The token category this error was raised for, if any.
    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            Self::EmptyInput { kind }
            | Self::PatternMismatch { kind, .. }
            | Self::PatternNotFound { kind } => Some(*kind),
            Self::InvalidPattern { .. } | Self::UnsafeOptionValue { .. } => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyInput { kind } => vec![
                format!("Provide a {kind} token"),
                "Example: breakdown run to project --from input.md".into(),
            ],
            Self::PatternMismatch { kind, pattern, .. } => vec![
                format!("Allowed {kind} values are defined by: {pattern}"),
                format!("Check params.two.{}.pattern in your profile", kind.config_key()),
                "Matching is case-sensitive".into(),
            ],
            Self::PatternNotFound { kind } => vec![
                format!("Add params.two.{}.pattern to the profile", kind.config_key()),
                "Run: breakdown config path to locate the profile files".into(),
            ],
            Self::InvalidPattern { source_text, .. } => vec![
                format!("'{source_text}' is not a valid regular expression"),
            ],
            Self::UnsafeOptionValue { option, .. } => vec![
                format!("--{option} selects a template name, not a path"),
                "Use --template to point at a template file directly".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyInput { .. }
            | Self::PatternMismatch { .. }
            | Self::UnsafeOptionValue { .. } => ErrorCategory::Validation,
            Self::PatternNotFound { .. } | Self::InvalidPattern { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
