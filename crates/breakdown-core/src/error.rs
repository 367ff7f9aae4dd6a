//! Unified error handling for Breakdown Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Breakdown Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BreakdownError {
    /// Token validation failures (empty, mismatched, or unconfigured).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Path resolution and rendering failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl BreakdownError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Run: breakdown config path to locate the profile files".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type BreakdownResult<T> = Result<T, BreakdownError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TokenKind;

    #[test]
    fn domain_errors_display_transparently() {
        let err: BreakdownError = DomainError::EmptyInput {
            kind: TokenKind::Directive,
        }
        .into();
        assert_eq!(err.to_string(), "directive cannot be empty");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn missing_pattern_maps_to_configuration() {
        let err: BreakdownError = DomainError::PatternNotFound {
            kind: TokenKind::Layer,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
