use crate::domain::{error::DomainError, pattern::TypePattern, value_objects::TokenKind};

/// Centralized token validation.
///
/// `DirectiveType::create` and `LayerType::create` both go through here so the
/// order of checks is defined once: empty input, then missing pattern, then
/// pattern mismatch.
pub struct TypeValidator;

impl TypeValidator {
    /// Validate `raw` for `kind`, returning the pattern it matched.
    pub fn validate<'p>(
        kind: TokenKind,
        raw: &str,
        pattern: Option<&'p TypePattern>,
    ) -> Result<&'p TypePattern, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyInput { kind });
        }

        let pattern = pattern.ok_or(DomainError::PatternNotFound { kind })?;

        if !pattern.test(raw) {
            return Err(DomainError::PatternMismatch {
                kind,
                value: raw.to_string(),
                pattern: pattern.as_str().to_string(),
            });
        }

        Ok(pattern)
    }

    /// Check that an option value used inside a filename stays a single
    /// path segment.
    pub fn validate_segment(option: &'static str, raw: &str) -> Result<(), DomainError> {
        if raw.contains(['/', '\\']) || raw.contains("..") {
            return Err(DomainError::UnsafeOptionValue {
                option,
                value: raw.to_string(),
            });
        }
        Ok(())
    }
}
