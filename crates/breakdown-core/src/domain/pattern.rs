//! Compiled validation patterns.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::domain::error::DomainError;

/// A compiled regular expression together with the source it was built from.
///
/// The source is kept for error messages; two patterns compare equal when
/// their sources are equal.
#[derive(Debug, Clone)]
pub struct TypePattern {
    regex: Regex,
    source: String,
}

impl TypePattern {
    /// Compile a pattern.
    ///
    /// Fails with [`DomainError::InvalidPattern`] when `source` is blank or is
    /// not a valid regular expression.
    pub fn new(source: impl Into<String>) -> Result<Self, DomainError> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(DomainError::InvalidPattern {
                source_text: source,
                reason: "pattern cannot be empty".into(),
            });
        }

        let regex = Regex::new(&source).map_err(|e| DomainError::InvalidPattern {
            source_text: source.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { regex, source })
    }

    /// Unanchored search, like `RegExp.test`. Anchor with `^...$` in the
    /// profile to require a whole-token match.
    pub fn test(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for TypePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for TypePattern {}

impl fmt::Display for TypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for TypePattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
