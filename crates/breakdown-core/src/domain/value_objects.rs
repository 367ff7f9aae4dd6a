//! Domain value objects: TokenKind, DirectiveType, LayerType, TypePair.
//!
//! # Design
//!
//! `DirectiveType` and `LayerType` can only be built through `create`, which
//! runs [`TypeValidator`]. Once built they always satisfy the pattern they were
//! validated against. Equality is by string value only; the pattern is carried
//! along for diagnostics and never takes part in comparisons.

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::domain::{error::DomainError, pattern::TypePattern, validation::TypeValidator};

// ── TokenKind ────────────────────────────────────────────────────────────────

/// Which of the two positional tokens a value or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Directive,
    Layer,
}

impl TokenKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Directive => "directive",
            Self::Layer => "layer",
        }
    }

    /// Key of this token's section under `params.two` in profile files.
    pub const fn config_key(&self) -> &'static str {
        match self {
            Self::Directive => "directive_type",
            Self::Layer => "layer_type",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DirectiveType ────────────────────────────────────────────────────────────

/// A validated directive token (`to`, `summary`, `defect`, ...).
#[derive(Debug, Clone)]
pub struct DirectiveType {
    value: String,
    pattern: TypePattern,
}

impl DirectiveType {
    pub fn create(raw: &str, pattern: Option<&TypePattern>) -> Result<Self, DomainError> {
        let matched = TypeValidator::validate(TokenKind::Directive, raw, pattern)?;
        Ok(Self {
            value: raw.to_string(),
            pattern: matched.clone(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The pattern this value was validated against.
    pub fn pattern(&self) -> &TypePattern {
        &self.pattern
    }
}

impl PartialEq for DirectiveType {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for DirectiveType {}

impl Hash for DirectiveType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for DirectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for DirectiveType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

// ── LayerType ────────────────────────────────────────────────────────────────

/// A validated layer token (`project`, `issue`, `task`, ...).
#[derive(Debug, Clone)]
pub struct LayerType {
    value: String,
    pattern: TypePattern,
}

impl LayerType {
    pub fn create(raw: &str, pattern: Option<&TypePattern>) -> Result<Self, DomainError> {
        let matched = TypeValidator::validate(TokenKind::Layer, raw, pattern)?;
        Ok(Self {
            value: raw.to_string(),
            pattern: matched.clone(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn pattern(&self) -> &TypePattern {
        &self.pattern
    }
}

impl PartialEq for LayerType {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for LayerType {}

impl Hash for LayerType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for LayerType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

// ── TypePair ─────────────────────────────────────────────────────────────────

/// Both validated tokens of one invocation.
///
/// This is the canonical record every path resolver reads from; nothing
/// downstream of the type factory ever sees raw token strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypePair {
    directive: DirectiveType,
    layer: LayerType,
}

impl TypePair {
    pub fn new(directive: DirectiveType, layer: LayerType) -> Self {
        Self { directive, layer }
    }

    pub fn directive(&self) -> &DirectiveType {
        &self.directive
    }

    pub fn layer(&self) -> &LayerType {
        &self.layer
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.directive, self.layer)
    }
}
