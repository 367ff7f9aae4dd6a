//! Pattern providers: one backed by a loaded profile, one holding fixed
//! patterns in memory.

use tracing::warn;

use breakdown_core::{
    application::ports::PatternProvider,
    domain::{DomainError, TypePattern},
};

use crate::config_loader::{
    DEFAULT_DIRECTIVE_PATTERN, DEFAULT_LAYER_PATTERN, DEFAULT_PROFILE, ProfileConfig,
};

/// Directive and layer patterns of one profile, compiled once.
///
/// An invalid configured pattern is logged and treated as absent, so
/// validation against it reports `PatternNotFound`.
#[derive(Debug, Clone)]
pub struct ProfilePatternProvider {
    profile: String,
    directive: Option<TypePattern>,
    layer: Option<TypePattern>,
}

impl ProfilePatternProvider {
    /// Build from already compiled patterns.
    pub fn new(
        profile: impl Into<String>,
        directive: Option<TypePattern>,
        layer: Option<TypePattern>,
    ) -> Self {
        Self {
            profile: profile.into(),
            directive,
            layer,
        }
    }

    /// Compile the patterns of a loaded profile.
    pub fn from_config(profile: impl Into<String>, config: &ProfileConfig) -> Self {
        let profile = profile.into();
        let directive = compile(&profile, "directive_type", config.directive_pattern());
        let layer = compile(&profile, "layer_type", config.layer_pattern());
        Self::new(profile, directive, layer)
    }
}

fn compile(profile: &str, key: &str, source: Option<&str>) -> Option<TypePattern> {
    let source = source?;
    match TypePattern::new(source) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            warn!(profile, key, error = %e, "Ignoring invalid pattern");
            None
        }
    }
}

impl PatternProvider for ProfilePatternProvider {
    fn directive_pattern(&self) -> Option<TypePattern> {
        self.directive.clone()
    }

    fn layer_pattern(&self) -> Option<TypePattern> {
        self.layer.clone()
    }

    fn profile_name(&self) -> String {
        self.profile.clone()
    }
}

// ── StaticPatternProvider ────────────────────────────────────────────────────

/// Patterns fixed at construction, no configuration files involved.
///
/// `Default` carries the built-in `default` profile patterns.
#[derive(Debug, Clone)]
pub struct StaticPatternProvider {
    profile: String,
    directive: Option<TypePattern>,
    layer: Option<TypePattern>,
}

impl StaticPatternProvider {
    /// A provider with no patterns; every token reports `PatternNotFound`.
    pub fn empty(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            directive: None,
            layer: None,
        }
    }

    /// Compile both pattern sources, failing on the first invalid one.
    pub fn from_sources(
        profile: impl Into<String>,
        directive: &str,
        layer: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self::empty(profile)
            .with_directive(TypePattern::new(directive)?)
            .with_layer(TypePattern::new(layer)?))
    }

    pub fn with_directive(mut self, pattern: TypePattern) -> Self {
        self.directive = Some(pattern);
        self
    }

    pub fn with_layer(mut self, pattern: TypePattern) -> Self {
        self.layer = Some(pattern);
        self
    }
}

impl Default for StaticPatternProvider {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            directive: TypePattern::new(DEFAULT_DIRECTIVE_PATTERN).ok(),
            layer: TypePattern::new(DEFAULT_LAYER_PATTERN).ok(),
        }
    }
}

impl PatternProvider for StaticPatternProvider {
    fn directive_pattern(&self) -> Option<TypePattern> {
        self.directive.clone()
    }

    fn layer_pattern(&self) -> Option<TypePattern> {
        self.layer.clone()
    }

    fn profile_name(&self) -> String {
        self.profile.clone()
    }
}
