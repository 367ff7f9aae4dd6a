//! Type Factory - turns the two raw tokens into validated types.

use tracing::{debug, instrument};

use crate::{
    application::ports::PatternProvider,
    domain::{CommandOptions, DirectiveType, DomainError, LayerType, TypePair, TypeValidator},
};

/// Validates directive and layer tokens against one profile's patterns.
pub struct TypeFactory {
    provider: Box<dyn PatternProvider>,
}

impl TypeFactory {
    /// Create a factory bound to one pattern provider.
    pub fn new(provider: Box<dyn PatternProvider>) -> Self {
        Self { provider }
    }

    /// Name of the profile whose patterns this factory applies.
    pub fn profile_name(&self) -> String {
        self.provider.profile_name()
    }

    pub fn create_directive(&self, raw: &str) -> Result<DirectiveType, DomainError> {
        let pattern = self.provider.directive_pattern();
        DirectiveType::create(raw, pattern.as_ref())
    }

    pub fn create_layer(&self, raw: &str) -> Result<LayerType, DomainError> {
        let pattern = self.provider.layer_pattern();
        LayerType::create(raw, pattern.as_ref())
    }

    /// Validate both tokens, directive first.
    ///
    /// The layer is not looked at until the directive has passed, so when
    /// both are invalid the error always concerns the directive.
    #[instrument(skip(self), fields(profile = %self.provider.profile_name()))]
    pub fn create_both_types(
        &self,
        raw_directive: &str,
        raw_layer: &str,
    ) -> Result<TypePair, DomainError> {
        let directive = self.create_directive(raw_directive)?;
        let layer = self.create_layer(raw_layer)?;
        debug!(directive = %directive, layer = %layer, "Tokens validated");
        Ok(TypePair::new(directive, layer))
    }

    /// Check the options that end up inside the prompt filename.
    ///
    /// `adaptation` and the `input` layer override must each be a single
    /// path segment, and the override must also satisfy the layer pattern.
    pub fn validate_options(&self, options: &CommandOptions) -> Result<(), DomainError> {
        if let Some(adaptation) = options.adaptation() {
            TypeValidator::validate_segment("adaptation", adaptation)?;
        }
        if let Some(source) = options.input_layer() {
            TypeValidator::validate_segment("input", source)?;
            let source = self.create_layer(source)?;
            debug!(source = %source, "Source layer override accepted");
        }
        Ok(())
    }
}
