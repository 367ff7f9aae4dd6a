//! Variables Factory - runs the four resolvers and builds the parameter bag.

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        error::PathCategory,
        ports::DirectoryProbe,
        services::{
            path_resolver::{PathContext, ResolverStrategy},
            resolvers::{
                InputPathResolver, OutputPathResolver, PromptPathResolver, SchemaPathResolver,
            },
        },
    },
    domain::{CommandOptions, ParameterBag, PathConfig, ResolvedPath, TypePair},
};

/// Assembles a [`ParameterBag`] from validated tokens and a configuration.
pub struct VariablesFactory {
    probe: Box<dyn DirectoryProbe>,
}

impl VariablesFactory {
    pub fn new(probe: Box<dyn DirectoryProbe>) -> Self {
        Self { probe }
    }

    /// Resolve prompt, schema, input and output, in that order.
    ///
    /// Stops at the first failing stage and reports it wrapped in
    /// [`ApplicationError::Aggregate`]; later stages are not attempted.
    #[instrument(skip_all, fields(pair = %pair))]
    pub fn assemble(
        &self,
        config: &PathConfig,
        pair: &TypePair,
        options: &CommandOptions,
    ) -> Result<ParameterBag, ApplicationError> {
        let ctx = PathContext::new(config, pair, options);

        let prompt = self.stage(&PromptPathResolver, &ctx)?;
        let schema = self.stage(&SchemaPathResolver, &ctx)?;
        let input = self.stage(&InputPathResolver, &ctx)?;
        let output = self.stage(&OutputPathResolver, &ctx)?;

        debug!("Parameter bag assembled");
        Ok(ParameterBag::new(
            prompt,
            schema,
            input,
            output,
            pair.directive().as_str().to_string(),
            pair.layer().as_str().to_string(),
            options.clone(),
        ))
    }

    fn stage<S: ResolverStrategy>(
        &self,
        resolver: &S,
        ctx: &PathContext<'_>,
    ) -> Result<ResolvedPath, ApplicationError> {
        resolver
            .resolve(ctx, self.probe.as_ref())
            .map_err(|source| aggregate(S::CATEGORY, source))
    }
}

fn aggregate(stage: PathCategory, source: ApplicationError) -> ApplicationError {
    ApplicationError::Aggregate {
        stage,
        source: Box::new(source),
    }
}
