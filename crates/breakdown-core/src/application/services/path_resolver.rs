//! Shared path classification for the four resolvers.
//!
//! Every resolver follows the same decision list for its candidate value:
//!
//! | Candidate                 | Result                                      |
//! |---------------------------|---------------------------------------------|
//! | absent / blank            | convention path under the base directory    |
//! | `-` (stdin resolvers)     | `-`, unresolved                             |
//! | absolute (`/`, `C:`)      | normalized as-is                            |
//! | contains a separator      | `working_dir / candidate`                   |
//! | bare filename             | `base / directive / layer / candidate`      |
//!
//! A candidate ending in a separator, or one the [`DirectoryProbe`] reports as
//! an existing directory, gets the resolver's default filename appended.
//!
//! Resolvers differ only in the [`ResolverStrategy`] they plug in.

use tracing::debug;

use crate::{
    application::{
        ApplicationError,
        error::PathCategory,
        ports::DirectoryProbe,
    },
    domain::{
        CommandOptions, ConfigField, PathConfig, ResolvedPath, TypePair,
        common::{STDIN_MARKER, ends_with_separator, has_hierarchy, is_absolute, join, normalize},
    },
};

/// Everything a resolver may read, built once per invocation.
#[derive(Debug, Clone, Copy)]
pub struct PathContext<'a> {
    config: &'a PathConfig,
    directive: &'a str,
    layer: &'a str,
    options: &'a CommandOptions,
}

impl<'a> PathContext<'a> {
    pub fn new(config: &'a PathConfig, pair: &'a TypePair, options: &'a CommandOptions) -> Self {
        Self {
            config,
            directive: pair.directive().as_str(),
            layer: pair.layer().as_str(),
            options,
        }
    }

    pub fn directive(&self) -> &'a str {
        self.directive
    }

    pub fn layer(&self) -> &'a str {
        self.layer
    }

    pub fn options(&self) -> &'a CommandOptions {
        self.options
    }

    /// A configured value the resolver cannot do without.
    pub fn require(
        &self,
        field: ConfigField,
        category: PathCategory,
    ) -> Result<&'a str, ApplicationError> {
        self.config
            .get(field)
            .ok_or(ApplicationError::ConfigurationIncomplete { category, field })
    }
}

/// What one resolver plugs into [`classify`].
pub trait ResolverStrategy {
    /// Which stage this resolver is.
    const CATEGORY: PathCategory;

    /// Base directory for bare filenames and generated paths.
    const BASE_DIR: ConfigField;

    /// Whether `-` means stdin for this resolver.
    const ACCEPTS_STDIN: bool = false;

    /// The option value this resolver reads. Must not read any other
    /// resolver's option.
    fn candidate<'a>(&self, options: &'a CommandOptions) -> Option<&'a str>;

    /// Conventional filename, used when the candidate is absent or names a
    /// directory. `None` means the resolver has no convention.
    fn default_filename(&self, ctx: &PathContext<'_>) -> Option<String>;

    /// Last adjustment to an explicit, non-directory location.
    fn finish_explicit(&self, path: String) -> String {
        path
    }

    /// Resolve this stage's path.
    fn resolve(
        &self,
        ctx: &PathContext<'_>,
        probe: &dyn DirectoryProbe,
    ) -> Result<ResolvedPath, ApplicationError>
    where
        Self: Sized,
    {
        let resolved = classify(self, ctx, probe)?;
        debug!(
            stage = %Self::CATEGORY,
            kind = %resolved.kind(),
            path = %resolved,
            "Path resolved"
        );
        Ok(resolved)
    }
}

/// The shared decision list; see the module docs.
pub fn classify<S: ResolverStrategy>(
    strategy: &S,
    ctx: &PathContext<'_>,
    probe: &dyn DirectoryProbe,
) -> Result<ResolvedPath, ApplicationError> {
    let Some(raw) = strategy
        .candidate(ctx.options())
        .filter(|v| !v.trim().is_empty())
    else {
        return generate(strategy, ctx);
    };

    if S::ACCEPTS_STDIN && raw == STDIN_MARKER {
        return Ok(ResolvedPath::stdin());
    }

    let located = if is_absolute(raw) {
        normalize(raw)
    } else if has_hierarchy(raw) {
        let working_dir = ctx.require(ConfigField::WorkingDir, S::CATEGORY)?;
        join(&[working_dir, raw])
    } else {
        let base = ctx.require(S::BASE_DIR, S::CATEGORY)?;
        join(&[base, ctx.directive(), ctx.layer(), raw])
    };

    if ends_with_separator(raw) || probe.is_directory(&located) {
        if let Some(name) = strategy.default_filename(ctx) {
            return Ok(ResolvedPath::generated(join(&[&located, &name])));
        }
    }

    Ok(ResolvedPath::explicit(strategy.finish_explicit(located)))
}

/// Nothing was given: use the convention, or stdin if there is none.
fn generate<S: ResolverStrategy>(
    strategy: &S,
    ctx: &PathContext<'_>,
) -> Result<ResolvedPath, ApplicationError> {
    let Some(name) = strategy.default_filename(ctx) else {
        return Ok(ResolvedPath::stdin());
    };
    let base = ctx.require(S::BASE_DIR, S::CATEGORY)?;
    Ok(ResolvedPath::generated(join(&[
        base,
        ctx.directive(),
        ctx.layer(),
        &name,
    ])))
}
