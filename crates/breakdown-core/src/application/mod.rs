//! Application layer for Breakdown.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (TypeFactory, VariablesFactory,
//!   PromptService) and the four path resolvers
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Token rules live in `crate::domain`; this layer decides the order things
//! happen in and where files are.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    InputPathResolver, OutputPathResolver, PathContext, PromptPathResolver, PromptService,
    RenderedPrompt, ResolverStrategy, SchemaPathResolver, TypeFactory, VariablesFactory,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DirectoryProbe, Filesystem, PatternProvider, TemplateRenderer};

pub use error::{ApplicationError, PathCategory};
