//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate two tokens" or "resolve every path
//! for a directive/layer pair".

pub mod artifact_name;
pub mod path_resolver;
pub mod prompt_service;
pub mod resolvers;
pub mod type_factory;
pub mod variables_factory;

pub use artifact_name::default_artifact_name;
pub use path_resolver::{PathContext, ResolverStrategy, classify};
pub use prompt_service::{PromptService, RenderedPrompt};
pub use resolvers::{
    InputPathResolver, OutputPathResolver, PromptPathResolver, SCHEMA_FILENAME,
    SchemaPathResolver,
};
pub use type_factory::TypeFactory;
pub use variables_factory::VariablesFactory;
