//! The four path resolvers.
//!
//! Each one only names its option field, base directory and filename
//! convention; the branching lives in [`super::path_resolver::classify`].

use crate::{
    application::{
        error::PathCategory,
        services::{
            artifact_name::default_artifact_name,
            path_resolver::{PathContext, ResolverStrategy},
        },
    },
    domain::{CommandOptions, ConfigField, common::has_extension},
};

/// Schema filename shared by every directive/layer pair.
pub const SCHEMA_FILENAME: &str = "base.schema.md";

/// Extension given to explicit output names that have none.
const OUTPUT_EXTENSION: &str = "md";

/// Prompt template: `{base}/{directive}/{layer}/f_{source}[_{adaptation}].md`.
///
/// `source` is the `input` option when set, so `to task --input=project`
/// picks `f_project.md` from the `to/task` directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptPathResolver;

impl ResolverStrategy for PromptPathResolver {
    const CATEGORY: PathCategory = PathCategory::Prompt;
    const BASE_DIR: ConfigField = ConfigField::PromptBaseDir;

    fn candidate<'a>(&self, options: &'a CommandOptions) -> Option<&'a str> {
        options.prompt_file.as_deref()
    }

    fn default_filename(&self, ctx: &PathContext<'_>) -> Option<String> {
        let options = ctx.options();
        let source = options.input_layer().unwrap_or(ctx.layer());
        Some(match options.adaptation() {
            Some(adaptation) => format!("f_{source}_{adaptation}.md"),
            None => format!("f_{source}.md"),
        })
    }
}

/// Schema file: `{base}/{directive}/{layer}/base.schema.md`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaPathResolver;

impl ResolverStrategy for SchemaPathResolver {
    const CATEGORY: PathCategory = PathCategory::Schema;
    const BASE_DIR: ConfigField = ConfigField::SchemaBaseDir;

    fn candidate<'a>(&self, options: &'a CommandOptions) -> Option<&'a str> {
        options.schema_file.as_deref()
    }

    fn default_filename(&self, _ctx: &PathContext<'_>) -> Option<String> {
        Some(SCHEMA_FILENAME.to_string())
    }
}

/// Input document from `from_file`; absent or `-` means stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputPathResolver;

impl ResolverStrategy for InputPathResolver {
    const CATEGORY: PathCategory = PathCategory::Input;
    const BASE_DIR: ConfigField = ConfigField::InputBaseDir;
    const ACCEPTS_STDIN: bool = true;

    fn candidate<'a>(&self, options: &'a CommandOptions) -> Option<&'a str> {
        options.from_file.as_deref()
    }

    fn default_filename(&self, _ctx: &PathContext<'_>) -> Option<String> {
        None
    }
}

/// Output artifact from `destination_file`, else
/// `{base}/{directive}/{layer}/{YYYYMMDD}_{hash}.md`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputPathResolver;

impl ResolverStrategy for OutputPathResolver {
    const CATEGORY: PathCategory = PathCategory::Output;
    const BASE_DIR: ConfigField = ConfigField::OutputBaseDir;

    fn candidate<'a>(&self, options: &'a CommandOptions) -> Option<&'a str> {
        options.destination_file.as_deref()
    }

    fn default_filename(&self, _ctx: &PathContext<'_>) -> Option<String> {
        Some(default_artifact_name())
    }

    fn finish_explicit(&self, path: String) -> String {
        if has_extension(&path) {
            path
        } else {
            format!("{path}.{OUTPUT_EXTENSION}")
        }
    }
}
