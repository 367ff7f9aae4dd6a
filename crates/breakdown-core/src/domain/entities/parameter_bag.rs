//! The aggregated record handed to the renderer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{options::CommandOptions, resolved_path::ResolvedPath};

/// Prefix under which user variables (`--uv key=value`) are exposed.
pub const USER_VARIABLE_PREFIX: &str = "uv-";

/// All four resolved paths plus the validated tokens and original options.
///
/// Immutable once assembled; built only by `VariablesFactory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterBag {
    prompt_path: ResolvedPath,
    schema_path: ResolvedPath,
    input_path: ResolvedPath,
    output_path: ResolvedPath,
    directive_value: String,
    layer_value: String,
    options: CommandOptions,
}

impl ParameterBag {
    pub(crate) fn new(
        prompt_path: ResolvedPath,
        schema_path: ResolvedPath,
        input_path: ResolvedPath,
        output_path: ResolvedPath,
        directive_value: String,
        layer_value: String,
        options: CommandOptions,
    ) -> Self {
        Self {
            prompt_path,
            schema_path,
            input_path,
            output_path,
            directive_value,
            layer_value,
            options,
        }
    }

    pub fn prompt_path(&self) -> &ResolvedPath {
        &self.prompt_path
    }

    pub fn schema_path(&self) -> &ResolvedPath {
        &self.schema_path
    }

    pub fn input_path(&self) -> &ResolvedPath {
        &self.input_path
    }

    pub fn output_path(&self) -> &ResolvedPath {
        &self.output_path
    }

    pub fn directive_value(&self) -> &str {
        &self.directive_value
    }

    pub fn layer_value(&self) -> &str {
        &self.layer_value
    }

    pub fn options(&self) -> &CommandOptions {
        &self.options
    }

    /// Flatten into the substitution map a renderer consumes.
    ///
    /// `input_text` is the loaded input document, if the caller has one.
    /// Keys in `options.extra` that already carry the `uv-` prefix are kept
    /// as-is; others gain it.
    pub fn variables(&self, input_text: Option<&str>) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();

        for (key, value) in &self.options.extra {
            let key = if key.starts_with(USER_VARIABLE_PREFIX) {
                key.clone()
            } else {
                format!("{USER_VARIABLE_PREFIX}{key}")
            };
            vars.insert(key, value.clone());
        }

        vars.insert("directive".into(), self.directive_value.clone());
        vars.insert("layer".into(), self.layer_value.clone());
        vars.insert("prompt_path".into(), self.prompt_path.to_string());
        vars.insert("schema_file".into(), self.schema_path.to_string());
        vars.insert("input_text_file".into(), self.input_path.to_string());
        vars.insert("destination_path".into(), self.output_path.to_string());
        if let Some(adaptation) = self.options.adaptation() {
            vars.insert("adaptation".into(), adaptation.to_string());
        }
        if let Some(text) = input_text {
            vars.insert("input_text".into(), text.to_string());
        }

        vars
    }
}
