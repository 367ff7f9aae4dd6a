//! Command options and the raw two-token input record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Option values collected from the command line.
///
/// Known keys have dedicated fields; anything else lands in `extra` and is
/// passed through untouched to the renderer. An unknown key is never an
/// error, so new flags can be added without touching this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOptions {
    /// Input document (`-` for stdin).
    pub from_file: Option<String>,
    /// Output artifact location.
    pub destination_file: Option<String>,
    /// Prompt template variant suffix.
    pub adaptation: Option<String>,
    /// Source layer override for template selection.
    pub input: Option<String>,
    /// Explicit prompt template, bypassing the naming convention.
    pub prompt_file: Option<String>,
    /// Explicit schema file, bypassing the naming convention.
    pub schema_file: Option<String>,
    /// Configuration profile name.
    pub profile: Option<String>,
    /// User variables and any keys this crate does not interpret.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loosely-typed `key=value` pairs.
    ///
    /// Accepts both the camelCase and kebab-case spelling of known keys
    /// (`fromFile` / `from-file`); `config` is an alias for `profile`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();
            let slot = match key.as_str() {
                "fromFile" | "from-file" | "from" => &mut options.from_file,
                "destinationFile" | "destination-file" | "destination" => {
                    &mut options.destination_file
                }
                "adaptation" => &mut options.adaptation,
                "input" => &mut options.input,
                "promptFile" | "prompt-file" => &mut options.prompt_file,
                "schemaFile" | "schema-file" => &mut options.schema_file,
                "profile" | "config" => &mut options.profile,
                _ => {
                    options.extra.insert(key, value);
                    continue;
                }
            };
            *slot = Some(value);
        }
        options
    }

    pub fn with_from_file(mut self, path: impl Into<String>) -> Self {
        self.from_file = Some(path.into());
        self
    }

    pub fn with_destination_file(mut self, path: impl Into<String>) -> Self {
        self.destination_file = Some(path.into());
        self
    }

    pub fn with_adaptation(mut self, adaptation: impl Into<String>) -> Self {
        self.adaptation = Some(adaptation.into());
        self
    }

    pub fn with_input(mut self, layer: impl Into<String>) -> Self {
        self.input = Some(layer.into());
        self
    }

    pub fn with_prompt_file(mut self, path: impl Into<String>) -> Self {
        self.prompt_file = Some(path.into());
        self
    }

    pub fn with_schema_file(mut self, path: impl Into<String>) -> Self {
        self.schema_file = Some(path.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Adaptation suffix, if set to something non-blank.
    pub fn adaptation(&self) -> Option<&str> {
        present(&self.adaptation)
    }

    /// Source layer override, if set to something non-blank.
    pub fn input_layer(&self) -> Option<&str> {
        present(&self.input)
    }
}

/// Treat blank option values the same as absent ones.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// The raw tokens and options of one invocation, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoTokenInput {
    pub directive: String,
    pub layer: String,
    pub options: CommandOptions,
}

impl TwoTokenInput {
    pub fn new(
        directive: impl Into<String>,
        layer: impl Into<String>,
        options: CommandOptions,
    ) -> Self {
        Self {
            directive: directive.into(),
            layer: layer.into(),
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_fills_known_keys() {
        let opts = CommandOptions::from_pairs([
            ("fromFile", "in.md"),
            ("destinationFile", "out.md"),
            ("adaptation", "strict"),
            ("input", "project"),
            ("config", "production"),
        ]);
        assert_eq!(opts.from_file.as_deref(), Some("in.md"));
        assert_eq!(opts.destination_file.as_deref(), Some("out.md"));
        assert_eq!(opts.adaptation(), Some("strict"));
        assert_eq!(opts.input_layer(), Some("project"));
        assert_eq!(opts.profile.as_deref(), Some("production"));
        assert!(opts.extra.is_empty());
    }

    #[test]
    fn unknown_keys_are_kept_not_rejected() {
        let opts = CommandOptions::from_pairs([("uv-author", "alice"), ("someFutureFlag", "1")]);
        assert_eq!(opts.extra.get("uv-author").map(String::as_str), Some("alice"));
        assert_eq!(opts.extra.len(), 2);
        assert_eq!(opts.from_file, None);
    }

    #[test]
    fn blank_values_read_as_absent() {
        let opts = CommandOptions::new().with_adaptation("  ").with_input("");
        assert_eq!(opts.adaptation(), None);
        assert_eq!(opts.input_layer(), None);
    }
}
