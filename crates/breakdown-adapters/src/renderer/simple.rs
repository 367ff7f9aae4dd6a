//! Simple variable substitution renderer.

use std::collections::BTreeMap;

use breakdown_core::{application::ports::TemplateRenderer, error::BreakdownResult};
use tracing::{instrument, trace};

/// Renderer replacing `{name}` placeholders with variable values.
///
/// Unknown placeholders are left as written. Substituted values are never
/// rescanned, so an input document containing `{layer}` stays intact.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(variables = variables.len()))]
    fn render(
        &self,
        template: &str,
        variables: &BTreeMap<String, String>,
    ) -> BreakdownResult<String> {
        Ok(substitute(template, variables))
    }
}

fn substitute(template: &str, variables: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) if is_placeholder_name(&after[..close]) => {
                let name = &after[..close];
                match variables.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        trace!(name, "Leaving unknown placeholder");
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
