//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use breakdown_core::domain::{CommandOptions, TwoTokenInput};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "breakdown",
    bin_name = "breakdown",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Two-token prompt generation for Markdown documents",
    long_about = "Breakdown turns a directive and a layer (e.g. `to project`) \
                  into a prompt template, a schema and an output location, \
                  then renders the template with your input document.",
    after_help = "EXAMPLES:\n\
        \x20 breakdown run to project --from notes.md\n\
        \x20 cat bug.md | breakdown run summary issue --destination bug-report.md\n\
        \x20 breakdown paths to task --input project --adaptation strict\n\
        \x20 breakdown --profile production config show",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the prompt for a directive/layer pair.
    #[command(
        visible_alias = "r",
        about = "Render a prompt",
        after_help = "EXAMPLES:\n\
            \x20 breakdown run to project --from project.md\n\
            \x20 breakdown run to task --adaptation strict --destination tasks/\n\
            \x20 breakdown run defect issue --uv author=sam < crash.log"
    )]
    Run(RunArgs),

    /// Show every path resolved for a directive/layer pair.
    #[command(
        about = "Show resolved paths",
        after_help = "EXAMPLES:\n\
            \x20 breakdown paths to project\n\
            \x20 breakdown paths summary issue --destination bug-report.md\n\
            \x20 breakdown paths to task --output-format json"
    )]
    Paths(TokenArgs),

    /// Inspect the active profile configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 breakdown config show\n\
            \x20 breakdown --profile production config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 breakdown completions bash > ~/.local/share/bash-completion/completions/breakdown\n\
            \x20 breakdown completions zsh  > ~/.zfunc/_breakdown\n\
            \x20 breakdown completions fish > ~/.config/fish/completions/breakdown.fish"
    )]
    Completions(CompletionsArgs),
}

// ── tokens ────────────────────────────────────────────────────────────────────

/// The two positional tokens plus the options that steer path resolution.
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Transformation verb, e.g. `to`, `summary`, `defect`.
    #[arg(value_name = "DIRECTIVE", help = "Directive token")]
    pub directive: String,

    /// Document scope, e.g. `project`, `issue`, `task`.
    #[arg(value_name = "LAYER", help = "Layer token")]
    pub layer: String,

    /// Input document; `-` reads stdin.
    #[arg(
        short = 'f',
        long = "from",
        value_name = "FILE",
        help = "Input document (- for stdin)"
    )]
    pub from: Option<String>,

    /// Where the rendered prompt goes.
    #[arg(
        short = 'o',
        long = "destination",
        value_name = "PATH",
        help = "Output file or directory"
    )]
    pub destination: Option<String>,

    /// Template variant suffix: `f_{layer}_{adaptation}.md`.
    #[arg(
        short = 'a',
        long = "adaptation",
        value_name = "NAME",
        help = "Prompt template variant"
    )]
    pub adaptation: Option<String>,

    /// Pick the template written for another source layer.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "LAYER",
        help = "Source layer for template selection"
    )]
    pub input: Option<String>,

    /// Explicit prompt template, bypassing the naming convention.
    #[arg(long = "template", value_name = "FILE", help = "Prompt template path")]
    pub template: Option<String>,

    /// Explicit schema file, bypassing the naming convention.
    #[arg(long = "schema", value_name = "FILE", help = "Schema file path")]
    pub schema: Option<String>,

    /// User variable exposed to the template as `{uv-KEY}`.
    #[arg(
        long = "uv",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value,
        help = "User variable (repeatable)"
    )]
    pub user_variables: Vec<(String, String)>,
}

impl TokenArgs {
    /// Convert into the core's raw input record.
    pub fn into_input(self, profile: &str) -> TwoTokenInput {
        let mut options = CommandOptions::new().with_profile(profile);
        options.from_file = self.from;
        options.destination_file = self.destination;
        options.adaptation = self.adaptation;
        options.input = self.input;
        options.prompt_file = self.template;
        options.schema_file = self.schema;
        for (key, value) in self.user_variables {
            options = options.with_extra(key, value);
        }
        TwoTokenInput::new(self.directive, self.layer, options)
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `breakdown run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub tokens: TokenArgs,

    /// Resolve and render, but write nothing.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `breakdown completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `breakdown config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the merged configuration of the active profile.
    Show,
    /// Print the files the active profile is read from.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
