//! Breakdown Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Breakdown
//! two-token prompt tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          breakdown-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (TypeFactory, VariablesFactory, Prompt) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Patterns, Probe, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    breakdown-adapters (Infrastructure)  │
//! │ (ConfigLoader, LocalFilesystem, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (DirectiveType, LayerType, ParameterBag)│
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use breakdown_core::prelude::*;
//!
//! // 1. Validate the tokens against the active profile
//! let factory = TypeFactory::new(Box::new(provider));
//! let pair = factory.create_both_types("to", "project")?;
//!
//! // 2. Resolve every path
//! let bag = VariablesFactory::new(Box::new(probe))
//!     .assemble(&config, &pair, &CommandOptions::new())?;
//! assert_eq!(bag.prompt_path().as_str(), "prompts/to/project/f_project.md");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, PathCategory, PromptService, RenderedPrompt, TypeFactory,
        VariablesFactory,
        ports::{DirectoryProbe, Filesystem, PatternProvider, TemplateRenderer},
    };
    pub use crate::domain::{
        CommandOptions, ConfigField, DirectiveType, DomainError, LayerType, ParameterBag,
        PathConfig, PathKind, ResolvedPath, TokenKind, TwoTokenInput, TypePair, TypePattern,
    };
    pub use crate::error::{BreakdownError, BreakdownResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
