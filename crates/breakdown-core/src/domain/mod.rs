// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Breakdown.
//!
//! Pure logic: validated token types, compiled patterns, the options and
//! configuration records, and the path text helpers used by the resolvers.
//!
//! ## Rules
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: no filesystem, network, or clock access
//! - **Immutable values**: typed tokens and resolved paths never change after
//!   construction
pub mod common;
pub mod entities;
pub mod error;
pub mod pattern;
pub mod value_objects;

mod validation;

pub use entities::{
    options::{CommandOptions, TwoTokenInput},
    parameter_bag::{ParameterBag, USER_VARIABLE_PREFIX},
    path_config::{ConfigField, PathConfig},
    resolved_path::{PathKind, ResolvedPath},
};

pub use error::{DomainError, ErrorCategory};
pub use pattern::TypePattern;
pub use validation::TypeValidator;
pub use value_objects::{DirectiveType, LayerType, TokenKind, TypePair};
