//! Infrastructure adapters for Breakdown.
//!
//! This crate implements the ports defined in `breakdown-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config_loader;
pub mod filesystem;
pub mod pattern_provider;
pub mod renderer;

// Re-export commonly used adapters
pub use config_loader::{ConfigLoader, DEFAULT_PROFILE, ProfileConfig};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use pattern_provider::{ProfilePatternProvider, StaticPatternProvider};
pub use renderer::SimpleRenderer;
