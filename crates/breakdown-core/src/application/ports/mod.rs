//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `breakdown-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `PatternProvider`: per-profile validation patterns
//!   - `DirectoryProbe`: advisory directory detection
//!   - `Filesystem`: template/input reads and output writes
//!   - `TemplateRenderer`: variable substitution
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DirectoryProbe, Filesystem, PatternProvider, TemplateRenderer};

#[cfg(test)]
pub use output::{MockDirectoryProbe, MockPatternProvider};
