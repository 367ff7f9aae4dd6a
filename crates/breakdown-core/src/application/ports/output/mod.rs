//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `breakdown-adapters` crate provides implementations.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::TypePattern;
use crate::error::BreakdownResult;

/// Port supplying the validation patterns of one configuration profile.
///
/// Implemented by:
/// - `breakdown_adapters::ProfilePatternProvider` (patterns from profile files)
///
/// Providers are passed into `TypeFactory` explicitly. Two factories built
/// from different providers never see each other's patterns.
#[cfg_attr(test, mockall::automock)]
pub trait PatternProvider: Send + Sync {
    /// Compiled directive pattern, or `None` if the profile has none.
    fn directive_pattern(&self) -> Option<TypePattern>;

    /// Compiled layer pattern, or `None` if the profile has none.
    fn layer_pattern(&self) -> Option<TypePattern>;

    /// Name of the profile the patterns came from.
    fn profile_name(&self) -> String;
}

/// Port answering "is this an existing directory?".
///
/// Advisory only: implementations must answer `false` when the check itself
/// fails (missing path, permission denied, ...).
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryProbe: Send + Sync {
    fn is_directory(&self, path: &str) -> bool;
}

/// Port for filesystem operations used around rendering.
///
/// Implemented by:
/// - `breakdown_adapters::LocalFilesystem` (production)
/// - `breakdown_adapters::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> BreakdownResult<String>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> BreakdownResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BreakdownResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `breakdown_adapters::SimpleRenderer` (`{name}` substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with the given variables.
    fn render(&self, template: &str, variables: &BTreeMap<String, String>)
    -> BreakdownResult<String>;
}
