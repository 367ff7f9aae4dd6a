use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::domain::common::{STDIN_MARKER, is_absolute};

/// How a [`ResolvedPath`] came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PathKind {
    /// Explicit absolute location, or an explicit name under an absolute base.
    Absolute,
    /// Explicit location relative to the working directory.
    Relative,
    /// Filename chosen by convention because none was given.
    AutoGenerated,
    /// The stdin marker `-`.
    Stdin,
}

impl PathKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Relative => "relative",
            Self::AutoGenerated => "autoGenerated",
            Self::Stdin => "stdin",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a path resolver: a `/`-separated, non-empty location.
///
/// Only the resolvers in `application::services` construct these, and they
/// always pass normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedPath {
    kind: PathKind,
    value: String,
}

impl ResolvedPath {
    /// An explicitly requested location; kind follows the path's shape.
    pub(crate) fn explicit(value: String) -> Self {
        let kind = if is_absolute(&value) {
            PathKind::Absolute
        } else {
            PathKind::Relative
        };
        Self::new(kind, value)
    }

    pub(crate) fn generated(value: String) -> Self {
        Self::new(PathKind::AutoGenerated, value)
    }

    pub(crate) fn stdin() -> Self {
        Self::new(PathKind::Stdin, STDIN_MARKER.to_string())
    }

    fn new(kind: PathKind, value: String) -> Self {
        debug_assert!(!value.is_empty(), "resolved paths are never empty");
        Self { kind, value }
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.value)
    }

    pub fn is_stdin(&self) -> bool {
        self.kind == PathKind::Stdin
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
