//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::warn;

use breakdown_core::{
    application::{
        ApplicationError,
        ports::{DirectoryProbe, Filesystem},
    },
    error::{BreakdownError, BreakdownResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> BreakdownResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> BreakdownResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> BreakdownResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl DirectoryProbe for LocalFilesystem {
    /// `false` for missing paths and for any error while checking; errors
    /// other than `NotFound` are logged.
    fn is_directory(&self, path: &str) -> bool {
        match std::fs::metadata(path) {
            Ok(meta) => meta.is_dir(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                warn!(path, error = %e, "Directory probe failed; treating as a file");
                false
            }
        }
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> BreakdownError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn probe_distinguishes_files_and_directories() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("note.md");
        std::fs::write(&file, "x").unwrap();

        let fs = LocalFilesystem::new();
        assert!(fs.is_directory(dir.path().to_str().unwrap()));
        assert!(!fs.is_directory(file.to_str().unwrap()));
        assert!(!fs.is_directory("/definitely/not/here"));
    }

    #[test]
    fn metadata_error_reads_as_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("note.md");
        std::fs::write(&file, "x").unwrap();

        // A path that runs through a regular file fails with something other
        // than NotFound on unix.
        let through_file = file.join("child");
        assert!(!LocalFilesystem::new().is_directory(through_file.to_str().unwrap()));
    }

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out/to/project");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&nested.join("a.md"), "body").unwrap();
        assert_eq!(fs.read_to_string(&nested.join("a.md")).unwrap(), "body");
    }

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let err = LocalFilesystem::new()
            .read_to_string(Path::new("/definitely/not/here.md"))
            .unwrap_err();
        assert!(matches!(
            err,
            BreakdownError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
