//! Filesystem operations used by the generation pipeline.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading the config and writing generated files.
///
/// Paths are absolute or relative to the process working directory; the port does
/// not scope them to a root.
pub trait OutputFilesystem {
    /// Check whether the path resolves to a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Read the raw bytes of a file.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError>;

    /// Create a directory and all missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Write `content` as the full contents of `path`, truncating any existing file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
