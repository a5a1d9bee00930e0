use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::OutputFilesystem;

/// In-memory filesystem for testing.
///
/// Directories must be created before files can be written into them. Individual
/// paths can be marked to fail on write.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    failing_writes: Arc<Mutex<BTreeSet<PathBuf>>>,
}

#[allow(dead_code)]
impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
        self
    }

    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.failing_writes.lock().unwrap().insert(path.into());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    /// All stored file paths, including files seeded with `with_file`.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn dir_exists(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }
}

impl OutputFilesystem for MemoryFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        self.file(path).map(String::into_bytes).ok_or_else(|| {
            AppError::io(path, io::Error::new(io::ErrorKind::NotFound, "file not found"))
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        if self.is_file(path) {
            return Err(AppError::io(
                path,
                io::Error::new(io::ErrorKind::AlreadyExists, "path is a file"),
            ));
        }
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.failing_writes.lock().unwrap().contains(path) {
            return Err(AppError::io(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "write rejected"),
            ));
        }
        let parent_exists =
            path.parent().is_none_or(|parent| self.dirs.lock().unwrap().contains(parent));
        if !parent_exists {
            return Err(AppError::io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "parent directory missing"),
            ));
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
