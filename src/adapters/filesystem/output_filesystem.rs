//! `OutputFilesystem` implementation for `LocalFilesystem`.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::OutputFilesystem;

use super::LocalFilesystem;

impl OutputFilesystem for LocalFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        fs::read(path).map_err(|err| AppError::io(path, err))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(|err| AppError::io(path, err))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|err| AppError::io(path, err))
    }
}
