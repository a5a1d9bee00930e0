//! Local filesystem adapter.

mod output_filesystem;

/// Filesystem store backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}
