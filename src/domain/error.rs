use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::TemplateId;

/// Library-wide error type for ngxconf operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config path is missing, inaccessible, or not a regular file.
    #[error("Config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Config file exists but is not valid JSON.
    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config has no `ssl` mapping.
    #[error("Config is missing the 'ssl' mapping (expected an object of certificate entries)")]
    MissingSslSection,

    /// An `ssl` entry cannot be rendered or written.
    #[error("Invalid ssl entry '{key}': {reason}")]
    InvalidSslEntry { key: String, reason: String },

    /// Template rendering failed.
    #[error("Failed to render template {template}: {reason}")]
    Render { template: TemplateId, reason: String },

    /// Directory creation or file write failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Io { path: path.into(), source }
    }

    pub(crate) fn render(template: TemplateId, err: impl std::fmt::Display) -> Self {
        AppError::Render { template, reason: err.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers that classify failures coarsely.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::ConfigNotFound { .. } => io::ErrorKind::NotFound,
            AppError::ConfigParse { .. } => io::ErrorKind::InvalidData,
            AppError::MissingSslSection
            | AppError::InvalidSslEntry { .. }
            | AppError::Render { .. } => io::ErrorKind::InvalidInput,
            AppError::Io { source, .. } => source.kind(),
        }
    }
}
