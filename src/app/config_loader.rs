//! Config file loading.

use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, NginxConfig};
use crate::ports::OutputFilesystem;

/// Load and parse the JSON config at `path`.
///
/// The path must resolve to a regular file; directories and dangling links are
/// reported the same way as a missing file.
pub fn load_config(fs: &impl OutputFilesystem, path: &Path) -> Result<NginxConfig, AppError> {
    if !fs.is_file(path) {
        return Err(AppError::ConfigNotFound { path: path.to_path_buf() });
    }

    let content = fs.read_bytes(path)?;
    let document = serde_json::from_slice(strip_bom(&content))
        .map_err(|source| AppError::ConfigParse { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), "loaded config");
    Ok(NginxConfig::from_value(document))
}

/// Drop a leading UTF-8 byte order mark.
fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
