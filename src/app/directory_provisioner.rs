use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, paths};
use crate::ports::OutputFilesystem;

/// Ensure `conf.d/` and `snippets/` exist under `output_root`.
pub fn ensure_directories(fs: &impl OutputFilesystem, output_root: &Path) -> Result<(), AppError> {
    for dir in [paths::conf_dir(output_root), paths::snippets_dir(output_root)] {
        fs.create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "ensured directory");
    }
    Ok(())
}
