//! ngxconf: Generate nginx site blocks and SSL snippets from a single JSON config.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use adapters::{LocalFilesystem, MinijinjaTemplateRenderer};
use app::pipeline;

pub use app::{GenerationReport, Stage};
pub use domain::options::{
    DEFAULT_CONFIG_FILE, DEFAULT_GENERATED_FILE_NAME, DEFAULT_OUTPUT_ROOT,
};
pub use domain::{AppError, GenerateOptions, NginxConfig, Options, SslEntry, TemplateId};

/// Generate the nginx configuration described by the config file.
///
/// Unset fields of `options` take their defaults. Returns the path of the written
/// site block.
///
/// Concurrent runs against the same output root are not coordinated; callers must
/// serialize them.
pub fn generate(options: GenerateOptions) -> Result<PathBuf, AppError> {
    generate_report(options).map(|report| report.site_block)
}

/// Like [`generate`], but returns every written file.
pub fn generate_report(options: GenerateOptions) -> Result<GenerationReport, AppError> {
    let options = options.resolve();
    let renderer = MinijinjaTemplateRenderer::embedded()?;
    pipeline::execute(&options, &LocalFilesystem::new(), &renderer)
}
