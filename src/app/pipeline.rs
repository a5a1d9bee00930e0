//! Generation pipeline: load, provision, then render and write each output.

use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use serde_json::{Value, json};
use tracing::{debug, info, warn};

use super::config_loader::load_config;
use super::directory_provisioner::ensure_directories;
use crate::domain::{AppError, Options, SslEntry, TemplateId, paths};
use crate::ports::{OutputFilesystem, TemplateRenderer};

/// Fallible pipeline stages, in execution order.
///
/// Option resolution happens before `execute` and cannot fail, so it has no stage
/// here. The terminal outcomes are the `Ok`/`Err` of `execute` itself: success is
/// logged as "generation complete", a failure as "stage failed" with the stage name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loading,
    Provisioning,
    WritingSslParams,
    WritingSslDomains,
    WritingSiteBlock,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Loading => "loading",
            Stage::Provisioning => "provisioning",
            Stage::WritingSslParams => "writing-ssl-params",
            Stage::WritingSslDomains => "writing-ssl-domains",
            Stage::WritingSiteBlock => "writing-site-block",
        };
        f.write_str(name)
    }
}

/// Files written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub ssl_params: PathBuf,
    /// One snippet per `ssl` entry, in key order.
    pub ssl_domains: Vec<PathBuf>,
    pub site_block: PathBuf,
}

impl GenerationReport {
    /// Every written file: ssl-params, the ssl-domain snippets, then the site block.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.ssl_params.as_path())
            .chain(self.ssl_domains.iter().map(PathBuf::as_path))
            .chain(std::iter::once(self.site_block.as_path()))
    }
}

/// A single render-then-write unit of work.
struct RenderJob<'a> {
    template: TemplateId,
    context: &'a Value,
    target: PathBuf,
}

impl RenderJob<'_> {
    fn run(
        self,
        fs: &impl OutputFilesystem,
        renderer: &impl TemplateRenderer,
    ) -> Result<PathBuf, AppError> {
        let rendered = renderer.render(self.template, self.context)?;
        fs.write_file(&self.target, &rendered)?;
        debug!(template = %self.template, path = %self.target.display(), "wrote file");
        Ok(self.target)
    }
}

/// Run every stage against resolved `options`, stopping at the first failure.
pub fn execute<F, R>(options: &Options, fs: &F, renderer: &R) -> Result<GenerationReport, AppError>
where
    F: OutputFilesystem + Sync,
    R: TemplateRenderer + Sync,
{
    let root = options.output_root.as_path();

    let (config, ssl_entries) = run_stage(Stage::Loading, || {
        let config = load_config(fs, &options.config_path)?;
        let entries = config.ssl_entries()?;
        Ok((config, entries))
    })?;

    run_stage(Stage::Provisioning, || ensure_directories(fs, root))?;

    let ssl_params = run_stage(Stage::WritingSslParams, || {
        RenderJob {
            template: TemplateId::SslParams,
            context: config.document(),
            target: paths::ssl_params(root),
        }
        .run(fs, renderer)
    })?;

    let ssl_domains = run_stage(Stage::WritingSslDomains, || {
        write_ssl_domains(fs, renderer, root, &ssl_entries, worker_limit())
    })?;

    let site_block = run_stage(Stage::WritingSiteBlock, || {
        RenderJob {
            template: TemplateId::SiteBlock,
            context: config.document(),
            target: paths::site_block(root, &options.generated_file_name),
        }
        .run(fs, renderer)
    })?;

    info!(path = %site_block.display(), snippets = ssl_domains.len(), "generation complete");
    Ok(GenerationReport { ssl_params, ssl_domains, site_block })
}

fn run_stage<T>(stage: Stage, f: impl FnOnce() -> Result<T, AppError>) -> Result<T, AppError> {
    info!(%stage, "stage started");
    f().inspect_err(|err| warn!(%stage, error = %err, "stage failed"))
}

/// Upper bound on snippet workers, following the available CPU parallelism.
fn worker_limit() -> usize {
    thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(DEFAULT_WORKERS)
}

const DEFAULT_WORKERS: usize = 4;

/// Render one snippet per entry on at most `max_workers` scoped threads.
///
/// Entries are split into contiguous chunks, one per worker; a worker stops at its
/// first failure. All workers are joined before returning. The first error in entry
/// order is reported; snippets written by other workers are left in place.
fn write_ssl_domains<F, R>(
    fs: &F,
    renderer: &R,
    root: &Path,
    entries: &[SslEntry],
    max_workers: usize,
) -> Result<Vec<PathBuf>, AppError>
where
    F: OutputFilesystem + Sync,
    R: TemplateRenderer + Sync,
{
    if entries.is_empty() {
        return Ok(Vec::new());
    }
    let chunk_size = entries.len().div_ceil(max_workers.max(1));

    thread::scope(|scope| {
        let handles: Vec<_> = entries
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|entry| {
                            let context = json!({ "domain": entry.cert_domain });
                            RenderJob {
                                template: TemplateId::SslDomain,
                                context: &context,
                                target: paths::ssl_domain(root, &entry.key),
                            }
                            .run(fs, renderer)
                        })
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect();

        let mut written = Vec::with_capacity(entries.len());
        let mut first_error = None;
        for handle in handles {
            match handle.join() {
                Ok(Ok(paths)) => written.extend(paths),
                Ok(Err(err)) => {
                    first_error.get_or_insert(err);
                }
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(written),
        }
    })
}
