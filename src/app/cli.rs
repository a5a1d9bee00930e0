//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, GenerateOptions};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "NGXCONF_LOG";

#[derive(Parser)]
#[command(name = "ngxconf")]
#[command(version)]
#[command(
    about = "Generate nginx site blocks and SSL snippets from a JSON config",
    long_about = None
)]
struct Cli {
    /// JSON config file (defaults to ~/.nginxconf)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// nginx configuration root (defaults to /etc/nginx)
    #[arg(short, long)]
    output_root: Option<PathBuf>,
    /// File name of the site block written under conf.d/ (defaults to ngxconf.conf)
    #[arg(short, long)]
    name: Option<String>,
    /// Log each stage and written file to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = GenerateOptions {
        config_path: cli.config,
        output_root: cli.output_root,
        generated_file_name: cli.name,
    };

    if let Err(e) = run_generate(options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(options: GenerateOptions) -> Result<(), AppError> {
    let report = crate::generate_report(options)?;
    println!("✅ Generated {}", report.site_block.display());
    for file in report.files().filter(|file| *file != report.site_block.as_path()) {
        println!("  {}", file.display());
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
