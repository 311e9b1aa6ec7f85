//! Sitecheck main entry point
//!
//! Command-line interface for the site-verification engine.

use anyhow::Context;
use clap::Parser;
use sitecheck::check::run_checks;
use sitecheck::config::{load_config_with_hash, ConfigFormat};
use sitecheck::report::{print_summary, CliReporter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sitecheck: a concurrent site-verification engine
///
/// Sitecheck probes every configured URL, asserts expected status codes
/// and HTML structural conditions, and verifies each internal link
/// discovered on checked pages exactly once.
#[derive(Parser, Debug)]
#[command(name = "sitecheck")]
#[command(version)]
#[command(about = "A concurrent site-verification engine", long_about = None)]
struct Cli {
    /// Path to the check configuration (JSON site config or sitemap XML)
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Config file format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<ConfigFormat>,

    /// Increase logging verbosity and report successful checks (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Maximum number of in-flight HTTP checks
    #[arg(long, default_value_t = 64)]
    max_concurrent: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (plan, config_hash) = load_config_with_hash(&cli.config, cli.format)
        .with_context(|| format!("failed to load config '{}'", cli.config.display()))?;
    tracing::info!(
        "Configuration loaded successfully (hash: {}, {} seed checks)",
        config_hash,
        plan.checks.len()
    );

    let reporter = Arc::new(CliReporter::new(cli.verbose > 0));
    let stats = run_checks(plan, reporter, cli.max_concurrent).await?;

    if !cli.quiet {
        print_summary(&stats);
    }

    // Check failures are reported, not escalated: only a config error
    // changes the exit status.
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitecheck=info,warn"),
            1 => EnvFilter::new("sitecheck=debug,info"),
            2 => EnvFilter::new("sitecheck=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
