//! Site-Harvester main entry point
//!
//! This is the command-line interface for the Site-Harvester image harvester.

use anyhow::Context;
use clap::Parser;
use site_harvester::config::{parse_config_file, validate, Config};
use site_harvester::crawler::{build_http_client, crawl, discover_pages, PageFetcher};
use site_harvester::output::print_report;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Harvester: a one-hop image harvester
///
/// Fetches a site's landing page, follows the same-site links found there
/// one hop deep, and saves every image those pages reference into a single
/// output directory.
#[derive(Parser, Debug)]
#[command(name = "site-harvester")]
#[command(version)]
#[command(about = "A one-hop image harvester", long_about = None)]
struct Cli {
    /// Bare domain to harvest, e.g. example.com (overrides the config file)
    #[arg(value_name = "DOMAIN")]
    domain: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Directory to write images into
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Maximum number of pages scraped at once (default: unbounded)
    #[arg(long, value_name = "N")]
    max_concurrent_pages: Option<usize>,

    /// Show which pages would be scraped without downloading anything
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    let domain = config.harvest.domain.clone().unwrap_or_default();

    if cli.dry_run {
        handle_dry_run(&config, &domain).await
    } else {
        handle_crawl(config, &domain, cli.quiet).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_harvester=info,warn"),
            1 => EnvFilter::new("site_harvester=debug,info"),
            2 => EnvFilter::new("site_harvester=trace,debug"),
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

/// Loads the config file (if any), applies command-line overrides, validates
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            parse_config_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(domain) = &cli.domain {
        config.harvest.domain = Some(domain.clone());
    }
    if let Some(dir) = &cli.output_dir {
        config.harvest.output_dir = dir.clone();
    }
    if cli.max_concurrent_pages.is_some() {
        config.harvest.max_concurrent_pages = cli.max_concurrent_pages;
    }

    validate(&config).context("invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: discovers the work list and prints it
async fn handle_dry_run(config: &Config, domain: &str) -> anyhow::Result<()> {
    println!("=== Site-Harvester Dry Run ===\n");
    println!("Domain: {}", domain);
    println!("Output: {}", config.harvest.output_dir.display());
    match config.harvest.max_concurrent_pages {
        Some(limit) => println!("Max concurrent pages: {}", limit),
        None => println!("Max concurrent pages: unbounded"),
    }
    println!("User agent: {}", config.user_agent.header_value());

    let client = build_http_client(config).context("failed to build HTTP client")?;
    let pages = PageFetcher::new(client);
    let work = discover_pages(&pages, &config.harvest.scheme, domain).await?;

    println!("\nPages to scrape ({}):", work.len());
    for url in &work {
        println!("  - {}", url);
    }

    Ok(())
}

/// Handles the main harvest operation
async fn handle_crawl(config: Config, domain: &str, quiet: bool) -> anyhow::Result<()> {
    tracing::info!(
        "Harvesting {} into {}",
        domain,
        config.harvest.output_dir.display()
    );

    match crawl(config).await {
        Ok(report) => {
            tracing::info!("Harvest of {} completed", domain);
            if !quiet {
                print_report(&report);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
