//! yoweb-islands main entry point
//!
//! This is the command-line interface for the island scraper.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use yoweb_islands::config::{resolve_config, Config, ConfigOverrides, Ocean};
use yoweb_islands::output::{print_statistics, read_records, IslandStatistics};
use yoweb_islands::scrape::{island_info_url, run};

/// yoweb-islands: island charts for Puzzle Pirates
///
/// Fetches the island listing of one ocean and writes every island's
/// name, population, governor, property tax and flag to a JSON file.
#[derive(Parser, Debug)]
#[command(name = "yoweb-islands")]
#[command(version)]
#[command(about = "Scrape Puzzle Pirates island info into JSON", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Ocean to scrape (meridian, emerald, cerulean)
    #[arg(long, value_parser = parse_ocean)]
    ocean: Option<Ocean>,

    /// Fetch this URL instead of the ocean's island info page
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Output JSON file
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Extract from a saved HTML page instead of fetching
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the resolved configuration without fetching anything
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics for the existing output file and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

fn parse_ocean(s: &str) -> Result<Ocean, String> {
    s.parse().map_err(|e: yoweb_islands::ConfigError| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let overrides = ConfigOverrides {
        ocean: cli.ocean,
        url: cli.url,
        output: cli.output,
    };

    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }
    let config = match resolve_config(cli.config.as_deref(), overrides) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config, cli.input.as_deref())?;
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_scrape(&config, cli.input.as_deref()).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("yoweb_islands=info,warn"),
            1 => EnvFilter::new("yoweb_islands=debug,info"),
            2 => EnvFilter::new("yoweb_islands=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what a run would do
fn handle_dry_run(config: &Config, input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== yoweb-islands Dry Run ===\n");

    println!("Source:");
    match input {
        Some(path) => println!("  Input file: {}", path.display()),
        None => {
            println!("  Ocean: {}", config.source.ocean);
            println!("  URL: {}", island_info_url(&config.source)?);
            println!("  Timeout: {}s", config.source.timeout_secs);
        }
    }

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.name);
    println!("  Version: {}", config.user_agent.version);
    if let Some(contact) = &config.user_agent.contact_url {
        println!("  Contact URL: {}", contact);
    }

    println!("\nOutput:");
    println!("  File: {}", config.output.path);

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the --stats mode: summarizes the existing output file
fn handle_stats(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("Islands file: {}\n", config.output.path);

    let records = read_records(Path::new(&config.output.path))?;
    print_statistics(&IslandStatistics::from_records(&records));

    Ok(())
}

/// Handles the main scrape operation
async fn handle_scrape(
    config: &Config,
    input: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    match run(config, input).await {
        Ok(_) => {
            println!("Island information saved to {}", config.output.path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}
