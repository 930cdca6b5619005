//! Fetch, extract, write
//!
//! A run is strictly linear. Any failure before the write leaves the output
//! file untouched.

use crate::config::Config;
use crate::output::{write_records, IslandStatistics};
use crate::record::IslandRecord;
use crate::scrape::extractor::IslandExtractor;
use crate::scrape::fetcher::{build_http_client, fetch_page, island_info_url};
use crate::{IslandError, Result};
use std::path::Path;
use std::time::Duration;

/// Fetches the configured ocean's island page and extracts its islands
pub async fn fetch_islands(config: &Config) -> Result<Vec<IslandRecord>> {
    let url = island_info_url(&config.source)?;
    let client = build_http_client(
        &config.user_agent,
        Duration::from_secs(config.source.timeout_secs),
    )
    .map_err(|source| IslandError::Fetch {
        url: url.to_string(),
        source,
    })?;

    tracing::info!("Fetching islands of {} from {}", config.source.ocean, url);
    let html = fetch_page(&client, &url).await?;

    IslandExtractor::new()?.extract_html(&html)
}

/// Extracts islands from a saved copy of the island page
pub fn read_islands(input: &Path) -> Result<Vec<IslandRecord>> {
    tracing::info!("Reading island page from {}", input.display());

    let html = std::fs::read_to_string(input).map_err(|source| IslandError::Read {
        path: input.display().to_string(),
        source,
    })?;

    IslandExtractor::new()?.extract_html(&html)
}

/// Runs the full pipeline and writes the output file
///
/// With `input` set the page is read from disk instead of fetched.
///
/// # Returns
///
/// The records that were written, in document order.
pub async fn run(config: &Config, input: Option<&Path>) -> Result<Vec<IslandRecord>> {
    let islands = match input {
        Some(path) => read_islands(path)?,
        None => fetch_islands(config).await?,
    };

    let stats = IslandStatistics::from_records(&islands);
    tracing::info!(
        "Extracted {} islands ({} governed, {} flagged, total population {})",
        stats.total_islands,
        stats.governed_islands,
        stats.flagged_islands,
        stats.total_population
    );
    if islands.is_empty() {
        tracing::warn!("No island blocks found on the page");
    }

    let output = Path::new(&config.output.path);
    write_records(&islands, output)?;
    tracing::info!("Wrote {} records to {}", islands.len(), output.display());

    Ok(islands)
}
