//! HTTP fetcher implementation
//!
//! This module handles the single request a run makes:
//! - Building the island info URL for an ocean
//! - Building an HTTP client with a proper user agent string
//! - The GET itself, with status and transport error classification

use crate::config::{SourceConfig, UserAgentConfig};
use crate::{ConfigError, IslandError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Path and query of the yoweb island listing
pub const ISLAND_INFO_PATH: &str = "/yoweb/island/info.wm?showAll=true";

/// Builds the island info URL for the configured ocean
///
/// A configured URL override is returned as-is.
///
/// # Example
///
/// ```
/// use yoweb_islands::config::SourceConfig;
/// use yoweb_islands::scrape::island_info_url;
///
/// let url = island_info_url(&SourceConfig::default()).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://cerulean.puzzlepirates.com/yoweb/island/info.wm?showAll=true"
/// );
/// ```
pub fn island_info_url(source: &SourceConfig) -> Result<Url, ConfigError> {
    let raw = match &source.url {
        Some(url) => url.clone(),
        None => format!("https://{}.{}{}", source.ocean, source.host, ISLAND_INFO_PATH),
    };

    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", raw, e)))
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Overall request timeout
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    // Format: Name/Version or Name/Version (+ContactURL)
    let user_agent = match &config.contact_url {
        Some(contact) => format!("{}/{} (+{})", config.name, config.version, contact),
        None => format!("{}/{}", config.name, config.version),
    };

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10).min(timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body with one GET
///
/// There is no retry: transport failures and non-success statuses are both
/// returned as errors and end the run.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, IslandError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| IslandError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IslandError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| IslandError::Fetch {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("Fetched {} bytes from {}", body.len(), url);

    Ok(body)
}
