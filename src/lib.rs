//! yoweb-islands: island charts for Puzzle Pirates oceans
//!
//! This crate fetches the yoweb island listing for one ocean, extracts a
//! record per island (name, population, governor, property tax, flag) and
//! writes the records to a JSON file.

pub mod config;
pub mod output;
pub mod record;
pub mod scrape;

use thiserror::Error;

/// Main error type for yoweb-islands operations
#[derive(Debug, Error)]
pub enum IslandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("main container not found")]
    ContainerNotFound,

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Unknown ocean '{0}' (expected meridian, emerald or cerulean)")]
    UnknownOcean(String),
}

/// Result type alias for yoweb-islands operations
pub type Result<T> = std::result::Result<T, IslandError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, Ocean};
pub use record::{IslandRecord, Link};
pub use scrape::{run, IslandExtractor};
