//! Configuration module for yoweb-islands
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file, and merging command-line overrides into it.
//!
//! # Example
//!
//! ```no_run
//! use yoweb_islands::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("islands.toml")).unwrap();
//! println!("Writing islands to: {}", config.output.path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, Ocean, OutputConfig, SourceConfig, UserAgentConfig, DEFAULT_HOST,
    DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{load_config, resolve_config, ConfigOverrides};
