use crate::config::types::{Config, Ocean};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Command-line values that take precedence over the configuration file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub ocean: Option<Ocean>,
    pub url: Option<String>,
    pub output: Option<String>,
}

/// Loads and parses a configuration file from the given path
///
/// Missing sections and keys fall back to their defaults.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use yoweb_islands::config::load_config;
///
/// let config = load_config(Path::new("islands.toml")).unwrap();
/// println!("Ocean: {}", config.source.ocean);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Builds the effective configuration for a run
///
/// Loads `path` when given (defaults otherwise), applies `overrides`, and
/// validates the merged result.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    if let Some(ocean) = overrides.ocean {
        config.source.ocean = ocean;
    }
    if let Some(url) = overrides.url {
        config.source.url = Some(url);
    }
    if let Some(output) = overrides.output {
        config.output.path = output;
    }

    validate(&config)?;

    Ok(config)
}
