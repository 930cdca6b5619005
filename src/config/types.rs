use crate::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Default yoweb host; each ocean is a subdomain of it
pub const DEFAULT_HOST: &str = "puzzlepirates.com";

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "islands.json";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for yoweb-islands
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// A Puzzle Pirates ocean (game server)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Ocean {
    Meridian,
    Emerald,
    #[default]
    Cerulean,
}

impl Ocean {
    pub const ALL: [Ocean; 3] = [Ocean::Meridian, Ocean::Emerald, Ocean::Cerulean];

    /// Subdomain under the yoweb host
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meridian => "meridian",
            Self::Emerald => "emerald",
            Self::Cerulean => "cerulean",
        }
    }
}

impl fmt::Display for Ocean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ocean {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|ocean| ocean.as_str() == lowered)
            .ok_or_else(|| ConfigError::UnknownOcean(s.to_string()))
    }
}

impl TryFrom<String> for Ocean {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where the island listing is fetched from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Ocean whose islands are listed
    pub ocean: Ocean,

    /// yoweb host, without the ocean subdomain
    pub host: String,

    /// Full URL override of the island info page
    pub url: Option<String>,

    /// Request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            ocean: Ocean::default(),
            host: DEFAULT_HOST.to_string(),
            url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the client
    pub name: String,

    /// Version of the client
    pub version: String,

    /// URL with information about the client
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the JSON file the records are written to
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}
