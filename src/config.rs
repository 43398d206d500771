use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default base URL of the lexical search service.
pub const DEFAULT_BASE_URL: &str = "https://api.datamuse.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the lexical search service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with each request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("wordseek/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `~/.config/wordseek/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}, using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Replace the base URL, rejecting strings that are not absolute URLs.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, url::ParseError> {
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;
        self.base_url = base_url;
        Ok(self)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("wordseek").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
