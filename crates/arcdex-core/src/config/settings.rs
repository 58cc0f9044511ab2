use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{data, http, retry, wiki};
use crate::error::Result;

/// Top-level configuration file.
///
/// ```toml
/// [scrape]
/// wiki = "arcaea"
/// timeout_secs = 30
/// attempts = 3
///
/// [data]
/// dir = "data/arcaea"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scrape: ScrapeConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub wiki: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Attempts per page; 1 disables retrying
    pub attempts: u32,
    pub user_agent: String,
    pub request_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            wiki: wiki::DEFAULT_WIKI.to_string(),
            base_url: wiki::BASE_URL.to_string(),
            timeout_secs: http::TIMEOUT_SECS,
            attempts: retry::DEFAULT_ATTEMPTS,
            user_agent: http::USER_AGENT.to_string(),
            request_delay_ms: http::REQUEST_DELAY_MS,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(data::DEFAULT_DIR),
        }
    }
}

impl ScrapeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML content; missing keys keep their defaults
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/arcdex/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("arcdex").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let content = r#"
[scrape]
wiki = "arcaea-test"
attempts = 1

[data]
dir = "/tmp/arcdex"
"#;
        let config = Config::parse(content).unwrap();

        assert_eq!(config.scrape.wiki, "arcaea-test");
        assert_eq!(config.scrape.attempts, 1);
        assert_eq!(config.scrape.timeout_secs, http::TIMEOUT_SECS);
        assert_eq!(config.scrape.base_url, wiki::BASE_URL);
        assert_eq!(config.data.dir, PathBuf::from("/tmp/arcdex"));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_config() {
        let result = Config::parse("[scrape]\nattempts = \"many\"");
        assert!(matches!(result, Err(crate::Error::ConfigParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[scrape]\ntimeout_secs = 5\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.scrape.timeout(), Duration::from_secs(5));
    }
}
