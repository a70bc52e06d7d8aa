use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::client::DEFAULT_API_URL;
use crate::error::{Result, UserdeckError};

/// Matches the page size the original client hardcodes.
pub const DEFAULT_PAGE_SIZE: u32 = 8;

#[derive(Deserialize, Default)]
pub struct Config {
    pub api_url: Option<String>,
    pub page_size: Option<u32>,
    pub seed: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| UserdeckError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| UserdeckError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "userdeck")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(UserdeckError::NoConfigDir)
    }

    /// API URL with env var taking precedence over config file
    pub fn api_url(&self) -> String {
        if let Ok(url) = std::env::var("USERDECK_API_URL") {
            return url;
        }

        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Page size, preferring an explicit flag over the config file
    pub fn page_size(&self, explicit: Option<u32>) -> u32 {
        explicit.or(self.page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Seed, preferring an explicit flag over the config file
    pub fn seed(&self, explicit: Option<String>) -> Option<String> {
        explicit.or_else(|| self.seed.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = Config::default();
        assert_eq!(config.page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(config.seed(None), None);
    }

    #[test]
    fn test_parse_and_precedence() {
        let config: Config =
            toml::from_str("page_size = 16\nseed = \"deck\"\n").unwrap();
        assert_eq!(config.page_size(None), 16);
        assert_eq!(config.page_size(Some(4)), 4);
        assert_eq!(config.seed(None).as_deref(), Some("deck"));
        assert_eq!(
            config.seed(Some("override".to_string())).as_deref(),
            Some("override")
        );
    }
}
