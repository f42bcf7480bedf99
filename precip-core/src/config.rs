use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::client::DEFAULT_ENDPOINT;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// endpoint = "http://localhost:5000/api/weather"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional override of the forecast service address.
    pub endpoint: Option<String>,
}

impl Config {
    /// Effective service address: the configured override, or the default.
    pub fn endpoint_url(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn set_endpoint(&mut self, url: String) {
        self.endpoint = Some(url);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "precip", "precip-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_falls_back_to_default() {
        let cfg = Config::default();

        assert_eq!(cfg.endpoint_url(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn endpoint_url_prefers_configured_override() {
        let mut cfg = Config::default();

        cfg.set_endpoint("http://forecast.internal/api/weather".to_string());

        assert_eq!(cfg.endpoint_url(), "http://forecast.internal/api/weather");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_endpoint("http://127.0.0.1:5000/api/weather".to_string());

        let serialized = toml::to_string_pretty(&cfg).expect("config serializes");
        let parsed: Config = toml::from_str(&serialized).expect("config parses");

        assert_eq!(parsed.endpoint_url(), "http://127.0.0.1:5000/api/weather");
    }

    #[test]
    fn empty_toml_parses_to_default() {
        let parsed: Config = toml::from_str("").expect("empty config parses");

        assert_eq!(parsed.endpoint, None);
        assert_eq!(parsed.endpoint_url(), DEFAULT_ENDPOINT);
    }
}
