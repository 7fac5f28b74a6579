use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};
use tracing::warn;

use crate::render::OutputFormat;

pub const DEFAULT_API_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Top-level configuration stored on disk.
///
/// Location and time window are fixed and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Forecast API root; `/forecast` is appended.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout. When unset, reqwest's own behaviour applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Output used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self { api_base_url: default_api_base_url(), timeout_secs: None, format: OutputFormat::default() }
    }
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Like [`Config::load`], but an unreadable or corrupt file yields defaults.
    pub fn load_or_default() -> Self {
        match Self::config_file_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                warn!("Failed to locate config, using defaults: {e:#}");
                Self::default()
            }
        }
    }

    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e:#}");
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-timeline", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.api_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(cfg.timeout(), None);
        assert_eq!(cfg.format, OutputFormat::Text);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("format = \"html\"\n").unwrap();
        assert_eq!(cfg.format, OutputFormat::Html);
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);

        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn timeout_in_seconds() {
        let cfg: Config = toml::from_str("timeout_secs = 15\n").unwrap();
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = toml::from_str::<Config>("format = \"pdf\"\n").unwrap_err();
        assert!(err.to_string().contains("pdf"));
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("forecast-cli-test-does-not-exist").join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join(format!("forecast-cli-corrupt-{}", std::process::id()));
        let path = dir.join("config.toml");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "format = [not toml").unwrap();

        assert!(Config::load_from(&path).is_err());
        let cfg = Config::load_from_or_default(&path);
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("forecast-cli-test-{}", std::process::id()));
        let path = dir.join("config.toml");

        let cfg = Config {
            api_base_url: "http://localhost:8080/v1".into(),
            timeout_secs: Some(5),
            format: OutputFormat::Html,
        };
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        let _ = fs::remove_dir_all(&dir);

        assert_eq!(loaded, cfg);
    }
}
