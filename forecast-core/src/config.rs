use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable consulted before the config file.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key.
    ///
    /// Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,

    /// Override for the provider base URL; mostly useful for tests.
    /// When absent, the public OpenWeather endpoint applies.
    pub base_url: Option<String>,
}

impl Config {
    /// Load configuration, letting the process environment take precedence
    /// over the file on disk.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_file()?;

        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                cfg.api_key = Some(key);
            }
        }

        Ok(cfg)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load_file() -> Result<Self> {
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
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_key() {
        let cfg = Config::default();

        assert!(cfg.api_key.is_none());
        assert!(cfg.base_url.is_none());
    }

    #[test]
    fn parses_api_key_from_toml() {
        let cfg: Config = toml::from_str(r#"api_key = "KEY""#).expect("valid TOML");

        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));
        assert!(cfg.base_url.is_none());
    }

    #[test]
    fn toml_round_trip() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
            base_url: Some("http://localhost:9999".to_string()),
        };

        let serialized = toml::to_string_pretty(&cfg).expect("serializes");
        let parsed: Config = toml::from_str(&serialized).expect("parses back");

        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
        assert_eq!(parsed.base_url.as_deref(), Some("http://localhost:9999"));
    }
}
