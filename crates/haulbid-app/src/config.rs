//! Configuration management for haulbid
//!
//! Config stored at: ~/.config/haulbid/config.json

use haulbid_types::{ConfigError, Error, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Custom material catalog (TOML). Built-in catalog when unset.
    #[serde(default)]
    pub materials_file: Option<PathBuf>,

    /// Overhead % used when a command does not specify one
    #[serde(default = "default_overhead_pct")]
    pub default_overhead_pct: f64,

    /// Profit margin % used when a command does not specify one
    #[serde(default = "default_profit_pct")]
    pub default_profit_pct: f64,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_overhead_pct() -> f64 {
    10.0
}

fn default_profit_pct() -> f64 {
    20.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            materials_file: None,
            default_overhead_pct: default_overhead_pct(),
            default_profit_pct: default_profit_pct(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulbid");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                ConfigError::ParseError(format!("{}: {}", path.display(), e))
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| Error::Config(ConfigError::SaveError(e.to_string())))?;
        Ok(())
    }

    /// Overhead as a fraction
    pub fn overhead_fraction(&self) -> f64 {
        self.default_overhead_pct / 100.0
    }

    /// Profit margin as a fraction
    pub fn profit_fraction(&self) -> f64 {
        self.default_profit_pct / 100.0
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulbid Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Materials:      {}",
            self.materials_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f, "Overhead:       {}%", self.default_overhead_pct)?;
        writeln!(f, "Profit margin:  {}%", self.default_profit_pct)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!((config.overhead_fraction() - 0.10).abs() < 1e-12);
        assert!((config.profit_fraction() - 0.20).abs() < 1e-12);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            output_format: OutputFormat::Json,
            materials_file: Some(PathBuf::from("/srv/bids/materials.toml")),
            default_overhead_pct: 12.5,
            default_profit_pct: 18.0,
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_format": "json"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.default_profit_pct, 20.0);
        assert!(config.materials_file.is_none());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }
}
