//! Generator configuration.
//!
//! This module handles loading, validating, and saving the generator
//! configuration in TOML format. The configuration lives next to the
//! generated tree (`symforge.toml` by default) rather than in a per-user
//! directory, since it describes the target repository, not the user.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "symforge.toml";

/// Output locations for generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the symbols data files.
    pub symbols_dir: PathBuf,
    /// Directory receiving the generated C test headers.
    pub tests_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            symbols_dir: PathBuf::from("test/data/symbols"),
            tests_dir: PathBuf::from("test"),
        }
    }
}

/// Suite selection defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Suites generated when none are named on the command line.
    pub enabled: Vec<String>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            enabled: vec![
                "common".to_string(),
                "x11".to_string(),
                "xkbcommon".to_string(),
            ],
        }
    }
}

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output locations.
    #[serde(default)]
    pub output: OutputConfig,
    /// Suite selection.
    #[serde(default)]
    pub suites: SuiteConfig,
}

impl Config {
    /// Loads configuration from the given TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration from `path` if it exists, falling back to the
    /// defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to the given TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.output.symbols_dir, PathBuf::from("test/data/symbols"));
        assert_eq!(config.output.tests_dir, PathBuf::from("test"));
        assert_eq!(config.suites.enabled.len(), 3);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.output.symbols_dir = PathBuf::from("out/symbols");
        config.suites.enabled = vec!["xkbcommon".to_string()];
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[suites]\nenabled = [\"x11\"]\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.suites.enabled, vec!["x11".to_string()]);
        assert_eq!(config.output, OutputConfig::default());
    }
}
