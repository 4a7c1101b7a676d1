//! Configuration discovery and loading
//!
//! Discovery hierarchy:
//! 1. Current directory: ./taskfan.toml
//! 2. User config: ~/.taskfan/config.toml
//! 3. Built-in defaults
//!
//! Command line flags always override whatever is discovered here.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Defaults a user can persist instead of repeating flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default task file path when `--file` is not given.
    pub file: Option<PathBuf>,
    /// Default worker count when `--workers` is not given.
    pub workers: Option<usize>,
}

impl CliConfig {
    /// Load from a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save to a TOML file.
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Configuration discovery system
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover and load configuration using the hierarchy. An unreadable
    /// file is logged and skipped rather than failing the command.
    pub fn discover() -> CliConfig {
        if let Some(config_path) = Self::find_config_file() {
            match CliConfig::from_toml_file(&config_path) {
                Ok(config) => {
                    info!("loaded configuration from: {:?}", config_path);
                    return config;
                }
                Err(e) => {
                    warn!("ignoring unreadable config {:?}: {}", config_path, e);
                }
            }
        }

        debug!("no configuration file found, using defaults");
        CliConfig::default()
    }

    /// Find a configuration file using the discovery hierarchy.
    pub fn find_config_file() -> Option<PathBuf> {
        for candidate in Self::config_candidates() {
            debug!("checking for config file: {:?}", candidate);
            if candidate.exists() && candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }

    /// Configuration file candidates in priority order.
    fn config_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join("taskfan.toml"));
        }

        if let Some(home_dir) = Self::home_dir() {
            candidates.push(home_dir.join(".taskfan").join("config.toml"));
        }

        candidates
    }

    fn home_dir() -> Option<PathBuf> {
        env::var("HOME")
            .ok()
            .or_else(|| env::var("USERPROFILE").ok())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let original = CliConfig {
            file: Some(PathBuf::from("work/tasks.json")),
            workers: Some(8),
        };

        original.to_toml_file(&config_path).unwrap();
        let loaded = CliConfig::from_toml_file(&config_path).unwrap();

        assert_eq!(loaded.file, original.file);
        assert_eq!(loaded.workers, Some(8));
    }

    #[test]
    fn test_empty_config_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        let loaded = CliConfig::from_toml_file(&config_path).unwrap();
        assert_eq!(loaded.file, None);
        assert_eq!(loaded.workers, None);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "workers = \"many\"").unwrap();

        assert!(CliConfig::from_toml_file(&config_path).is_err());
    }
}
