//! Application configuration management.
//!
//! Holds the defaults used when a flag is not given on the command line:
//! roster location, preferred group size, optimizer pass cap, and RNG seed.
//!
//! Configuration is stored at `~/.config/smallgroup/config.json`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "smallgroup";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Group size used when neither flag nor config sets one
pub const DEFAULT_TARGET_SIZE: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub roster_path: Option<PathBuf>,
    pub target_size: Option<i64>,
    pub max_passes: Option<usize>,
    pub seed: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            Self::from_json(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Overlay any values set in `other` onto this config.
    pub fn merge(&mut self, other: Config) {
        if other.roster_path.is_some() {
            self.roster_path = other.roster_path;
        }
        if other.target_size.is_some() {
            self.target_size = other.target_size;
        }
        if other.max_passes.is_some() {
            self.max_passes = other.max_passes;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_json_partial() {
        let config = Config::from_json(r#"{"target_size": 6}"#).expect("valid config");
        assert_eq!(config.target_size, Some(6));
        assert_eq!(config.roster_path, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_from_json_rejects_fractional_size() {
        assert!(Config::from_json(r#"{"target_size": 4.5}"#).is_err());
    }

    #[test]
    fn test_config_merge_overrides_only_set_fields() {
        let mut config = Config {
            roster_path: Some(PathBuf::from("roster.json")),
            target_size: Some(4),
            max_passes: None,
            seed: Some(1),
        };
        config.merge(Config {
            target_size: Some(7),
            max_passes: Some(50),
            ..Config::default()
        });

        assert_eq!(config.roster_path, Some(PathBuf::from("roster.json")));
        assert_eq!(config.target_size, Some(7));
        assert_eq!(config.max_passes, Some(50));
        assert_eq!(config.seed, Some(1));
    }
}
