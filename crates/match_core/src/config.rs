//! Tracker settings

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::MAP_POOL;

/// Default location of the match history, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "cs2_match_data.csv";

/// Settings file looked up next to the history
pub const CONFIG_FILE: &str = "match_tracker.toml";

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// CSV file the history is read from and appended to
    pub data_file: PathBuf,
    /// Maps suggested by the form
    pub maps: Vec<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            maps: MAP_POOL.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl TrackerConfig {
    /// Load settings from a TOML file; missing keys keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Like `load`, but an absent file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.data_file, PathBuf::from("cs2_match_data.csv"));
        assert_eq!(config.maps.len(), 7);
        assert_eq!(config.maps[3], "Dust 2");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TrackerConfig::from_toml("data_file = \"premier.csv\"\n").unwrap();
        assert_eq!(config.data_file, PathBuf::from("premier.csv"));
        assert_eq!(config.maps, TrackerConfig::default().maps);
    }

    #[test]
    fn test_custom_map_pool() {
        let config = TrackerConfig::from_toml("maps = [\"Train\", \"Overpass\"]\n").unwrap();
        assert_eq!(config.maps, vec!["Train".to_string(), "Overpass".to_string()]);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TrackerConfig::from_toml("maps = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig::load_or_default(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }
}
