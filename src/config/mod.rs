use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log file path; stderr via env_logger when unset.
    pub file: Option<String>,
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    /// How many trailing chat messages the `chat` command prints.
    pub chat_tail: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { chat_tail: 50 }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        fs::write(path, config_str)?;
        Ok(())
    }

    /// Defaults when the file is missing; parse errors still surface.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No config file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.logging.file.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.display.chat_tail, 50);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.logging.level = "debug".to_string();
        config.display.chat_tail = 10;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.logging.level, "debug");
        assert_eq!(parsed.display.chat_tail, 10);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default(Path::new("/nonexistent/streamcast.toml")).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let parsed: Config = toml::from_str("[logging]\nlevel = \"trace\"\n").unwrap();
        assert_eq!(parsed.logging.level, "trace");
        assert_eq!(parsed.display.chat_tail, 50);
    }
}
