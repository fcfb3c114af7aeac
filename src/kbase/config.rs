use crate::error::{KbError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

fn default_truncate() -> usize {
    crate::render::DEFAULT_TRUNCATE
}

/// Configuration for kbase, stored as config.json next to the content file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KbConfig {
    /// Display name recorded in the access log.
    #[serde(default)]
    pub user: Option<String>,

    /// Character budget for summaries in list and search views.
    #[serde(default = "default_truncate")]
    pub truncate: usize,
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            user: None,
            truncate: default_truncate(),
        }
    }
}

impl KbConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KbError::Io)?;
        let config: KbConfig = serde_json::from_str(&content).map_err(KbError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(KbError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(KbError::Serialization)?;
        fs::write(config_path, content).map_err(KbError::Io)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "user" => {
                self.user = Some(value.to_string());
                Ok(())
            }
            "truncate" => {
                self.truncate = value
                    .parse()
                    .map_err(|_| KbError::Validation(format!("Not a number: {}", value)))?;
                Ok(())
            }
            other => Err(KbError::Validation(format!("Unknown config key: {}", other))),
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "user" => Ok(self.user.clone().unwrap_or_default()),
            "truncate" => Ok(self.truncate.to_string()),
            other => Err(KbError::Validation(format!("Unknown config key: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = KbConfig::default();
        assert_eq!(config.truncate, crate::render::DEFAULT_TRUNCATE);
        assert!(config.user.is_none());
    }

    #[test]
    fn load_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = KbConfig::load(dir.path()).unwrap();
        assert_eq!(config, KbConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = KbConfig::default();
        config.set("user", "ana").unwrap();
        config.set("truncate", "80").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = KbConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.user.as_deref(), Some("ana"));
        assert_eq!(loaded.truncate, 80);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut config = KbConfig::default();
        assert!(config.set("theme", "dark").is_err());
        assert!(config.get("theme").is_err());
        assert!(config.set("truncate", "lots").is_err());
    }
}
