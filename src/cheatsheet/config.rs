use crate::error::{CsError, Result};
use crate::store::DEFAULT_LIST_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// User configuration, stored in `<config dir>/sjb/cheatsheet/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CsConfig {
    /// List used when no `--list` is given
    #[serde(default = "default_list")]
    pub default_list: String,
}

fn default_list() -> String {
    DEFAULT_LIST_NAME.to_string()
}

impl Default for CsConfig {
    fn default() -> Self {
        Self {
            default_list: default_list(),
        }
    }
}

impl CsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CsError::Io)?;
        serde_json::from_str(&content).map_err(|source| CsError::Parse {
            path: config_path,
            source,
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CsError::Serialization)?;
        fs::write(config_path, content).map_err(CsError::Io)?;
        Ok(())
    }

    /// Empty names fall back to the default list.
    pub fn set_default_list(&mut self, name: &str) {
        let name = name.trim();
        self.default_list = if name.is_empty() {
            default_list()
        } else {
            name.to_string()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CsConfig::default();
        assert_eq!(config.default_list, "cheatsheet");
    }

    #[test]
    fn test_set_default_list() {
        let mut config = CsConfig::default();
        config.set_default_list(" work ");
        assert_eq!(config.default_list, "work");
        config.set_default_list("");
        assert_eq!(config.default_list, "cheatsheet");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = CsConfig::load(temp.path().join("absent")).unwrap();
        assert_eq!(config, CsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("sjb").join("cheatsheet");

        let mut config = CsConfig::default();
        config.set_default_list("work");
        config.save(&dir).unwrap();

        let loaded = CsConfig::load(&dir).unwrap();
        assert_eq!(loaded.default_list, "work");
    }

    #[test]
    fn test_missing_field_uses_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "{}").unwrap();
        let config = CsConfig::load(temp.path()).unwrap();
        assert_eq!(config, CsConfig::default());
    }

    #[test]
    fn test_corrupt_config_is_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "nope").unwrap();
        assert!(matches!(
            CsConfig::load(temp.path()),
            Err(CsError::Parse { .. })
        ));
    }
}
