use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "edeck";

/// Optional user configuration; every field falls back to a built-in
/// default, and CLI flags override the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default page size when --pagesize is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config: Config = serde_yaml::from_str("defaults:\n  pagesize: A4\n").unwrap();
        assert_eq!(config.defaults.unwrap().pagesize.as_deref(), Some("A4"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.defaults.is_none());
    }
}
