use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sleeplog_core::analysis::Thresholds;

/// Contents of `config.toml`. Every section is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SleeplogConfig {
    pub store: StoreSection,
    pub analysis: Thresholds,
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub ascii: bool,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("sleep.db"))
}

pub fn read_config(path: &Path) -> anyhow::Result<SleeplogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, or defaults if there is no file.
pub fn load_config(path: &Path) -> anyhow::Result<SleeplogConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(SleeplogConfig::default());
    }
    let config = read_config(path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("sleeplog"));
        }
    }
    Ok(home_dir()?.join(".config").join("sleeplog"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("sleeplog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("sleeplog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: SleeplogConfig = toml::from_str("").unwrap();
        assert!(config.store.path.is_none());
        assert_eq!(config.analysis, Thresholds::default());
        assert!(!config.ui.ascii);
    }

    #[test]
    fn test_partial_analysis_section() {
        let config: SleeplogConfig = toml::from_str(
            "[store]\npath = \"/tmp/sleep.db\"\n\n[analysis]\nmin_consistency = 80\n",
        )
        .unwrap();
        assert_eq!(config.store.path.as_deref(), Some("/tmp/sleep.db"));
        assert_eq!(config.analysis.min_consistency, 80);
        assert_eq!(config.analysis.min_entries, 3);
        assert_eq!(config.analysis.min_average_duration, 420.0);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = load_config(Path::new("/definitely/not/here/config.toml")).unwrap();
        assert!(config.store.path.is_none());
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let result: Result<SleeplogConfig, _> = toml::from_str("[analysis]\nmin_entries = \"many\"\n");
        assert!(result.is_err());
    }
}
