//! Optional TOML configuration.
//!
//! Resolution order for the data directory is flag > env > config file >
//! XDG default; the config file itself lives at
//! `$XDG_CONFIG_HOME/fintrack/config.toml` and is entirely optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FintrackConfig {
    #[serde(default)]
    pub ledger: LedgerSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LedgerSection {
    /// Directory the ledger blob is stored in
    pub data_dir: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    /// Currency symbol prefixed to amounts (default "$")
    pub currency: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("fintrack"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("fintrack"))
}

/// Read the config file if it exists; a missing file is the default config.
pub fn load_config() -> anyhow::Result<FintrackConfig> {
    let path = default_config_path()?;
    if !path.exists() {
        return Ok(FintrackConfig::default());
    }
    read_config(&path)
}

pub fn read_config(path: &Path) -> anyhow::Result<FintrackConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("fintrack"));
        }
    }
    Ok(home_dir()?.join(".config").join("fintrack"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
