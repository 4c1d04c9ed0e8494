//! CLI configuration: where the catalog data file lives.
//!
//! Resolution order for the data file: `--data` flag (or `BIBLIO_DATA` env,
//! handled by clap), then the `[catalog] path` entry of the config file,
//! then the XDG data-dir default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct BiblioConfig {
    pub catalog: CatalogSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogSection {
    pub path: String,
}

/// Resolve the data-file path from the flag, config file, or default.
pub fn resolve_data_path(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    let config_path = default_config_path()?;
    if config_path.exists() {
        let config = read_config(&config_path)?;
        return Ok(PathBuf::from(config.catalog.path));
    }
    default_data_path()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("library.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<BiblioConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("biblio"));
        }
    }
    Ok(home_dir()?.join(".config").join("biblio"))
}

fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("biblio"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("biblio"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
