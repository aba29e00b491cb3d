use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub items: PathBuf,
    pub reviews: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListingConfig {
    /// Maximum rows printed by `shelf list` when `--limit` is not given.
    /// Zero means unlimited.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_limit() -> usize {
    0
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.catalog.items.as_os_str().is_empty() {
        anyhow::bail!("catalog.items must not be empty");
    }
    if config.catalog.reviews.as_os_str().is_empty() {
        anyhow::bail!("catalog.reviews must not be empty");
    }

    Ok(config)
}
