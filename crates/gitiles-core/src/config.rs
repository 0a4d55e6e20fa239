use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::browser::{BrowserRegistry, RepositoryBrowser};
use crate::probe::ProbeOptions;

fn default_kind() -> String {
    "gitiles".to_string()
}

/// Which repository browser to use and where it lives (`[browser]` in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Registered browser symbol.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Root URL of the repository on the web frontend. Required.
    pub repo_url: String,
}

impl BrowserConfig {
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            kind: default_kind(),
            repo_url: repo_url.into(),
        }
    }

    /// Builds the configured browser from `registry`.
    pub fn build(&self, registry: &BrowserRegistry) -> Result<Box<dyn RepositoryBrowser>> {
        registry
            .create(&self.kind, &self.repo_url)
            .with_context(|| format!("browser {} for {}", self.kind, self.repo_url))
    }
}

/// Landing page probe timeouts (optional `[probe]` section). Unset = libcurl default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProbeConfig {
    pub fn options(&self) -> ProbeOptions {
        ProbeOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/gitiles/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitilesConfig {
    /// Configured browser; absent until the user sets one.
    #[serde(default)]
    pub browser: Option<BrowserConfig>,
    #[serde(default)]
    pub probe: ProbeConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gitiles")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GitilesConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<GitilesConfig> {
    if !path.exists() {
        let default_cfg = GitilesConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GitilesConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
