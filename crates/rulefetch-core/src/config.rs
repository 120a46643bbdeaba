use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchOptions;

/// Test-harness parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Path to the external test engine executable.
    pub engine: PathBuf,
    /// Seconds the engine may block before it is assumed stuck.
    #[serde(default = "default_max_block_secs")]
    pub max_block_secs: u64,
}

fn default_max_block_secs() -> u64 {
    50
}

/// Global configuration loaded from `~/.config/rulefetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulefetchConfig {
    /// TCP connect timeout in seconds for remote fetches.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds for remote fetches.
    pub request_timeout_secs: u64,
    /// Redirect hops to follow before giving up.
    pub max_redirects: u32,
    /// Optional test-harness settings; without them `check` needs --engine.
    #[serde(default)]
    pub harness: Option<HarnessConfig>,
}

impl Default for RulefetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            max_redirects: 10,
            harness: None,
        }
    }
}

impl RulefetchConfig {
    /// Transport knobs for the fetch layer.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.request_timeout_secs),
            max_redirects: self.max_redirects,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rulefetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RulefetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RulefetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RulefetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
