use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How a raw archive URL is reduced to its `key=` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizeMode {
    /// Cut the line right after the first `=`.
    #[default]
    FirstValue,
    /// Keep every parameter, strip each value up to the next `&`.
    EveryValue,
}

/// Global configuration loaded from `~/.config/paramhawk/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HawkConfig {
    /// Archive tool binary, invoked as `<archive_tool> <domain>`.
    pub archive_tool: String,
    /// Command run once when the archive tool cannot be found. Empty disables auto-install.
    #[serde(default)]
    pub install_command: Vec<String>,
    /// Normalization policy for the parameter extractor.
    #[serde(default)]
    pub normalize: NormalizeMode,
    /// Directory for artifacts (None = current working directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for HawkConfig {
    fn default() -> Self {
        Self {
            archive_tool: "waybackurls".to_string(),
            install_command: vec![
                "go".to_string(),
                "install".to_string(),
                "github.com/tomnomnom/waybackurls@latest".to_string(),
            ],
            normalize: NormalizeMode::FirstValue,
            output_dir: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("paramhawk")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HawkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HawkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HawkConfig = toml::from_str(&data)?;
    Ok(cfg)
}
