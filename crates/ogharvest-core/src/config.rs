use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// HTTP transport parameters (optional `[http]` section in config.toml).
/// Keys left out of the file keep their `Default` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Connect timeout in seconds (None = libcurl default).
    pub connect_timeout_secs: Option<u64>,
    /// Total timeout per request in seconds (None = no limit).
    pub timeout_secs: Option<u64>,
    /// Abort when the transfer stays below this many bytes/sec for `low_speed_time_secs`.
    pub low_speed_limit_bytes: Option<u32>,
    pub low_speed_time_secs: Option<u64>,
    /// Maximum redirects followed per request.
    pub max_redirections: u32,
    /// User-Agent header (None = libcurl sends none).
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: Some(30),
            timeout_secs: None,
            low_speed_limit_bytes: Some(1024),
            low_speed_time_secs: Some(60),
            max_redirections: 10,
            user_agent: Some(concat!("ogharvest/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

/// Global configuration loaded from `~/.config/ogharvest/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Line-list of page URLs, relative to the working directory unless absolute.
    pub input_path: PathBuf,
    /// Directory receiving images and `<host>.txt` files.
    pub output_dir: PathBuf,
    /// Number of URLs processed at once (1 = strictly sequential).
    pub jobs: usize,
    pub http: HttpConfig,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("urls.txt"),
            output_dir: PathBuf::from("dist"),
            jobs: 1,
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ogharvest")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarvestConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarvestConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HarvestConfig = toml::from_str(&data)?;
    Ok(cfg)
}
