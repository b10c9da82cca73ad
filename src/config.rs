/// User configuration (config.toml)
///
/// Located in the user's config directory:
/// - Linux: ~/.config/plantcare/config.toml
/// - macOS: ~/Library/Application Support/plantcare/config.toml
/// - Windows: %APPDATA%\plantcare\config.toml
///
/// Every key is optional. A missing file yields the defaults; a file that
/// fails to parse is reported and the defaults are used instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "plantcare";

/// Overrides `api.base_url`
pub const API_URL_ENV: &str = "PLANTCARE_API_URL";
/// Overrides `api.demo` ("1" or "true" enables it)
pub const DEMO_ENV: &str = "PLANTCARE_DEMO";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,
}

/// Settings for the detection endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the detection service; `/detect` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. None leaves the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Answer every analysis with a canned diagnosis instead of calling the API
    #[serde(default)]
    pub demo: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            demo: false,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// Path of the config file in the user's config directory
pub fn config_path() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(Error::NoDirectory { kind: "config" })?;
    Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Parse a config file, returning an error for unreadable or invalid TOML
pub fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::config(path, e.to_string()))
}

/// Load the config at `path`, falling back to defaults
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Config::default();
    }

    match read_config(path) {
        Ok(config) => {
            debug!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            Config::default()
        }
    }
}

/// Load the user's config and apply environment overrides
pub fn load() -> Config {
    let mut config = match config_path() {
        Ok(path) => load_config(&path),
        Err(e) => {
            warn!("{}; using default config", e);
            Config::default()
        }
    };
    apply_overrides(
        &mut config,
        std::env::var(API_URL_ENV).ok(),
        std::env::var(DEMO_ENV).ok(),
    );
    config
}

fn apply_overrides(config: &mut Config, api_url: Option<String>, demo: Option<String>) {
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        debug!("{} overrides api.base_url", API_URL_ENV);
        config.api.base_url = url;
    }
    if let Some(flag) = demo {
        config.api.demo = matches!(flag.trim(), "1" | "true" | "yes");
    }
}
