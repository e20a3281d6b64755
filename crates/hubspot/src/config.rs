//! API-key configuration — flag > environment > saved file.
//!
//! The key is deployment-time configuration injected at client
//! construction, never a compile-time constant. Saved config lives at
//! `<config_dir>/sheetlink/hubspot.json` (0600 on Unix).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::client::HubSpotError;

pub const DEFAULT_API_BASE: &str = "https://api.hubapi.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable consulted when no explicit key is given.
pub const API_KEY_ENV: &str = "HUBSPOT_API_KEY";

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubSpotConfig {
    pub api_key: String,
    /// API base URL (e.g., "https://api.hubapi.com")
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl HubSpotConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: default_api_base(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Resolve a config: explicit key > `HUBSPOT_API_KEY` > saved file > error.
    pub fn resolve(explicit: Option<String>) -> Result<Self, HubSpotError> {
        match resolve_api_key(explicit, API_KEY_ENV) {
            Ok(key) => Ok(Self::new(key)),
            Err(_) => load_config().ok_or(HubSpotError::MissingApiKey),
        }
    }
}

/// Resolve an API key: flag value > environment variable > error.
pub fn resolve_api_key(
    flag: Option<String>,
    env_var: &str,
) -> Result<String, HubSpotError> {
    if let Some(key) = flag {
        let trimmed = key.trim().to_string();
        if trimmed.is_empty() {
            return Err(HubSpotError::MissingApiKey);
        }
        return Ok(trimmed);
    }

    if let Ok(key) = std::env::var(env_var) {
        let trimmed = key.trim().to_string();
        if !trimmed.is_empty() {
            return Ok(trimmed);
        }
    }

    Err(HubSpotError::MissingApiKey)
}

/// Returns the path to the saved config file.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|c| c.join("sheetlink/hubspot.json"))
}

/// Load saved config from disk.
/// Returns None if nothing is saved or the file is invalid.
pub fn load_config() -> Option<HubSpotConfig> {
    let path = config_file_path()?;
    let contents = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save config to disk.
/// Creates the parent directory if it doesn't exist.
/// Sets 0600 permissions on Unix.
pub fn save_config(config: &HubSpotConfig) -> Result<(), String> {
    let path = config_file_path().ok_or("Could not determine config directory")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let contents = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(&path, &contents)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, permissions)
            .map_err(|e| format!("Failed to set file permissions: {}", e))?;
    }

    Ok(())
}
