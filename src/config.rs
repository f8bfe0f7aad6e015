use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_OVERPASS_URL;
use crate::logic::formatting::DEFAULT_MAP_URL_BASE;
use crate::logic::radius::DEFAULT_RADIUS;
use crate::services::location::DEFAULT_IP_LOOKUP_URL;

/// Where the one-shot location comes from
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LocationProvider {
    /// Coordinates from config / CLI
    Fixed,
    /// IP geolocation lookup
    #[default]
    Ip,
    /// No geolocation capability
    None,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub provider: LocationProvider,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub ip_lookup_url: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            provider: LocationProvider::default(),
            lat: None,
            lon: None,
            ip_lookup_url: DEFAULT_IP_LOOKUP_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub overpass_url: String,
    pub map_url_base: String,
    pub default_radius: u32,
    /// Unset means the HTTP client default (no overall timeout)
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub vim_mode: bool,
    /// Program that receives a map link as its only argument
    pub open_command: Option<String>,
    /// Program that receives a map link on stdin
    pub clipboard_command: Option<String>,
    pub location: LocationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            overpass_url: DEFAULT_OVERPASS_URL.to_string(),
            map_url_base: DEFAULT_MAP_URL_BASE.to_string(),
            default_radius: DEFAULT_RADIUS,
            request_timeout_secs: None,
            user_agent: default_user_agent(),
            vim_mode: false,
            open_command: None,
            clipboard_command: None,
            location: LocationConfig::default(),
        }
    }
}

fn default_user_agent() -> String {
    format!("shopfinder/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file deserializes to null; treat it as all defaults
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid config file")
    }

    /// Load from `path`, or built-in defaults when no file was found
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                Self::from_yaml(&text)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Determine the config file path with fallback logic
///
/// 1. `--config <path>` (must exist)
/// 2. `{config_dir}/shopfinder/config.yaml`
/// 3. `./config.yaml`
///
/// Returns `Ok(None)` when no file exists; every setting has a default.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("shopfinder").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.overpass_url, "https://overpass-api.de/api/interpreter");
        assert_eq!(config.default_radius, 1000);
        assert_eq!(config.location.provider, LocationProvider::Ip);
        assert!(config.request_timeout_secs.is_none());
        assert!(config.user_agent.starts_with("shopfinder/"));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.default_radius, 1000);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
default_radius: 2500
open_command: xdg-open
location:
  provider: fixed
  lat: 52.52
  lon: 13.405
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.default_radius, 2500);
        assert_eq!(config.open_command.as_deref(), Some("xdg-open"));
        assert_eq!(config.location.provider, LocationProvider::Fixed);
        assert_eq!(config.location.lat, Some(52.52));
        assert_eq!(config.location.ip_lookup_url, "http://ip-api.com/json");
        assert_eq!(config.map_url_base, "https://www.openstreetmap.org/");
    }

    #[test]
    fn test_provider_none() {
        let config = Config::from_yaml("location:\n  provider: none\n").unwrap();
        assert_eq!(config.location.provider, LocationProvider::None);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Config::from_yaml("default_radius: [1, 2]").is_err());
    }

    #[test]
    fn test_missing_cli_config_is_error() {
        let err = find_config_path(Some("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
