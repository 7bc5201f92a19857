use serde::Deserialize;

use crate::error::ConfigError;

fn default_offline_mode() -> bool { false }
fn default_static_dir() -> String { "static".to_string() }
fn default_performance_ratio() -> f64 { 0.80 }
fn default_climatology_url() -> String {
    "https://power.larc.nasa.gov/api/temporal/climatology/point".to_string()
}
fn default_overpass_url() -> String { "https://overpass-api.de/api/interpreter".to_string() }
fn default_coast_radius_km() -> f64 { 100.0 }
fn default_timeout_s() -> u64 { 20 }

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default = "default_offline_mode")]
    pub offline_mode: bool,
    #[serde(default)]
    pub sizing: SizingConfig,
    #[serde(default)]
    pub providers: ProviderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SizingConfig {
    /// Used when a sizing request omits the performance ratio
    #[serde(default = "default_performance_ratio")]
    pub default_performance_ratio: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self { default_performance_ratio: default_performance_ratio() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_climatology_url")]
    pub climatology_url: String,
    #[serde(default = "default_overpass_url")]
    pub overpass_url: String,
    #[serde(default = "default_coast_radius_km")]
    pub coast_search_radius_km: f64,
    /// Per-provider timeout
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            climatology_url: default_climatology_url(),
            overpass_url: default_overpass_url(),
            coast_search_radius_km: default_coast_radius_km(),
            timeout_s: default_timeout_s(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let c = Config::from_json(r#"{ "server": { "port": 8080 } }"#).unwrap();
        assert_eq!(c.server.port, 8080);
        assert_eq!(c.server.static_dir, "static");
        assert!(!c.offline_mode);
        assert_eq!(c.sizing.default_performance_ratio, 0.80);
        assert_eq!(c.providers.coast_search_radius_km, 100.0);
        assert_eq!(c.providers.timeout_s, 20);
    }

    #[test]
    fn test_missing_port_is_an_error() {
        assert!(matches!(Config::from_json(r#"{ "server": {} }"#), Err(ConfigError::Json(_))));
    }
}
