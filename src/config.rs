use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::SearchRadii;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub overpass: OverpassSettings,
    pub listings: ListingsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassSettings {
    #[serde(default = "default_overpass_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub radii: RadiiConfig,
}

fn default_overpass_endpoint() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Search radii for the two amenity queries, meters
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RadiiConfig {
    #[serde(default = "default_school_radius_m")]
    pub school_m: u32,
    #[serde(default = "default_transit_radius_m")]
    pub transit_m: u32,
    #[serde(default = "default_hospital_radius_m")]
    pub hospital_m: u32,
}

impl Default for RadiiConfig {
    fn default() -> Self {
        Self {
            school_m: default_school_radius_m(),
            transit_m: default_transit_radius_m(),
            hospital_m: default_hospital_radius_m(),
        }
    }
}

impl From<RadiiConfig> for SearchRadii {
    fn from(radii: RadiiConfig) -> Self {
        Self {
            school_m: radii.school_m,
            transit_m: radii.transit_m,
            hospital_m: radii.hospital_m,
        }
    }
}

fn default_school_radius_m() -> u32 { 800 }
fn default_transit_radius_m() -> u32 { 1000 }
fn default_hospital_radius_m() -> u32 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct ListingsSettings {
    #[serde(default = "default_listings_path")]
    pub path: String,
}

fn default_listings_path() -> String {
    "data/listings.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with PROPMAP_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with PROPMAP_)
            // e.g., PROPMAP_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PROPMAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_env_shortcuts(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PROPMAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the short-form environment overrides
///
/// OVERPASS_URL and LISTINGS_PATH are accepted as convenient aliases for the
/// full PROPMAP__-prefixed forms.
fn apply_env_shortcuts(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overpass_url = env::var("OVERPASS_URL").ok();
    let listings_path = env::var("LISTINGS_PATH").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = overpass_url {
        builder = builder.set_override("overpass.endpoint", url)?;
    }
    if let Some(path) = listings_path {
        builder = builder.set_override("listings.path", path)?;
    }

    builder.build()
}
