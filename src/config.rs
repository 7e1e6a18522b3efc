//! Configuration management for tidewatch
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TidewatchError;
use crate::weather::TrackedLocation;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TidewatchConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Description cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Text layout configuration
    #[serde(default)]
    pub text: TextConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Admin HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the forecast API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// IANA timezone used for the game calendar and API requests
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for transient failures
    #[serde(default = "default_weather_max_retries")]
    pub max_retries: u32,
    /// Deadline for one whole fetch, retries included
    #[serde(default = "default_fetch_deadline")]
    pub fetch_deadline_seconds: u32,
    /// Seconds between weather refreshes
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
    /// Tracked locations by id
    #[serde(default = "default_locations")]
    pub locations: BTreeMap<String, LocationConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

/// Description cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Age in seconds after which a rendered description is stale
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
    /// Seconds between time-of-day re-render checks
    #[serde(default = "default_rerender_interval")]
    pub rerender_interval_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// Column width descriptions are wrapped to
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_timezone() -> String {
    "America/Chicago".to_string()
}

fn default_weather_timeout() -> u32 {
    5
}

fn default_weather_max_retries() -> u32 {
    2
}

fn default_fetch_deadline() -> u32 {
    20
}

fn default_refresh_interval() -> u64 {
    900
}

fn default_locations() -> BTreeMap<String, LocationConfig> {
    BTreeMap::from([(
        "main_island".to_string(),
        LocationConfig {
            latitude: 21.4655745,
            longitude: -71.1390341,
        },
    )])
}

fn default_cache_ttl() -> u64 {
    900
}

fn default_rerender_interval() -> u64 {
    300
}

fn default_wrap_width() -> usize {
    78
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    4080
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timezone: default_timezone(),
            timeout_seconds: default_weather_timeout(),
            max_retries: default_weather_max_retries(),
            fetch_deadline_seconds: default_fetch_deadline(),
            refresh_interval_seconds: default_refresh_interval(),
            locations: default_locations(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_cache_ttl(),
            rerender_interval_seconds: default_rerender_interval(),
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl WeatherConfig {
    /// Tracked locations in id order
    #[must_use]
    pub fn tracked_locations(&self) -> Vec<TrackedLocation> {
        self.locations
            .iter()
            .map(|(id, loc)| TrackedLocation::new(id.clone(), loc.latitude, loc.longitude))
            .collect()
    }
}

impl TidewatchConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("tidewatch.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TIDEWATCH_WEATHER__TIMEZONE
        builder = builder.add_source(
            Environment::with_prefix("TIDEWATCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TidewatchConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tidewatch").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timezone.is_empty() {
            self.weather.timezone = default_timezone();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.weather.fetch_deadline_seconds == 0 {
            self.weather.fetch_deadline_seconds = default_fetch_deadline();
        }
        if self.weather.refresh_interval_seconds == 0 {
            self.weather.refresh_interval_seconds = default_refresh_interval();
        }
        if self.weather.locations.is_empty() {
            self.weather.locations = default_locations();
        }
        if self.cache.ttl_seconds == 0 {
            self.cache.ttl_seconds = default_cache_ttl();
        }
        if self.cache.rerender_interval_seconds == 0 {
            self.cache.rerender_interval_seconds = default_rerender_interval();
        }
        if self.text.wrap_width == 0 {
            self.text.wrap_width = default_wrap_width();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_locations()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds > 300 {
            return Err(
                TidewatchError::config("Weather API timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.weather.max_retries > 10 {
            return Err(TidewatchError::config("Weather API max retries cannot exceed 10").into());
        }

        if self.weather.fetch_deadline_seconds < self.weather.timeout_seconds {
            return Err(TidewatchError::config(
                "Fetch deadline cannot be shorter than the request timeout",
            )
            .into());
        }

        if self.weather.refresh_interval_seconds < 60 {
            return Err(
                TidewatchError::config("Weather refresh interval must be at least 60 seconds")
                    .into(),
            );
        }

        if self.cache.ttl_seconds > 86_400 {
            return Err(TidewatchError::config("Cache TTL cannot exceed 86400 seconds (1 day)").into());
        }

        if self.text.wrap_width < 20 {
            return Err(TidewatchError::config("Wrap width must be at least 20 columns").into());
        }

        Ok(())
    }

    fn validate_locations(&self) -> Result<()> {
        for (id, location) in &self.weather.locations {
            if !(-90.0..=90.0).contains(&location.latitude) {
                return Err(TidewatchError::config(format!(
                    "Location '{id}' has invalid latitude {}",
                    location.latitude
                ))
                .into());
            }
            if !(-180.0..=180.0).contains(&location.longitude) {
                return Err(TidewatchError::config(format!(
                    "Location '{id}' has invalid longitude {}",
                    location.longitude
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TidewatchError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TidewatchError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(TidewatchError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TidewatchConfig::default();
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.weather.timezone, "America/Chicago");
        assert_eq!(config.weather.timeout_seconds, 5);
        assert_eq!(config.weather.refresh_interval_seconds, 900);
        assert_eq!(config.cache.ttl_seconds, 900);
        assert_eq!(config.cache.rerender_interval_seconds, 300);
        assert_eq!(config.text.wrap_width, 78);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_location() {
        let locations = TidewatchConfig::default().weather.tracked_locations();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].id, "main_island");
        assert_eq!(locations[0].latitude, 21.4655745);
        assert_eq!(locations[0].longitude, -71.1390341);
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TidewatchConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TidewatchConfig::default();
        config.weather.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_bad_coordinates() {
        let mut config = TidewatchConfig::default();
        config.weather.locations.insert(
            "nowhere".to_string(),
            LocationConfig {
                latitude: 123.0,
                longitude: 0.0,
            },
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_zeroes() {
        let mut config = TidewatchConfig::default();
        config.cache.ttl_seconds = 0;
        config.text.wrap_width = 0;
        config.weather.locations.clear();
        config.apply_defaults();
        assert_eq!(config.cache.ttl_seconds, 900);
        assert_eq!(config.text.wrap_width, 78);
        assert!(config.weather.locations.contains_key("main_island"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("tidewatch-test-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[weather]
timezone = "Europe/Berlin"

[weather.locations.harbor_town]
latitude = 54.3
longitude = 10.1

[cache]
ttl_seconds = 600
"#
        )
        .unwrap();

        let config = TidewatchConfig::load_from_path(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.weather.timezone, "Europe/Berlin");
        assert_eq!(config.cache.ttl_seconds, 600);
        assert_eq!(config.text.wrap_width, 78);
        assert!(config.weather.locations.contains_key("harbor_town"));
    }

    #[test]
    fn test_config_path_generation() {
        let path = TidewatchConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tidewatch"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
