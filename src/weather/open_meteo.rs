//! Open-Meteo forecast client
//!
//! Fetches the `current` block of `/forecast` for a tracked location. Parsing
//! is lenient: a field that is missing or not a number is reported as absent
//! and the store fills it from the previous reading.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde_json::Value;
use tracing::{debug, instrument};

use super::{SnapshotSource, TrackedLocation, WeatherSnapshot};
use crate::config::WeatherConfig;
use crate::{Result, TidewatchError};

const CURRENT_FIELDS: &str = "apparent_temperature,precipitation,rain,showers,weather_code,cloud_cover,wind_speed_10m,wind_direction_10m,wind_gusts_10m";

/// Anything that can produce current conditions for a location
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_current(&self, location: &TrackedLocation) -> Result<CurrentConditions>;
}

/// Raw reading as parsed from the API. `None` means the field was missing or
/// unparseable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentConditions {
    pub apparent_temperature: Option<f64>,
    pub weather_code: Option<i64>,
    pub wind_speed: Option<f64>,
    pub cloud_cover: Option<f64>,
}

impl CurrentConditions {
    /// Parse a forecast response body
    pub fn from_body(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| TidewatchError::parse(format!("Invalid forecast JSON: {e}")))?;

        let current = value
            .get("current")
            .filter(|current| current.is_object())
            .ok_or_else(|| TidewatchError::parse("Forecast response has no 'current' object"))?;

        Ok(Self {
            apparent_temperature: number_field(current, &["apparent_temperature"]),
            weather_code: number_field(current, &["weather_code", "weathercode"])
                .map(|code| code.round() as i64),
            wind_speed: number_field(current, &["wind_speed_10m"]),
            cloud_cover: number_field(current, &["cloud_cover"]).map(|c| c.clamp(0.0, 100.0)),
        })
    }

    /// Build a snapshot, taking each missing field from `previous`, else 0
    #[must_use]
    pub fn into_snapshot(
        self,
        previous: Option<&WeatherSnapshot>,
        fetched_at: DateTime<Utc>,
    ) -> WeatherSnapshot {
        WeatherSnapshot {
            apparent_temperature: self
                .apparent_temperature
                .or(previous.map(|p| p.apparent_temperature))
                .unwrap_or(0.0),
            weather_code: self
                .weather_code
                .or(previous.map(|p| p.weather_code))
                .unwrap_or(0),
            wind_speed: self
                .wind_speed
                .or(previous.map(|p| p.wind_speed))
                .unwrap_or(0.0),
            cloud_cover: self.cloud_cover.or(previous.and_then(|p| p.cloud_cover)),
            fetched_at,
            source: SnapshotSource::Live,
        }
    }
}

fn number_field(current: &Value, names: &[&str]) -> Option<f64> {
    names
        .iter()
        .filter_map(|name| current.get(*name))
        .find_map(|value| match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
        .filter(|n| n.is_finite())
}

/// HTTP client for the Open-Meteo forecast endpoint with retries and a
/// per-fetch deadline
pub struct OpenMeteoClient {
    client: ClientWithMiddleware,
    base_url: String,
    timezone: String,
    deadline: Duration,
}

impl OpenMeteoClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("tidewatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TidewatchError::config(format!("Failed to create HTTP client: {e}")))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(http)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timezone: config.timezone.clone(),
            deadline: Duration::from_secs(config.fetch_deadline_seconds.into()),
        })
    }

    /// Full request URL for one location
    pub fn forecast_url(&self, location: &TrackedLocation) -> Result<Url> {
        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();
        Url::parse_with_params(
            &format!("{}/forecast", self.base_url),
            &[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_FIELDS),
                ("temperature_unit", "fahrenheit"),
                ("wind_speed_unit", "mph"),
                ("precipitation_unit", "inch"),
                ("timezone", self.timezone.as_str()),
            ],
        )
        .map_err(|e| TidewatchError::config(format!("Invalid weather base URL: {e}")))
    }

    async fn request(&self, url: Url) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TidewatchError::fetch(format!("Request failed: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TidewatchError::fetch(format!(
                "Forecast API returned HTTP {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| TidewatchError::fetch(format!("Failed to read response body: {e}")))
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    #[instrument(name = "fetch_weather", level = "debug", skip(self), fields(location = %location.id))]
    async fn fetch_current(&self, location: &TrackedLocation) -> Result<CurrentConditions> {
        let url = self.forecast_url(location)?;
        debug!("Requesting {}", url);

        let body = tokio::time::timeout(self.deadline, self.request(url))
            .await
            .map_err(|_| {
                TidewatchError::fetch(format!(
                    "Fetch exceeded deadline of {}s",
                    self.deadline.as_secs()
                ))
            })??;

        CurrentConditions::from_body(&body)
    }
}
