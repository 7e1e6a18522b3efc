//! Weather readings for the tracked game locations
//!
//! A [`WeatherSnapshot`] is one normalized reading. Snapshots are immutable:
//! every refresh produces a new one and the [`WeatherStore`] swaps it in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod category;
pub mod change;
pub mod open_meteo;
pub mod store;

pub use category::WeatherCategory;
pub use change::is_significant;
pub use open_meteo::{CurrentConditions, OpenMeteoClient, WeatherSource};
pub use store::{RefreshOutcome, WeatherStore};

/// Apparent temperature installed when no reading was ever obtained
pub const FALLBACK_TEMPERATURE_F: f64 = 70.0;
/// Weather code installed when no reading was ever obtained
pub const FALLBACK_WEATHER_CODE: i64 = 0;
/// Wind speed installed when no reading was ever obtained
pub const FALLBACK_WIND_MPH: f64 = 5.0;

/// Where a snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSource {
    Live,
    Fallback,
}

/// One normalized weather reading for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Feels-like temperature in Fahrenheit
    pub apparent_temperature: f64,
    /// WMO weather code as reported by the forecast API
    pub weather_code: i64,
    /// Wind speed at 10 m in mph
    pub wind_speed: f64,
    /// Cloud cover percentage (0-100)
    pub cloud_cover: Option<f64>,
    pub fetched_at: DateTime<Utc>,
    pub source: SnapshotSource,
}

impl WeatherSnapshot {
    /// The hard-coded reading used when the API has never answered
    #[must_use]
    pub fn fallback(at: DateTime<Utc>) -> Self {
        Self {
            apparent_temperature: FALLBACK_TEMPERATURE_F,
            weather_code: FALLBACK_WEATHER_CODE,
            wind_speed: FALLBACK_WIND_MPH,
            cloud_cover: None,
            fetched_at: at,
            source: SnapshotSource::Fallback,
        }
    }

    #[must_use]
    pub fn category(&self) -> WeatherCategory {
        WeatherCategory::from_code(self.weather_code)
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == SnapshotSource::Fallback
    }

    /// Cloud cover with a missing value read as a clear sky
    #[must_use]
    pub fn cloud_cover_or_zero(&self) -> f64 {
        self.cloud_cover.unwrap_or(0.0)
    }

    /// One-line human summary
    #[must_use]
    pub fn describe(&self) -> String {
        let mut summary = format!(
            "{}, feels like {:.0}°F, wind {:.0} mph",
            self.category().label(),
            self.apparent_temperature,
            self.wind_speed
        );
        if let Some(cover) = self.cloud_cover {
            summary.push_str(&format!(", {cover:.0}% cloud cover"));
        }
        if self.is_fallback() {
            summary.push_str(" (default)");
        }
        summary
    }

    /// Status line shown under generic weather-aware rooms
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "Wind: {:.0} mph | Temp: {:.0}°F | Cloud Cover: {:.0}%",
            self.wind_speed,
            self.apparent_temperature,
            self.cloud_cover_or_zero()
        )
    }
}

/// A named coordinate the store keeps weather for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedLocation {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl TrackedLocation {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
        }
    }
}
