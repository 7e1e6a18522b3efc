use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse grouping of WMO weather codes used to pick description clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    Clear,
    PartlyCloudy,
    /// Fog and low overcast
    Cloudy,
    Rain,
    FreezingRain,
    Snow,
    Thunderstorm,
    /// Any code the table does not know about
    Unknown,
}

impl WeatherCategory {
    /// Map a WMO weather code to its category
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => WeatherCategory::Clear,
            1..=3 => WeatherCategory::PartlyCloudy,
            45 | 48 => WeatherCategory::Cloudy,
            51..=55 | 61..=65 | 80..=82 => WeatherCategory::Rain,
            56..=57 | 66..=69 | 83..=84 => WeatherCategory::FreezingRain,
            71..=77 | 85..=86 => WeatherCategory::Snow,
            95 | 96 | 99 => WeatherCategory::Thunderstorm,
            _ => WeatherCategory::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Clear => "clear",
            WeatherCategory::PartlyCloudy => "partly_cloudy",
            WeatherCategory::Cloudy => "cloudy",
            WeatherCategory::Rain => "rain",
            WeatherCategory::FreezingRain => "freezing_rain",
            WeatherCategory::Snow => "snow",
            WeatherCategory::Thunderstorm => "thunderstorm",
            WeatherCategory::Unknown => "unknown",
        }
    }

    /// Human label for reports
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCategory::Clear => "Clear skies",
            WeatherCategory::PartlyCloudy => "Partly cloudy",
            WeatherCategory::Cloudy => "Fog and cloud",
            WeatherCategory::Rain => "Rain",
            WeatherCategory::FreezingRain => "Freezing rain",
            WeatherCategory::Snow => "Snow",
            WeatherCategory::Thunderstorm => "Thunderstorms",
            WeatherCategory::Unknown => "Unsettled weather",
        }
    }

    /// Precipitation of any kind
    #[must_use]
    pub fn is_wet(&self) -> bool {
        matches!(
            self,
            WeatherCategory::Rain
                | WeatherCategory::FreezingRain
                | WeatherCategory::Snow
                | WeatherCategory::Thunderstorm
        )
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
