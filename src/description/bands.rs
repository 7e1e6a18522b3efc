//! Threshold bands that select embellishment clauses

use serde::Serialize;

use crate::weather::{WeatherCategory, WeatherSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    Hot,
    Warm,
    Mild,
    Chilly,
    Cold,
}

impl TemperatureBand {
    /// Lower bounds are exclusive: 85.0 is warm, 85.1 is hot
    #[must_use]
    pub fn from_fahrenheit(temp: f64) -> Self {
        if temp > 85.0 {
            TemperatureBand::Hot
        } else if temp > 75.0 {
            TemperatureBand::Warm
        } else if temp > 60.0 {
            TemperatureBand::Mild
        } else if temp > 45.0 {
            TemperatureBand::Chilly
        } else {
            TemperatureBand::Cold
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindBand {
    Strong,
    Breezy,
    Gentle,
    Calm,
}

impl WindBand {
    #[must_use]
    pub fn from_mph(speed: f64) -> Self {
        if speed > 20.0 {
            WindBand::Strong
        } else if speed > 10.0 {
            WindBand::Breezy
        } else if speed > 5.0 {
            WindBand::Gentle
        } else {
            WindBand::Calm
        }
    }
}

/// What the weather feels like from inside a building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndoorAmbience {
    Storm,
    Rain,
    Hot,
    Cold,
    Calm,
}

impl IndoorAmbience {
    /// First match wins: storm, any precipitation, above 80°F, below 60°F
    #[must_use]
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Self {
        let category = snapshot.category();
        if category == WeatherCategory::Thunderstorm {
            IndoorAmbience::Storm
        } else if category.is_wet() {
            IndoorAmbience::Rain
        } else if snapshot.apparent_temperature > 80.0 {
            IndoorAmbience::Hot
        } else if snapshot.apparent_temperature < 60.0 {
            IndoorAmbience::Cold
        } else {
            IndoorAmbience::Calm
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100.0, TemperatureBand::Hot)]
    #[case(85.1, TemperatureBand::Hot)]
    #[case(85.0, TemperatureBand::Warm)]
    #[case(75.1, TemperatureBand::Warm)]
    #[case(75.0, TemperatureBand::Mild)]
    #[case(60.0, TemperatureBand::Chilly)]
    #[case(45.1, TemperatureBand::Chilly)]
    #[case(45.0, TemperatureBand::Cold)]
    #[case(-10.0, TemperatureBand::Cold)]
    fn test_temperature_bands(#[case] temp: f64, #[case] expected: TemperatureBand) {
        assert_eq!(TemperatureBand::from_fahrenheit(temp), expected);
    }

    #[rstest]
    #[case(25.0, WindBand::Strong)]
    #[case(20.0, WindBand::Breezy)]
    #[case(10.5, WindBand::Breezy)]
    #[case(10.0, WindBand::Gentle)]
    #[case(5.0, WindBand::Calm)]
    #[case(0.0, WindBand::Calm)]
    fn test_wind_bands(#[case] speed: f64, #[case] expected: WindBand) {
        assert_eq!(WindBand::from_mph(speed), expected);
    }

    #[rstest]
    #[case(95, 90.0, IndoorAmbience::Storm)]
    #[case(63, 90.0, IndoorAmbience::Rain)]
    #[case(73, 20.0, IndoorAmbience::Rain)]
    #[case(0, 81.0, IndoorAmbience::Hot)]
    #[case(2, 59.0, IndoorAmbience::Cold)]
    #[case(45, 70.0, IndoorAmbience::Calm)]
    fn test_indoor_ambience(#[case] code: i64, #[case] temp: f64, #[case] expected: IndoorAmbience) {
        let mut snapshot = WeatherSnapshot::fallback(chrono::Utc::now());
        snapshot.weather_code = code;
        snapshot.apparent_temperature = temp;
        assert_eq!(IndoorAmbience::from_snapshot(&snapshot), expected);
    }
}
