//! Significant-change detection between two weather readings

use super::WeatherSnapshot;

/// Wind speed change (mph) that must be exceeded to count as significant
pub const WIND_DELTA_MPH: f64 = 5.0;
/// Cloud cover change (percentage points) that must be exceeded
pub const CLOUD_DELTA_PERCENT: f64 = 20.0;

/// Whether `new` differs enough from `old` to warrant regenerating text.
///
/// A first reading is always significant. Missing cloud cover is read as 0.
#[must_use]
pub fn is_significant(old: Option<&WeatherSnapshot>, new: &WeatherSnapshot) -> bool {
    let Some(old) = old else {
        return true;
    };

    let wind_delta = (new.wind_speed - old.wind_speed).abs();
    let cloud_delta = (new.cloud_cover_or_zero() - old.cloud_cover_or_zero()).abs();

    wind_delta > WIND_DELTA_MPH
        || cloud_delta > CLOUD_DELTA_PERCENT
        || new.weather_code != old.weather_code
}
