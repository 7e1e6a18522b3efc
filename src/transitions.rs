//! Messages broadcast to a room when its time period or sky changes

use std::fmt;

use serde::Serialize;

use crate::description::RoomKind;
use crate::time_period::TimePeriod;
use crate::weather::{WeatherCategory, WeatherSnapshot};

/// Wind speed (mph) above which fair weather reads as windy
pub const WINDY_MPH: f64 = 20.0;

/// Sky condition as players notice it change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyCondition {
    Clear,
    Cloudy,
    Rain,
    Storm,
    Snow,
    Windy,
}

impl SkyCondition {
    #[must_use]
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Self {
        match snapshot.category() {
            WeatherCategory::Thunderstorm => SkyCondition::Storm,
            WeatherCategory::Rain | WeatherCategory::FreezingRain => SkyCondition::Rain,
            WeatherCategory::Snow => SkyCondition::Snow,
            WeatherCategory::Cloudy => SkyCondition::Cloudy,
            WeatherCategory::Clear | WeatherCategory::PartlyCloudy | WeatherCategory::Unknown => {
                if snapshot.wind_speed > WINDY_MPH {
                    SkyCondition::Windy
                } else {
                    SkyCondition::Clear
                }
            }
        }
    }
}

impl fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkyCondition::Clear => "clear",
            SkyCondition::Cloudy => "cloudy",
            SkyCondition::Rain => "rain",
            SkyCondition::Storm => "storm",
            SkyCondition::Snow => "snow",
            SkyCondition::Windy => "windy",
        };
        f.write_str(name)
    }
}

type TimeRows = &'static [((TimePeriod, TimePeriod), &'static str)];
type SkyRows = &'static [((SkyCondition, SkyCondition), &'static str)];

static HARBOR_TIME: TimeRows = &[
    (
        (TimePeriod::WitchingHour, TimePeriod::Dawn),
        "Pale light creeps over the harbor as the first crews stir aboard their boats.",
    ),
    (
        (TimePeriod::Dawn, TimePeriod::Morning),
        "The sun clears the horizon and the fishing boats head out past the breakwater.",
    ),
    (
        (TimePeriod::Morning, TimePeriod::Noon),
        "The sun climbs high and the shadows shrink beneath the busy docks.",
    ),
    (
        (TimePeriod::Noon, TimePeriod::Afternoon),
        "The afternoon sun lays a golden sheen across the harbor water.",
    ),
    (
        (TimePeriod::Afternoon, TimePeriod::EarlyEvening),
        "The light turns amber and the first boats of the fleet turn for home.",
    ),
    (
        (TimePeriod::EarlyEvening, TimePeriod::Evening),
        "One by one the harbor lanterns are lit as the daylight fails.",
    ),
    (
        (TimePeriod::Evening, TimePeriod::LateNight),
        "Night settles over the harbor and the docks fall quiet for the watch.",
    ),
    (
        (TimePeriod::LateNight, TimePeriod::WitchingHour),
        "A deep hush falls over the harbor, broken only by the lap of the waves.",
    ),
];

static HARBOR_SKY: SkyRows = &[
    (
        (SkyCondition::Clear, SkyCondition::Rain),
        "Raindrops begin to ripple across the harbor waters, spreading rings over the \
         surface.",
    ),
    (
        (SkyCondition::Clear, SkyCondition::Storm),
        "Dark clouds roll in off the sea and the waves grow choppy ahead of the storm.",
    ),
    (
        (SkyCondition::Rain, SkyCondition::Clear),
        "The rain tapers off, leaving the harbor calm and glistening.",
    ),
    (
        (SkyCondition::Rain, SkyCondition::Storm),
        "The rain thickens and thunder rolls over the water as the waves build.",
    ),
    (
        (SkyCondition::Storm, SkyCondition::Clear),
        "The storm moves out to sea and the harbor slowly settles behind it.",
    ),
    (
        (SkyCondition::Storm, SkyCondition::Rain),
        "The storm eases into a steady rain, though the water stays rough.",
    ),
    (
        (SkyCondition::Clear, SkyCondition::Cloudy),
        "Clouds gather over the harbor and their shadows slide across the water.",
    ),
    (
        (SkyCondition::Cloudy, SkyCondition::Clear),
        "The clouds break and sunlight sparkles across the harbor again.",
    ),
    (
        (SkyCondition::Clear, SkyCondition::Windy),
        "The wind picks up, raising white caps across the harbor.",
    ),
    (
        (SkyCondition::Windy, SkyCondition::Clear),
        "The wind dies down and the harbor settles into gentle ripples.",
    ),
];

static MARKET_SKY: SkyRows = &[
    (
        (SkyCondition::Clear, SkyCondition::Rain),
        "Rain begins to spatter the cobbles and traders hurry to pull their awnings \
         taut.",
    ),
    (
        (SkyCondition::Rain, SkyCondition::Clear),
        "The rain stops, and the wet cobbles of the square steam in the returning light.",
    ),
    (
        (SkyCondition::Clear, SkyCondition::Storm),
        "Thunder cracks over the square and the crowd scatters for cover.",
    ),
];

/// Time messages shared by every outdoor room without its own table
fn default_time_message(to: TimePeriod) -> &'static str {
    match to {
        TimePeriod::Dawn => "The eastern sky pales as dawn breaks.",
        TimePeriod::Morning => "The sun rises fully into the morning sky.",
        TimePeriod::Noon => "The sun reaches its height overhead.",
        TimePeriod::Afternoon => "The sun begins its slow slide into the afternoon.",
        TimePeriod::EarlyEvening => "The light softens as evening approaches.",
        TimePeriod::Evening => "Dusk gives way to evening.",
        TimePeriod::LateNight => "Night deepens around you.",
        TimePeriod::WitchingHour => "The world falls still in the smallest hours of the night.",
    }
}

fn default_indoor_time_message(to: TimePeriod) -> &'static str {
    match to {
        TimePeriod::Dawn => "Grey light begins to show at the edges of the shutters.",
        TimePeriod::Morning | TimePeriod::Noon | TimePeriod::Afternoon => {
            "The light from outside shifts as the day wears on."
        }
        TimePeriod::EarlyEvening => "The light outside turns golden and the sconces are lit.",
        TimePeriod::Evening | TimePeriod::LateNight | TimePeriod::WitchingHour => {
            "The lamps burn on as the night deepens outside."
        }
    }
}

fn default_sky_message(to: SkyCondition) -> &'static str {
    match to {
        SkyCondition::Clear => "The skies clear.",
        SkyCondition::Cloudy => "Clouds gather overhead.",
        SkyCondition::Rain => "It begins to rain.",
        SkyCondition::Storm => "Thunder rumbles as a storm rolls in.",
        SkyCondition::Snow => "Snow begins to fall.",
        SkyCondition::Windy => "The wind picks up.",
    }
}

fn default_indoor_sky_message(to: SkyCondition) -> &'static str {
    match to {
        SkyCondition::Clear | SkyCondition::Cloudy => "The light through the windows changes.",
        SkyCondition::Rain => "You hear rain begin to patter against the roof.",
        SkyCondition::Storm => "Thunder rumbles somewhere beyond the walls.",
        SkyCondition::Snow => "The windows take on the soft glow of falling snow.",
        SkyCondition::Windy => "The shutters rattle as the wind rises outside.",
    }
}

fn find<K: PartialEq + Copy>(rows: &[((K, K), &'static str)], from: K, to: K) -> Option<&'static str> {
    rows.iter()
        .find(|(key, _)| *key == (from, to))
        .map(|(_, message)| *message)
}

/// Message for a room whose time period moved from `from` to `to`
#[must_use]
pub fn time_transition(kind: RoomKind, from: TimePeriod, to: TimePeriod) -> &'static str {
    let table: TimeRows = match kind {
        RoomKind::Harbor => HARBOR_TIME,
        _ => &[],
    };
    find(table, from, to).unwrap_or_else(|| {
        if kind.is_tavern() {
            default_indoor_time_message(to)
        } else {
            default_time_message(to)
        }
    })
}

/// Message for a room whose sky moved from `from` to `to`
#[must_use]
pub fn weather_transition(kind: RoomKind, from: SkyCondition, to: SkyCondition) -> &'static str {
    let table: SkyRows = match kind {
        RoomKind::Harbor => HARBOR_SKY,
        RoomKind::Market => MARKET_SKY,
        _ => &[],
    };
    find(table, from, to).unwrap_or_else(|| {
        if kind.is_tavern() {
            default_indoor_sky_message(to)
        } else {
            default_sky_message(to)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_sky_condition_mapping() {
        let mut s = WeatherSnapshot::fallback(Utc::now());
        assert_eq!(SkyCondition::from_snapshot(&s), SkyCondition::Clear);

        s.wind_speed = 25.0;
        assert_eq!(SkyCondition::from_snapshot(&s), SkyCondition::Windy);

        s.weather_code = 95;
        assert_eq!(SkyCondition::from_snapshot(&s), SkyCondition::Storm);

        s.weather_code = 66;
        assert_eq!(SkyCondition::from_snapshot(&s), SkyCondition::Rain);
    }

    #[test]
    fn test_harbor_has_specific_messages() {
        let msg = weather_transition(RoomKind::Harbor, SkyCondition::Clear, SkyCondition::Rain);
        assert!(msg.starts_with("Raindrops begin to ripple across the harbor"));

        let msg = time_transition(RoomKind::Harbor, TimePeriod::Dawn, TimePeriod::Morning);
        assert!(msg.contains("fishing boats"));
    }

    #[test]
    fn test_unlisted_pairs_use_defaults() {
        assert_eq!(
            weather_transition(RoomKind::Harbor, SkyCondition::Snow, SkyCondition::Windy),
            "The wind picks up."
        );
        assert_eq!(
            time_transition(RoomKind::Generic, TimePeriod::WitchingHour, TimePeriod::Dawn),
            "The eastern sky pales as dawn breaks."
        );
    }

    #[test]
    fn test_tavern_rooms_get_muted_messages() {
        let msg = weather_transition(RoomKind::TavernBooth, SkyCondition::Clear, SkyCondition::Rain);
        assert!(msg.contains("roof"));
        let msg = time_transition(RoomKind::TavernKitchen, TimePeriod::Afternoon, TimePeriod::EarlyEvening);
        assert!(msg.contains("sconces"));
    }
}
