//! Windows that look out on the weather from inside a room

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TidewatchError;
use crate::description::wrap_text;
use crate::time_period::{CoarsePeriod, TimePeriod};
use crate::weather::{WeatherCategory, WeatherSnapshot};

pub const DEFAULT_VIEW: &str = "The window provides a glimpse of the world outside.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    Harbor,
    Town,
    Tavern,
    Hallway,
}

impl WindowKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowKind::Harbor => "harbor",
            WindowKind::Town => "town",
            WindowKind::Tavern => "tavern",
            WindowKind::Hallway => "hallway",
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowKind {
    type Err = TidewatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "harbor" => Ok(WindowKind::Harbor),
            "town" => Ok(WindowKind::Town),
            "tavern" => Ok(WindowKind::Tavern),
            "hallway" => Ok(WindowKind::Hallway),
            other => Err(TidewatchError::config(format!("Unknown window kind '{other}'"))),
        }
    }
}

/// A window fixture placed in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub key: String,
    pub kind: WindowKind,
}

impl Window {
    pub fn new(key: impl Into<String>, kind: WindowKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}

/// How the glass itself looks
fn pane_state(snapshot: &WeatherSnapshot) -> &'static str {
    match snapshot.category() {
        WeatherCategory::Thunderstorm => {
            "The pane trembles with each clap of thunder as rain sheets down the glass."
        }
        WeatherCategory::Rain => "Raindrops trace shifting trails down the window glass.",
        _ if snapshot.wind_speed > 15.0 => "The window creaks now and then against the wind.",
        _ if snapshot.apparent_temperature < 50.0 => {
            "A thin rim of condensation has formed around the edges of the pane."
        }
        _ => "The clean pane gives a clear view outside.",
    }
}

fn harbor_view(period: TimePeriod, category: WeatherCategory) -> &'static str {
    if category == WeatherCategory::Thunderstorm {
        return "Through the streaming glass, lightning shows ships straining at their \
                moorings and waves bursting against the seawall.";
    }
    match period {
        TimePeriod::Dawn => {
            "Below, the harbor stirs as the sky lightens and fishermen ready their boats \
             beneath wheeling gulls."
        }
        TimePeriod::Morning => {
            "The harbor bustles below, ships slipping in and out of port while dockhands \
             and merchants crowd the quay."
        }
        TimePeriod::Noon => "Sunlight glitters on the harbor and the docks teem with the day's trade.",
        TimePeriod::Afternoon => {
            "Long shadows stretch across the harbor as ships rock gently at their moorings."
        }
        TimePeriod::EarlyEvening => {
            "The harbor quiets as the sun sinks, a few late boats gliding into port."
        }
        TimePeriod::Evening => "Lanterns glimmer along the harbor like fallen stars.",
        TimePeriod::LateNight => {
            "The harbor sleeps under the stars, with only a few lights moving on the water."
        }
        TimePeriod::WitchingHour => {
            "The harbor lies in pre-dawn stillness, the moored ships creaking softly."
        }
    }
}

fn town_view(period: TimePeriod, category: WeatherCategory) -> &'static str {
    match category {
        WeatherCategory::Thunderstorm => {
            return "Lightning picks out the town's rooftops in sudden flashes while rain \
                    cascades from tiles and gutters.";
        }
        WeatherCategory::Rain => {
            return "Rain runs in silver rivers along the gutters and the wet tiles gleam \
                    whenever the light catches them.";
        }
        _ => {}
    }
    match period {
        TimePeriod::Dawn => "The town's rooftops emerge from the dark, chimney smoke rising straight in the still air.",
        TimePeriod::Morning => "Morning light plays over the rooftops and smoke rises from dozens of hearths.",
        TimePeriod::Noon => "The rooftops lie bright in the midday sun, pigeons preening on the warm ledges.",
        TimePeriod::Afternoon => "Long shadows stretch across the rooftops as smoke rises from busy kitchens.",
        TimePeriod::EarlyEvening => "Windows begin to glow across the town as the last sun turns the roofs to copper.",
        TimePeriod::Evening => "Lit windows spread across the town, and watchmen's lanterns bob along the streets.",
        TimePeriod::LateNight => "Most windows have gone dark and moonlight silvers the rooftops.",
        TimePeriod::WitchingHour => "The town sleeps, and only a cat moves along the rooftops.",
    }
}

fn tavern_view(period: TimePeriod, category: WeatherCategory) -> &'static str {
    match category {
        WeatherCategory::Thunderstorm => {
            "The storm rages outside, making the tavern feel all the more welcoming."
        }
        WeatherCategory::Rain => "Rain blurs the street outside into smears of light and shadow.",
        _ => match period {
            TimePeriod::Dawn | TimePeriod::Morning => "The street outside is waking, carts rattling past the door.",
            TimePeriod::Noon | TimePeriod::Afternoon => "Townsfolk pass by outside in the bright daylight.",
            TimePeriod::EarlyEvening | TimePeriod::Evening => {
                "Lamplighters make their rounds along the street outside."
            }
            TimePeriod::LateNight | TimePeriod::WitchingHour => {
                "The street outside is dark and empty."
            }
        },
    }
}

fn hallway_view(period: TimePeriod, category: WeatherCategory) -> &'static str {
    if category == WeatherCategory::Thunderstorm {
        return "Beyond the glass, lightning shows the rooftops for an instant and is gone.";
    }
    match period.coarse() {
        CoarsePeriod::Dawn => "The rooftops beyond are touched with the first pink of dawn.",
        CoarsePeriod::Day => "Daylight shows the neighboring rooftops and a slice of sky.",
        CoarsePeriod::Dusk => "The sky beyond the rooftops burns orange with sunset.",
        CoarsePeriod::Night => DEFAULT_VIEW,
    }
}

/// Pane state followed by the view, wrapped to `width`
#[must_use]
pub fn describe_window(
    kind: WindowKind,
    period: TimePeriod,
    snapshot: &WeatherSnapshot,
    width: usize,
) -> String {
    let category = snapshot.category();
    let view = match kind {
        WindowKind::Harbor => harbor_view(period, category),
        WindowKind::Town => town_view(period, category),
        WindowKind::Tavern => tavern_view(period, category),
        WindowKind::Hallway => hallway_view(period, category),
    };
    wrap_text(&format!("{} {}", pane_state(snapshot), view), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reading(temp: f64, code: i64, wind: f64) -> WeatherSnapshot {
        let mut s = WeatherSnapshot::fallback(Utc::now());
        s.apparent_temperature = temp;
        s.weather_code = code;
        s.wind_speed = wind;
        s
    }

    #[test]
    fn test_pane_state_priority() {
        assert!(pane_state(&reading(40.0, 95, 30.0)).contains("thunder"));
        assert!(pane_state(&reading(40.0, 63, 30.0)).contains("Raindrops"));
        assert!(pane_state(&reading(40.0, 0, 16.0)).contains("wind"));
        assert!(pane_state(&reading(40.0, 0, 15.0)).contains("condensation"));
        assert!(pane_state(&reading(70.0, 0, 5.0)).contains("clear view"));
    }

    #[test]
    fn test_storm_overrides_view() {
        let text = describe_window(WindowKind::Harbor, TimePeriod::Noon, &reading(80.0, 95, 10.0), 78);
        assert!(text.contains("seawall"));
        assert!(!text.contains("glitters"));
    }

    #[test]
    fn test_every_window_renders_within_width() {
        let readings = [reading(70.0, 0, 5.0), reading(40.0, 63, 20.0), reading(90.0, 99, 30.0)];
        for kind in [WindowKind::Harbor, WindowKind::Town, WindowKind::Tavern, WindowKind::Hallway] {
            for period in TimePeriod::ALL {
                for r in &readings {
                    let text = describe_window(kind, period, r, 78);
                    assert!(!text.is_empty());
                    assert!(text.lines().all(|l| l.chars().count() <= 78), "{kind} {period}");
                }
            }
        }
    }

    #[test]
    fn test_hallway_night_uses_default_view() {
        let text = describe_window(WindowKind::Hallway, TimePeriod::LateNight, &reading(70.0, 0, 5.0), 200);
        assert!(text.ends_with(DEFAULT_VIEW));
    }

    #[test]
    fn test_window_kind_parsing() {
        assert_eq!("town".parse::<WindowKind>().unwrap(), WindowKind::Town);
        assert!("porthole".parse::<WindowKind>().is_err());
    }
}
