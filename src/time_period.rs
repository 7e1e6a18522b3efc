//! Time-of-day classification
//!
//! Maps a wall-clock hour in the game's timezone to one of eight named
//! periods. Room kinds with simpler text tables use the coarse four-period
//! view obtained through [`TimePeriod::coarse`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::TidewatchError;

/// Named segment of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    Dawn,
    Morning,
    Noon,
    Afternoon,
    EarlyEvening,
    Evening,
    LateNight,
    WitchingHour,
}

/// Four-period vocabulary used by the generic weather-aware rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoarsePeriod {
    Dawn,
    Day,
    Dusk,
    Night,
}

/// Half-open hour range `[start, end)`. A range with `start > end` wraps
/// past midnight.
#[derive(Debug, Clone, Copy)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(&self, hour: u32) -> bool {
        if self.start <= self.end {
            self.start <= hour && hour < self.end
        } else {
            (self.start <= hour && hour < 24) || hour < self.end
        }
    }
}

/// Declaration order is match order.
pub const PERIOD_TABLE: [(TimePeriod, HourRange); 8] = [
    (TimePeriod::Dawn, HourRange::new(5, 7)),
    (TimePeriod::Morning, HourRange::new(7, 10)),
    (TimePeriod::Noon, HourRange::new(10, 14)),
    (TimePeriod::Afternoon, HourRange::new(14, 17)),
    (TimePeriod::EarlyEvening, HourRange::new(17, 19)),
    (TimePeriod::Evening, HourRange::new(19, 23)),
    (TimePeriod::LateNight, HourRange::new(23, 2)),
    (TimePeriod::WitchingHour, HourRange::new(2, 5)),
];

/// Returned only when no range matches, which the table makes impossible for
/// hours 0-23.
pub const FALLBACK_PERIOD: TimePeriod = TimePeriod::Evening;

/// Classify an hour of the day (0-23)
#[must_use]
pub fn classify(hour: u32) -> TimePeriod {
    PERIOD_TABLE
        .iter()
        .find(|(_, range)| range.contains(hour))
        .map_or(FALLBACK_PERIOD, |(period, _)| *period)
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 8] = [
        TimePeriod::Dawn,
        TimePeriod::Morning,
        TimePeriod::Noon,
        TimePeriod::Afternoon,
        TimePeriod::EarlyEvening,
        TimePeriod::Evening,
        TimePeriod::LateNight,
        TimePeriod::WitchingHour,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::Dawn => "dawn",
            TimePeriod::Morning => "morning",
            TimePeriod::Noon => "noon",
            TimePeriod::Afternoon => "afternoon",
            TimePeriod::EarlyEvening => "early_evening",
            TimePeriod::Evening => "evening",
            TimePeriod::LateNight => "late_night",
            TimePeriod::WitchingHour => "witching_hour",
        }
    }

    /// Collapse onto the four-period vocabulary
    #[must_use]
    pub fn coarse(&self) -> CoarsePeriod {
        match self {
            TimePeriod::Dawn => CoarsePeriod::Dawn,
            TimePeriod::Morning | TimePeriod::Noon | TimePeriod::Afternoon => CoarsePeriod::Day,
            TimePeriod::EarlyEvening => CoarsePeriod::Dusk,
            TimePeriod::Evening | TimePeriod::LateNight | TimePeriod::WitchingHour => {
                CoarsePeriod::Night
            }
        }
    }

    /// Night-time periods, when most outdoor activity has stopped
    #[must_use]
    pub fn is_small_hours(&self) -> bool {
        matches!(self, TimePeriod::LateNight | TimePeriod::WitchingHour)
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = TidewatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimePeriod::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| TidewatchError::config(format!("Unknown time period '{s}'")))
    }
}

impl CoarsePeriod {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CoarsePeriod::Dawn => "dawn",
            CoarsePeriod::Day => "day",
            CoarsePeriod::Dusk => "dusk",
            CoarsePeriod::Night => "night",
        }
    }
}

impl fmt::Display for CoarsePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The game's wall-clock calendar. Hours are read in the configured timezone,
/// or in system-local time when that zone could not be loaded.
#[derive(Debug, Clone, Copy)]
pub struct GameCalendar {
    timezone: Option<Tz>,
}

impl GameCalendar {
    #[must_use]
    pub fn new(timezone: Tz) -> Self {
        Self {
            timezone: Some(timezone),
        }
    }

    /// Calendar that reads the host's local time
    #[must_use]
    pub fn local() -> Self {
        Self { timezone: None }
    }

    /// Build from an IANA zone name, falling back to local time
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.parse::<Tz>() {
            Ok(tz) => Self::new(tz),
            Err(e) => {
                warn!(
                    "Timezone '{}' unavailable ({}), using system local time",
                    name, e
                );
                Self::local()
            }
        }
    }

    #[must_use]
    pub fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    /// Hour of day (0-23) at the given instant
    #[must_use]
    pub fn hour_at(&self, now: DateTime<Utc>) -> u32 {
        match self.timezone {
            Some(tz) => now.with_timezone(&tz).hour(),
            None => now.with_timezone(&Local).hour(),
        }
    }

    #[must_use]
    pub fn period_at(&self, now: DateTime<Utc>) -> TimePeriod {
        classify(self.hour_at(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[test]
    fn test_every_hour_has_exactly_one_period() {
        for hour in 0..24 {
            let matches: Vec<TimePeriod> = PERIOD_TABLE
                .iter()
                .filter(|(_, range)| range.contains(hour))
                .map(|(period, _)| *period)
                .collect();
            assert_eq!(matches.len(), 1, "hour {hour} matched {matches:?}");
            assert_eq!(classify(hour), matches[0]);
        }
    }

    #[test]
    fn test_every_period_is_reachable() {
        for period in TimePeriod::ALL {
            assert!(
                (0..24).any(|hour| classify(hour) == period),
                "{period} never selected"
            );
        }
    }

    #[rstest]
    #[case(0, TimePeriod::LateNight)]
    #[case(1, TimePeriod::LateNight)]
    #[case(2, TimePeriod::WitchingHour)]
    #[case(4, TimePeriod::WitchingHour)]
    #[case(5, TimePeriod::Dawn)]
    #[case(7, TimePeriod::Morning)]
    #[case(10, TimePeriod::Noon)]
    #[case(13, TimePeriod::Noon)]
    #[case(14, TimePeriod::Afternoon)]
    #[case(17, TimePeriod::EarlyEvening)]
    #[case(19, TimePeriod::Evening)]
    #[case(22, TimePeriod::Evening)]
    #[case(23, TimePeriod::LateNight)]
    fn test_classify_boundaries(#[case] hour: u32, #[case] expected: TimePeriod) {
        assert_eq!(classify(hour), expected);
    }

    #[test]
    fn test_out_of_range_hour_uses_fallback() {
        assert_eq!(classify(24), FALLBACK_PERIOD);
        assert_eq!(classify(99), FALLBACK_PERIOD);
    }

    #[rstest]
    #[case(TimePeriod::Dawn, CoarsePeriod::Dawn)]
    #[case(TimePeriod::Morning, CoarsePeriod::Day)]
    #[case(TimePeriod::Noon, CoarsePeriod::Day)]
    #[case(TimePeriod::Afternoon, CoarsePeriod::Day)]
    #[case(TimePeriod::EarlyEvening, CoarsePeriod::Dusk)]
    #[case(TimePeriod::Evening, CoarsePeriod::Night)]
    #[case(TimePeriod::LateNight, CoarsePeriod::Night)]
    #[case(TimePeriod::WitchingHour, CoarsePeriod::Night)]
    fn test_coarse_collapse(#[case] period: TimePeriod, #[case] expected: CoarsePeriod) {
        assert_eq!(period.coarse(), expected);
    }

    #[test]
    fn test_period_names_round_trip() {
        for period in TimePeriod::ALL {
            assert_eq!(period.as_str().parse::<TimePeriod>().unwrap(), period);
        }
        assert!("teatime".parse::<TimePeriod>().is_err());
    }

    #[test]
    fn test_calendar_reads_configured_zone() {
        let calendar = GameCalendar::from_name("America/Chicago");
        assert!(calendar.timezone().is_some());

        // 18:00 UTC in July is 13:00 CDT
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 18, 0, 0).unwrap();
        assert_eq!(calendar.hour_at(now), 13);
        assert_eq!(calendar.period_at(now), TimePeriod::Noon);
    }

    #[test]
    fn test_unknown_zone_falls_back_to_local() {
        let calendar = GameCalendar::from_name("Atlantis/Lost_City");
        assert!(calendar.timezone().is_none());

        let now = Utc.with_ymd_and_hms(2024, 7, 1, 18, 0, 0).unwrap();
        assert!(calendar.hour_at(now) < 24);
    }
}
