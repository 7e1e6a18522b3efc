//! Static text tables for one room kind

use std::collections::HashMap;

use super::bands::{IndoorAmbience, TemperatureBand, WindBand};
use super::kind::RoomKind;
use super::profiles;
use crate::time_period::{CoarsePeriod, TimePeriod};
use crate::weather::WeatherCategory;

/// Base paragraphs keyed by either period vocabulary
#[derive(Debug)]
pub enum PeriodTable {
    Fine(&'static [(TimePeriod, &'static str)]),
    Coarse(&'static [(CoarsePeriod, &'static str)]),
}

impl PeriodTable {
    #[must_use]
    pub fn lookup(&self, period: TimePeriod) -> Option<&'static str> {
        match self {
            PeriodTable::Fine(rows) => lookup(rows, &period),
            PeriodTable::Coarse(rows) => lookup(rows, &period.coarse()),
        }
    }
}

fn lookup<K: PartialEq>(rows: &[(K, &'static str)], key: &K) -> Option<&'static str> {
    rows.iter().find(|(k, _)| k == key).map(|(_, text)| *text)
}

/// Everything the composer needs to describe one kind of room
#[derive(Debug)]
pub struct DescriptionProfile {
    pub kind: RoomKind,
    pub periods: PeriodTable,
    pub temperature: &'static [(TemperatureBand, &'static str)],
    /// Temperature clauses are left out in the late-night hours
    pub quiet_at_night: bool,
    pub wind: &'static [(WindBand, &'static str)],
    pub weather: &'static [(WeatherCategory, &'static str)],
    /// Used instead of the outdoor clauses when the room is indoors
    pub indoor: &'static [(IndoorAmbience, &'static str)],
    pub closing: &'static str,
}

impl DescriptionProfile {
    #[must_use]
    pub fn base_paragraph(&self, period: TimePeriod) -> Option<&'static str> {
        self.periods.lookup(period)
    }

    #[must_use]
    pub fn temperature_clause(&self, temp: f64, period: TimePeriod) -> Option<&'static str> {
        if self.quiet_at_night && period.is_small_hours() {
            return None;
        }
        lookup(self.temperature, &TemperatureBand::from_fahrenheit(temp))
    }

    #[must_use]
    pub fn wind_clause(&self, speed: f64) -> Option<&'static str> {
        lookup(self.wind, &WindBand::from_mph(speed))
    }

    #[must_use]
    pub fn weather_clause(&self, category: WeatherCategory) -> Option<&'static str> {
        lookup(self.weather, &category)
    }

    #[must_use]
    pub fn indoor_clause(&self, ambience: IndoorAmbience) -> Option<&'static str> {
        lookup(self.indoor, &ambience)
    }
}

/// Profiles by room kind
#[derive(Debug)]
pub struct ProfileRegistry {
    profiles: HashMap<RoomKind, &'static DescriptionProfile>,
}

impl ProfileRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// Registry holding every built-in profile
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for profile in profiles::ALL {
            registry.register(profile);
        }
        registry
    }

    pub fn register(&mut self, profile: &'static DescriptionProfile) {
        self.profiles.insert(profile.kind, profile);
    }

    #[must_use]
    pub fn get(&self, kind: RoomKind) -> Option<&'static DescriptionProfile> {
        self.profiles.get(&kind).copied()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
