//! Room description composition
//!
//! A description is a base paragraph for the room kind and time period,
//! followed by at most one temperature, wind and weather clause, and the
//! kind's fixed closing sentence. The result is wrapped to the configured
//! width.

pub mod bands;
pub mod kind;
pub mod profile;
pub mod profiles;
pub mod wrap;

pub use kind::{RoomKind, WeatherModifiers};
pub use profile::{DescriptionProfile, PeriodTable, ProfileRegistry};
pub use wrap::wrap_text;

use tracing::warn;

use crate::time_period::TimePeriod;
use crate::weather::WeatherSnapshot;
use bands::IndoorAmbience;

/// Used when a profile has no paragraph for the requested period
pub const PLACEHOLDER_PARAGRAPH: &str = "There is little here worth remarking on.";

pub const DEFAULT_WRAP_WIDTH: usize = 78;

/// Turns room state into display text. Implementations must be pure.
pub trait DescriptionComposer: Send + Sync {
    fn compose(
        &self,
        kind: RoomKind,
        period: TimePeriod,
        snapshot: &WeatherSnapshot,
        flags: WeatherModifiers,
    ) -> String;

    /// One or two sentence summary for players in brief mode
    fn compose_brief(
        &self,
        kind: RoomKind,
        period: TimePeriod,
        snapshot: &WeatherSnapshot,
        flags: WeatherModifiers,
    ) -> String;
}

/// Composer backed by the static profile tables
#[derive(Debug)]
pub struct TableComposer {
    registry: ProfileRegistry,
    wrap_width: usize,
}

impl TableComposer {
    #[must_use]
    pub fn new(registry: ProfileRegistry, wrap_width: usize) -> Self {
        Self {
            registry,
            wrap_width,
        }
    }

    #[must_use]
    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }

    fn base_paragraph(&self, kind: RoomKind, period: TimePeriod) -> &'static str {
        match self
            .registry
            .get(kind)
            .and_then(|profile| profile.base_paragraph(period))
        {
            Some(text) => text,
            None => {
                warn!("No base paragraph for {} at {}, using placeholder", kind, period);
                PLACEHOLDER_PARAGRAPH
            }
        }
    }

    /// The weather-driven clauses in display order
    fn clauses(
        profile: &DescriptionProfile,
        period: TimePeriod,
        snapshot: &WeatherSnapshot,
        flags: WeatherModifiers,
    ) -> Vec<&'static str> {
        if flags.magical {
            return Vec::new();
        }
        if flags.indoor {
            return profile
                .indoor_clause(IndoorAmbience::from_snapshot(snapshot))
                .into_iter()
                .collect();
        }

        let wind = if flags.sheltered {
            None
        } else {
            profile.wind_clause(snapshot.wind_speed)
        };

        [
            profile.temperature_clause(snapshot.apparent_temperature, period),
            wind,
            profile.weather_clause(snapshot.category()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Default for TableComposer {
    fn default() -> Self {
        Self::new(ProfileRegistry::standard(), DEFAULT_WRAP_WIDTH)
    }
}

impl DescriptionComposer for TableComposer {
    fn compose(
        &self,
        kind: RoomKind,
        period: TimePeriod,
        snapshot: &WeatherSnapshot,
        flags: WeatherModifiers,
    ) -> String {
        let mut parts = vec![self.base_paragraph(kind, period)];
        if let Some(profile) = self.registry.get(kind) {
            parts.extend(Self::clauses(profile, period, snapshot, flags));
            parts.push(profile.closing);
        }
        wrap_text(&parts.join(" "), self.wrap_width)
    }

    fn compose_brief(
        &self,
        kind: RoomKind,
        period: TimePeriod,
        snapshot: &WeatherSnapshot,
        flags: WeatherModifiers,
    ) -> String {
        let mut parts = vec![first_sentence(self.base_paragraph(kind, period))];
        if let Some(profile) = self.registry.get(kind) {
            let weather = if flags.magical {
                None
            } else if flags.indoor {
                profile.indoor_clause(IndoorAmbience::from_snapshot(snapshot))
            } else {
                profile.weather_clause(snapshot.category())
            };
            parts.extend(weather);
        }
        wrap_text(&parts.join(" "), self.wrap_width)
    }
}

/// Text up to and including the first sentence terminator
fn first_sentence(text: &str) -> &str {
    text.char_indices()
        .find(|&(i, c)| {
            matches!(c, '.' | '!' | '?')
                && text[i + c.len_utf8()..]
                    .chars()
                    .next()
                    .is_none_or(char::is_whitespace)
        })
        .map_or(text, |(i, c)| &text[..i + c.len_utf8()])
}
