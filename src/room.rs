//! Rooms as the description engine sees them
//!
//! Every room is [`Describable`]. Rooms whose text follows the weather also
//! implement [`WeatherAware`] and expose it through
//! [`Describable::as_weather_aware`]; everything else is static.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::DescriptionCache;
use crate::description::{DescriptionComposer, RoomKind, WeatherModifiers};
use crate::time_period::TimePeriod;
use crate::transitions::SkyCondition;
use crate::weather::WeatherSnapshot;
use crate::window::Window;

/// Shown for static rooms with no description of their own
pub const NOTHING_SPECIAL: &str = "You see nothing special.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub name: String,
    pub destination: String,
}

impl Exit {
    pub fn new(name: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
        }
    }
}

/// Whoever is looking at the room
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Looker {
    pub name: String,
    #[serde(default)]
    pub brief: bool,
}

impl Looker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brief: false,
        }
    }

    #[must_use]
    pub fn brief(mut self, brief: bool) -> Self {
        self.brief = brief;
        self
    }
}

/// Inputs for rendering one room at one instant
pub struct RenderContext<'a> {
    pub now: DateTime<Utc>,
    pub period: TimePeriod,
    pub snapshot: Arc<WeatherSnapshot>,
    pub composer: &'a dyn DescriptionComposer,
}

pub trait Describable: Send {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn exits(&self) -> &[Exit];

    fn windows(&self) -> &[Window] {
        &[]
    }

    /// Text for rooms without a dynamic description
    fn fixed_description(&self) -> &str {
        ""
    }

    /// Whether a weather status line is shown under the description
    fn show_status_line(&self) -> bool {
        false
    }

    fn as_weather_aware(&mut self) -> Option<&mut dyn WeatherAware> {
        None
    }
}

pub trait WeatherAware {
    fn kind(&self) -> RoomKind;
    fn location_id(&self) -> &str;
    fn modifiers(&self) -> WeatherModifiers;

    /// Text for the current period, served from cache while fresh
    fn get_display_desc(&mut self, ctx: &RenderContext<'_>, looker: &Looker) -> String;

    /// The reading the current text was composed from
    fn get_weather_data(&self) -> Option<Arc<WeatherSnapshot>>;

    /// Re-render the current period now and drop the brief text
    fn update_description(&mut self, ctx: &RenderContext<'_>) -> String;

    /// Forget every cached period and all weather-derived state
    fn reset(&mut self);

    fn cache(&self) -> &DescriptionCache;

    /// Record the period now in effect, returning the previous one if it changed
    fn observe_period(&mut self, period: TimePeriod) -> Option<TimePeriod>;

    /// Record the sky now in effect, returning the previous one if it changed
    fn observe_sky(&mut self, sky: SkyCondition) -> Option<SkyCondition>;
}

/// A room with fixed text
#[derive(Debug, Clone)]
pub struct StaticRoom {
    id: String,
    name: String,
    description: String,
    exits: Vec<Exit>,
}

impl StaticRoom {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_exit(mut self, exit: Exit) -> Self {
        self.exits.push(exit);
        self
    }
}

impl Describable for StaticRoom {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn exits(&self) -> &[Exit] {
        &self.exits
    }

    fn fixed_description(&self) -> &str {
        if self.description.trim().is_empty() {
            NOTHING_SPECIAL
        } else {
            &self.description
        }
    }
}

/// A room whose description follows the time of day and the weather
#[derive(Debug, Clone)]
pub struct DynamicRoom {
    id: String,
    name: String,
    kind: RoomKind,
    location_id: String,
    modifiers: WeatherModifiers,
    exits: Vec<Exit>,
    windows: Vec<Window>,
    status_line: bool,
    cache: DescriptionCache,
    weather_data: Option<Arc<WeatherSnapshot>>,
    brief_desc: Option<(TimePeriod, String)>,
    last_period: Option<TimePeriod>,
    last_sky: Option<SkyCondition>,
}

impl DynamicRoom {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: RoomKind,
        location_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            location_id: location_id.into(),
            modifiers: kind.default_modifiers(),
            exits: Vec::new(),
            windows: Vec::new(),
            status_line: kind == RoomKind::Generic,
            cache: DescriptionCache::default(),
            weather_data: None,
            brief_desc: None,
            last_period: None,
            last_sky: None,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: WeatherModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_exit(mut self, exit: Exit) -> Self {
        self.exits.push(exit);
        self
    }

    #[must_use]
    pub fn with_window(mut self, window: Window) -> Self {
        self.windows.push(window);
        self
    }

    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = DescriptionCache::new(ttl);
        self
    }

    /// Direct cache access, mainly for expiring entries in tests
    pub fn cache_mut(&mut self) -> &mut DescriptionCache {
        &mut self.cache
    }

    fn compose(&self, ctx: &RenderContext<'_>) -> String {
        ctx.composer
            .compose(self.kind, ctx.period, &ctx.snapshot, self.modifiers)
    }
}

impl Describable for DynamicRoom {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn exits(&self) -> &[Exit] {
        &self.exits
    }

    fn windows(&self) -> &[Window] {
        &self.windows
    }

    fn show_status_line(&self) -> bool {
        self.status_line
    }

    fn as_weather_aware(&mut self) -> Option<&mut dyn WeatherAware> {
        Some(self)
    }
}

impl WeatherAware for DynamicRoom {
    fn kind(&self) -> RoomKind {
        self.kind
    }

    fn location_id(&self) -> &str {
        &self.location_id
    }

    fn modifiers(&self) -> WeatherModifiers {
        self.modifiers
    }

    fn get_display_desc(&mut self, ctx: &RenderContext<'_>, looker: &Looker) -> String {
        if looker.brief {
            if let Some((period, text)) = &self.brief_desc {
                if *period == ctx.period {
                    return text.clone();
                }
            }
            let text = ctx
                .composer
                .compose_brief(self.kind, ctx.period, &ctx.snapshot, self.modifiers);
            self.brief_desc = Some((ctx.period, text.clone()));
            return text;
        }

        let (kind, modifiers) = (self.kind, self.modifiers);
        let mut rendered = false;
        let text = self.cache.get_or_render(ctx.period, ctx.now, || {
            rendered = true;
            ctx.composer
                .compose(kind, ctx.period, &ctx.snapshot, modifiers)
        });
        if rendered {
            self.weather_data = Some(Arc::clone(&ctx.snapshot));
            self.brief_desc = None;
        }
        text
    }

    fn get_weather_data(&self) -> Option<Arc<WeatherSnapshot>> {
        self.weather_data.clone()
    }

    fn update_description(&mut self, ctx: &RenderContext<'_>) -> String {
        debug!("Rendering {} for {}", self.id, ctx.period);
        let text = self.compose(ctx);
        self.cache.store(ctx.period, text.clone(), ctx.now);
        self.weather_data = Some(Arc::clone(&ctx.snapshot));
        self.brief_desc = None;
        text
    }

    fn reset(&mut self) {
        self.cache.clear();
        self.weather_data = None;
        self.brief_desc = None;
    }

    fn cache(&self) -> &DescriptionCache {
        &self.cache
    }

    fn observe_period(&mut self, period: TimePeriod) -> Option<TimePeriod> {
        let previous = self.last_period.replace(period);
        previous.filter(|p| *p != period)
    }

    fn observe_sky(&mut self, sky: SkyCondition) -> Option<SkyCondition> {
        let previous = self.last_sky.replace(sky);
        previous.filter(|s| *s != sky)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::TableComposer;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts composer calls
    #[derive(Default)]
    struct SpyComposer {
        calls: AtomicUsize,
    }

    impl DescriptionComposer for SpyComposer {
        fn compose(
            &self,
            kind: RoomKind,
            period: TimePeriod,
            _snapshot: &WeatherSnapshot,
            _flags: WeatherModifiers,
        ) -> String {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            format!("{kind} at {period} #{n}")
        }

        fn compose_brief(
            &self,
            kind: RoomKind,
            _period: TimePeriod,
            _snapshot: &WeatherSnapshot,
            _flags: WeatherModifiers,
        ) -> String {
            format!("brief {kind}")
        }
    }

    fn ctx<'a>(composer: &'a dyn DescriptionComposer, period: TimePeriod) -> RenderContext<'a> {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 18, 0, 0).unwrap();
        RenderContext {
            now,
            period,
            snapshot: Arc::new(WeatherSnapshot::fallback(now)),
            composer,
        }
    }

    fn market() -> DynamicRoom {
        DynamicRoom::new("market_square", "Market Square", RoomKind::Market, "main_island")
    }

    #[test]
    fn test_display_desc_uses_cache() {
        let spy = SpyComposer::default();
        let mut room = market();
        let looker = Looker::new("tester");
        let ctx = ctx(&spy, TimePeriod::Noon);
        assert!(room.get_weather_data().is_none());

        let first = room.get_display_desc(&ctx, &looker);
        assert!(room.get_weather_data().is_some());
        let second = room.get_display_desc(&ctx, &looker);
        assert_eq!(first, second);
        assert_eq!(spy.calls.load(Ordering::SeqCst), 1);

        room.cache_mut().backdate(TimePeriod::Noon, Duration::seconds(901));
        room.get_display_desc(&ctx, &looker);
        assert_eq!(spy.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_update_description_always_renders() {
        let spy = SpyComposer::default();
        let mut room = market();
        let ctx = ctx(&spy, TimePeriod::Dawn);
        room.update_description(&ctx);
        room.update_description(&ctx);
        assert_eq!(spy.calls.load(Ordering::SeqCst), 2);
        assert!(room.get_weather_data().is_some());
    }

    #[test]
    fn test_reset_clears_every_period() {
        let composer = TableComposer::default();
        let mut room = market();
        for period in TimePeriod::ALL {
            room.update_description(&ctx(&composer, period));
        }
        assert_eq!(room.cache().len(), 8);

        room.reset();
        assert!(room.cache().is_empty());
        assert!(room.get_weather_data().is_none());
    }

    #[test]
    fn test_brief_text_is_cached_until_update() {
        let spy = SpyComposer::default();
        let mut room = market();
        let ctx = ctx(&spy, TimePeriod::Noon);
        let brief = Looker::new("tester").brief(true);

        assert_eq!(room.get_display_desc(&ctx, &brief), "brief market");
        assert!(room.brief_desc.is_some());
        room.update_description(&ctx);
        assert!(room.brief_desc.is_none());
    }

    #[test]
    fn test_observe_period_reports_changes_only() {
        let mut room = market();
        assert_eq!(room.observe_period(TimePeriod::Dawn), None);
        assert_eq!(room.observe_period(TimePeriod::Dawn), None);
        assert_eq!(room.observe_period(TimePeriod::Morning), Some(TimePeriod::Dawn));
    }

    #[test]
    fn test_static_room_defaults() {
        let mut limbo = StaticRoom::new("limbo", "Limbo", "");
        assert_eq!(limbo.fixed_description(), NOTHING_SPECIAL);
        assert!(limbo.as_weather_aware().is_none());

        let mut market = market();
        assert!(market.as_weather_aware().is_some());
    }

    #[test]
    fn test_generic_rooms_show_status_line() {
        let cell = DynamicRoom::new("cell", "Holding Cell", RoomKind::Generic, "main_island");
        assert!(cell.show_status_line());
        assert!(!market().show_status_line());
    }
}
