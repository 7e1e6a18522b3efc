//! The description engine the game framework talks to
//!
//! Owns the registered rooms, the shared [`WeatherStore`] and the composer.
//! Every room sits behind its own lock so rendering one room never waits on
//! another.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::TidewatchError;
use crate::clock::Clock;
use crate::description::{DescriptionComposer, RoomKind, wrap_text};
use crate::room::{Describable, Looker, RenderContext, WeatherAware};
use crate::time_period::{GameCalendar, TimePeriod};
use crate::transitions::{SkyCondition, time_transition, weather_transition};
use crate::weather::{RefreshOutcome, WeatherSnapshot, WeatherStore};
use crate::window::describe_window;

const NOTICE_CAPACITY: usize = 64;

type RoomHandle = Arc<Mutex<Box<dyn Describable>>>;

/// A message shown to everyone in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomNotice {
    pub room_id: String,
    pub message: String,
}

/// What one periodic tick did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Locations whose weather changed significantly
    pub changed_locations: Vec<String>,
    /// Rooms whose description was rendered again
    pub regenerated_rooms: Vec<String>,
    pub notices_sent: usize,
}

/// Listing entry for a registered room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub id: String,
    pub name: String,
    pub kind: Option<RoomKind>,
    pub location_id: Option<String>,
    pub windows: Vec<String>,
}

pub struct WeatherEngine {
    store: Arc<WeatherStore>,
    composer: Arc<dyn DescriptionComposer>,
    calendar: GameCalendar,
    clock: Arc<dyn Clock>,
    rooms: RwLock<BTreeMap<String, RoomHandle>>,
    notices: broadcast::Sender<RoomNotice>,
    wrap_width: usize,
}

impl WeatherEngine {
    pub fn new(
        store: Arc<WeatherStore>,
        composer: Arc<dyn DescriptionComposer>,
        calendar: GameCalendar,
        clock: Arc<dyn Clock>,
        wrap_width: usize,
    ) -> Self {
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);
        Self {
            store,
            composer,
            calendar,
            clock,
            rooms: RwLock::new(BTreeMap::new()),
            notices,
            wrap_width,
        }
    }

    #[must_use]
    pub fn store(&self) -> &WeatherStore {
        &self.store
    }

    /// Add a room, replacing any earlier room with the same id
    pub fn register<R: Describable + 'static>(&self, room: R) {
        let id = room.id().to_string();
        let mut rooms = self.rooms.write().unwrap_or_else(PoisonError::into_inner);
        if rooms
            .insert(id.clone(), Arc::new(Mutex::new(Box::new(room))))
            .is_some()
        {
            warn!("Room '{}' registered twice, keeping the newer one", id);
        }
    }

    pub fn register_all(&self, rooms: Vec<Box<dyn Describable>>) {
        let mut map = self.rooms.write().unwrap_or_else(PoisonError::into_inner);
        for room in rooms {
            map.insert(room.id().to_string(), Arc::new(Mutex::new(room)));
        }
        info!("{} room(s) registered", map.len());
    }

    #[must_use]
    pub fn room_ids(&self) -> Vec<String> {
        self.rooms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    fn room(&self, room_id: &str) -> Result<RoomHandle> {
        self.rooms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(room_id)
            .cloned()
            .ok_or_else(|| TidewatchError::unknown_room(room_id))
    }

    fn handles(&self) -> Vec<RoomHandle> {
        self.rooms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    /// Receive transition messages for every room
    pub fn subscribe(&self) -> broadcast::Receiver<RoomNotice> {
        self.notices.subscribe()
    }

    fn notify(&self, room_id: &str, message: &str) {
        debug!("Notice for {}: {}", room_id, message);
        self.notices
            .send(RoomNotice {
                room_id: room_id.to_string(),
                message: message.to_string(),
            })
            .ok();
    }

    /// Period in effect right now
    #[must_use]
    pub fn get_time_period(&self) -> TimePeriod {
        self.calendar.period_at(self.clock.now())
    }

    /// Current reading for a location, or the default reading
    #[must_use]
    pub fn get_weather_data(&self, location_id: &str) -> Arc<WeatherSnapshot> {
        self.store.get(location_id)
    }

    fn context(&self, snapshot: Arc<WeatherSnapshot>) -> RenderContext<'_> {
        let now = self.clock.now();
        RenderContext {
            now,
            period: self.calendar.period_at(now),
            snapshot,
            composer: self.composer.as_ref(),
        }
    }

    /// Full text a player sees on looking at the room
    pub fn render_room_description(&self, room_id: &str, looker: &Looker) -> Result<String> {
        let handle = self.room(room_id)?;
        let mut room = handle.lock().unwrap_or_else(PoisonError::into_inner);

        let (description, status) = match room.as_weather_aware() {
            Some(aware) => {
                let snapshot = self.store.get(aware.location_id());
                let status = snapshot.status_line();
                let ctx = self.context(snapshot);
                (aware.get_display_desc(&ctx, looker), Some(status))
            }
            None => (wrap_text(room.fixed_description(), self.wrap_width), None),
        };

        let mut sections = vec![room.name().to_string(), description];
        if room.show_status_line() {
            sections.extend(status);
        }
        if !room.exits().is_empty() {
            let names: Vec<&str> = room.exits().iter().map(|e| e.name.as_str()).collect();
            sections.push(wrap_text(&format!("Exits: {}", names.join(", ")), self.wrap_width));
        }
        Ok(sections.join("\n"))
    }

    /// Drop every cached period for the room and render the current one again
    #[instrument(level = "debug", skip(self))]
    pub fn force_regenerate(&self, room_id: &str) -> Result<String> {
        let handle = self.room(room_id)?;
        let mut room = handle.lock().unwrap_or_else(PoisonError::into_inner);
        let aware = room
            .as_weather_aware()
            .ok_or_else(|| TidewatchError::not_weather_aware(room_id))?;

        aware.reset();
        let ctx = self.context(self.store.get(aware.location_id()));
        let text = aware.update_description(&ctx);
        info!("Regenerated description for {}", room_id);
        Ok(text)
    }

    /// What a player sees looking through one of the room's windows
    pub fn look_window(&self, room_id: &str, window_key: &str) -> Result<String> {
        let handle = self.room(room_id)?;
        let mut room = handle.lock().unwrap_or_else(PoisonError::into_inner);
        let kind = room
            .windows()
            .iter()
            .find(|w| w.key == window_key)
            .map(|w| w.kind)
            .ok_or_else(|| TidewatchError::unknown_window(room_id, window_key))?;
        let aware = room
            .as_weather_aware()
            .ok_or_else(|| TidewatchError::not_weather_aware(room_id))?;

        let snapshot = self.store.get(aware.location_id());
        Ok(describe_window(
            kind,
            self.get_time_period(),
            &snapshot,
            self.wrap_width,
        ))
    }

    #[must_use]
    pub fn room_summaries(&self) -> Vec<RoomSummary> {
        self.handles()
            .iter()
            .map(|handle| {
                let mut room = handle.lock().unwrap_or_else(PoisonError::into_inner);
                let id = room.id().to_string();
                let name = room.name().to_string();
                let windows = room.windows().iter().map(|w| w.key.clone()).collect();
                let (kind, location_id) = match room.as_weather_aware() {
                    Some(aware) => (Some(aware.kind()), Some(aware.location_id().to_string())),
                    None => (None, None),
                };
                RoomSummary {
                    id,
                    name,
                    kind,
                    location_id,
                    windows,
                }
            })
            .collect()
    }

    /// Eager first fetch, then record the period every room starts in
    pub async fn init(&self) -> TickReport {
        let outcomes = self.store.init().await;
        let report = self.apply_outcomes(&outcomes);
        self.rerender_tick();
        report
    }

    /// Fetch fresh weather and re-render rooms at locations that changed
    #[instrument(name = "weather_tick", level = "debug", skip(self))]
    pub async fn refresh_weather(&self) -> TickReport {
        let outcomes = self.store.refresh_all().await;
        self.apply_outcomes(&outcomes)
    }

    fn apply_outcomes(&self, outcomes: &[RefreshOutcome]) -> TickReport {
        let mut report = TickReport::default();

        for outcome in outcomes.iter().filter(|o| o.significant) {
            report.changed_locations.push(outcome.location_id.clone());
            let sky = SkyCondition::from_snapshot(&outcome.current);

            for handle in self.handles() {
                let mut room = handle.lock().unwrap_or_else(PoisonError::into_inner);
                let room_id = room.id().to_string();
                let Some(aware) = room.as_weather_aware() else {
                    continue;
                };
                if aware.location_id() != outcome.location_id {
                    continue;
                }

                aware.reset();
                let ctx = self.context(Arc::clone(&outcome.current));
                aware.update_description(&ctx);
                report.regenerated_rooms.push(room_id.clone());

                // The default reading never sets the sky
                if outcome.current.is_fallback() {
                    continue;
                }
                if let Some(previous) = aware.observe_sky(sky) {
                    if !aware.modifiers().magical {
                        self.notify(&room_id, weather_transition(aware.kind(), previous, sky));
                        report.notices_sent += 1;
                    }
                }
            }
        }

        if !report.changed_locations.is_empty() {
            info!(
                "Weather changed at {:?}, {} room(s) regenerated",
                report.changed_locations,
                report.regenerated_rooms.len()
            );
        }
        report
    }

    /// Announce period changes and re-render entries that went stale
    #[instrument(name = "rerender_tick", level = "debug", skip(self))]
    pub fn rerender_tick(&self) -> TickReport {
        let mut report = TickReport::default();
        let now = self.clock.now();
        let period = self.calendar.period_at(now);

        for handle in self.handles() {
            let mut room = handle.lock().unwrap_or_else(PoisonError::into_inner);
            let room_id = room.id().to_string();
            let Some(aware) = room.as_weather_aware() else {
                continue;
            };

            if let Some(previous) = aware.observe_period(period) {
                self.notify(&room_id, time_transition(aware.kind(), previous, period));
                report.notices_sent += 1;
            }

            if aware.cache().is_stale(period, now) {
                let ctx = self.context(self.store.get(aware.location_id()));
                aware.update_description(&ctx);
                report.regenerated_rooms.push(room_id);
            }
        }

        debug!(
            "Re-render check at {}: {} room(s) rendered",
            period,
            report.regenerated_rooms.len()
        );
        report
    }

    /// Log and drop the last known weather
    pub fn shutdown(&self) {
        info!("Shutting down description engine");
        self.store.flush();
    }
}
