//! Shared weather state for every tracked location
//!
//! The store is the only writer of weather data. Readers receive an
//! `Arc<WeatherSnapshot>` that stays valid after a later refresh swaps in a
//! newer reading.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use futures::future::join_all;
use tracing::{debug, error, info, instrument, warn};

use super::change::is_significant;
use super::open_meteo::WeatherSource;
use super::{TrackedLocation, WeatherSnapshot};
use crate::TidewatchError;
use crate::clock::Clock;

/// Result of refreshing one location
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub location_id: String,
    pub previous: Option<Arc<WeatherSnapshot>>,
    pub current: Arc<WeatherSnapshot>,
    pub significant: bool,
    pub fetch_failed: bool,
}

pub struct WeatherStore {
    locations: Vec<TrackedLocation>,
    snapshots: RwLock<HashMap<String, Arc<WeatherSnapshot>>>,
    source: Arc<dyn WeatherSource>,
    clock: Arc<dyn Clock>,
}

impl WeatherStore {
    pub fn new(
        locations: Vec<TrackedLocation>,
        source: Arc<dyn WeatherSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            locations,
            snapshots: RwLock::new(HashMap::new()),
            source,
            clock,
        }
    }

    #[must_use]
    pub fn locations(&self) -> &[TrackedLocation] {
        &self.locations
    }

    #[must_use]
    pub fn is_tracked(&self, location_id: &str) -> bool {
        self.locations.iter().any(|l| l.id == location_id)
    }

    /// Eagerly fetch every location once
    pub async fn init(&self) -> Vec<RefreshOutcome> {
        info!(
            "Initializing weather store for {} location(s)",
            self.locations.len()
        );
        self.refresh_all().await
    }

    /// Latest reading for a location, if one was ever installed
    #[must_use]
    pub fn try_get(&self, location_id: &str) -> Option<Arc<WeatherSnapshot>> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(location_id)
            .cloned()
    }

    /// Latest reading for a location, or the default reading when none exists
    #[must_use]
    pub fn get(&self, location_id: &str) -> Arc<WeatherSnapshot> {
        if let Some(snapshot) = self.try_get(location_id) {
            return snapshot;
        }
        if !self.is_tracked(location_id) {
            warn!("Weather requested for untracked location '{}'", location_id);
        }
        Arc::new(WeatherSnapshot::fallback(self.clock.now()))
    }

    fn install(&self, location_id: &str, snapshot: Arc<WeatherSnapshot>) {
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(location_id.to_string(), snapshot);
    }

    /// Fetch one location and swap in the new reading.
    ///
    /// On failure the previous reading is kept, or the default reading is
    /// installed when there is none.
    #[instrument(name = "refresh_weather", level = "debug", skip(self), fields(location = %location.id))]
    pub async fn refresh(&self, location: &TrackedLocation) -> RefreshOutcome {
        let previous = self.try_get(&location.id);

        match self.source.fetch_current(location).await {
            Ok(conditions) => {
                let current = Arc::new(conditions.into_snapshot(previous.as_deref(), self.clock.now()));
                // The default reading is never a baseline
                let observed = previous.as_deref().filter(|p| !p.is_fallback());
                let significant = is_significant(observed, &current);
                debug!(
                    "Fetched weather for {}: {} (significant: {})",
                    location.id,
                    current.describe(),
                    significant
                );
                self.install(&location.id, Arc::clone(&current));
                RefreshOutcome {
                    location_id: location.id.clone(),
                    previous,
                    current,
                    significant,
                    fetch_failed: false,
                }
            }
            Err(e) if !e.is_transient() => {
                error!("Weather source for {} is misconfigured: {}", location.id, e);
                self.recover(location, previous, &e)
            }
            Err(e) => self.recover(location, previous, &e),
        }
    }

    /// Keep the last known reading, or install the default one
    fn recover(
        &self,
        location: &TrackedLocation,
        previous: Option<Arc<WeatherSnapshot>>,
        e: &TidewatchError,
    ) -> RefreshOutcome {
        match previous {
            Some(last_known) => {
                warn!(
                    "Weather fetch for {} failed, keeping last known reading: {}",
                    location.id, e
                );
                RefreshOutcome {
                    location_id: location.id.clone(),
                    previous: Some(Arc::clone(&last_known)),
                    current: last_known,
                    significant: false,
                    fetch_failed: true,
                }
            }
            None => {
                warn!(
                    "Weather fetch for {} failed with no prior reading, using default: {}",
                    location.id, e
                );
                let current = Arc::new(WeatherSnapshot::fallback(self.clock.now()));
                self.install(&location.id, Arc::clone(&current));
                RefreshOutcome {
                    location_id: location.id.clone(),
                    previous: None,
                    current,
                    significant: true,
                    fetch_failed: true,
                }
            }
        }
    }

    /// Refresh every tracked location concurrently
    pub async fn refresh_all(&self) -> Vec<RefreshOutcome> {
        join_all(self.locations.iter().map(|location| self.refresh(location))).await
    }

    /// Log the last known readings and drop them
    pub fn flush(&self) {
        let mut snapshots = self.snapshots.write().unwrap_or_else(PoisonError::into_inner);
        for (location_id, snapshot) in snapshots.iter() {
            info!("Last weather for {}: {}", location_id, snapshot.describe());
        }
        snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::weather::{CurrentConditions, SnapshotSource};
    use crate::{Result, TidewatchError};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays a scripted sequence of fetch results
    struct ScriptedSource {
        script: Mutex<VecDeque<Result<CurrentConditions>>>,
    }

    impl ScriptedSource {
        fn new(script: Vec<Result<CurrentConditions>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
            })
        }
    }

    #[async_trait]
    impl WeatherSource for ScriptedSource {
        async fn fetch_current(&self, _location: &TrackedLocation) -> Result<CurrentConditions> {
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TidewatchError::fetch("script exhausted")))
        }
    }

    fn conditions(temp: f64, code: i64, wind: f64) -> CurrentConditions {
        CurrentConditions {
            apparent_temperature: Some(temp),
            weather_code: Some(code),
            wind_speed: Some(wind),
            cloud_cover: Some(10.0),
        }
    }

    fn store(script: Vec<Result<CurrentConditions>>) -> WeatherStore {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 7, 1, 18, 0, 0).unwrap());
        WeatherStore::new(
            vec![TrackedLocation::new("main_island", 21.46, -71.13)],
            ScriptedSource::new(script),
            Arc::new(clock),
        )
    }

    #[tokio::test]
    async fn test_first_fetch_installs_reading() {
        let store = store(vec![Ok(conditions(84.0, 2, 9.0))]);
        let outcomes = store.init().await;

        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].significant);
        assert!(!outcomes[0].fetch_failed);

        let snapshot = store.get("main_island");
        assert_eq!(snapshot.apparent_temperature, 84.0);
        assert_eq!(snapshot.source, SnapshotSource::Live);
    }

    #[tokio::test]
    async fn test_failure_without_history_installs_default() {
        let store = store(vec![Err(TidewatchError::fetch("connection refused"))]);
        let outcomes = store.refresh_all().await;

        assert!(outcomes[0].fetch_failed);
        let snapshot = store.get("main_island");
        assert!(snapshot.is_fallback());
        assert_eq!(snapshot.apparent_temperature, 70.0);
        assert_eq!(snapshot.weather_code, 0);
        assert_eq!(snapshot.wind_speed, 5.0);
    }

    #[tokio::test]
    async fn test_failure_keeps_last_known_reading() {
        let store = store(vec![
            Ok(conditions(60.0, 61, 14.0)),
            Err(TidewatchError::fetch("timeout")),
        ]);
        store.refresh_all().await;
        let outcomes = store.refresh_all().await;

        assert!(outcomes[0].fetch_failed);
        assert!(!outcomes[0].significant);
        let snapshot = store.get("main_island");
        assert_eq!(snapshot.weather_code, 61);
        assert!(!snapshot.is_fallback());
    }

    #[tokio::test]
    async fn test_first_live_reading_after_default_is_significant() {
        let store = store(vec![
            Err(TidewatchError::fetch("connection refused")),
            Ok(conditions(98.0, 0, 5.0)),
        ]);
        store.refresh_all().await;
        assert!(store.get("main_island").is_fallback());

        let outcomes = store.refresh_all().await;
        assert!(outcomes[0].significant);
        assert!(!outcomes[0].fetch_failed);
        assert_eq!(store.get("main_island").apparent_temperature, 98.0);
    }

    #[tokio::test]
    async fn test_non_transient_failure_still_keeps_reading() {
        let store = store(vec![
            Ok(conditions(60.0, 61, 14.0)),
            Err(TidewatchError::config("bad base URL")),
        ]);
        store.refresh_all().await;
        let outcomes = store.refresh_all().await;

        assert!(outcomes[0].fetch_failed);
        assert_eq!(store.get("main_island").weather_code, 61);
    }

    #[tokio::test]
    async fn test_small_change_is_not_significant() {
        let store = store(vec![
            Ok(conditions(60.0, 1, 10.0)),
            Ok(conditions(62.0, 1, 13.0)),
            Ok(conditions(62.0, 3, 13.0)),
        ]);
        store.refresh_all().await;
        assert!(!store.refresh_all().await[0].significant);
        assert!(store.refresh_all().await[0].significant);
    }

    #[tokio::test]
    async fn test_readers_keep_their_snapshot_across_swaps() {
        let store = store(vec![Ok(conditions(60.0, 1, 10.0)), Ok(conditions(90.0, 95, 30.0))]);
        store.refresh_all().await;
        let held = store.get("main_island");
        store.refresh_all().await;

        assert_eq!(held.apparent_temperature, 60.0);
        assert_eq!(store.get("main_island").apparent_temperature, 90.0);
    }

    #[test]
    fn test_untracked_location_gets_default() {
        let store = store(vec![]);
        assert!(store.try_get("atlantis").is_none());
        assert!(store.get("atlantis").is_fallback());
    }

    #[tokio::test]
    async fn test_flush_drops_readings() {
        let store = store(vec![Ok(conditions(60.0, 1, 10.0))]);
        store.init().await;
        store.flush();
        assert!(store.try_get("main_island").is_none());
    }
}
