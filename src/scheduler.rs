//! Periodic weather refresh and re-render check

use std::sync::Arc;
use std::time::Duration;

use rand::RngExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval, interval_at};
use tracing::{debug, info};

use crate::config::TidewatchConfig;
use crate::engine::WeatherEngine;

/// Tick periods for the two background loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub weather: Duration,
    pub rerender: Duration,
}

impl Schedule {
    #[must_use]
    pub fn from_config(config: &TidewatchConfig) -> Self {
        Self {
            weather: Duration::from_secs(config.weather.refresh_interval_seconds),
            rerender: Duration::from_secs(config.cache.rerender_interval_seconds),
        }
    }
}

/// Start both loops. They exit when `shutdown` fires or its sender is dropped.
pub fn spawn(
    engine: Arc<WeatherEngine>,
    schedule: Schedule,
    shutdown: watch::Receiver<()>,
) -> Vec<JoinHandle<()>> {
    vec![
        tokio::spawn(weather_loop(
            Arc::clone(&engine),
            schedule.weather,
            shutdown.clone(),
        )),
        tokio::spawn(rerender_loop(engine, schedule.rerender, shutdown)),
    ]
}

async fn weather_loop(engine: Arc<WeatherEngine>, period: Duration, mut shutdown: watch::Receiver<()>) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick fires immediately and startup already fetched
    ticker.tick().await;

    info!("Weather refresh every {}s", period.as_secs());
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let report = engine.refresh_weather().await;
                debug!("Weather tick: {:?}", report);
            }
            _ = shutdown.changed() => {
                info!("Weather refresh loop stopping");
                break;
            }
        }
    }
}

async fn rerender_loop(engine: Arc<WeatherEngine>, period: Duration, mut shutdown: watch::Receiver<()>) {
    // Start offset so the two loops don't fire in lockstep
    let offset = period.mul_f64(rand::rng().random_range(0.0..0.1));
    let mut ticker = interval_at(Instant::now() + period + offset, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Re-render check every {}s", period.as_secs());
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let report = engine.rerender_tick();
                debug!("Re-render tick: {:?}", report);
            }
            _ = shutdown.changed() => {
                info!("Re-render loop stopping");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::description::TableComposer;
    use crate::time_period::GameCalendar;
    use crate::weather::{CurrentConditions, TrackedLocation, WeatherSource, WeatherStore};
    use async_trait::async_trait;

    struct CalmSource;

    #[async_trait]
    impl WeatherSource for CalmSource {
        async fn fetch_current(&self, _location: &TrackedLocation) -> crate::Result<CurrentConditions> {
            Ok(CurrentConditions {
                apparent_temperature: Some(70.0),
                weather_code: Some(0),
                wind_speed: Some(2.0),
                cloud_cover: None,
            })
        }
    }

    #[test]
    fn test_schedule_from_default_config() {
        let schedule = Schedule::from_config(&TidewatchConfig::default());
        assert_eq!(schedule.weather, Duration::from_secs(900));
        assert_eq!(schedule.rerender, Duration::from_secs(300));
    }

    #[tokio::test]
    async fn test_loops_stop_on_shutdown() {
        let clock = Arc::new(SystemClock);
        let store = Arc::new(WeatherStore::new(
            vec![TrackedLocation::new("main_island", 21.46, -71.14)],
            Arc::new(CalmSource),
            clock.clone(),
        ));
        let engine = Arc::new(WeatherEngine::new(
            store,
            Arc::new(TableComposer::default()),
            GameCalendar::local(),
            clock,
            78,
        ));

        let (tx, rx) = watch::channel(());
        let schedule = Schedule {
            weather: Duration::from_millis(10),
            rerender: Duration::from_millis(10),
        };
        let handles = spawn(engine, schedule, rx);
        tokio::time::sleep(Duration::from_millis(50)).await;
        tx.send(()).unwrap();

        for handle in handles {
            tokio::time::timeout(Duration::from_secs(1), handle)
                .await
                .expect("loop did not stop")
                .unwrap();
        }
    }
}
