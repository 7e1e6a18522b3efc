//! End-to-end scenarios for the description engine

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::rstest;

use tidewatch::config::WeatherConfig;
use tidewatch::description::profiles;
use tidewatch::weather::{CurrentConditions, WeatherSource};
use tidewatch::{
    DescriptionComposer, DynamicRoom, GameCalendar, Looker, ManualClock, OpenMeteoClient,
    RoomKind, TableComposer, TimePeriod, TrackedLocation, WeatherEngine, WeatherModifiers,
    WeatherSnapshot, WeatherStore, world,
};

const LOCATION: &str = "main_island";

struct FixedSource(CurrentConditions);

#[async_trait]
impl WeatherSource for FixedSource {
    async fn fetch_current(&self, _location: &TrackedLocation) -> tidewatch::Result<CurrentConditions> {
        Ok(self.0.clone())
    }
}

/// Counts every composition
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
        self.calls.fetch_add(1, Ordering::SeqCst);
        format!("{kind} during {period}.")
    }

    fn compose_brief(
        &self,
        kind: RoomKind,
        _period: TimePeriod,
        _snapshot: &WeatherSnapshot,
        _flags: WeatherModifiers,
    ) -> String {
        format!("{kind}.")
    }
}

fn one_pm() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 13, 0, 0).unwrap()
}

fn storm() -> CurrentConditions {
    CurrentConditions {
        apparent_temperature: Some(90.0),
        weather_code: Some(95),
        wind_speed: Some(25.0),
        cloud_cover: None,
    }
}

fn locations() -> Vec<TrackedLocation> {
    vec![TrackedLocation::new(LOCATION, 21.4655745, -71.1390341)]
}

fn engine_with(
    source: Arc<dyn WeatherSource>,
    composer: Arc<dyn DescriptionComposer>,
    clock: Arc<ManualClock>,
) -> WeatherEngine {
    let store = Arc::new(WeatherStore::new(locations(), source, clock.clone()));
    WeatherEngine::new(store, composer, GameCalendar::new(chrono_tz::UTC), clock, 78)
}

fn flat(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[tokio::test]
async fn test_market_square_in_a_noon_thunderstorm() {
    let clock = Arc::new(ManualClock::new(one_pm()));
    let engine = engine_with(
        Arc::new(FixedSource(storm())),
        Arc::new(TableComposer::default()),
        clock,
    );
    engine.register_all(world::seed_world(LOCATION, Duration::seconds(900)));
    engine.init().await;

    assert_eq!(engine.get_time_period(), TimePeriod::Noon);

    let text = engine
        .render_room_description(world::MARKET_SQUARE, &Looker::new("tester"))
        .unwrap();
    for line in text.lines() {
        assert!(line.chars().count() <= 78, "{line:?}");
    }

    let market = &profiles::MARKET;
    let parts = [
        market.base_paragraph(TimePeriod::Noon).unwrap(),
        market.temperature_clause(90.0, TimePeriod::Noon).unwrap(),
        market.wind_clause(25.0).unwrap(),
        market
            .weather_clause(tidewatch::weather::WeatherCategory::Thunderstorm)
            .unwrap(),
        market.closing,
    ];
    let flat_text = flat(&text);
    let positions: Vec<usize> = parts
        .iter()
        .map(|part| flat_text.find(&flat(part)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[tokio::test]
async fn test_unreachable_api_falls_back_to_default_weather() {
    let config = WeatherConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 1,
        max_retries: 0,
        fetch_deadline_seconds: 3,
        ..WeatherConfig::default()
    };
    let clock = Arc::new(ManualClock::new(one_pm()));
    let engine = engine_with(
        Arc::new(OpenMeteoClient::new(&config).unwrap()),
        Arc::new(TableComposer::default()),
        clock,
    );
    engine.register_all(world::seed_world(LOCATION, Duration::seconds(900)));

    let report = engine.init().await;
    assert_eq!(report.changed_locations, vec![LOCATION.to_string()]);

    let weather = engine.get_weather_data(LOCATION);
    assert_eq!(weather.apparent_temperature, 70.0);
    assert_eq!(weather.weather_code, 0);
    assert_eq!(weather.wind_speed, 5.0);
    assert!(weather.is_fallback());

    let text = engine
        .render_room_description(world::HARBOR_DISTRICT, &Looker::new("tester"))
        .unwrap();
    assert!(text.starts_with("Harbor District"));
}

#[tokio::test]
async fn test_cached_text_is_reused_until_it_expires() {
    let clock = Arc::new(ManualClock::new(one_pm()));
    let spy = Arc::new(SpyComposer::default());
    let engine = engine_with(Arc::new(FixedSource(storm())), spy.clone(), clock.clone());
    engine.register(DynamicRoom::new("market", "Market", RoomKind::Market, LOCATION));
    let looker = Looker::new("tester");

    engine.render_room_description("market", &looker).unwrap();
    clock.advance(Duration::seconds(899));
    engine.render_room_description("market", &looker).unwrap();
    assert_eq!(spy.calls.load(Ordering::SeqCst), 1);

    clock.advance(Duration::seconds(2));
    engine.render_room_description("market", &looker).unwrap();
    assert_eq!(spy.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_force_regenerate_clears_every_period() {
    let clock = Arc::new(ManualClock::new(one_pm()));
    let spy = Arc::new(SpyComposer::default());
    let engine = engine_with(Arc::new(FixedSource(storm())), spy.clone(), clock.clone());
    engine.register(DynamicRoom::new("market", "Market", RoomKind::Market, LOCATION));
    let looker = Looker::new("tester");

    // Noon entry at 13:00, afternoon entry at 15:00
    engine.render_room_description("market", &looker).unwrap();
    clock.set(one_pm() + Duration::hours(2));
    engine.render_room_description("market", &looker).unwrap();
    assert_eq!(spy.calls.load(Ordering::SeqCst), 2);

    let text = engine.force_regenerate("market").unwrap();
    assert_eq!(text, "market during afternoon.");
    assert_eq!(spy.calls.load(Ordering::SeqCst), 3);

    // The noon entry would still be fresh at 13:00 had it survived
    clock.set(one_pm());
    engine.render_room_description("market", &looker).unwrap();
    assert_eq!(spy.calls.load(Ordering::SeqCst), 4);
}

#[rstest]
#[case(world::HARBOR_DISTRICT)]
#[case(world::TAVERN_MAIN)]
#[case(world::GUEST_NORTH)]
#[case(world::HOLDING_CELL)]
#[tokio::test]
async fn test_brief_mode_is_shorter(#[case] room: &str) {
    let clock = Arc::new(ManualClock::new(one_pm()));
    let engine = engine_with(
        Arc::new(FixedSource(storm())),
        Arc::new(TableComposer::default()),
        clock,
    );
    engine.register_all(world::seed_world(LOCATION, Duration::seconds(900)));
    engine.init().await;

    let full = engine
        .render_room_description(room, &Looker::new("tester"))
        .unwrap();
    let brief = engine
        .render_room_description(room, &Looker::new("tester").brief(true))
        .unwrap();
    assert!(brief.len() < full.len(), "{room}");
}

#[tokio::test]
async fn test_holding_cell_shows_status_line() {
    let clock = Arc::new(ManualClock::new(one_pm()));
    let engine = engine_with(
        Arc::new(FixedSource(storm())),
        Arc::new(TableComposer::default()),
        clock,
    );
    engine.register_all(world::seed_world(LOCATION, Duration::seconds(900)));
    engine.init().await;

    let text = engine
        .render_room_description(world::HOLDING_CELL, &Looker::new("tester"))
        .unwrap();
    assert!(text.contains("Wind: 25 mph | Temp: 90°F | Cloud Cover: 0%"));
    assert!(text.ends_with("Exits: ladder"));
}
