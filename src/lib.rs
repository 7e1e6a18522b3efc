//! `tidewatch` - weather and time-of-day aware room descriptions
//!
//! This library fetches current conditions for the game's locations, maps
//! them together with the game clock onto per-room description variants,
//! caches the rendered text and announces changes to the rooms affected.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod description;
pub mod engine;
pub mod error;
pub mod logging;
pub mod room;
pub mod scheduler;
pub mod time_period;
pub mod transitions;
pub mod weather;
pub mod web;
pub mod window;
pub mod world;

// Re-export core types for public API
pub use cache::DescriptionCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TidewatchConfig;
pub use description::{DescriptionComposer, RoomKind, TableComposer, WeatherModifiers};
pub use engine::{RoomNotice, TickReport, WeatherEngine};
pub use error::TidewatchError;
pub use room::{Describable, DynamicRoom, Exit, Looker, StaticRoom, WeatherAware};
pub use time_period::{CoarsePeriod, GameCalendar, TimePeriod, classify};
pub use weather::{OpenMeteoClient, TrackedLocation, WeatherSnapshot, WeatherStore, is_significant};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TidewatchError>;
