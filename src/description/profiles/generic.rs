use crate::description::bands::{TemperatureBand, WindBand};
use crate::description::kind::RoomKind;
use crate::description::profile::{DescriptionProfile, PeriodTable};
use crate::time_period::CoarsePeriod;
use crate::weather::WeatherCategory;

/// Generic weather-aware rooms use the four-period vocabulary. The stock text
/// is the ship's holding cell new characters wake up in.
pub static GENERIC: DescriptionProfile = DescriptionProfile {
    kind: RoomKind::Generic,
    periods: PeriodTable::Coarse(&[
        (
            CoarsePeriod::Dawn,
            "You are in a cramped holding cell aboard what seems to be a ship. The first \
             hint of dawn filters through the barred window and paints the planks in \
             soft greys and blues. In the corner a wooden bucket of water shivers with \
             each roll of the hull.",
        ),
        (
            CoarsePeriod::Day,
            "You are in a cramped holding cell aboard what seems to be a ship. Sunlight \
             streams through the barred window and sets dust motes dancing in the air. \
             In the corner a wooden bucket of water shivers with each roll of the hull.",
        ),
        (
            CoarsePeriod::Dusk,
            "You are in a cramped holding cell aboard what seems to be a ship. Golden \
             evening light slants through the barred window and warms the rough walls. \
             In the corner a wooden bucket of water shivers with each roll of the hull.",
        ),
        (
            CoarsePeriod::Night,
            "You are in a cramped holding cell aboard what seems to be a ship. Moonlight \
             seeps through the barred window and throws strange shadows across the \
             floor. In the corner a wooden bucket of water shivers with each roll of the \
             hull.",
        ),
    ]),
    temperature: &[
        (
            TemperatureBand::Hot,
            "The air in the cell is stifling, thick with the smell of tar and brine.",
        ),
        (
            TemperatureBand::Cold,
            "Cold seeps through the planks, and your breath clouds in the stale air.",
        ),
    ],
    quiet_at_night: false,
    wind: &[
        (
            WindBand::Strong,
            "The ship pitches hard in the wind, and the timbers around you groan with \
             every gust.",
        ),
        (
            WindBand::Breezy,
            "A salt breeze whistles through the bars of the window.",
        ),
    ],
    weather: &[
        (
            WeatherCategory::Thunderstorm,
            "Thunder booms close overhead and rain lashes through the bars in cold \
             bursts.",
        ),
        (
            WeatherCategory::Rain,
            "Rain drips steadily through the window bars and gathers in a dark puddle \
             on the floor.",
        ),
        (
            WeatherCategory::Snow,
            "A few flakes of snow drift in through the bars and melt on the planks.",
        ),
        (
            WeatherCategory::Cloudy,
            "The light through the window is dull and grey.",
        ),
    ],
    indoor: &[],
    closing: "A heavy wooden door blocks the only way out.",
};
