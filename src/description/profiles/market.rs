use crate::description::bands::{TemperatureBand, WindBand};
use crate::description::kind::RoomKind;
use crate::description::profile::{DescriptionProfile, PeriodTable};
use crate::time_period::TimePeriod;
use crate::weather::WeatherCategory;

/// The open-air market square at the heart of the island town
pub static MARKET: DescriptionProfile = DescriptionProfile {
    kind: RoomKind::Market,
    periods: PeriodTable::Fine(&[
        (
            TimePeriod::Dawn,
            "The market square is only half awake. Stallholders drag their carts over \
             the cobbles and unfold striped awnings, and the first loaves from the \
             baker's ovens send their warm smell drifting across the empty stalls.",
        ),
        (
            TimePeriod::Morning,
            "Morning brings the market square to life. Fishwives cry the day's catch \
             beside tables heaped with island fruit, and housekeepers with baskets on \
             their arms pick their way between the stalls, pinching and sniffing and \
             bargaining.",
        ),
        (
            TimePeriod::Noon,
            "At midday the market square is packed from end to end. Traders bellow \
             over one another beneath their awnings, coins change hands at every stall, \
             and a fiddler by the old well plays for anyone who will toss him a copper.",
        ),
        (
            TimePeriod::Afternoon,
            "The afternoon crowd in the market square has thinned to serious buyers and \
             idle browsers. Traders lower their prices on what will not keep, and \
             children chase one another between the emptying stalls.",
        ),
        (
            TimePeriod::EarlyEvening,
            "Stallholders are packing up as the light turns golden over the market \
             square. Awnings are rolled and carts loaded, and the last bargains of the \
             day are struck in hurried murmurs.",
        ),
        (
            TimePeriod::Evening,
            "The market square stands mostly empty in the evening, its bare stalls \
             lit by a few iron lamps. Townsfolk cut across the cobbles on their way to \
             supper or to the tavern, and a lone sweeper works at the day's litter.",
        ),
        (
            TimePeriod::LateNight,
            "Night has emptied the market square. Shuttered stalls stand in dark rows \
             and the lamps have burned low, leaving the old well in a pool of shadow.",
        ),
        (
            TimePeriod::WitchingHour,
            "The market square lies silent in the small hours. A cat slips between the \
             shuttered stalls and the only light comes from a single lantern hung above \
             the well.",
        ),
    ]),
    temperature: &[
        (
            TemperatureBand::Hot,
            "The air is hot and thick, and traders fan themselves in the shade of their \
             awnings while the cobbles shimmer with heat.",
        ),
        (
            TemperatureBand::Warm,
            "The day is pleasantly warm, just enough to put the smell of ripe fruit in \
             the air.",
        ),
        (
            TemperatureBand::Mild,
            "The temperature is mild and comfortable.",
        ),
        (
            TemperatureBand::Chilly,
            "A noticeable chill hangs in the air, and the traders wear their shawls and \
             jackets buttoned close.",
        ),
        (
            TemperatureBand::Cold,
            "It is bitterly cold, and the few people about hurry between doorways with \
             their hands tucked under their arms.",
        ),
    ],
    quiet_at_night: false,
    wind: &[
        (
            WindBand::Strong,
            "Strong winds whip through the square, tugging at the awnings and sending \
             loose straw skittering across the stones.",
        ),
        (
            WindBand::Breezy,
            "A steady breeze blows through the square and sets the awnings flapping.",
        ),
        (
            WindBand::Gentle,
            "A gentle breeze stirs the air.",
        ),
    ],
    weather: &[
        (
            WeatherCategory::Thunderstorm,
            "Thunder rumbles overhead as lightning flashes across the sky, and the \
             traders haul their goods under cover.",
        ),
        (
            WeatherCategory::Rain,
            "Rain falls steadily, running in little rivers between the cobbles.",
        ),
        (
            WeatherCategory::FreezingRain,
            "A freezing rain glazes the cobbles and the awnings sag under a skin of ice.",
        ),
        (
            WeatherCategory::Snow,
            "Snow is falling, softening the edges of the stalls under a white blanket.",
        ),
        (
            WeatherCategory::Cloudy,
            "Clouds fill the sky and cast the square in flat, grey light.",
        ),
        (
            WeatherCategory::Unknown,
            "The sky has an unsettled look to it.",
        ),
    ],
    indoor: &[],
    closing: "The Harbor District lies to the south, and the Salty Maiden tavern stands \
              on the eastern side of the square.",
};
