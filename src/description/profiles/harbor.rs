use crate::description::bands::{TemperatureBand, WindBand};
use crate::description::kind::RoomKind;
use crate::description::profile::{DescriptionProfile, PeriodTable};
use crate::time_period::TimePeriod;
use crate::weather::WeatherCategory;

pub static HARBOR: DescriptionProfile = DescriptionProfile {
    kind: RoomKind::Harbor,
    periods: PeriodTable::Fine(&[
        (
            TimePeriod::Dawn,
            "Grey light spreads across the harbor and the water wakes with it. Early \
             fishing crews cast off their lines and pole away from the quay, while the \
             planks of the docks groan under the boots of sailors readying for the day. \
             Gulls wheel and shriek above the masts.",
        ),
        (
            TimePeriod::Morning,
            "Morning trade fills the harbor. Boats back from the first run unload \
             baskets of silver fish as merchant ships make ready to sail, and porters \
             shoulder crates along the waterfront while crews shout to one another \
             from deck to dock.",
        ),
        (
            TimePeriod::Noon,
            "The harbor is at its busiest under the high sun. Hulls of every size jostle \
             for room along the docks, from patched fishing skiffs to broad-beamed \
             merchantmen, and the air rings with hammering, hauling and haggling.",
        ),
        (
            TimePeriod::Afternoon,
            "The afternoon harbor settles into a steady rhythm. Fishing boats drift in \
             with the day's catch and cargo still moves up and down the gangplanks, \
             though the rush of midday has eased into something more measured.",
        ),
        (
            TimePeriod::EarlyEvening,
            "As evening draws near the harbor changes pace. Most of the fishing fleet is \
             home and its catch is sold off from barrows on the quay. Merchant crews \
             double their mooring lines while the tavern windows up the hill begin to \
             glow.",
        ),
        (
            TimePeriod::Evening,
            "Lanterns hang from the rigging of the moored ships and their light trembles \
             on the black water. The day's clamor has given way to low voices and the \
             tread of the night watch taking up its posts.",
        ),
        (
            TimePeriod::LateNight,
            "The harbor lies still. Small waves slap against the hulls at their berths \
             and a handful of watch lanterns mark the length of the docks, the ships \
             themselves reduced to dark shapes against the starlit water.",
        ),
        (
            TimePeriod::WitchingHour,
            "In the smallest hours the harbor seems to hold its breath. Only a \
             watchman's footfall or the creak of a settling timber breaks the quiet, and \
             here and there a fishing crew readies its nets like shadows in the dark.",
        ),
    ]),
    temperature: &[
        (
            TemperatureBand::Hot,
            "Heavy, humid heat hangs over the docks, and the workers move slowly, ducking \
             into any scrap of shade between loads.",
        ),
        (
            TemperatureBand::Cold,
            "The cold has the dockhands stamping their feet and blowing into their hands, \
             their breath showing white as they work.",
        ),
    ],
    quiet_at_night: true,
    wind: &[
        (
            WindBand::Strong,
            "Hard gusts tear across the harbor, straining the moored vessels against \
             their lines and snapping loose canvas like gunshots.",
        ),
        (
            WindBand::Breezy,
            "A steady breeze blows in off the water, carrying salt and tar and setting \
             the moored boats rocking at their berths.",
        ),
    ],
    weather: &[
        (
            WeatherCategory::Thunderstorm,
            "Lightning throws the harbor into stark relief and thunder rolls back across \
             the water, sending crews scrambling to lash down anything loose.",
        ),
        (
            WeatherCategory::Rain,
            "Rain falls steadily on the harbor, drumming on the deck planking and \
             pocking the surface of the water with countless small rings.",
        ),
        (
            WeatherCategory::FreezingRain,
            "An icy rain glazes the mooring posts and rigging, and the dockhands pick \
             their way carefully along the slick planks.",
        ),
        (
            WeatherCategory::Snow,
            "Snow drifts down over the harbor, settling on coiled ropes and vanishing the \
             moment it touches the dark water.",
        ),
        (
            WeatherCategory::Cloudy,
            "Low grey cloud presses down over the harbor, softening the light on the \
             water and hinting at weather to come.",
        ),
    ],
    indoor: &[],
    closing: "The Market Square lies to the north, and ships of every kind line the docks.",
};
