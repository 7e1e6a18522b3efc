//! Built-in description profiles

mod generic;
mod harbor;
mod market;
mod tavern;

pub use generic::GENERIC;
pub use harbor::HARBOR;
pub use market::MARKET;
pub use tavern::{BOOTH, GUEST_NORTH, GUEST_SOUTH, HALLWAY, KITCHEN, MAIN_ROOM};

use super::profile::DescriptionProfile;

pub static ALL: [&DescriptionProfile; 9] = [
    &HARBOR,
    &MARKET,
    &MAIN_ROOM,
    &HALLWAY,
    &GUEST_SOUTH,
    &GUEST_NORTH,
    &BOOTH,
    &KITCHEN,
    &GENERIC,
];
