use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TidewatchError;

/// Which description profile a room draws its text from. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    Harbor,
    Market,
    TavernMain,
    TavernHallway,
    TavernGuestSouth,
    TavernGuestNorth,
    TavernBooth,
    TavernKitchen,
    Generic,
}

impl RoomKind {
    pub const ALL: [RoomKind; 9] = [
        RoomKind::Harbor,
        RoomKind::Market,
        RoomKind::TavernMain,
        RoomKind::TavernHallway,
        RoomKind::TavernGuestSouth,
        RoomKind::TavernGuestNorth,
        RoomKind::TavernBooth,
        RoomKind::TavernKitchen,
        RoomKind::Generic,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomKind::Harbor => "harbor",
            RoomKind::Market => "market",
            RoomKind::TavernMain => "tavern_main",
            RoomKind::TavernHallway => "tavern_hallway",
            RoomKind::TavernGuestSouth => "tavern_guest_south",
            RoomKind::TavernGuestNorth => "tavern_guest_north",
            RoomKind::TavernBooth => "tavern_booth",
            RoomKind::TavernKitchen => "tavern_kitchen",
            RoomKind::Generic => "generic",
        }
    }

    #[must_use]
    pub fn is_tavern(&self) -> bool {
        matches!(
            self,
            RoomKind::TavernMain
                | RoomKind::TavernHallway
                | RoomKind::TavernGuestSouth
                | RoomKind::TavernGuestNorth
                | RoomKind::TavernBooth
                | RoomKind::TavernKitchen
        )
    }

    /// Flags a room of this kind gets unless the builder overrides them
    #[must_use]
    pub fn default_modifiers(&self) -> WeatherModifiers {
        if self.is_tavern() {
            WeatherModifiers {
                sheltered: true,
                indoor: true,
                magical: false,
            }
        } else {
            WeatherModifiers::default()
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomKind {
    type Err = TidewatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TidewatchError::config(format!("Unknown room kind '{s}'")))
    }
}

/// Per-room switches that mute parts of the weather text.
///
/// `indoor` replaces the outdoor clauses with the profile's indoor ambience,
/// `sheltered` drops the wind clause and `magical` shuts out weather entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherModifiers {
    pub sheltered: bool,
    pub indoor: bool,
    pub magical: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tavern_rooms_are_indoor() {
        for kind in RoomKind::ALL {
            let flags = kind.default_modifiers();
            assert_eq!(flags.indoor, kind.is_tavern(), "{kind}");
            assert!(!flags.magical);
        }
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in RoomKind::ALL {
            assert_eq!(kind.as_str().parse::<RoomKind>().unwrap(), kind);
        }
        assert!("dungeon".parse::<RoomKind>().is_err());
    }
}
