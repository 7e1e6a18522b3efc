//! The default rooms registered at startup

use chrono::Duration;

use crate::description::RoomKind;
use crate::room::{Describable, DynamicRoom, Exit, StaticRoom};
use crate::window::{Window, WindowKind};

pub const HARBOR_DISTRICT: &str = "harbor_district";
pub const MARKET_SQUARE: &str = "market_square";
pub const TAVERN_MAIN: &str = "salty_maiden";
pub const TAVERN_HALLWAY: &str = "salty_maiden_hallway";
pub const GUEST_SOUTH: &str = "salty_maiden_guest_south";
pub const GUEST_NORTH: &str = "salty_maiden_guest_north";
pub const TAVERN_BOOTH: &str = "salty_maiden_booth";
pub const TAVERN_KITCHEN: &str = "salty_maiden_kitchen";
pub const HOLDING_CELL: &str = "holding_cell";
pub const LIMBO: &str = "limbo";

/// Build every default room. Weather-aware rooms read `location_id` and
/// expire cached text after `ttl`.
#[must_use]
pub fn seed_world(location_id: &str, ttl: Duration) -> Vec<Box<dyn Describable>> {
    let room = |id: &str, name: &str, kind: RoomKind| {
        DynamicRoom::new(id, name, kind, location_id).with_cache_ttl(ttl)
    };

    let dynamic = vec![
        room(HARBOR_DISTRICT, "Harbor District", RoomKind::Harbor)
            .with_exit(Exit::new("market", MARKET_SQUARE))
            .with_exit(Exit::new("tavern", TAVERN_MAIN))
            .with_exit(Exit::new("gangplank", HOLDING_CELL)),
        room(MARKET_SQUARE, "Market Square", RoomKind::Market)
            .with_exit(Exit::new("harbor", HARBOR_DISTRICT))
            .with_exit(Exit::new("tavern", TAVERN_MAIN)),
        room(TAVERN_MAIN, "The Salty Maiden", RoomKind::TavernMain)
            .with_exit(Exit::new("out", HARBOR_DISTRICT))
            .with_exit(Exit::new("upstairs", TAVERN_HALLWAY))
            .with_exit(Exit::new("booth", TAVERN_BOOTH))
            .with_exit(Exit::new("kitchen", TAVERN_KITCHEN))
            .with_window(Window::new("window", WindowKind::Tavern)),
        room(TAVERN_HALLWAY, "Upstairs Hallway", RoomKind::TavernHallway)
            .with_exit(Exit::new("downstairs", TAVERN_MAIN))
            .with_exit(Exit::new("south", GUEST_SOUTH))
            .with_exit(Exit::new("north", GUEST_NORTH))
            .with_window(Window::new("window", WindowKind::Hallway)),
        room(GUEST_SOUTH, "South Guest Room", RoomKind::TavernGuestSouth)
            .with_exit(Exit::new("hallway", TAVERN_HALLWAY))
            .with_window(Window::new("window", WindowKind::Harbor)),
        room(GUEST_NORTH, "North Guest Room", RoomKind::TavernGuestNorth)
            .with_exit(Exit::new("hallway", TAVERN_HALLWAY))
            .with_window(Window::new("window", WindowKind::Town)),
        room(TAVERN_BOOTH, "Corner Booth", RoomKind::TavernBooth)
            .with_exit(Exit::new("common room", TAVERN_MAIN))
            .with_window(Window::new("window", WindowKind::Tavern)),
        room(TAVERN_KITCHEN, "Tavern Kitchen", RoomKind::TavernKitchen)
            .with_exit(Exit::new("common room", TAVERN_MAIN)),
        room(HOLDING_CELL, "Ship's Holding Cell", RoomKind::Generic)
            .with_exit(Exit::new("ladder", HARBOR_DISTRICT)),
    ];

    let mut rooms: Vec<Box<dyn Describable>> = dynamic
        .into_iter()
        .map(|room| Box::new(room) as Box<dyn Describable>)
        .collect();
    rooms.push(Box::new(StaticRoom::new(LIMBO, "Limbo", "")));
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn world() -> Vec<Box<dyn Describable>> {
        seed_world("main_island", Duration::seconds(900))
    }

    #[test]
    fn test_room_ids_are_unique() {
        let rooms = world();
        let ids: HashSet<&str> = rooms.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), rooms.len());
    }

    #[test]
    fn test_every_exit_leads_somewhere() {
        let rooms = world();
        let ids: HashSet<&str> = rooms.iter().map(|r| r.id()).collect();
        for room in &rooms {
            for exit in room.exits() {
                assert!(
                    ids.contains(exit.destination.as_str()),
                    "{} -> {}",
                    room.id(),
                    exit.destination
                );
            }
        }
    }

    #[test]
    fn test_only_limbo_is_static() {
        let mut rooms = world();
        for room in &mut rooms {
            let is_static = room.as_weather_aware().is_none();
            assert_eq!(is_static, room.id() == LIMBO, "{}", room.id());
        }
    }

    #[test]
    fn test_every_kind_is_placed() {
        let mut rooms = world();
        let kinds: HashSet<RoomKind> = rooms
            .iter_mut()
            .filter_map(|r| r.as_weather_aware().map(|a| a.kind()))
            .collect();
        assert_eq!(kinds.len(), RoomKind::ALL.len());
    }
}
