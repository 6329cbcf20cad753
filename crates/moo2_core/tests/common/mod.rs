#![allow(dead_code)]

use moo2_core::Game;
use moo2_core::labels::SIZE_AUX;
use moo2_core::layout::{
    COLONIES, COLONY_PLANET_OFFSET, COLONY_PLAYER_OFFSET, NO_INDEX_U16, ORBIT_COUNT,
    PLANET_COLONY_OFFSET, PLANET_FOOD_OFFSET, PLANET_GRAVITY_OFFSET, PLANET_POSITION_OFFSET,
    PLANET_RICHNESS_OFFSET, PLANET_SIZE_AUX_OFFSET, PLANET_SIZE_OFFSET, PLANET_STAR_OFFSET,
    PLANET_TERRAFORM_OFFSET, PLANET_TYPE_OFFSET, PLANETS, PLAYER_COUNT_OFFSET,
    PLAYER_LEADER_NAME_OFFSET, PLAYER_RACE_NAME_OFFSET, PLAYERS, STAR_X_OFFSET, STAR_Y_OFFSET,
    STARS, star_slot_offset,
};

/// Builds a synthetic save image with just enough structure for the views.
pub struct SaveBuilder {
    bytes: Vec<u8>,
}

impl SaveBuilder {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; PLAYERS.end()],
        }
    }

    pub fn star(mut self, index: usize, name: &str, x: u16, y: u16) -> Self {
        let offset = STARS.offset(index).expect("star index");
        self.bytes[offset..offset + name.len()].copy_from_slice(name.as_bytes());
        self.put_u16(offset + STAR_X_OFFSET, x);
        self.put_u16(offset + STAR_Y_OFFSET, y);
        for position in 0..ORBIT_COUNT {
            self.put_u16(star_slot_offset(offset, position), NO_INDEX_U16);
        }
        self
    }

    /// A medium, normal-gravity, abundant terran body registered in its
    /// star's slot table.
    pub fn planet(mut self, index: usize, star: usize, position: usize, body_type: u8) -> Self {
        let offset = PLANETS.offset(index).expect("planet index");
        self.put_u16(offset + PLANET_COLONY_OFFSET, NO_INDEX_U16);
        self.bytes[offset + PLANET_STAR_OFFSET] = star as u8;
        self.bytes[offset + PLANET_POSITION_OFFSET] = position as u8;
        self.bytes[offset + PLANET_TYPE_OFFSET] = body_type;
        self.bytes[offset + PLANET_SIZE_OFFSET] = 2;
        self.bytes[offset + PLANET_GRAVITY_OFFSET] = 1;
        self.bytes[offset + PLANET_TERRAFORM_OFFSET] = 8;
        self.bytes[offset + PLANET_RICHNESS_OFFSET] = 2;
        self.bytes[offset + PLANET_FOOD_OFFSET] = 2;
        self.bytes[offset + PLANET_SIZE_AUX_OFFSET] = SIZE_AUX[2];

        let star_offset = STARS.offset(star).expect("star index");
        self.put_u16(star_slot_offset(star_offset, position), index as u16);
        self
    }

    pub fn planet_byte(mut self, index: usize, field: usize, value: u8) -> Self {
        let offset = PLANETS.offset(index).expect("planet index");
        self.bytes[offset + field] = value;
        self
    }

    pub fn colony(mut self, index: usize, planet: Option<usize>, player: Option<u8>) -> Self {
        let offset = COLONIES.offset(index).expect("colony index");
        self.bytes[offset + COLONY_PLAYER_OFFSET] = player.unwrap_or(0xFF);
        self.put_u16(
            offset + COLONY_PLANET_OFFSET,
            planet.map_or(NO_INDEX_U16, |p| p as u16),
        );
        if let Some(planet) = planet {
            let planet_offset = PLANETS.offset(planet).expect("planet index");
            self.put_u16(planet_offset + PLANET_COLONY_OFFSET, index as u16);
        }
        self
    }

    pub fn players(mut self, players: &[(&str, &str)]) -> Self {
        self.bytes[PLAYER_COUNT_OFFSET] = players.len() as u8;
        for (index, (leader, race)) in players.iter().enumerate() {
            let offset = PLAYERS.offset(index).expect("player index");
            self.put_bytes(offset + PLAYER_LEADER_NAME_OFFSET, leader.as_bytes());
            self.put_bytes(offset + PLAYER_RACE_NAME_OFFSET, race.as_bytes());
        }
        self
    }

    pub fn raw(mut self, offset: usize, data: &[u8]) -> Self {
        self.put_bytes(offset, data);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }

    pub fn game(self) -> Game {
        Game::from_bytes(self.build()).expect("fixture should load")
    }

    fn put_u16(&mut self, offset: usize, value: u16) {
        self.bytes[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
    }

    fn put_bytes(&mut self, offset: usize, data: &[u8]) {
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
    }
}

/// Sol (planets 0 and 1 at positions 0 and 2), Orion (gas giant 2 at
/// position 4), Cryslon (empty), then a gap, then an unreachable star 4.
/// Colony 0 sits on planet 0 and belongs to player 0.
pub fn sample_save() -> SaveBuilder {
    SaveBuilder::new()
        .star(0, "Sol", 100, 200)
        .star(1, "Orion", 130, 240)
        .star(2, "Cryslon", 400, 50)
        .star(4, "Hidden", 10, 10)
        .planet(0, 0, 0, 3)
        .planet(1, 0, 2, 3)
        .planet(2, 1, 4, 2)
        .colony(0, Some(0), Some(0))
        .colony(1, None, None)
        .players(&[("Tycho", "Humans"), ("Kholdan", "Psilons")])
}

pub fn sample_game() -> Game {
    sample_save().game()
}

/// Every planet reachable from `star` sits in exactly the slot its position
/// byte names.
pub fn assert_slots_consistent(game: &Game, star: usize) {
    let star = game.star(star).expect("star");
    let slots = star.slots().expect("slots");
    for planet in star.planets() {
        let position = planet.position().expect("position") as usize;
        assert_eq!(usize::from(slots[position]), planet.index());
        for (other, &slot) in slots.iter().enumerate() {
            if other != position {
                assert_ne!(usize::from(slot), planet.index());
            }
        }
    }
}
