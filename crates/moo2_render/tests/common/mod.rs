#![allow(dead_code)]

use moo2_core::Game;
use moo2_core::layout::{
    NO_INDEX_U16, ORBIT_COUNT, PLAYER_COUNT_OFFSET, PLAYER_RACE_NAME_OFFSET, PLAYERS,
    STAR_X_OFFSET, STAR_Y_OFFSET, STARS, star_slot_offset,
};

/// Blank save with the named stars (no planets) and players.
pub fn blank_save(stars: &[(&str, u16, u16)], players: &[(&str, &str)]) -> Vec<u8> {
    let mut bytes = vec![0u8; PLAYERS.end()];
    for (index, (name, x, y)) in stars.iter().enumerate() {
        let offset = STARS.offset(index).expect("star index");
        bytes[offset..offset + name.len()].copy_from_slice(name.as_bytes());
        bytes[offset + STAR_X_OFFSET..offset + STAR_X_OFFSET + 2].copy_from_slice(&x.to_le_bytes());
        bytes[offset + STAR_Y_OFFSET..offset + STAR_Y_OFFSET + 2].copy_from_slice(&y.to_le_bytes());
        for position in 0..ORBIT_COUNT {
            let slot = star_slot_offset(offset, position);
            bytes[slot..slot + 2].copy_from_slice(&NO_INDEX_U16.to_le_bytes());
        }
    }
    bytes[PLAYER_COUNT_OFFSET] = players.len() as u8;
    for (index, (leader, race)) in players.iter().enumerate() {
        let offset = PLAYERS.offset(index).expect("player index");
        bytes[offset..offset + leader.len()].copy_from_slice(leader.as_bytes());
        let race_offset = offset + PLAYER_RACE_NAME_OFFSET;
        bytes[race_offset..race_offset + race.len()].copy_from_slice(race.as_bytes());
    }
    bytes
}

/// Sol with a planet at orbit 0 and an asteroid belt at orbit 3, Orion with
/// a gas giant at orbit 1, two players.
pub fn sample_game() -> Game {
    let bytes = blank_save(
        &[("Sol", 100, 200), ("Orion", 130, 240)],
        &[("Tycho", "Humans"), ("Kholdan", "Psilons")],
    );
    let mut game = Game::from_bytes(bytes).expect("blank save should load");
    {
        let mut sol = game.star_mut(0).expect("sol");
        sol.make_planet(0, 3).expect("planet");
        sol.make_planet(3, 1).expect("asteroids");
    }
    game.star_mut(1)
        .expect("orion")
        .make_planet(1, 2)
        .expect("gas giant");
    game
}
