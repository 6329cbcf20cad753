#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use moo2_core::Game;
use moo2_core::layout::{
    NO_INDEX_U16, ORBIT_COUNT, PLAYER_COUNT_OFFSET, PLAYER_RACE_NAME_OFFSET, PLAYERS,
    STAR_X_OFFSET, STAR_Y_OFFSET, STARS, star_slot_offset,
};

pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_moo2-se"))
        .args(args)
        .output()
        .expect("failed to run moo2-se CLI")
}

pub fn temp_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{}_{}.GAM", std::process::id(), nanos))
}

/// Sol (planet at orbit 0, asteroids at orbit 3) and Orion (gas giant at
/// orbit 1), Tycho of the Humans and Kholdan of the Psilons.
pub fn sample_bytes() -> Vec<u8> {
    let mut bytes = vec![0u8; PLAYERS.end()];
    for (index, (name, x, y)) in [("Sol", 100u16, 200u16), ("Orion", 130, 240)]
        .into_iter()
        .enumerate()
    {
        let offset = STARS.offset(index).expect("star index");
        bytes[offset..offset + name.len()].copy_from_slice(name.as_bytes());
        bytes[offset + STAR_X_OFFSET..offset + STAR_X_OFFSET + 2].copy_from_slice(&x.to_le_bytes());
        bytes[offset + STAR_Y_OFFSET..offset + STAR_Y_OFFSET + 2].copy_from_slice(&y.to_le_bytes());
        for position in 0..ORBIT_COUNT {
            let slot = star_slot_offset(offset, position);
            bytes[slot..slot + 2].copy_from_slice(&NO_INDEX_U16.to_le_bytes());
        }
    }
    bytes[PLAYER_COUNT_OFFSET] = 2;
    for (index, (leader, race)) in [("Tycho", "Humans"), ("Kholdan", "Psilons")]
        .into_iter()
        .enumerate()
    {
        let offset = PLAYERS.offset(index).expect("player index");
        bytes[offset..offset + leader.len()].copy_from_slice(leader.as_bytes());
        let race_offset = offset + PLAYER_RACE_NAME_OFFSET;
        bytes[race_offset..race_offset + race.len()].copy_from_slice(race.as_bytes());
    }

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
    game.into_bytes()
}

pub fn write_sample_save(prefix: &str) -> PathBuf {
    let path = temp_path(prefix);
    fs::write(&path, sample_bytes()).expect("write sample save");
    path
}

pub fn load_game(path: &Path) -> Game {
    Game::from_bytes(fs::read(path).expect("read edited save")).expect("edited save should load")
}
