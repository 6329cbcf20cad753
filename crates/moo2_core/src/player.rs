use std::fmt;

use crate::error::CoreError;
use crate::game::Game;
use crate::layout::{PLAYER_LEADER_NAME_OFFSET, PLAYER_NAME_LEN, PLAYER_RACE_NAME_OFFSET, PLAYERS};
use crate::star::hex_dump;
use crate::types::PlayerSummary;

#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    game: &'a Game,
    index: usize,
    offset: usize,
}

impl<'a> Player<'a> {
    /// Fails unless `index` is below the save's player count.
    pub(crate) fn new(game: &'a Game, index: usize) -> Result<Self, CoreError> {
        let offset = PLAYERS.offset_within(index, game.player_count()?)?;
        Ok(Self {
            game,
            index,
            offset,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn leader_name(&self) -> Result<String, CoreError> {
        self.game
            .image()
            .read_c_string(self.offset + PLAYER_LEADER_NAME_OFFSET, PLAYER_NAME_LEN)
    }

    pub fn race_name(&self) -> Result<String, CoreError> {
        self.game
            .image()
            .read_c_string(self.offset + PLAYER_RACE_NAME_OFFSET, PLAYER_NAME_LEN)
    }

    pub fn block(&self) -> Result<&'a [u8], CoreError> {
        self.game
            .image()
            .slice(self.offset..self.offset + PLAYERS.stride)
    }

    pub fn block_hex(&self) -> Result<String, CoreError> {
        Ok(hex_dump(self.block()?))
    }

    pub fn summary(&self) -> Result<PlayerSummary, CoreError> {
        Ok(PlayerSummary {
            index: self.index,
            leader_name: self.leader_name()?,
            race_name: self.race_name()?,
        })
    }
}

impl fmt::Display for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<player 0x{:02X} {} ({})>",
            self.index,
            self.race_name().unwrap_or_default(),
            self.leader_name().unwrap_or_default()
        )
    }
}
