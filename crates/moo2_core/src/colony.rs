use std::fmt;

use crate::error::CoreError;
use crate::game::Game;
use crate::layout::{COLONIES, COLONY_PLANET_OFFSET, COLONY_PLAYER_OFFSET, NO_INDEX_U8, NO_INDEX_U16};
use crate::planet::Planet;
use crate::player::Player;
use crate::star::hex_dump;

/// A colony slot. Occupancy is decided by the planet that points here; the
/// colony itself only records its planet and owner.
#[derive(Debug, Clone, Copy)]
pub struct Colony<'a> {
    game: &'a Game,
    index: usize,
    offset: usize,
}

impl<'a> Colony<'a> {
    pub(crate) fn new(game: &'a Game, index: usize) -> Result<Self, CoreError> {
        let offset = COLONIES.offset(index)?;
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

    pub fn planet_index(&self) -> Result<Option<usize>, CoreError> {
        let raw = self
            .game
            .image()
            .read_u16_le(self.offset + COLONY_PLANET_OFFSET)?;
        Ok((raw != NO_INDEX_U16).then_some(usize::from(raw)))
    }

    pub fn planet(&self) -> Result<Option<Planet<&'a Game>>, CoreError> {
        self.planet_index()?
            .map(|index| Planet::new(self.game, index))
            .transpose()
    }

    pub fn player_index(&self) -> Result<Option<usize>, CoreError> {
        let raw = self
            .game
            .image()
            .read_u8(self.offset + COLONY_PLAYER_OFFSET)?;
        Ok((raw != NO_INDEX_U8).then_some(usize::from(raw)))
    }

    /// The owning player. An owner number at or past the player count is an
    /// error rather than a dangling view.
    pub fn player(&self) -> Result<Option<Player<'a>>, CoreError> {
        self.player_index()?
            .map(|index| Player::new(self.game, index))
            .transpose()
    }

    pub fn block(&self) -> Result<&'a [u8], CoreError> {
        self.game
            .image()
            .slice(self.offset..self.offset + COLONIES.stride)
    }

    pub fn block_hex(&self) -> Result<String, CoreError> {
        Ok(hex_dump(self.block()?))
    }
}

impl fmt::Display for Colony<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<colony 0x{:03X}>", self.index)
    }
}
