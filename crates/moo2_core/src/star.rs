use std::fmt;
use std::ops::{Deref, DerefMut};

use log::{debug, warn};

use crate::error::{CoreError, CoreErrorCode};
use crate::game::Game;
use crate::labels::{BODY_TYPES, SIZE_AUX};
use crate::layout::{
    NO_INDEX_U16, ORBIT_COUNT, PLANET_COLONY_OFFSET, PLANET_GRAVITY_OFFSET,
    PLANET_POSITION_OFFSET, PLANET_RICHNESS_OFFSET, PLANET_SCENERY_OFFSET,
    PLANET_SIZE_AUX_OFFSET, PLANET_SIZE_OFFSET, PLANET_STAR_OFFSET, PLANET_TERRAFORM_OFFSET,
    PLANET_TYPE_OFFSET, PLANETS, STAR_NAME_OFFSET, STAR_X_OFFSET, STAR_Y_OFFSET, STARS,
    star_slot_offset,
};
use crate::planet::Planet;
use crate::scenery::scenery_for;
use crate::types::StarSummary;

// Default record: a large, normal-gravity, abundant, barren world; the same
// body the game builds for an "artificial planet".
const DEFAULT_SIZE: u8 = 3;
const DEFAULT_GRAVITY: u8 = 1;
const DEFAULT_TERRAFORM: u8 = 2;
const DEFAULT_RICHNESS: u8 = 2;

/// A star system record. `G` is `&Game` for read-only access or `&mut Game`
/// when the view may write.
#[derive(Debug, Clone, Copy)]
pub struct Star<G> {
    game: G,
    index: usize,
    offset: usize,
}

impl<G: Deref<Target = Game>> Star<G> {
    pub(crate) fn new(game: G, index: usize) -> Result<Self, CoreError> {
        let offset = STARS.offset(index)?;
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

    pub fn exists(&self) -> bool {
        self.game
            .image()
            .read_u8(self.offset)
            .is_ok_and(|first| first != 0)
    }

    pub fn name(&self) -> Result<String, CoreError> {
        self.game
            .image()
            .read_c_string(self.offset + STAR_NAME_OFFSET, STARS.stride)
    }

    pub fn x(&self) -> Result<u16, CoreError> {
        self.game.image().read_u16_le(self.offset + STAR_X_OFFSET)
    }

    pub fn y(&self) -> Result<u16, CoreError> {
        self.game.image().read_u16_le(self.offset + STAR_Y_OFFSET)
    }

    /// Squared distance to `other` in map coordinate units.
    pub fn distance_squared<H: Deref<Target = Game>>(
        &self,
        other: &Star<H>,
    ) -> Result<u64, CoreError> {
        let dx = i64::from(self.x()?) - i64::from(other.x()?);
        let dy = i64::from(self.y()?) - i64::from(other.y()?);
        Ok((dx * dx + dy * dy) as u64)
    }

    /// Raw slot table entry for orbital `position`.
    pub fn slot(&self, position: usize) -> Result<u16, CoreError> {
        check_position(position)?;
        self.game
            .image()
            .read_u16_le(star_slot_offset(self.offset, position))
    }

    pub fn slots(&self) -> Result<[u16; ORBIT_COUNT], CoreError> {
        let mut slots = [NO_INDEX_U16; ORBIT_COUNT];
        for (position, slot) in slots.iter_mut().enumerate() {
            *slot = self.slot(position)?;
        }
        Ok(slots)
    }

    pub fn planet_index_at(&self, position: usize) -> Result<Option<usize>, CoreError> {
        let raw = self.slot(position)?;
        Ok((raw != NO_INDEX_U16).then_some(usize::from(raw)))
    }

    /// The planet at orbital `position` (0 closest, 4 furthest), if any.
    pub fn planet_at(&self, position: usize) -> Result<Option<Planet<&Game>>, CoreError> {
        self.planet_index_at(position)?
            .map(|index| Planet::new(&*self.game, index))
            .transpose()
    }

    /// Planets in orbital order. Each call starts a fresh pass over the slot
    /// table.
    pub fn planets(&self) -> impl Iterator<Item = Planet<&Game>> + '_ {
        (0..ORBIT_COUNT).filter_map(move |position| match self.planet_at(position) {
            Ok(planet) => planet,
            Err(e) => {
                warn!(
                    "star {} slot {position} skipped: {e}",
                    self.index
                );
                None
            }
        })
    }

    pub fn block(&self) -> Result<&[u8], CoreError> {
        self.game
            .image()
            .slice(self.offset..self.offset + STARS.stride)
    }

    pub fn block_hex(&self) -> Result<String, CoreError> {
        Ok(hex_dump(self.block()?))
    }

    pub fn summary(&self) -> Result<StarSummary, CoreError> {
        Ok(StarSummary {
            index: self.index,
            name: self.name()?,
            x: self.x()?,
            y: self.y()?,
            planets: self
                .planets()
                .map(|planet| planet.summary())
                .collect::<Result<_, _>>()?,
        })
    }
}

impl<G: DerefMut<Target = Game>> Star<G> {
    pub fn set_x(&mut self, value: u16) -> Result<(), CoreError> {
        let offset = self.offset + STAR_X_OFFSET;
        self.game.image_mut().write_u16_le(offset, value)
    }

    pub fn set_y(&mut self, value: u16) -> Result<(), CoreError> {
        let offset = self.offset + STAR_Y_OFFSET;
        self.game.image_mut().write_u16_le(offset, value)
    }

    pub fn planet_at_mut(
        &mut self,
        position: usize,
    ) -> Result<Option<Planet<&mut Game>>, CoreError> {
        match self.planet_index_at(position)? {
            Some(index) => Planet::new(&mut *self.game, index).map(Some),
            None => Ok(None),
        }
    }

    /// Create a planet at the empty orbital `position` and return it.
    ///
    /// The new planet takes the slot after the game's current high-water
    /// mark. Its record is a large, normal-gravity, abundant, barren body of
    /// `body_type` with no colony and a scenery value derived from the
    /// position, body type and star.
    pub fn make_planet(
        &mut self,
        position: usize,
        body_type: u8,
    ) -> Result<Planet<&mut Game>, CoreError> {
        if self.planet_index_at(position)?.is_some() {
            return Err(CoreError::new(
                CoreErrorCode::PositionOccupied,
                format!(
                    "planet already exists at position {position} of star {}",
                    self.index
                ),
            ));
        }
        if !BODY_TYPES.contains(body_type) {
            return Err(CoreError::new(
                CoreErrorCode::InvalidType,
                format!("type must be 1 through 3, got {body_type}"),
            ));
        }
        let star_number = u8::try_from(self.index).map_err(|_| {
            CoreError::out_of_range(format!("star number {} does not fit a byte", self.index))
        })?;

        let index = self.game.next_planet_index()?;
        let range = PLANETS.range(index)?;
        let slot_offset = star_slot_offset(self.offset, position);
        let image = self.game.image();
        image.slice(range.start..range.end)?;
        image.slice(slot_offset..slot_offset + 2)?;

        let mut record = vec![0u8; PLANETS.stride];
        record[PLANET_COLONY_OFFSET..PLANET_COLONY_OFFSET + 2]
            .copy_from_slice(&NO_INDEX_U16.to_le_bytes());
        record[PLANET_STAR_OFFSET] = star_number;
        record[PLANET_POSITION_OFFSET] = position as u8;
        record[PLANET_TYPE_OFFSET] = body_type;
        record[PLANET_SIZE_OFFSET] = DEFAULT_SIZE;
        record[PLANET_GRAVITY_OFFSET] = DEFAULT_GRAVITY;
        record[PLANET_TERRAFORM_OFFSET] = DEFAULT_TERRAFORM;
        record[PLANET_SCENERY_OFFSET] = scenery_for(position as u8, body_type, self.index);
        record[PLANET_RICHNESS_OFFSET] = DEFAULT_RICHNESS;
        record[PLANET_SIZE_AUX_OFFSET] = SIZE_AUX[usize::from(DEFAULT_SIZE)];

        let image = self.game.image_mut();
        image.write_slice(range.start, &record)?;
        image.write_u16_le_checked(slot_offset, index as u32)?;
        self.game.commit_planet_index(index);

        debug!(
            "made planet {index} (type {body_type}) at position {position} of star {}",
            self.index
        );
        Planet::new(&mut *self.game, index)
    }
}

impl<G: Deref<Target = Game>> fmt::Display for Star<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name().unwrap_or_default();
        write!(f, "<star 0x{:02X} {}>", self.index, name)
    }
}

pub(crate) fn check_position(position: usize) -> Result<(), CoreError> {
    if position >= ORBIT_COUNT {
        return Err(CoreError::new(
            CoreErrorCode::IndexOutOfRange,
            format!("planets indexed 0 through {}, got {position}", ORBIT_COUNT - 1),
        ));
    }
    Ok(())
}

pub(crate) fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
