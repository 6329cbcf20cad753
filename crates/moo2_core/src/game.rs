use std::io::{Read, Write};

use log::{debug, trace};

use crate::colony::Colony;
use crate::error::CoreError;
use crate::image::ByteImage;
use crate::layout::{MAX_PLANETS, MAX_STARS, PLAYER_COUNT_OFFSET, PLAYERS};
use crate::planet::Planet;
use crate::player::Player;
use crate::star::Star;
use crate::types::GameSummary;

/// Smallest image that covers the colony, planet and star tables plus the
/// player count byte.
pub const MIN_SAVE_LEN: usize = PLAYERS.base;

/// One open save file. Owns the byte buffer; every entity view borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    image: ByteImage,
    max_planet: Option<usize>,
}

impl Game {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, CoreError> {
        Self::from_image(ByteImage::new(bytes.into()))
    }

    pub fn load<R: Read>(reader: R) -> Result<Self, CoreError> {
        Self::from_image(ByteImage::load(reader)?)
    }

    pub fn from_image(image: ByteImage) -> Result<Self, CoreError> {
        if image.len() < MIN_SAVE_LEN {
            return Err(CoreError::out_of_range(format!(
                "save image is {} bytes, expected at least {MIN_SAVE_LEN}",
                image.len()
            )));
        }

        let mut game = Self {
            image,
            max_planet: None,
        };
        game.max_planet = game.scan_max_planet();
        debug!(
            "loaded save: {} bytes, {} stars, max planet {:?}",
            game.image.len(),
            game.stars().count(),
            game.max_planet
        );
        Ok(game)
    }

    pub fn store<W: Write>(&self, writer: W) -> Result<(), CoreError> {
        self.image.store(writer)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.image.as_bytes().to_vec()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.image.into_bytes()
    }

    pub fn image(&self) -> &ByteImage {
        &self.image
    }

    pub(crate) fn image_mut(&mut self) -> &mut ByteImage {
        &mut self.image
    }

    /// Highest planet slot referenced by any star, bumped by every planet
    /// allocation.
    pub fn max_planet(&self) -> Option<usize> {
        self.max_planet
    }

    /// The slot the next allocation will claim.
    pub(crate) fn next_planet_index(&self) -> Result<usize, CoreError> {
        let next = self.max_planet.map_or(0, |max| max + 1);
        if next >= MAX_PLANETS {
            return Err(CoreError::out_of_range(format!(
                "no free planet slot: all {MAX_PLANETS} planet numbers are in use"
            )));
        }
        Ok(next)
    }

    pub(crate) fn commit_planet_index(&mut self, index: usize) {
        self.max_planet = Some(index);
    }

    pub fn star(&self, index: usize) -> Result<Star<&Game>, CoreError> {
        Star::new(self, index)
    }

    pub fn star_mut(&mut self, index: usize) -> Result<Star<&mut Game>, CoreError> {
        Star::new(self, index)
    }

    /// Existing stars in slot order, stopping at the first empty slot.
    pub fn stars(&self) -> impl Iterator<Item = Star<&Game>> + '_ {
        (0..MAX_STARS)
            .filter_map(move |index| Star::new(self, index).ok())
            .take_while(|star| star.exists())
    }

    pub fn star_named(&self, name: &str) -> Option<Star<&Game>> {
        self.stars()
            .find(|star| star.name().is_ok_and(|n| n == name))
    }

    pub fn star_named_mut(&mut self, name: &str) -> Option<Star<&mut Game>> {
        let index = self.star_named(name)?.index();
        Star::new(self, index).ok()
    }

    pub fn planet(&self, index: usize) -> Result<Planet<&Game>, CoreError> {
        Planet::new(self, index)
    }

    pub fn planet_mut(&mut self, index: usize) -> Result<Planet<&mut Game>, CoreError> {
        Planet::new(self, index)
    }

    pub fn colony(&self, index: usize) -> Result<Colony<'_>, CoreError> {
        Colony::new(self, index)
    }

    pub fn player_count(&self) -> Result<usize, CoreError> {
        Ok(usize::from(self.image.read_u8(PLAYER_COUNT_OFFSET)?))
    }

    pub fn player(&self, index: usize) -> Result<Player<'_>, CoreError> {
        Player::new(self, index)
    }

    pub fn players(&self) -> Result<impl Iterator<Item = Player<'_>> + '_, CoreError> {
        let count = self.player_count()?.min(PLAYERS.count);
        Ok((0..count).filter_map(move |index| Player::new(self, index).ok()))
    }

    pub fn summary(&self) -> Result<GameSummary, CoreError> {
        Ok(GameSummary {
            max_planet: self.max_planet,
            players: self
                .players()?
                .map(|player| player.summary())
                .collect::<Result<_, _>>()?,
            stars: self
                .stars()
                .map(|star| star.summary())
                .collect::<Result<_, _>>()?,
        })
    }

    fn scan_max_planet(&self) -> Option<usize> {
        self.stars()
            .flat_map(|star| {
                let indices: Vec<usize> = star.planets().map(|planet| planet.index()).collect();
                trace!("star {} holds planets {:?}", star.index(), indices);
                indices
            })
            .max()
    }
}
