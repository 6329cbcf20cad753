use std::fmt;
use std::ops::{Deref, DerefMut};

use log::debug;

use crate::body_type::BodyType;
use crate::colony::Colony;
use crate::error::{CoreError, CoreErrorCode};
use crate::game::Game;
use crate::labels::{
    BODY_TYPES, GRAVITIES, GRAVITY_MAX_RAW, RICHNESSES, SCENERY_MAX, SIZE_AUX, SIZES,
    TERRAFORM_FOOD, TERRAFORMS,
};
use crate::layout::{
    NO_INDEX_U16, PLANET_COLONY_OFFSET, PLANET_FOOD_OFFSET, PLANET_GRAVITY_OFFSET,
    PLANET_POSITION_OFFSET, PLANET_RICHNESS_OFFSET, PLANET_SCENERY_OFFSET,
    PLANET_SIZE_AUX_OFFSET, PLANET_SIZE_OFFSET, PLANET_STAR_OFFSET, PLANET_TERRAFORM_OFFSET,
    PLANET_TYPE_OFFSET, PLANETS, STARS, star_slot_offset,
};
use crate::star::{Star, check_position, hex_dump};
use crate::types::PlanetSummary;

const NORMAL_GRAVITY: u8 = 1;

/// A planetary body record: planet, gas giant or asteroid belt.
///
/// Planets have no existence flag of their own; a planet exists when a star
/// slot or a colony points at it.
#[derive(Debug, Clone, Copy)]
pub struct Planet<G> {
    game: G,
    index: usize,
    offset: usize,
}

impl<G: Deref<Target = Game>> Planet<G> {
    pub(crate) fn new(game: G, index: usize) -> Result<Self, CoreError> {
        let offset = PLANETS.offset(index)?;
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

    fn byte(&self, field: usize) -> Result<u8, CoreError> {
        self.game.image().read_u8(self.offset + field)
    }

    pub fn colony_index(&self) -> Result<Option<usize>, CoreError> {
        let raw = self
            .game
            .image()
            .read_u16_le(self.offset + PLANET_COLONY_OFFSET)?;
        Ok((raw != NO_INDEX_U16).then_some(usize::from(raw)))
    }

    pub fn colony(&self) -> Result<Option<Colony<'_>>, CoreError> {
        self.colony_index()?
            .map(|index| Colony::new(&*self.game, index))
            .transpose()
    }

    pub fn star_index(&self) -> Result<usize, CoreError> {
        self.byte(PLANET_STAR_OFFSET).map(usize::from)
    }

    pub fn star(&self) -> Result<Star<&Game>, CoreError> {
        Star::new(&*self.game, self.star_index()?)
    }

    /// Orbital position, 0 closest to the star and 4 furthest.
    pub fn position(&self) -> Result<u8, CoreError> {
        self.byte(PLANET_POSITION_OFFSET)
    }

    /// 1 asteroid, 2 gas giant, 3 planet.
    pub fn body_type(&self) -> Result<u8, CoreError> {
        self.byte(PLANET_TYPE_OFFSET)
    }

    pub fn body_type_label(&self) -> Result<Option<&'static str>, CoreError> {
        Ok(BODY_TYPES.label(self.body_type()?))
    }

    pub fn terraform(&self) -> Result<u8, CoreError> {
        self.byte(PLANET_TERRAFORM_OFFSET)
    }

    pub fn terraform_label(&self) -> Result<Option<&'static str>, CoreError> {
        Ok(TERRAFORMS.label(self.terraform()?))
    }

    pub fn size(&self) -> Result<u8, CoreError> {
        self.byte(PLANET_SIZE_OFFSET)
    }

    pub fn size_label(&self) -> Result<Option<&'static str>, CoreError> {
        Ok(SIZES.label(self.size()?))
    }

    /// The byte that tracks size; see [`Planet::set_size`].
    pub fn size_aux(&self) -> Result<u8, CoreError> {
        self.byte(PLANET_SIZE_AUX_OFFSET)
    }

    pub fn gravity(&self) -> Result<u8, CoreError> {
        self.byte(PLANET_GRAVITY_OFFSET)
    }

    pub fn gravity_label(&self) -> Result<Option<&'static str>, CoreError> {
        Ok(GRAVITIES.label(self.gravity()?))
    }

    pub fn richness(&self) -> Result<u8, CoreError> {
        self.byte(PLANET_RICHNESS_OFFSET)
    }

    pub fn richness_label(&self) -> Result<Option<&'static str>, CoreError> {
        Ok(RICHNESSES.label(self.richness()?))
    }

    /// Base food. Terraforming, racial bonuses and buildings all feed into
    /// this value in game.
    pub fn food(&self) -> Result<u8, CoreError> {
        self.byte(PLANET_FOOD_OFFSET)
    }

    /// Colony-screen backdrop, 0 through 2.
    pub fn scenery(&self) -> Result<u8, CoreError> {
        self.byte(PLANET_SCENERY_OFFSET)
    }

    pub fn block(&self) -> Result<&[u8], CoreError> {
        self.game
            .image()
            .slice(self.offset..self.offset + PLANETS.stride)
    }

    pub fn block_hex(&self) -> Result<String, CoreError> {
        Ok(hex_dump(self.block()?))
    }

    pub fn summary(&self) -> Result<PlanetSummary, CoreError> {
        Ok(PlanetSummary {
            index: self.index,
            star: self.star_index()?,
            position: self.position()?,
            body_type: self.body_type()?,
            body_type_label: self.body_type_label()?.map(str::to_string),
            size: self.size()?,
            size_label: self.size_label()?.map(str::to_string),
            gravity: self.gravity()?,
            gravity_label: self.gravity_label()?.map(str::to_string),
            richness: self.richness()?,
            richness_label: self.richness_label()?.map(str::to_string),
            terraform: self.terraform()?,
            terraform_label: self.terraform_label()?.map(str::to_string),
            food: self.food()?,
            scenery: self.scenery()?,
            colony: self.colony_index()?,
        })
    }

    fn describe(&self) -> Result<String, CoreError> {
        let mut tokens = vec![format!("planet-{:03}", self.index)];
        let type_label = self.body_type_label()?.unwrap_or("unknown");
        if self.body_type()? == BodyType::PLANET_RAW {
            tokens.push(label_or_raw(self.size_label()?, self.size()?));
            tokens.push(label_or_raw(self.richness_label()?, self.richness()?));
            tokens.push(label_or_raw(self.terraform_label()?, self.terraform()?));
            let gravity = self.gravity()?;
            if gravity != NORMAL_GRAVITY {
                tokens.push(label_or_raw(self.gravity_label()?, gravity));
            }
        } else {
            tokens.push(type_label.to_string());
        }
        Ok(format!("<{}>", tokens.join(" ")))
    }
}

impl<G: DerefMut<Target = Game>> Planet<G> {
    fn set_byte(&mut self, field: usize, value: u8) -> Result<(), CoreError> {
        let offset = self.offset + field;
        self.game.image_mut().write_u8(offset, value)
    }

    pub fn set_body_type(&mut self, value: i32) -> Result<(), CoreError> {
        let code = u8::try_from(value)
            .ok()
            .filter(|&code| BODY_TYPES.contains(code))
            .ok_or_else(|| {
                CoreError::new(
                    CoreErrorCode::InvalidType,
                    format!("type code must be one of 1,2,3, got {value}"),
                )
            })?;
        self.set_byte(PLANET_TYPE_OFFSET, code)
    }

    pub fn set_body_type_label(&mut self, label: &str) -> Result<(), CoreError> {
        let code = BODY_TYPES.code(label)?;
        self.set_body_type(i32::from(code))
    }

    /// Set the terraform code and shift base food by the difference between
    /// the typical food of the new and old terraform levels.
    pub fn set_terraform(&mut self, value: i32) -> Result<(), CoreError> {
        let new = checked_code("terraform", value, TERRAFORMS.labels.len() as u8 - 1)?;
        let old = self.terraform()?;
        let old_food = TERRAFORM_FOOD
            .get(usize::from(old))
            .copied()
            .ok_or_else(|| {
                CoreError::out_of_range(format!(
                    "current terraform code {old} has no typical food"
                ))
            })?;
        let food = i32::from(self.food()?) + i32::from(TERRAFORM_FOOD[usize::from(new)])
            - i32::from(old_food);
        let food = checked_code("food", food, u8::MAX)?;

        self.set_byte(PLANET_FOOD_OFFSET, food)?;
        self.set_byte(PLANET_TERRAFORM_OFFSET, new)
    }

    pub fn set_terraform_label(&mut self, label: &str) -> Result<(), CoreError> {
        let code = TERRAFORMS.code(label)?;
        self.set_terraform(i32::from(code))
    }

    /// Set the size code. The auxiliary size byte follows along only while it
    /// still holds the typical value for the old size; a customised value is
    /// left alone.
    pub fn set_size(&mut self, value: i32) -> Result<(), CoreError> {
        let new = checked_code("size", value, SIZES.labels.len() as u8 - 1)?;
        let old = self.size()?;
        let aux = self.size_aux()?;
        let tracks_size = SIZE_AUX.get(usize::from(old)) == Some(&aux);

        self.set_byte(PLANET_SIZE_OFFSET, new)?;
        if tracks_size {
            self.set_byte(PLANET_SIZE_AUX_OFFSET, SIZE_AUX[usize::from(new)])?;
        }
        Ok(())
    }

    pub fn set_size_label(&mut self, label: &str) -> Result<(), CoreError> {
        let code = SIZES.code(label)?;
        self.set_size(i32::from(code))
    }

    /// Accepts 0 through 4; only 0 through 2 carry a label.
    pub fn set_gravity(&mut self, value: i32) -> Result<(), CoreError> {
        let code = checked_code("gravity", value, GRAVITY_MAX_RAW)?;
        self.set_byte(PLANET_GRAVITY_OFFSET, code)
    }

    pub fn set_gravity_label(&mut self, label: &str) -> Result<(), CoreError> {
        let code = GRAVITIES.code(label)?;
        self.set_gravity(i32::from(code))
    }

    pub fn set_richness(&mut self, value: i32) -> Result<(), CoreError> {
        let code = checked_code("richness", value, RICHNESSES.labels.len() as u8 - 1)?;
        self.set_byte(PLANET_RICHNESS_OFFSET, code)
    }

    pub fn set_richness_label(&mut self, label: &str) -> Result<(), CoreError> {
        let code = RICHNESSES.code(label)?;
        self.set_richness(i32::from(code))
    }

    pub fn set_food(&mut self, value: i32) -> Result<(), CoreError> {
        let code = checked_code("food", value, u8::MAX)?;
        self.set_byte(PLANET_FOOD_OFFSET, code)
    }

    pub fn set_scenery(&mut self, value: i32) -> Result<(), CoreError> {
        let code = checked_code("scenery", value, SCENERY_MAX)?;
        self.set_byte(PLANET_SCENERY_OFFSET, code)
    }

    /// Move this planet to orbital `position` around its star.
    ///
    /// A planet already at `position` trades places with this one. The
    /// position byte of each planet and the star's slot table are updated
    /// together; everything is checked before the first write.
    pub fn set_position(&mut self, position: usize) -> Result<(), CoreError> {
        check_position(position)?;
        let old = usize::from(self.position()?);
        if position == old {
            return Ok(());
        }

        let star_index = self.star_index()?;
        let star_offset = STARS.offset(star_index)?;
        check_position(old).map_err(|_| self.mismatch(format!("stored position {old}")))?;
        let old_slot = star_slot_offset(star_offset, old);
        let new_slot = star_slot_offset(star_offset, position);

        let image = self.game.image();
        if usize::from(image.read_u16_le(old_slot)?) != self.index {
            return Err(self.mismatch(format!(
                "star {star_index} slot {old} does not reference it"
            )));
        }
        let other = match image.read_u16_le(new_slot)? {
            NO_INDEX_U16 => None,
            raw => {
                let other_offset = PLANETS.offset(usize::from(raw))?;
                let other_position = image.read_u8(other_offset + PLANET_POSITION_OFFSET)?;
                if usize::from(other_position) != position {
                    return Err(self.mismatch(format!(
                        "planet {raw} in slot {position} records position {other_position}"
                    )));
                }
                Some((raw, other_offset))
            }
        };

        let image = self.game.image_mut();
        if let Some((_, other_offset)) = other {
            image.write_u8(other_offset + PLANET_POSITION_OFFSET, old as u8)?;
        }
        image.write_u8(self.offset + PLANET_POSITION_OFFSET, position as u8)?;
        // The vacated slot must pick up the 0xFFFF sentinel when nothing was
        // there, so the table is swapped either way.
        image.swap_u16(new_slot, old_slot)?;

        debug!(
            "planet {} moved {old} -> {position} at star {star_index}, displaced {:?}",
            self.index,
            other.map(|(raw, _)| raw)
        );
        Ok(())
    }

    fn mismatch(&self, detail: String) -> CoreError {
        CoreError::new(
            CoreErrorCode::SentinelMismatch,
            format!("planet {}: {detail}", self.index),
        )
    }
}

impl<G: Deref<Target = Game>> fmt::Display for Planet<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.describe() {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "<planet-{:03} unreadable>", self.index),
        }
    }
}

fn checked_code(field: &str, value: i32, max: u8) -> Result<u8, CoreError> {
    u8::try_from(value)
        .ok()
        .filter(|&code| code <= max)
        .ok_or_else(|| {
            CoreError::out_of_range(format!(
                "{field} must be between 0 and {max} inclusive, got {value}"
            ))
        })
}

fn label_or_raw(label: Option<&'static str>, raw: u8) -> String {
    label.map_or_else(|| format!("?{raw}"), str::to_string)
}
