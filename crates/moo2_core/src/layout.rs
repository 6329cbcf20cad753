use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A fixed-stride table of records starting at `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTable {
    pub name: &'static str,
    pub base: usize,
    pub stride: usize,
    pub count: usize,
}

impl SlotTable {
    pub const fn new(name: &'static str, base: usize, stride: usize, count: usize) -> Self {
        Self {
            name,
            base,
            stride,
            count,
        }
    }

    pub fn offset(&self, index: usize) -> Result<usize, CoreError> {
        self.offset_within(index, self.count)
    }

    /// Offset of slot `index` when only the first `limit` slots are live.
    pub fn offset_within(&self, index: usize, limit: usize) -> Result<usize, CoreError> {
        let limit = limit.min(self.count);
        if index >= limit {
            return Err(CoreError::out_of_range(format!(
                "{} number {index} must be in range 0 to {}",
                self.name,
                limit as isize - 1
            )));
        }
        Ok(self.base + index * self.stride)
    }

    pub fn range(&self, index: usize) -> Result<ByteRange, CoreError> {
        let start = self.offset(index)?;
        Ok(ByteRange {
            start,
            end: start + self.stride,
        })
    }

    /// One past the last byte of the final slot.
    pub fn end(&self) -> usize {
        self.base + self.count * self.stride
    }
}

pub const MAX_STARS: usize = 72;
pub const MAX_PLANETS: usize = 360;
pub const MAX_COLONIES: usize = 360;
pub const MAX_PLAYERS: usize = 8;
pub const ORBIT_COUNT: usize = 5;

pub const NO_INDEX_U16: u16 = 0xFFFF;
pub const NO_INDEX_U8: u8 = 0xFF;

pub const STARS: SlotTable = SlotTable::new("star", 0x17ad3, 0x71, MAX_STARS);
pub const PLANETS: SlotTable = SlotTable::new("planet", 0x162e9, 0x11, MAX_PLANETS);
pub const COLONIES: SlotTable = SlotTable::new("colony", 0x25d, 0x169, MAX_COLONIES);
pub const PLAYERS: SlotTable = SlotTable::new("player", 0x1aa0f, 0xea9, MAX_PLAYERS);

pub const PLAYER_COUNT_OFFSET: usize = 0x1aa0c;

pub const STAR_NAME_OFFSET: usize = 0x00;
pub const STAR_X_OFFSET: usize = 0x0f;
pub const STAR_Y_OFFSET: usize = 0x11;
pub const STAR_PLANET_TABLE_OFFSET: usize = 0x4a;

pub const PLANET_COLONY_OFFSET: usize = 0x00;
pub const PLANET_STAR_OFFSET: usize = 0x02;
pub const PLANET_POSITION_OFFSET: usize = 0x03;
pub const PLANET_TYPE_OFFSET: usize = 0x04;
pub const PLANET_SIZE_OFFSET: usize = 0x05;
pub const PLANET_GRAVITY_OFFSET: usize = 0x06;
pub const PLANET_TERRAFORM_OFFSET: usize = 0x08;
pub const PLANET_SCENERY_OFFSET: usize = 0x09;
pub const PLANET_RICHNESS_OFFSET: usize = 0x0a;
pub const PLANET_FOOD_OFFSET: usize = 0x0b;
pub const PLANET_SIZE_AUX_OFFSET: usize = 0x0d;

pub const COLONY_PLAYER_OFFSET: usize = 0x00;
pub const COLONY_PLANET_OFFSET: usize = 0x02;

// The file reserves 0x14 bytes per name, but the game caps names at 14.
pub const PLAYER_LEADER_NAME_OFFSET: usize = 0x00;
pub const PLAYER_RACE_NAME_OFFSET: usize = 0x14;
pub const PLAYER_NAME_LEN: usize = 14;

/// Offset of orbital `position` within the star slot table of the star at
/// `star_offset`.
pub fn star_slot_offset(star_offset: usize, position: usize) -> usize {
    star_offset + STAR_PLANET_TABLE_OFFSET + 2 * position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreErrorCode;

    #[test]
    fn addresses_slots_by_stride() {
        assert_eq!(STARS.offset(0).unwrap(), 0x17ad3);
        assert_eq!(STARS.offset(2).unwrap(), 0x17ad3 + 2 * 0x71);
        let range = PLANETS.range(359).unwrap();
        assert_eq!(range.start, 0x162e9 + 359 * 0x11);
        assert_eq!(range.len(), 0x11);
    }

    #[test]
    fn rejects_slots_at_or_past_count() {
        assert_eq!(
            STARS.offset(MAX_STARS).unwrap_err().code,
            CoreErrorCode::OutOfRange
        );
        assert_eq!(
            COLONIES.range(MAX_COLONIES).unwrap_err().code,
            CoreErrorCode::OutOfRange
        );
        assert_eq!(
            PLAYERS.offset_within(3, 3).unwrap_err().code,
            CoreErrorCode::OutOfRange
        );
        assert!(PLAYERS.offset_within(2, 3).is_ok());
    }

    #[test]
    fn planet_star_and_player_tables_do_not_overlap() {
        let mut tables = [PLANETS, STARS, PLAYERS];
        tables.sort_by_key(|t| t.base);
        for pair in tables.windows(2) {
            assert!(
                pair[0].end() <= pair[1].base,
                "{} overlaps {}",
                pair[0].name,
                pair[1].name
            );
        }
        assert!(STARS.end() <= PLAYER_COUNT_OFFSET);
    }
}
