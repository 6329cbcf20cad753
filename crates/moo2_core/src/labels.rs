//! Code/label tables for the one-byte planet fields.

use crate::error::CoreError;

/// A bijection between consecutive raw codes starting at `first_code` and
/// display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelTable {
    pub field: &'static str,
    pub first_code: u8,
    pub labels: &'static [&'static str],
}

impl LabelTable {
    pub fn label(&self, code: u8) -> Option<&'static str> {
        let index = code.checked_sub(self.first_code)?;
        self.labels.get(usize::from(index)).copied()
    }

    pub fn code(&self, label: &str) -> Result<u8, CoreError> {
        self.labels
            .iter()
            .position(|&l| l == label)
            .map(|index| self.first_code + index as u8)
            .ok_or_else(|| CoreError::invalid_label(self.field, label, self.labels))
    }

    pub fn contains(&self, code: u8) -> bool {
        self.label(code).is_some()
    }

    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.labels.len()).map(move |index| self.first_code + index as u8)
    }
}

pub const BODY_TYPES: LabelTable = LabelTable {
    field: "type",
    first_code: 1,
    labels: &["asteroid", "gas giant", "planet"],
};

pub const TERRAFORMS: LabelTable = LabelTable {
    field: "terraform",
    first_code: 0,
    labels: &[
        "toxic", "radiated", "barren", "desert", "tundra", "ocean", "swamp", "arid", "terran",
        "gaia",
    ],
};

pub const SIZES: LabelTable = LabelTable {
    field: "size",
    first_code: 0,
    labels: &["tiny", "small", "medium", "large", "huge"],
};

pub const GRAVITIES: LabelTable = LabelTable {
    field: "gravity",
    first_code: 0,
    labels: &["LG", "NG", "HG"],
};

pub const RICHNESSES: LabelTable = LabelTable {
    field: "richness",
    first_code: 0,
    labels: &["ultra poor", "poor", "abundant", "rich", "ultra rich"],
};

/// Typical base food for each terraform code.
pub const TERRAFORM_FOOD: [u8; 10] = [0, 0, 0, 1, 1, 2, 2, 1, 2, 3];

/// Typical value of the auxiliary size byte for each size code.
pub const SIZE_AUX: [u8; 5] = [2, 4, 5, 7, 10];

pub const GRAVITY_MAX_RAW: u8 = 4;
pub const SCENERY_MAX: u8 = 2;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreErrorCode;

    #[test]
    fn every_table_is_a_bijection() {
        for table in [BODY_TYPES, TERRAFORMS, SIZES, GRAVITIES, RICHNESSES] {
            for code in table.codes() {
                let label = table.label(code).unwrap();
                assert_eq!(table.code(label).unwrap(), code, "{}", table.field);
            }
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        let err = SIZES.code("gigantic").unwrap_err();
        assert_eq!(err.code, CoreErrorCode::InvalidLabel);
        assert!(err.message.contains("tiny,small,medium,large,huge"));
        assert_eq!(BODY_TYPES.code("Planet").unwrap_err().code, CoreErrorCode::InvalidLabel);
    }

    #[test]
    fn codes_outside_the_table_have_no_label() {
        assert_eq!(BODY_TYPES.label(0), None);
        assert_eq!(BODY_TYPES.label(4), None);
        assert_eq!(GRAVITIES.label(3), None);
        assert_eq!(TERRAFORMS.label(9), Some("gaia"));
    }
}
