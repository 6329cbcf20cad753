use std::fmt;

use crate::labels::BODY_TYPES;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Asteroid,
    GasGiant,
    #[default]
    Planet,
    Unknown(u8),
}

impl BodyType {
    pub const ASTEROID_RAW: u8 = 1;
    pub const GAS_GIANT_RAW: u8 = 2;
    pub const PLANET_RAW: u8 = 3;

    pub fn from_raw(raw: u8) -> Self {
        match raw {
            Self::ASTEROID_RAW => Self::Asteroid,
            Self::GAS_GIANT_RAW => Self::GasGiant,
            Self::PLANET_RAW => Self::Planet,
            other => Self::Unknown(other),
        }
    }

    pub fn raw(&self) -> u8 {
        match *self {
            Self::Asteroid => Self::ASTEROID_RAW,
            Self::GasGiant => Self::GAS_GIANT_RAW,
            Self::Planet => Self::PLANET_RAW,
            Self::Unknown(other) => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        BODY_TYPES.label(self.raw()).unwrap_or("unknown")
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unknown(v) => write!(f, "unknown ({})", v),
            _ => f.write_str(self.as_str()),
        }
    }
}
