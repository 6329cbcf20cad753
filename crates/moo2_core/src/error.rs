use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    Io,
    /// A buffer offset, slot index or field value lies outside its legal domain.
    OutOfRange,
    /// A value handed to a 16-bit write does not fit in 16 bits.
    ValueOutOfRange,
    /// An orbital position outside 0..=4.
    IndexOutOfRange,
    InvalidLabel,
    InvalidType,
    PositionOccupied,
    /// The star slot table and a planet record disagree.
    SentinelMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub(crate) fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::OutOfRange, message)
    }

    pub(crate) fn invalid_label(field: &str, value: &str, table: &[&str]) -> Self {
        Self::new(
            CoreErrorCode::InvalidLabel,
            format!("{field} label {value:?} must be one of {}", table.join(",")),
        )
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for CoreError {}

impl From<io::Error> for CoreError {
    fn from(e: io::Error) -> Self {
        Self::new(CoreErrorCode::Io, e.to_string())
    }
}
