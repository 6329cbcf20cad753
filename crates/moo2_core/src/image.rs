use std::io::{Read, Write};
use std::ops::Range;

use crate::error::{CoreError, CoreErrorCode};

const U16_WIDTH: usize = 2;

/// The raw bytes of one save file. Every entity view reads and writes through
/// this buffer; its length is fixed once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteImage {
    bytes: Vec<u8>,
}

impl ByteImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn load<R: Read>(mut reader: R) -> Result<Self, CoreError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::new(bytes))
    }

    pub fn store<W: Write>(&self, mut writer: W) -> Result<(), CoreError> {
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, CoreError> {
        self.check(offset, 1)?;
        Ok(self.bytes[offset])
    }

    pub fn write_u8(&mut self, offset: usize, value: u8) -> Result<(), CoreError> {
        self.check(offset, 1)?;
        self.bytes[offset] = value;
        Ok(())
    }

    pub fn read_u16_le(&self, offset: usize) -> Result<u16, CoreError> {
        self.check(offset, U16_WIDTH)?;
        Ok(u16::from_le_bytes([self.bytes[offset], self.bytes[offset + 1]]))
    }

    pub fn write_u16_le(&mut self, offset: usize, value: u16) -> Result<(), CoreError> {
        self.check(offset, U16_WIDTH)?;
        self.bytes[offset..offset + U16_WIDTH].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Like [`write_u16_le`](Self::write_u16_le) for values held in a wider
    /// integer, rejecting anything that does not fit in 16 bits.
    pub fn write_u16_le_checked(&mut self, offset: usize, value: u32) -> Result<(), CoreError> {
        let narrow = u16::try_from(value).map_err(|_| {
            CoreError::new(
                CoreErrorCode::ValueOutOfRange,
                format!("value {value} does not fit in 16 bits"),
            )
        })?;
        self.write_u16_le(offset, narrow)
    }

    /// Exchange the 16-bit words at `a` and `b`.
    pub fn swap_u16(&mut self, a: usize, b: usize) -> Result<(), CoreError> {
        self.check(a, U16_WIDTH)?;
        self.check(b, U16_WIDTH)?;
        let first = self.read_u16_le(a)?;
        let second = self.read_u16_le(b)?;
        self.write_u16_le(a, second)?;
        self.write_u16_le(b, first)
    }

    /// Read a NUL-terminated single-byte string, consuming at most `max_len`
    /// bytes. A field with no terminator is truncated at `max_len`.
    pub fn read_c_string(&self, offset: usize, max_len: usize) -> Result<String, CoreError> {
        let available = self.bytes.len().saturating_sub(offset).min(max_len);
        self.check(offset, available)?;
        Ok(self.bytes[offset..offset + available]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| char::from(b))
            .collect())
    }

    pub fn slice(&self, range: Range<usize>) -> Result<&[u8], CoreError> {
        self.check(range.start, range.end.saturating_sub(range.start))?;
        Ok(&self.bytes[range])
    }

    pub fn write_slice(&mut self, offset: usize, data: &[u8]) -> Result<(), CoreError> {
        self.check(offset, data.len())?;
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }

    fn check(&self, offset: usize, len: usize) -> Result<(), CoreError> {
        let end = offset.checked_add(len).ok_or_else(|| {
            CoreError::out_of_range(format!("offset {offset:#x} + {len} overflows"))
        })?;
        if offset >= self.bytes.len() || end > self.bytes.len() {
            return Err(CoreError::out_of_range(format!(
                "offset {offset:#x}..{end:#x} outside buffer of {} bytes",
                self.bytes.len()
            )));
        }
        Ok(())
    }
}
