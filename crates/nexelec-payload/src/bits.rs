//! Bit-field extraction.
//!
//! Uplink payloads pack fields at fixed bit offsets, counted from the first
//! bit of the payload, most-significant bit first within each byte:
//!
//! ```text
//! byte:    |        0        |        1        |  ...
//! bit:     | 0 1 2 3 4 5 6 7 | 8 9 ...         |
//! ```

use crate::error::PayloadError;

/// Widest field [`BitReader::read`] can return.
pub const MAX_FIELD_WIDTH: usize = 32;

/// Location of a named unsigned field inside a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    /// Field name, used in error messages.
    pub name: &'static str,
    /// Absolute offset of the first bit.
    pub offset: usize,
    /// Width in bits.
    pub width: usize,
}

impl BitField {
    /// Create a field descriptor.
    pub const fn new(name: &'static str, offset: usize, width: usize) -> Self {
        BitField {
            name,
            offset,
            width,
        }
    }

    /// One past the last bit of the field.
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }

    /// Largest raw value the field can hold.
    pub const fn max_value(&self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        }
    }
}

/// Reads unsigned bit fields from a byte slice.
#[derive(Debug, Clone, Copy)]
pub struct BitReader<'a> {
    data: &'a [u8],
}

impl<'a> BitReader<'a> {
    /// Create a reader over a payload.
    pub fn new(data: &'a [u8]) -> Self {
        BitReader { data }
    }

    /// Number of bits in the payload.
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Read a field as a big-endian unsigned integer.
    pub fn read(&self, field: BitField) -> Result<u32, PayloadError> {
        if field.width > MAX_FIELD_WIDTH {
            return Err(PayloadError::FieldTooWide {
                field: field.name,
                width: field.width,
                max: MAX_FIELD_WIDTH,
            });
        }
        if field.end() > self.bit_len() {
            return Err(PayloadError::Truncated {
                field: field.name,
                offset: field.offset,
                end: field.end(),
                available: self.bit_len(),
            });
        }

        let mut value = 0u32;
        for bit in field.offset..field.end() {
            let byte = self.data[bit / 8];
            let set = (byte >> (7 - bit % 8)) & 1;
            value = (value << 1) | u32::from(set);
        }
        Ok(value)
    }

    /// Read a single-bit field as a flag.
    pub fn read_flag(&self, field: BitField) -> Result<bool, PayloadError> {
        Ok(self.read(field)? == 1)
    }
}
