//! Raw descriptor access.
//!
//! Layout (character offsets into the full string):
//! - 0..2:   prefix marker (`0x`), not checked
//! - 2..4:   call-type byte; only the digit at offset 3 is decoded
//! - 4..6:   declared reference count
//! - 6..22:  parameter bitmap, big-endian u64
//! - 22..66: stack-slot trailer, 22 bytes, right-padded with `ff`

use std::ops::Range;

use crate::error::{DecodeError, Result};
use crate::hex;

/// Total length including the two-character prefix.
pub const DESCRIPTOR_LEN: usize = 66;

pub const CALL_TYPE_OFFSET: usize = 3;
pub const REFERENCE_COUNT: Range<usize> = 4..6;
pub const BITMAP: Range<usize> = 6..22;
pub const TRAILER: Range<usize> = 22..DESCRIPTOR_LEN;

/// A descriptor that passed the length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor<'a> {
    raw: &'a str,
}

impl<'a> Descriptor<'a> {
    /// Validate the total length. No field is read here.
    ///
    /// Non-ASCII input of the right character count is rejected as an invalid
    /// digit so later slicing stays on character boundaries.
    pub fn parse(raw: &'a str) -> Result<Self> {
        let len = raw.chars().count();
        if len != DESCRIPTOR_LEN {
            return Err(DecodeError::MalformedDescriptor { len });
        }
        if let Some((offset, found)) = raw.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
            return Err(DecodeError::InvalidHexDigit { offset, found });
        }
        Ok(Self { raw })
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    #[inline]
    pub fn call_type_digit(&self) -> char {
        char::from(self.raw.as_bytes()[CALL_TYPE_OFFSET])
    }

    pub fn reference_count(&self) -> Result<u8> {
        hex::parse_u64(&self.raw[REFERENCE_COUNT], REFERENCE_COUNT.start).map(|v| v as u8)
    }

    pub fn bitmap_digits(&self) -> &'a str {
        &self.raw[BITMAP]
    }

    pub fn bitmap(&self) -> Result<u64> {
        hex::parse_u64(self.bitmap_digits(), BITMAP.start)
    }

    /// Trailer text as written. Digits are checked when slots are decoded.
    #[inline]
    pub fn trailer(&self) -> &'a str {
        &self.raw[TRAILER]
    }
}
