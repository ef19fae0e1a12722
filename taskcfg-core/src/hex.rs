//! Hex digit helpers. Offsets in errors are descriptor offsets: callers pass the
//! offset at which `text` starts.

use crate::error::{DecodeError, Result};

#[inline]
fn nibble(c: char, offset: usize) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(DecodeError::InvalidHexDigit { offset, found: c })
}

/// Parse up to 16 hex digits as a big-endian integer.
pub(crate) fn parse_u64(text: &str, base: usize) -> Result<u64> {
    debug_assert!(text.len() <= 16);
    text.chars()
        .enumerate()
        .try_fold(0u64, |acc, (i, c)| Ok(acc << 4 | nibble(c, base + i)? as u64))
}

/// Fail on the first character that is not a hex digit.
pub(crate) fn check_digits(text: &str, base: usize) -> Result<()> {
    text.chars().enumerate().try_for_each(|(i, c)| nibble(c, base + i).map(drop))
}

/// Decode pairs of hex digits into bytes.
pub(crate) fn parse_bytes(text: &str, base: usize) -> Result<Vec<u8>> {
    let digits: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(digits.len() / 2);
    for (i, pair) in digits.chunks(2).enumerate() {
        let offset = base + i * 2;
        match *pair {
            [hi, lo] => out.push(nibble(hi, offset)? << 4 | nibble(lo, offset + 1)?),
            [lone] => {
                nibble(lone, offset)?;
                return Err(DecodeError::DanglingNibble { offset });
            }
            _ => unreachable!(),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_mixed_case() {
        assert_eq!(parse_u64("00000000000000Ff", 6), Ok(0xff));
        assert_eq!(parse_bytes("0aB0", 22), Ok(vec![0x0a, 0xb0]));
    }

    #[test]
    fn reports_descriptor_offset() {
        assert_eq!(
            parse_u64("00g0", 6),
            Err(DecodeError::InvalidHexDigit { offset: 8, found: 'g' })
        );
        assert_eq!(
            parse_bytes("01z", 22),
            Err(DecodeError::InvalidHexDigit { offset: 24, found: 'z' })
        );
        assert_eq!(check_digits("ab-", 0), Err(DecodeError::InvalidHexDigit { offset: 2, found: '-' }));
    }

    #[test]
    fn odd_length_is_rejected() {
        assert_eq!(parse_bytes("010", 22), Err(DecodeError::DanglingNibble { offset: 24 }));
    }
}
