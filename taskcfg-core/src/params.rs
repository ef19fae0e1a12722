use serde::{Deserialize, Serialize};

/// One argument position replaced at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Bit index in the bitmap, 0 = least significant.
    pub position: u8,
    /// Local stack slot the argument is read from. `None` until slots are assigned.
    pub stack_slot: Option<u8>,
}

impl ParameterDescriptor {
    #[inline]
    pub fn new(position: u8, stack_slot: u8) -> Self {
        Self { position, stack_slot: Some(stack_slot) }
    }

    #[inline]
    pub fn unassigned(position: u8) -> Self {
        Self { position, stack_slot: None }
    }
}

/// Bits needed to write `bitmap` without leading zeros. A zero bitmap is one bit wide.
#[inline]
pub fn bitmap_width(bitmap: u64) -> u32 {
    (u64::BITS - bitmap.leading_zeros()).max(1)
}

/// Expand the bitmap into params, scanning from the highest set bit down.
///
/// The result is strictly descending by position; slot pairing relies on that order.
pub fn decode_param_bitmap(bitmap: u64) -> Vec<ParameterDescriptor> {
    let params: Vec<_> = (0..bitmap_width(bitmap))
        .rev()
        .filter(|&bit| bitmap >> bit & 1 == 1)
        .map(|bit| ParameterDescriptor::unassigned(bit as u8))
        .collect();

    log::debug!(
        "bitmap {:016x} -> positions {:?}",
        bitmap,
        params.iter().map(|p| p.position).collect::<Vec<_>>()
    );
    params
}
