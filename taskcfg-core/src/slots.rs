//! Pairing of trailer bytes with referenced params.
//!
//! Slot bytes sit at the left of the trailer, one per param in descending
//! position order, and the rest of the field is `ff` filler. Pairing runs from
//! the right: the last slot byte belongs to the lowest position.

use crate::descriptor::TRAILER;
use crate::error::{DecodeError, Result};
use crate::hex;
use crate::options::{DecodeOptions, PaddingMode};
use crate::params::ParameterDescriptor;

const FILLER: u8 = 0xff;

/// Slot bytes left in `trailer` once filler is removed.
///
/// `trailer` is expected to start at the trailer offset of a descriptor; error
/// offsets are reported relative to the whole descriptor.
pub fn slot_bytes(trailer: &str, padding: PaddingMode) -> Result<Vec<u8>> {
    match padding {
        PaddingMode::Trailing => {
            let mut bytes = hex::parse_bytes(trailer, TRAILER.start)?;
            let keep = bytes.iter().rposition(|&b| b != FILLER).map_or(0, |i| i + 1);
            bytes.truncate(keep);
            Ok(bytes)
        }
        PaddingMode::Legacy => {
            hex::check_digits(trailer, TRAILER.start)?;
            let cleaned = trailer.to_ascii_lowercase().replace("ff", "");
            if cleaned.len() % 2 != 0 {
                return Err(DecodeError::DanglingNibble { offset: TRAILER.start + trailer.len() - 1 });
            }
            hex::parse_bytes(&cleaned, TRAILER.start)
        }
    }
}

/// Fill in `stack_slot` for each param from the trailer.
///
/// An empty param list is returned untouched without reading the trailer. When
/// slot and param counts differ, pairing stops at whichever runs out first
/// unless the options ask for the counts to be checked.
pub fn assign_stack_slots(
    mut params: Vec<ParameterDescriptor>,
    trailer: &str,
    options: &DecodeOptions,
) -> Result<Vec<ParameterDescriptor>> {
    if params.is_empty() {
        return Ok(params);
    }

    let slots = slot_bytes(trailer, options.padding)?;
    if slots.len() != params.len() {
        if options.validation.checks_slots() {
            return Err(DecodeError::SlotCountMismatch { slots: slots.len(), params: params.len() });
        }
        log::warn!(
            "trailer holds {} stack slots for {} referenced params, pairing stops early",
            slots.len(),
            params.len()
        );
    }

    for (param, &slot) in params.iter_mut().rev().zip(slots.iter().rev()) {
        log::trace!("params[{}] <- local stack[{}]", param.position, slot);
        param.stack_slot = Some(slot);
    }

    Ok(params)
}
