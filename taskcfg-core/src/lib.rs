//! taskcfg-core
//!
//! Decoder for the 32-byte action descriptor the task executor attaches to every
//! action call. A descriptor says how the call is dispatched, which argument
//! positions are replaced at call time, and which local stack slot feeds each one.
//!
//! The entry points are [`decode`] and [`decode_with`]. Every stage is also
//! exported on its own so callers can inspect a single field.

#![allow(clippy::uninlined_format_args)]

pub mod call_type;
pub mod descriptor;
pub mod error;
pub mod options;
pub mod params;
pub mod slots;

mod hex;

pub use call_type::{decode_call_type, CallType};
pub use descriptor::{Descriptor, DESCRIPTOR_LEN};
pub use error::{DecodeError, Result};
pub use options::{DecodeOptions, PaddingMode, Validation};
pub use params::{bitmap_width, decode_param_bitmap, ParameterDescriptor};
pub use slots::{assign_stack_slots, slot_bytes};

use serde::{Deserialize, Serialize};

/// Fully decoded descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedConfig {
    pub call_type: CallType,
    /// Declared reference count, as stored. Not derived from `params`.
    pub reference_count: u8,
    /// Raw parameter bitmap.
    pub bitmap: u64,
    /// Referenced parameters, highest position first.
    pub params: Vec<ParameterDescriptor>,
}

impl DecodedConfig {
    /// Params left without a stack slot because the trailer ran out of bytes.
    pub fn unassigned(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.params.iter().filter(|p| p.stack_slot.is_none())
    }

    #[inline]
    pub fn is_fully_assigned(&self) -> bool {
        self.unassigned().next().is_none()
    }
}

/// Decode a descriptor with the default options.
pub fn decode(raw: &str) -> Result<DecodedConfig> {
    decode_with(raw, &DecodeOptions::default())
}

/// Decode a descriptor.
///
/// The length check runs before any field is read. The remaining stages each read
/// their own slice of the descriptor; slot assignment additionally consumes the
/// params produced from the bitmap.
pub fn decode_with(raw: &str, options: &DecodeOptions) -> Result<DecodedConfig> {
    let descriptor = Descriptor::parse(raw)?;

    let call_type = decode_call_type(descriptor.call_type_digit());
    let reference_count = descriptor.reference_count()?;
    let bitmap = descriptor.bitmap()?;
    let params = decode_param_bitmap(bitmap);

    if reference_count as usize != params.len() {
        if options.validation.checks_reference_count() {
            return Err(DecodeError::ReferenceCountMismatch {
                declared: reference_count,
                referenced: params.len(),
            });
        }
        log::debug!(
            "declared reference count {} differs from {} referenced params",
            reference_count,
            params.len()
        );
    }

    let params = assign_stack_slots(params, descriptor.trailer(), options)?;

    Ok(DecodedConfig { call_type, reference_count, bitmap, params })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn padded(head: &str) -> String {
        format!("{head}{}", "f".repeat(DESCRIPTOR_LEN - head.len()))
    }

    #[test]
    fn decodes_static_call_with_two_references() -> anyhow::Result<()> {
        let raw = padded("0x020200000000000000030100");
        let config = decode(&raw)?;

        assert_eq!(
            config,
            DecodedConfig {
                call_type: CallType::StaticCall,
                reference_count: 2,
                bitmap: 3,
                params: vec![ParameterDescriptor::new(1, 1), ParameterDescriptor::new(0, 0)],
            }
        );
        assert!(config.is_fully_assigned());
        Ok(())
    }

    #[test]
    fn short_descriptor_produces_no_partial_result() {
        let err = decode("0x0100").unwrap_err();
        assert_eq!(err, DecodeError::MalformedDescriptor { len: 6 });
    }

    #[test]
    fn reference_count_is_not_checked_by_default() -> anyhow::Result<()> {
        // declares 0 references but the bitmap marks position 1
        let raw = padded("0x0100000000000000000200");
        let config = decode(&raw)?;
        assert_eq!(config.reference_count, 0);
        assert_eq!(config.params, vec![ParameterDescriptor::new(1, 0)]);
        Ok(())
    }

    #[test]
    fn full_validation_rejects_reference_count_mismatch() {
        let raw = padded("0x0100000000000000000200");
        let options = DecodeOptions { validation: Validation::Full, ..Default::default() };
        assert_eq!(
            decode_with(&raw, &options).unwrap_err(),
            DecodeError::ReferenceCountMismatch { declared: 0, referenced: 1 }
        );
    }

    #[test]
    fn unassigned_lists_params_without_slots() -> anyhow::Result<()> {
        // three positions, one slot byte
        let raw = padded("0x0103000000000000000702");
        let config = decode(&raw)?;
        let positions: Vec<u8> = config.unassigned().map(|p| p.position).collect();
        assert_eq!(positions, vec![2, 1]);
        assert!(!config.is_fully_assigned());
        Ok(())
    }
}
