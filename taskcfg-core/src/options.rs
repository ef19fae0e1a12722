use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How filler bytes are dropped from the stack-slot trailer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum PaddingMode {
    /// Drop the run of `0xff` bytes at the right end of the trailer.
    #[default]
    Trailing,
    /// Delete every `ff` digit pair anywhere in the trailer text, byte-aligned or not.
    Legacy,
}

/// Cross-field checks enforced while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Mismatches are logged; unpaired params keep no slot.
    #[default]
    Permissive,
    /// Slot byte count must equal the param count.
    Slots,
    /// `Slots`, and the declared reference count must equal the param count.
    Full,
}

impl Validation {
    #[inline]
    pub fn checks_slots(self) -> bool {
        matches!(self, Validation::Slots | Validation::Full)
    }

    #[inline]
    pub fn checks_reference_count(self) -> bool {
        matches!(self, Validation::Full)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub padding: PaddingMode,
    pub validation: Validation,
}
