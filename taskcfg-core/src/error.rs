use crate::descriptor::DESCRIPTOR_LEN;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed descriptor: length {len}, expected {}", DESCRIPTOR_LEN)]
    MalformedDescriptor { len: usize },

    #[error("invalid hex digit {found:?} at offset {offset}")]
    InvalidHexDigit { offset: usize, found: char },

    #[error("dangling hex digit at offset {offset}")]
    DanglingNibble { offset: usize },

    #[error("trailer holds {slots} stack slots for {params} referenced params")]
    SlotCountMismatch { slots: usize, params: usize },

    #[error("descriptor declares {declared} references but the bitmap marks {referenced}")]
    ReferenceCountMismatch { declared: u8, referenced: usize },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
