//! Reference semantics for the bit-manipulation extension.
//!
//! This crate models what the hardware is expected to compute: the field
//! operations (`bset`, `bclr`, `bextract`, `bextractu`, `binsert`), the radix
//! bit-reverse and the encoding of the custom `brev` instruction word.

mod brev;
mod encode;
mod field;
mod types;

pub use brev::*;
pub use encode::*;
pub use field::*;
pub use types::*;

use thiserror::Error;

/// Errors for out-of-range operands and encodings.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("field offset {0} out of range (must be < 32)")]
    OffsetOutOfRange(u32),
    #[error("field [imm={imm}, len={len}] extends past bit 31")]
    FieldOverflow { imm: u32, len: u32 },
    #[error("invalid bit-reverse radix {0} (expected 2, 4 or 8)")]
    InvalidRadix(u32),
    #[error("bit-reverse length {length} is not a positive multiple of log2({radix}) within 32 bits")]
    InvalidBrevLength { length: u32, radix: u32 },
    #[error("invalid register x{0}")]
    InvalidRegister(u8),
}

pub type Result<T> = std::result::Result<T, FieldError>;
