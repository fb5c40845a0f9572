//! Field operations: bset, bclr, bextract, bextractu, binsert.
//!
//! Every operation works on a contiguous field described by an offset (`imm`)
//! and a length. Intermediate values are widened to 64 bits so that a full
//! 32-bit field and shifts by 32 stay well defined; results are truncated
//! back to XLEN.

use crate::{FieldError, Result, XLEN};

const LOW_WORD: u64 = 0xFFFF_FFFF;
const HIGH_WORD: u64 = 0xFFFF_FFFF_0000_0000;

/// Bit field descriptor `(imm, len)` with `imm + len <= 32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    imm: u32,
    len: u32,
}

impl FieldSpec {
    /// Create a field descriptor, rejecting fields that leave the word.
    pub const fn new(imm: u32, len: u32) -> Result<Self> {
        if imm >= XLEN {
            return Err(FieldError::OffsetOutOfRange(imm));
        }
        if len > XLEN - imm {
            return Err(FieldError::FieldOverflow { imm, len });
        }
        Ok(Self { imm, len })
    }

    /// Bit offset of the field.
    #[inline]
    pub const fn imm(self) -> u32 {
        self.imm
    }

    /// Length of the field in bits (may be zero).
    #[inline]
    pub const fn len(self) -> u32 {
        self.len
    }

    /// True for a zero-length field.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Mask selecting the field: `((1 << len) - 1) << imm`.
    #[inline]
    pub const fn mask(self) -> u32 {
        ((((1u64 << self.len) - 1) << self.imm) & LOW_WORD) as u32
    }

    /// Descriptor packed into one register operand: `imm | ((len - 1) << 5)`.
    ///
    /// Wraps in 32 bits, so a zero-length field packs to `0xFFFF_FFE0 | imm`.
    #[inline]
    pub const fn packed_operand(self) -> u32 {
        self.imm | (self.len.wrapping_sub(1) << 5)
    }
}

/// Set every bit of the field.
#[inline]
pub const fn bset(a: u32, field: FieldSpec) -> u32 {
    a | field.mask()
}

/// Clear every bit of the field.
#[inline]
pub const fn bclr(a: u32, field: FieldSpec) -> u32 {
    a & !field.mask()
}

/// Extract the field and sign-extend it from its top bit.
pub const fn bextract(a: u32, field: FieldSpec) -> u32 {
    let top = field.imm + field.len;
    // Shift that moves the field's top bit to bit 31.
    let lshift = if top < XLEN { XLEN - top } else { 0 };

    let mut aligned = ((a & field.mask()) as u64) << lshift;
    if aligned & (1 << 31) != 0 {
        aligned |= HIGH_WORD;
    }
    ((aligned >> (field.imm + lshift)) & LOW_WORD) as u32
}

/// Extract the field, zero-extended.
#[inline]
pub const fn bextractu(a: u32, field: FieldSpec) -> u32 {
    (a & field.mask()) >> field.imm
}

/// Insert the low `len` bits of `a` into `c` at `imm`.
#[inline]
pub const fn binsert(a: u32, c: u32, field: FieldSpec) -> u32 {
    ((a << field.imm) & field.mask()) | (c & !field.mask())
}

/// Expected results of the five field operations for one stimulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldResults {
    pub bset: u32,
    pub bclr: u32,
    pub bextract: u32,
    pub bextractu: u32,
    pub binsert: u32,
}

impl FieldResults {
    /// Evaluate every field operation on `(a, c)`.
    pub const fn compute(a: u32, c: u32, field: FieldSpec) -> Self {
        Self {
            bset: bset(a, field),
            bclr: bclr(a, field),
            bextract: bextract(a, field),
            bextractu: bextractu(a, field),
            binsert: binsert(a, c, field),
        }
    }
}
