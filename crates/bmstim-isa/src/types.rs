//! Core types shared by the emulators and the encoder.

use std::fmt;

use crate::FieldError;

/// Register width of the target in bits.
pub const XLEN: u32 = 32;

/// Bit-reverse radix.
///
/// The radix selects the size of the bit groups that are swapped end-to-end:
/// radix 2 reverses single bits, radix 4 reverses 2-bit pairs and radix 8
/// reverses 3-bit triplets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    R2,
    R4,
    R8,
}

impl Radix {
    /// All radices in ascending order.
    pub const ALL: [Self; 3] = [Self::R2, Self::R4, Self::R8];

    /// Build a radix from its group width (log2 of the radix).
    pub const fn from_group_bits(bits: u32) -> Option<Self> {
        match bits {
            1 => Some(Self::R2),
            2 => Some(Self::R4),
            3 => Some(Self::R8),
            _ => None,
        }
    }

    /// Width in bits of one reversed group.
    #[inline]
    pub const fn group_bits(self) -> u32 {
        match self {
            Self::R2 => 1,
            Self::R4 => 2,
            Self::R8 => 3,
        }
    }

    /// Numeric radix value.
    #[inline]
    pub const fn value(self) -> u32 {
        1 << self.group_bits()
    }

    /// Largest length (in bits) that is a whole number of groups and fits XLEN.
    #[inline]
    pub const fn max_length(self) -> u32 {
        (XLEN / self.group_bits()) * self.group_bits()
    }
}

impl TryFrom<u32> for Radix {
    type Error = FieldError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::R2),
            4 => Ok(Self::R4),
            8 => Ok(Self::R8),
            other => Err(FieldError::InvalidRadix(other)),
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
