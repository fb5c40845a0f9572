//! Encoding of the custom bit-reverse instruction.
//!
//! Layout (MSB to LSB):
//!
//! ```text
//!  31    27 26  25 24     20 19   15 14  12 11    7 6       0
//! | 11000  | rdx  | 32-len  |  rs1  | 101  |  rd   | 0110011 |
//! ```
//!
//! `rdx` is `log2(radix) - 1`. A length of 32 encodes as 0.

use std::fmt;

use crate::{FieldError, Radix, Result, XLEN, check_brev_length};

const OPCODE_OP: u32 = 0b011_0011;
const FUNCT3_BREV: u32 = 0b101;
const FUNCT5_BREV: u32 = 0b11000;

/// Number of integer registers.
pub const NUM_REGS: u8 = 32;

/// Bits `[lo + width - 1 : lo]` of `word`.
#[inline]
const fn bits(word: u32, lo: u32, width: u32) -> u32 {
    (word >> lo) & ((1 << width) - 1)
}

/// A `brev` instruction instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrevInstr {
    pub rd: u8,
    pub rs1: u8,
    pub length: u32,
    pub radix: Radix,
}

impl BrevInstr {
    /// Create an instruction, validating registers and length.
    pub const fn new(rd: u8, rs1: u8, length: u32, radix: Radix) -> Result<Self> {
        if rd >= NUM_REGS {
            return Err(FieldError::InvalidRegister(rd));
        }
        if rs1 >= NUM_REGS {
            return Err(FieldError::InvalidRegister(rs1));
        }
        if let Err(e) = check_brev_length(length, radix) {
            return Err(e);
        }
        Ok(Self { rd, rs1, length, radix })
    }

    /// Encode into a 32-bit instruction word.
    pub const fn encode(self) -> u32 {
        let rdx = self.radix.group_bits() - 1;
        let len_field = (XLEN - self.length) & 0x1F;
        (FUNCT5_BREV << 27)
            | (rdx << 25)
            | (len_field << 20)
            | ((self.rs1 as u32) << 15)
            | (FUNCT3_BREV << 12)
            | ((self.rd as u32) << 7)
            | OPCODE_OP
    }

    /// Decode a `brev` instruction word; `None` for any other word.
    pub const fn decode(raw: u32) -> Option<Self> {
        if bits(raw, 0, 7) != OPCODE_OP
            || bits(raw, 12, 3) != FUNCT3_BREV
            || bits(raw, 27, 5) != FUNCT5_BREV
        {
            return None;
        }
        let Some(radix) = Radix::from_group_bits(bits(raw, 25, 2) + 1) else {
            return None;
        };
        let length = match bits(raw, 20, 5) {
            0 => XLEN,
            len_field => XLEN - len_field,
        };
        let rd = bits(raw, 7, 5) as u8;
        let rs1 = bits(raw, 15, 5) as u8;
        match Self::new(rd, rs1, length, radix) {
            Ok(instr) => Some(instr),
            Err(_) => None,
        }
    }
}

impl fmt::Display for BrevInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "brev x{}, x{}, {}, {}", self.rd, self.rs1, self.length, self.radix)
    }
}
