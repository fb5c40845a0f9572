//! Random stimulus draws and their expected results.

use bmstim_emit::BrevCheck;
use bmstim_isa::{BrevInstr, FieldResults, FieldSpec, Radix, XLEN, bit_reverse};
use rand::Rng;

use crate::Result;

/// Attempts at drawing a length that fits before clamping.
pub const FIELD_DRAW_ATTEMPTS: usize = 4;

/// Registers the `brev` checks may use (t0..t2).
pub const BREV_REGS: std::ops::RangeInclusive<u8> = 5..=7;

/// One field-operation stimulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldCase {
    pub a: u32,
    pub c: u32,
    pub field: FieldSpec,
    pub expected: FieldResults,
}

impl FieldCase {
    pub const fn new(a: u32, c: u32, field: FieldSpec) -> Self {
        Self { a, c, field, expected: FieldResults::compute(a, c, field) }
    }

    /// `LEN_i` value: RISC-V encodes the length minus one.
    pub fn encoded_len(&self, riscv: bool) -> i64 {
        let len = i64::from(self.field.len());
        if riscv { len - 1 } else { len }
    }
}

/// One bit-reverse stimulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrevCase {
    pub check: BrevCheck,
    pub expected: u32,
}

/// Draw a field with `imm + len <= 32`.
///
/// The offset is drawn first; up to [`FIELD_DRAW_ATTEMPTS`] lengths are tried
/// and, if none fits, the length is clamped to `32 - imm`. Without RISC-V
/// rules lengths come from `0..=31`, so a zero-length field is possible.
pub fn draw_field<R: Rng + ?Sized>(rng: &mut R, riscv: bool) -> Result<FieldSpec> {
    let imm = rng.gen_range(0..XLEN);
    let mut len = 0;
    for _ in 0..FIELD_DRAW_ATTEMPTS {
        len = if riscv { rng.gen_range(1..=XLEN) } else { rng.gen_range(0..XLEN) };
        if imm + len <= XLEN {
            break;
        }
    }
    if imm + len > XLEN {
        len = XLEN - imm;
    }
    Ok(FieldSpec::new(imm, len)?)
}

/// Draw operands and a field, and compute the expected results.
pub fn draw_field_case<R: Rng + ?Sized>(rng: &mut R, riscv: bool) -> Result<FieldCase> {
    let a = rng.r#gen::<u32>();
    let c = rng.r#gen::<u32>();
    let field = draw_field(rng, riscv)?;
    Ok(FieldCase::new(a, c, field))
}

/// Draw a `brev` shape and register for `operand` and compute the expected result.
pub fn draw_brev_case<R: Rng + ?Sized>(rng: &mut R, operand: u32, index: usize) -> Result<BrevCase> {
    let radix = Radix::ALL[rng.gen_range(0..Radix::ALL.len())];
    let width = radix.group_bits();
    let length = width * rng.gen_range(1..=XLEN / width);
    let reg = rng.gen_range(BREV_REGS);

    let instr = BrevInstr::new(reg, reg, length, radix)?;
    let expected = bit_reverse(operand, length, radix)?;
    Ok(BrevCase { check: BrevCheck { index, operand, instr }, expected })
}
