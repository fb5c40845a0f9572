//! Radix bit-reverse.

use crate::{FieldError, Radix, Result, XLEN};

/// Check that `length` is a positive whole number of radix groups within XLEN.
pub const fn check_brev_length(length: u32, radix: Radix) -> Result<()> {
    if length == 0 || length > XLEN || length % radix.group_bits() != 0 {
        return Err(FieldError::InvalidBrevLength { length, radix: radix.value() });
    }
    Ok(())
}

/// Reverse the order of the `log2(radix)`-bit groups in the low `length` bits.
///
/// Bits above `length` are cleared in the result.
pub fn bit_reverse(value: u32, length: u32, radix: Radix) -> Result<u32> {
    check_brev_length(length, radix)?;

    let width = radix.group_bits();
    let group_mask = (1u32 << width) - 1;
    let groups = length / width;

    let reversed = (0..groups).fold(0u32, |acc, i| {
        let group = (value >> (i * width)) & group_mask;
        acc | (group << ((groups - 1 - i) * width))
    });
    Ok(reversed)
}
