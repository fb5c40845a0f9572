//! Stimulus generation: random draws → expected results → C header.

use bmstim_emit::{BrevCheck, HeaderWriter, ParsedHeader, check_function};
use bmstim_isa::BrevInstr;
use rand::Rng;
use tracing::{debug, trace};

use crate::stimulus::{BrevCase, FieldCase, draw_brev_case, draw_field_case};
use crate::{Error, Result};

/// Name of the stimulus-count define.
pub const COUNT_DEFINE: &str = "NumberOfStimuli";

/// Every vector emitted for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StimulusSet {
    /// RISC-V encoding rules were used.
    pub riscv: bool,
    /// Immediate-operand field stimuli (described by `IMM_i`/`LEN_i`).
    pub imm_cases: Vec<FieldCase>,
    /// Bit-reverse stimuli, one per immediate case on the same `a` operand.
    pub brev_cases: Vec<BrevCase>,
    /// Register-operand field stimuli (field packed into `op_b_reg`).
    pub reg_cases: Vec<FieldCase>,
}

impl StimulusSet {
    /// Draw `count` stimuli for each vector set.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, riscv: bool) -> Result<Self> {
        let mut imm_cases = Vec::with_capacity(count);
        let mut brev_cases = Vec::with_capacity(count);
        for index in 0..count {
            let case = draw_field_case(rng, riscv)?;
            let brev = draw_brev_case(rng, case.a, index)?;
            trace!(index, a = case.a, imm = case.field.imm(), len = case.field.len(), brev = %brev.check.instr, "imm stimulus");
            imm_cases.push(case);
            brev_cases.push(brev);
        }

        let reg_cases = (0..count)
            .map(|_| draw_field_case(rng, riscv))
            .collect::<Result<Vec<_>>>()?;

        debug!(count, riscv, "generated stimuli");
        Ok(Self { riscv, imm_cases, brev_cases, reg_cases })
    }

    /// Number of stimuli per vector set.
    pub fn len(&self) -> usize {
        self.imm_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imm_cases.is_empty()
    }

    /// `#define` constants in emission order.
    pub fn defines(&self) -> Vec<(String, i64)> {
        let mut defines = Vec::with_capacity(1 + 2 * self.imm_cases.len());
        defines.push((COUNT_DEFINE.to_string(), self.len() as i64));
        for (i, case) in self.imm_cases.iter().enumerate() {
            defines.push((format!("IMM_{i}"), i64::from(case.field.imm())));
            defines.push((format!("LEN_{i}"), case.encoded_len(self.riscv)));
        }
        defines
    }

    /// 32-bit arrays in emission order.
    pub fn arrays(&self) -> Vec<(&'static str, Vec<u32>)> {
        let imm = &self.imm_cases;
        let reg = &self.reg_cases;
        vec![
            ("op_a", column(imm, |c| c.a)),
            ("op_c", column(imm, |c| c.c)),
            ("res_bset", column(imm, |c| c.expected.bset)),
            ("res_bclr", column(imm, |c| c.expected.bclr)),
            ("res_bextract", column(imm, |c| c.expected.bextract)),
            ("res_bextractu", column(imm, |c| c.expected.bextractu)),
            ("res_binsert", column(imm, |c| c.expected.binsert)),
            (bmstim_emit::BREV_RESULT_ARRAY, self.brev_cases.iter().map(|b| b.expected).collect()),
            ("op_a_reg", column(reg, |c| c.a)),
            ("op_b_reg", column(reg, |c| c.field.packed_operand())),
            ("op_c_reg", column(reg, |c| c.c)),
            ("res_bset_reg", column(reg, |c| c.expected.bset)),
            ("res_bclr_reg", column(reg, |c| c.expected.bclr)),
            ("res_bextract_reg", column(reg, |c| c.expected.bextract)),
            ("res_bextractu_reg", column(reg, |c| c.expected.bextractu)),
            ("res_binsert_reg", column(reg, |c| c.expected.binsert)),
        ]
    }

    /// Render the stimuli header.
    pub fn render_header(&self) -> String {
        let mut writer = HeaderWriter::new();
        for (name, value) in self.defines() {
            writer.define(&name, value);
        }
        for (name, values) in self.arrays() {
            writer.hex32_array(name, &values);
        }
        writer.finish()
    }

    /// `brev` checks in stimulus order.
    pub fn brev_checks(&self) -> Vec<BrevCheck> {
        self.brev_cases.iter().map(|b| b.check).collect()
    }

    /// Render the `check_breverse` function for the C test source.
    pub fn render_check_function(&self) -> String {
        check_function(&self.brev_checks())
    }

    /// Check that a parsed header holds exactly the values of this set, and
    /// that every emitted `.word` decodes back to the `brev` it was built from.
    pub fn verify(&self, parsed: &ParsedHeader) -> Result<()> {
        let defines = self.defines();
        let arrays = self.arrays();
        if parsed.defines.len() != defines.len() || parsed.arrays.len() != arrays.len() {
            return Err(Error::VerifyMismatch(format!(
                "expected {} defines and {} arrays, found {} and {}",
                defines.len(),
                arrays.len(),
                parsed.defines.len(),
                parsed.arrays.len()
            )));
        }
        for (name, value) in &defines {
            if parsed.define(name) != Some(*value) {
                return Err(Error::VerifyMismatch(format!("define {name}")));
            }
        }
        for (name, values) in &arrays {
            if parsed.array(name) != Some(values.as_slice()) {
                return Err(Error::VerifyMismatch(format!("array {name}")));
            }
        }
        for check in self.brev_checks() {
            let word = check.instr.encode();
            match BrevInstr::decode(word) {
                Some(decoded) if decoded == check.instr => {
                    trace!(
                        index = check.index,
                        word = format_args!("{word:#010x}"),
                        disasm = %decoded,
                        "brev word"
                    );
                }
                _ => {
                    return Err(Error::VerifyMismatch(format!(
                        "brev word {word:#x} of check {}",
                        check.index
                    )));
                }
            }
        }
        Ok(())
    }
}

fn column(cases: &[FieldCase], f: impl Fn(&FieldCase) -> u32) -> Vec<u32> {
    cases.iter().map(f).collect()
}
