//! Inline-assembly checks for the custom `brev` instruction.
//!
//! The toolchain has no mnemonic for `brev`, so each check loads the operand
//! with `li`, emits the raw instruction word with `.word` and copies the
//! destination register into a C variable for comparison.

use std::fmt::Write;

use bmstim_isa::BrevInstr;

/// Marker used to find the check function in the C test source.
pub const CHECK_FN_MARKER: &str = r"check_breverse\(testresult_t";

/// Signature of the generated check function.
pub const CHECK_FN_SIGNATURE: &str =
    "void check_breverse(testresult_t *result, void (*start)(), void (*stop)())";

/// Name of the expected-result array the checks index into.
pub const BREV_RESULT_ARRAY: &str = "res_brev";

/// Indentation of the locals in the check function, as found in existing test sources.
const LOCALS_INDENT: &str = "              ";

/// One `brev` check: operand, instruction and index of the expected result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrevCheck {
    pub index: usize,
    pub operand: u32,
    pub instr: BrevInstr,
}

impl BrevCheck {
    /// Render the inline-assembly statements for this check.
    pub fn render(&self) -> String {
        let BrevInstr { rd, rs1, .. } = self.instr;
        let mut out = String::new();
        write!(
            out,
            "\n\tasm volatile (\"li x{rs1}, {operand};\"\n\t\".word {word:#x};\"\n\t\"nop\" : : : \"x{rd}\");",
            operand = self.operand,
            word = self.instr.encode(),
        )
        .expect("formatting brev asm");
        write!(
            out,
            "\n\n\tasm volatile (\t\"addi %[c], x{rd}, 0\\n\": [c] \"=r\" (res));"
        )
        .expect("formatting brev readback");
        write!(
            out,
            "\n\n\tcheck_uint32(result, \"brev\", res,  {BREV_RESULT_ARRAY}[{}]);\n\n",
            self.index
        )
        .expect("formatting brev check");
        out
    }
}

/// Wrap rendered checks into the `check_breverse` function definition.
pub fn check_function(checks: &[BrevCheck]) -> String {
    let mut out = format!(
        "{CHECK_FN_SIGNATURE} {{\n{LOCALS_INDENT}unsigned int i;\n{LOCALS_INDENT}unsigned int res;\n\n"
    );
    for check in checks {
        out.push_str(&check.render());
    }
    out.push_str("}\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmstim_isa::Radix;

    fn check() -> BrevCheck {
        BrevCheck {
            index: 3,
            operand: 4_294_967_295,
            instr: BrevInstr::new(6, 6, 32, Radix::R2).unwrap(),
        }
    }

    #[test]
    fn test_render_check() {
        let text = check().render();
        let word = check().instr.encode();
        assert!(text.contains("\"li x6, 4294967295;\""));
        assert!(text.contains(&format!("\".word {word:#x};\"")));
        assert!(text.contains("\"nop\" : : : \"x6\");"));
        assert!(text.contains("\"addi %[c], x6, 0\\n\": [c] \"=r\" (res));"));
        assert!(text.contains("check_uint32(result, \"brev\", res,  res_brev[3]);"));
    }

    #[test]
    fn test_word_is_lowercase_unpadded() {
        let c = BrevCheck {
            index: 0,
            operand: 1,
            instr: BrevInstr::new(7, 6, 22, Radix::R8).unwrap(),
        };
        assert!(c.render().contains(".word 0xc4a353b3;"));
    }

    #[test]
    fn test_check_function() {
        let text = check_function(&[check()]);
        assert!(text.starts_with(CHECK_FN_SIGNATURE));
        assert!(text.starts_with(&format!(
            "{CHECK_FN_SIGNATURE} {{\n              unsigned int i;\n              unsigned int res;\n\n"
        )));
        assert!(text.ends_with("}\n\n"));
        assert_eq!(text.matches("check_uint32").count(), 1);
    }
}
