//! Stimuli header generation.
//!
//! The header is plain C consumed by the test harness:
//! - `#define` constants in signed decimal
//! - `unsigned int` arrays with one hex literal per line

use std::fmt::Write;

/// Builds the text of a stimuli header.
#[derive(Debug, Default)]
pub struct HeaderWriter {
    out: String,
}

impl HeaderWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `#define NAME VALUE` followed by a blank line.
    pub fn define(&mut self, name: &str, value: i64) -> &mut Self {
        writeln!(self.out, "#define {name} {value}\n").expect("formatting define");
        self
    }

    /// Emit an array of 32-bit words as `0xXXXXXXXX` literals.
    pub fn hex32_array(&mut self, name: &str, values: &[u32]) -> &mut Self {
        self.array(name, values.iter().map(|v| format!("0x{v:08X}")))
    }

    /// Emit an array of 16-bit pairs, each packed high-first into one word.
    pub fn hex16_array(&mut self, name: &str, values: &[[u16; 2]]) -> &mut Self {
        self.array(name, values.iter().map(|[hi, lo]| format!("0x{hi:04X}{lo:04X}")))
    }

    /// Emit an array of byte quads, each packed high-first into one word.
    pub fn hex8_array(&mut self, name: &str, values: &[[u8; 4]]) -> &mut Self {
        self.array(
            name,
            values.iter().map(|[b3, b2, b1, b0]| format!("0x{b3:02X}{b2:02X}{b1:02X}{b0:02X}")),
        )
    }

    fn array(&mut self, name: &str, literals: impl Iterator<Item = String>) -> &mut Self {
        writeln!(self.out, "unsigned int {name}[] = {{").expect("formatting array head");
        for literal in literals {
            writeln!(self.out, "{literal},").expect("formatting array element");
        }
        self.out.push_str("};\n\n");
        self
    }

    /// Text emitted so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the writer and return the header text.
    pub fn finish(self) -> String {
        self.out
    }
}
