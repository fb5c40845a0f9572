//! Reader for generated stimuli headers.
//!
//! Only understands the subset produced by [`HeaderWriter`](crate::HeaderWriter):
//! single-line `#define NAME VALUE` and `unsigned int NAME[] = { ... };`
//! arrays with one hex literal per line.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::{EmitError, Result};

/// Constants recovered from a stimuli header.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub defines: BTreeMap<String, i64>,
    pub arrays: BTreeMap<String, Vec<u32>>,
}

impl ParsedHeader {
    /// Look up a `#define` value.
    pub fn define(&self, name: &str) -> Option<i64> {
        self.defines.get(name).copied()
    }

    /// Look up an array by name.
    pub fn array(&self, name: &str) -> Option<&[u32]> {
        self.arrays.get(name).map(Vec::as_slice)
    }
}

/// Parse header text back into its constants.
pub fn parse_header(text: &str) -> Result<ParsedHeader> {
    let define_pattern = DEFINE_PATTERN
        .get_or_init(|| Regex::new(r"^#define\s+(\w+)\s+(-?\d+)$").unwrap());
    let array_head_pattern = ARRAY_HEAD_PATTERN
        .get_or_init(|| Regex::new(r"^unsigned int\s+(\w+)\[\]\s*=\s*\{$").unwrap());
    let hex_pattern =
        HEX_PATTERN.get_or_init(|| Regex::new(r"^0[xX]([0-9a-fA-F]{1,8}),?$").unwrap());

    let mut parsed = ParsedHeader::default();
    let mut open: Option<(String, Vec<u32>)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((name, values)) = open.as_mut() {
            if line == "};" {
                let (name, values) = (std::mem::take(name), std::mem::take(values));
                open = None;
                if parsed.arrays.insert(name.clone(), values).is_some() {
                    return Err(EmitError::DuplicateSymbol(name));
                }
                continue;
            }
            let caps = hex_pattern.captures(line).ok_or_else(|| EmitError::Parse {
                line: line_no,
                message: format!("expected hex literal, got `{line}`"),
            })?;
            let value = u32::from_str_radix(&caps[1], 16).map_err(|e| EmitError::Parse {
                line: line_no,
                message: format!("bad hex literal `{line}`: {e}"),
            })?;
            values.push(value);
            continue;
        }

        if let Some(caps) = define_pattern.captures(line) {
            let name = &caps[1];
            let value = caps[2].parse::<i64>().map_err(|e| EmitError::Parse {
                line: line_no,
                message: format!("bad define value `{}`: {e}", &caps[2]),
            })?;
            if parsed.defines.insert(name.to_string(), value).is_some() {
                return Err(EmitError::DuplicateSymbol(name.to_string()));
            }
            continue;
        }

        if let Some(caps) = array_head_pattern.captures(line) {
            open = Some((caps[1].to_string(), Vec::new()));
            continue;
        }

        return Err(EmitError::Parse { line: line_no, message: format!("unexpected line `{line}`") });
    }

    if let Some((name, _)) = open {
        return Err(EmitError::UnterminatedArray(name));
    }
    Ok(parsed)
}

static DEFINE_PATTERN: OnceLock<Regex> = OnceLock::new();
static ARRAY_HEAD_PATTERN: OnceLock<Regex> = OnceLock::new();
static HEX_PATTERN: OnceLock<Regex> = OnceLock::new();
