//! In-place update of the C test source.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::{CHECK_FN_MARKER, EmitError, Result};

/// How the check function was placed into the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// The marker was found; everything from it onwards was replaced by the
    /// function and a closing `#endif`.
    Replaced { marker_line: usize },
    /// No marker; the function was inserted before the last line.
    Inserted,
}

/// Splice `function` into `source` text.
///
/// Lines are copied up to the first one matching the check-function marker.
/// If the marker exists, the function and `#endif` are appended after the
/// copied prefix. Otherwise the function goes in front of the last line.
pub fn splice_source(source: &str, function: &str) -> Result<(String, SpliceOutcome)> {
    let marker = MARKER_PATTERN.get_or_init(|| Regex::new(CHECK_FN_MARKER).unwrap());

    let mut lines: Vec<&str> = Vec::new();
    let mut found = None;
    for (idx, line) in source.split_inclusive('\n').enumerate() {
        if marker.is_match(line) {
            found = Some(idx + 1);
            break;
        }
        lines.push(line);
    }

    let outcome = match found {
        Some(marker_line) => {
            lines.push(function);
            lines.push("#endif\n");
            SpliceOutcome::Replaced { marker_line }
        }
        None => {
            if lines.is_empty() {
                return Err(EmitError::EmptySource);
            }
            lines.insert(lines.len() - 1, function);
            SpliceOutcome::Inserted
        }
    };
    Ok((lines.concat(), outcome))
}

static MARKER_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Rewrite the C source at `path` with `function` spliced in.
pub fn splice_file(path: &Path, function: &str) -> Result<SpliceOutcome> {
    let source = std::fs::read_to_string(path).map_err(|e| EmitError::io(path, e))?;
    let (updated, outcome) = splice_source(&source, function)?;
    std::fs::write(path, updated).map_err(|e| EmitError::io(path, e))?;
    debug!(path = %path.display(), ?outcome, "spliced check function");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FUNC: &str = "void check_breverse(testresult_t *result, void (*start)(), void (*stop)()) {\n}\n\n";

    #[test]
    fn test_insert_before_last_line() {
        let src = "#include \"x.h\"\nint main() {}\n#endif\n";
        let (out, outcome) = splice_source(src, FUNC).unwrap();
        assert_eq!(outcome, SpliceOutcome::Inserted);
        assert_eq!(out, format!("#include \"x.h\"\nint main() {{}}\n{FUNC}#endif\n"));
    }

    #[test]
    fn test_replace_from_marker() {
        let src = format!("#include \"x.h\"\n{FUNC}stale body\n#endif\n");
        let (out, outcome) = splice_source(&src, FUNC).unwrap();
        assert_eq!(outcome, SpliceOutcome::Replaced { marker_line: 2 });
        assert_eq!(out, format!("#include \"x.h\"\n{FUNC}#endif\n"));
    }

    #[test]
    fn test_splice_twice_keeps_one_function() {
        let src = "int main() {}\n#endif\n";
        let (once, _) = splice_source(src, FUNC).unwrap();
        let (twice, outcome) = splice_source(&once, FUNC).unwrap();
        assert!(matches!(outcome, SpliceOutcome::Replaced { .. }));
        assert_eq!(twice.matches("check_breverse(testresult_t").count(), 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_marker_after_leading_text() {
        // The marker may follow other text on the line, e.g. a `static` qualifier.
        let src = "int a;\nstatic void check_breverse(testresult_t *r) {\n}\nint tail;\n";
        let (out, outcome) = splice_source(src, FUNC).unwrap();
        assert_eq!(outcome, SpliceOutcome::Replaced { marker_line: 2 });
        assert_eq!(out, format!("int a;\n{FUNC}#endif\n"));
    }

    #[test]
    fn test_marker_pattern_reused_across_calls() {
        let src = "int main() {}\n#endif\n";
        for _ in 0..3 {
            let (out, _) = splice_source(src, FUNC).unwrap();
            assert_eq!(out.matches("check_breverse(testresult_t").count(), 1);
        }
        assert!(MARKER_PATTERN.get().is_some());
    }

    #[test]
    fn test_empty_source() {
        assert!(matches!(splice_source("", FUNC), Err(EmitError::EmptySource)));
    }

    #[test]
    fn test_splice_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.c");
        std::fs::write(&path, "int x;\n#endif\n").unwrap();

        let outcome = splice_file(&path, FUNC).unwrap();
        assert_eq!(outcome, SpliceOutcome::Inserted);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with(&format!("{FUNC}#endif\n")));
    }

    #[test]
    fn test_splice_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = splice_file(&dir.path().join("nope.c"), FUNC).unwrap_err();
        assert!(matches!(err, EmitError::Io { .. }));
    }
}
