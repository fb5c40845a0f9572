//! End-to-end tests for the generation pass.

use std::path::Path;

use bmstim::{Error, GenOptions, SpliceOutcome, parse_header};

const TEST_SOURCE: &str = "\
#include \"pulp.h\"
#include \"testBitManipulation_stimuli.h\"

void check_bset(testresult_t *result, void (*start)(), void (*stop)()) {
}

#endif
";

fn options(dir: &Path) -> GenOptions {
    let source = dir.join("testBitManipulation.c");
    std::fs::write(&source, TEST_SOURCE).expect("write test source");
    GenOptions::new()
        .with_seed(Some(0x5eed))
        .with_count(25)
        .with_output_dir(dir.join("out"))
        .with_test_source(source)
}

#[test]
fn test_generate_writes_header_and_source() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(dir.path()).with_verify(true);

    let report = bmstim::generate(&opts).expect("generate");
    assert_eq!(report.seed, 0x5eed);
    assert_eq!(report.count, 25);
    assert!(report.verified);
    assert_eq!(report.splice, Some(SpliceOutcome::Inserted));
    assert_eq!(report.header_path, dir.path().join("out/testBitManipulation_stimuli.h"));

    let header = std::fs::read_to_string(&report.header_path).expect("read header");
    let parsed = parse_header(&header).expect("parse header");
    assert_eq!(parsed.define("NumberOfStimuli"), Some(25));
    assert!(parsed.define("IMM_24").is_some());
    assert_eq!(parsed.array("res_brev").map(<[u32]>::len), Some(25));
    assert_eq!(parsed.array("op_b_reg").map(<[u32]>::len), Some(25));

    let source = std::fs::read_to_string(opts.test_source()).expect("read source");
    assert!(source.starts_with("#include \"pulp.h\""));
    assert!(source.ends_with("}\n\n#endif\n"));
    assert_eq!(source.matches("void check_breverse(testresult_t").count(), 1);
    assert_eq!(source.matches("check_uint32(result, \"brev\"").count(), 25);
}

#[test]
fn test_rerun_replaces_check_function() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(dir.path());

    bmstim::generate(&opts).expect("first run");
    let report = bmstim::generate(&opts.clone().with_seed(Some(1))).expect("second run");
    assert!(matches!(report.splice, Some(SpliceOutcome::Replaced { .. })));

    let source = std::fs::read_to_string(opts.test_source()).expect("read source");
    assert_eq!(source.matches("void check_breverse(testresult_t").count(), 1);
    assert_eq!(source.matches("#endif").count(), 1);
    assert!(source.contains("check_bset"));
}

#[test]
fn test_riscv_header_name_and_lengths() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = options(dir.path()).with_riscv(true).with_splice(false);

    let report = bmstim::generate(&opts).expect("generate");
    assert!(report.header_path.ends_with("testBitManipulation_stimuli_riscv.h"));
    assert_eq!(report.splice, None);

    let parsed = parse_header(&std::fs::read_to_string(&report.header_path).unwrap()).unwrap();
    for i in 0..25 {
        let imm = parsed.define(&format!("IMM_{i}")).unwrap();
        let len = parsed.define(&format!("LEN_{i}")).unwrap() + 1;
        assert!((0..32).contains(&imm));
        assert!(len >= 1 && imm + len <= 32);
    }

    // Source untouched without splicing.
    assert_eq!(std::fs::read_to_string(opts.test_source()).unwrap(), TEST_SOURCE);
}

#[test]
fn test_same_seed_is_reproducible() {
    let a = tempfile::tempdir().expect("tempdir");
    let b = tempfile::tempdir().expect("tempdir");
    let ra = bmstim::generate(&options(a.path())).expect("generate a");
    let rb = bmstim::generate(&options(b.path())).expect("generate b");

    assert_eq!(
        std::fs::read_to_string(ra.header_path).unwrap(),
        std::fs::read_to_string(rb.header_path).unwrap()
    );
    assert_eq!(
        std::fs::read_to_string(a.path().join("testBitManipulation.c")).unwrap(),
        std::fs::read_to_string(b.path().join("testBitManipulation.c")).unwrap()
    );
}

#[test]
fn test_missing_source_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let opts = GenOptions::new()
        .with_seed(Some(2))
        .with_count(3)
        .with_output_dir(dir.path())
        .with_test_source(dir.path().join("missing.c"));

    let err = bmstim::generate(&opts).unwrap_err();
    assert!(matches!(err, Error::Emit(_)));
    // The header is written before the source is touched.
    assert!(opts.header_path().exists());
}
