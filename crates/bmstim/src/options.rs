use std::path::{Path, PathBuf};

/// Number of stimuli generated per vector set unless overridden.
pub const DEFAULT_STIMULI: usize = 200;

/// C test source rewritten with the `brev` checks.
pub const DEFAULT_TEST_SOURCE: &str = "testBitManipulation.c";

const HEADER_NAME: &str = "testBitManipulation_stimuli.h";
const HEADER_NAME_RISCV: &str = "testBitManipulation_stimuli_riscv.h";

/// Options for a generation run.
#[derive(Clone, Debug)]
pub struct GenOptions {
    /// Number of stimuli in each vector set.
    pub count: usize,
    /// RNG seed. A fresh seed is drawn when unset.
    pub seed: Option<u64>,
    /// Directory receiving the stimuli header.
    pub output_dir: PathBuf,
    /// C test source receiving the `check_breverse` function.
    pub test_source: PathBuf,
    /// Toggles.
    pub flags: GenFlags,
}

/// Toggle flags for generation options.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenFlags(u8);

impl GenFlags {
    const RISCV: u8 = 1 << 0;
    const SPLICE: u8 = 1 << 1;
    const VERIFY: u8 = 1 << 2;

    const fn set_flag(&mut self, flag: u8, enabled: bool) {
        if enabled {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    const fn has_flag(self, flag: u8) -> bool {
        (self.0 & flag) != 0
    }

    /// RISC-V encoding rules: length-minus-one `LEN_i` and lengths from 1.
    #[must_use]
    pub const fn riscv(self) -> bool {
        self.has_flag(Self::RISCV)
    }

    pub const fn set_riscv(&mut self, enabled: bool) {
        self.set_flag(Self::RISCV, enabled);
    }

    /// Rewrite the C test source with the generated checks.
    #[must_use]
    pub const fn splice(self) -> bool {
        self.has_flag(Self::SPLICE)
    }

    pub const fn set_splice(&mut self, enabled: bool) {
        self.set_flag(Self::SPLICE, enabled);
    }

    /// Re-read the written header and compare it with the generated values.
    #[must_use]
    pub const fn verify(self) -> bool {
        self.has_flag(Self::VERIFY)
    }

    pub const fn set_verify(&mut self, enabled: bool) {
        self.set_flag(Self::VERIFY, enabled);
    }
}

impl Default for GenOptions {
    fn default() -> Self {
        let mut flags = GenFlags::default();
        flags.set_splice(true);
        Self {
            count: DEFAULT_STIMULI,
            seed: None,
            output_dir: PathBuf::from("."),
            test_source: PathBuf::from(DEFAULT_TEST_SOURCE),
            flags,
        }
    }
}

impl GenOptions {
    /// Create default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of stimuli per vector set.
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the header output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the C test source to splice.
    #[must_use]
    pub fn with_test_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.test_source = path.into();
        self
    }

    /// Use RISC-V encoding rules.
    #[must_use]
    pub const fn with_riscv(mut self, enabled: bool) -> Self {
        self.flags.set_riscv(enabled);
        self
    }

    /// Enable rewriting the C test source.
    #[must_use]
    pub const fn with_splice(mut self, enabled: bool) -> Self {
        self.flags.set_splice(enabled);
        self
    }

    /// Enable header read-back verification.
    #[must_use]
    pub const fn with_verify(mut self, enabled: bool) -> Self {
        self.flags.set_verify(enabled);
        self
    }

    /// File name of the stimuli header for the selected target.
    #[must_use]
    pub const fn header_name(&self) -> &'static str {
        if self.flags.riscv() { HEADER_NAME_RISCV } else { HEADER_NAME }
    }

    /// Full path of the stimuli header.
    #[must_use]
    pub fn header_path(&self) -> PathBuf {
        self.output_dir.join(self.header_name())
    }

    /// Path of the C test source.
    #[must_use]
    pub fn test_source(&self) -> &Path {
        &self.test_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = GenOptions::new();
        assert_eq!(opts.count, 200);
        assert!(opts.flags.splice());
        assert!(!opts.flags.riscv());
        assert!(!opts.flags.verify());
        assert_eq!(opts.header_name(), "testBitManipulation_stimuli.h");
        assert_eq!(opts.test_source(), Path::new("testBitManipulation.c"));
    }

    #[test]
    fn test_riscv_header_name() {
        let opts = GenOptions::new().with_riscv(true).with_output_dir("out");
        assert_eq!(opts.header_path(), Path::new("out/testBitManipulation_stimuli_riscv.h"));
    }

    #[test]
    fn test_flags_toggle() {
        let opts = GenOptions::new().with_splice(false).with_verify(true).with_verify(false);
        assert!(!opts.flags.splice());
        assert!(!opts.flags.verify());
    }
}
