//! CLI definitions.

use std::path::PathBuf;

use bmstim::{DEFAULT_STIMULI, DEFAULT_TEST_SOURCE, GenOptions};
use clap::Parser;

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "bmstim")]
#[command(about = "Generate stimuli for the bit-manipulation test suite")]
#[command(version)]
pub struct Cli {
    /// Generate for RISC-V (length-minus-one encoding, lengths from 1)
    #[arg(long)]
    pub riscv: bool,

    /// Number of stimuli per vector set
    #[arg(short = 'n', long, default_value_t = DEFAULT_STIMULI)]
    pub count: usize,

    /// RNG seed for reproducible output (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for the stimuli header
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// C test source that receives the bit-reverse checks
    #[arg(long, default_value = DEFAULT_TEST_SOURCE)]
    pub source: PathBuf,

    /// Leave the C test source untouched
    #[arg(long)]
    pub no_splice: bool,

    /// Re-read the written header and check it against the generated values
    #[arg(long)]
    pub verify: bool,

    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,
}

impl Cli {
    /// Generation options selected on the command line.
    pub fn options(&self) -> GenOptions {
        GenOptions::new()
            .with_riscv(self.riscv)
            .with_count(self.count)
            .with_seed(self.seed)
            .with_output_dir(&self.output_dir)
            .with_test_source(&self.source)
            .with_splice(!self.no_splice)
            .with_verify(self.verify)
    }

    /// Default log directive for the selected verbosity.
    pub const fn log_directive(&self) -> &'static str {
        if self.verbose {
            "bmstim=debug"
        } else if self.silent {
            "bmstim=error"
        } else {
            "bmstim=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["bmstim"]).unwrap();
        let opts = cli.options();
        assert!(!opts.flags.riscv());
        assert!(opts.flags.splice());
        assert_eq!(opts.count, 200);
        assert_eq!(opts.seed, None);
        assert_eq!(cli.log_directive(), "bmstim=info");
    }

    #[test]
    fn test_riscv_flags() {
        let cli = Cli::try_parse_from([
            "bmstim", "--riscv", "--seed", "17", "-n", "8", "--no-splice", "--verify", "-v",
        ])
        .unwrap();
        let opts = cli.options();
        assert!(opts.flags.riscv());
        assert!(!opts.flags.splice());
        assert!(opts.flags.verify());
        assert_eq!(opts.seed, Some(17));
        assert_eq!(opts.count, 8);
        assert_eq!(opts.header_name(), "testBitManipulation_stimuli_riscv.h");
        assert_eq!(cli.log_directive(), "bmstim=debug");
    }

    #[test]
    fn test_verbose_conflicts_with_silent() {
        assert!(Cli::try_parse_from(["bmstim", "-v", "-s"]).is_err());
    }
}
