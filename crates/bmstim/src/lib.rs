//! bmstim - stimuli generator for the bit-manipulation extension.
//!
//! Draws random operands and bit fields, computes the results the hardware
//! must produce, writes them to a C header and splices inline-assembly checks
//! for the custom `brev` instruction into the C test source.
//!
//! # Example
//!
//! ```ignore
//! use bmstim::GenOptions;
//!
//! let options = GenOptions::new().with_riscv(true).with_seed(Some(42));
//! let report = bmstim::generate(&options)?;
//! ```

mod error;
mod generator;
mod options;
mod stimulus;

pub use error::{Error, Result};
pub use generator::*;
pub use options::*;
pub use stimulus::*;

pub use bmstim_emit::{ParsedHeader, SpliceOutcome, parse_header};
pub use bmstim_isa::{BrevInstr, FieldResults, FieldSpec, Radix};

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Summary of a generation run.
#[derive(Debug, Clone)]
pub struct GenReport {
    /// Seed the RNG was started from.
    pub seed: u64,
    /// Stimuli per vector set.
    pub count: usize,
    /// Written header.
    pub header_path: PathBuf,
    /// Header was read back and matched.
    pub verified: bool,
    /// Placement of the check function, if the test source was rewritten.
    pub splice: Option<SpliceOutcome>,
}

/// Run a full generation pass: draw stimuli, write the header and update the
/// C test source.
pub fn generate(options: &GenOptions) -> Result<GenReport> {
    let seed = options.seed.unwrap_or_else(rand::random);
    info!(seed, count = options.count, riscv = options.flags.riscv(), "generating stimuli");

    let mut rng = StdRng::seed_from_u64(seed);
    let set = StimulusSet::generate(&mut rng, options.count, options.flags.riscv())?;

    let header_path = options.header_path();
    std::fs::create_dir_all(&options.output_dir).map_err(|e| Error::io(&options.output_dir, e))?;
    let header = set.render_header();
    std::fs::write(&header_path, &header).map_err(|e| Error::io(&header_path, e))?;
    info!(path = %header_path.display(), bytes = header.len(), "wrote stimuli header");

    let verified = options.flags.verify();
    if verified {
        let text = std::fs::read_to_string(&header_path).map_err(|e| Error::io(&header_path, e))?;
        set.verify(&parse_header(&text)?)?;
        debug!(path = %header_path.display(), "header read-back verified");
    }

    let splice = if options.flags.splice() {
        let source = options.test_source();
        let outcome = bmstim_emit::splice_file(source, &set.render_check_function())?;
        info!(path = %source.display(), ?outcome, "updated test source");
        Some(outcome)
    } else {
        None
    };

    Ok(GenReport { seed, count: set.len(), header_path, verified, splice })
}
