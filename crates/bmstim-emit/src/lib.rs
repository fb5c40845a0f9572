//! C emission for bit-manipulation stimuli.
//!
//! - `header`: `#define` constants and `unsigned int` arrays
//! - `parse`: reads generated headers back for verification
//! - `asm`: inline-assembly checks for the custom `brev` instruction
//! - `splice`: inserts the generated check function into the C test source

mod asm;
mod header;
mod parse;
mod splice;

pub use asm::*;
pub use header::*;
pub use parse::*;
pub use splice::*;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Emission errors.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("header line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("symbol `{0}` defined more than once")]
    DuplicateSymbol(String),
    #[error("array `{0}` is missing its closing `}};`")]
    UnterminatedArray(String),
    #[error("test source is empty")]
    EmptySource,
}

impl EmitError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }
}

pub type Result<T> = std::result::Result<T, EmitError>;
