use std::path::PathBuf;

use thiserror::Error;

/// Generator errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid stimulus: {0}")]
    Field(#[from] bmstim_isa::FieldError),
    #[error(transparent)]
    Emit(#[from] bmstim_emit::EmitError),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("header read-back mismatch: {0}")]
    VerifyMismatch(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
