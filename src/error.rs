use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading sources, sampling, or writing combinations.
#[derive(Debug, Error)]
pub enum CombineError {
    #[error("no input sources were provided")]
    NoSources,
    #[error("source '{name}' has no lines")]
    EmptyInput { name: String },
    #[error(
        "cannot sample {requested} distinct lines from source '{name}': only {available} available"
    )]
    Sampling {
        name: String,
        requested: usize,
        available: usize,
    },
    #[error("invalid sample bounds: min {min}, max {max} (expected 1 <= min <= max)")]
    InvalidBounds { min: usize, max: usize },
    #[error("failed to read source {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CombineError {
    /// True when the output consumer went away (e.g. `combine ... | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CombineError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, CombineError>;
