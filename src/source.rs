use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{CombineError, Result};
use crate::types::Source;

/// Read one file fully into a [`Source`] named after its path.
///
/// Invalid UTF-8 is replaced rather than rejected, so byte-oriented word
/// lists still load.
pub fn load_source(path: &Path) -> Result<Source> {
    let bytes = fs::read(path).map_err(|source| CombineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let source = Source::from_text(path.display().to_string(), &text)?;
    debug!("Loaded {} lines from {:?}", source.len(), path);
    Ok(source)
}

/// Read every path before returning; the first failure aborts the load.
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<Source>> {
    if paths.is_empty() {
        return Err(CombineError::NoSources);
    }
    paths.iter().map(|p| load_source(p)).collect()
}
