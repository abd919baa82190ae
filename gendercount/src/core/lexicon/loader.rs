// src/core/lexicon/loader.rs
use std::fs;
use std::path::Path;

use crate::core::lexicon::Lexicon;
use crate::error::{AnalysisError, Result};

/// Loads a name lexicon from a tab-separated reference file.
///
/// The file is read in full and closed before parsing begins.
///
/// # Arguments
///
/// * `path` - Path to a UTF-8 file of `<frequency>\t<name>` records
///
/// # Returns
///
/// * `Ok(Lexicon)` - Every name in the file mapped to its frequency
///
/// # Errors
///
/// This function may return an error if:
/// * The file does not exist, cannot be read, or is not valid UTF-8
/// * Any line is not exactly two tab-separated fields
#[inline]
pub fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let content = fs::read_to_string(path).map_err(|source| AnalysisError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let lexicon = Lexicon::parse(&content, path)?;
    tracing::debug!(path = %path.display(), entries = lexicon.len(), "loaded lexicon");

    Ok(lexicon)
}
