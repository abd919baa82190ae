// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A lexicon file is missing, unreadable or not valid UTF-8.
    #[error("Failed to read lexicon file '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record did not split into exactly `<frequency>\t<name>`.
    #[error(
        "Malformed record on line {line} of '{}': expected 2 tab-separated fields, found {fields}",
        path.display()
    )]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        fields: usize,
    },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
