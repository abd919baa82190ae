// src/config.rs
use std::path::PathBuf;

pub const DEFAULT_FEMALE_LEXICON: &str = "female250.tsv";
pub const DEFAULT_MALE_LEXICON: &str = "male250.tsv";

/// Where the female and male name lexicons are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconPaths {
    pub female: PathBuf,
    pub male: PathBuf,
}

impl Default for LexiconPaths {
    /// `female250.tsv` and `male250.tsv`, relative to the working directory.
    #[inline]
    fn default() -> Self {
        Self {
            female: PathBuf::from(DEFAULT_FEMALE_LEXICON),
            male: PathBuf::from(DEFAULT_MALE_LEXICON),
        }
    }
}
