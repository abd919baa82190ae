// src/core/lexicon.rs
pub mod loader;

use std::collections::HashMap;
use std::path::Path;

use crate::error::{AnalysisError, Result};

/// Exact-case lookup from first name to its usage frequency.
///
/// Frequencies are kept as the text found in the reference file.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Parses `<frequency>\t<name>` records, one per line. Lines may end in
    /// `\n`, `\r\n` or a lone `\r`.
    ///
    /// `path` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MalformedRecord`] for the first line that does
    /// not split into exactly two tab-separated fields or has an empty name.
    /// Nothing is skipped: one bad line fails the whole lexicon.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut lexicon = Self::new();
        let content = content.replace("\r\n", "\n");

        for (index, line) in content.split_terminator(['\n', '\r']).enumerate() {
            let fields: Vec<&str> = line.trim().split('\t').collect();
            let malformed = || AnalysisError::MalformedRecord {
                path: path.to_path_buf(),
                line: index.saturating_add(1),
                fields: fields.len(),
            };

            let [frequency, name] = fields.as_slice() else {
                return Err(malformed());
            };
            if name.is_empty() {
                return Err(malformed());
            }

            lexicon.insert(name, frequency);
        }

        Ok(lexicon)
    }

    /// Later inserts of the same name replace the earlier frequency.
    #[inline]
    pub fn insert(&mut self, name: &str, frequency: &str) {
        self.entries.insert(name.to_owned(), frequency.to_owned());
    }

    #[inline]
    #[must_use]
    pub fn frequency(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Lexicon {
    /// Builds a lexicon from `(name, frequency)` pairs.
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        for (name, frequency) in iter {
            lexicon.insert(name, frequency);
        }
        lexicon
    }
}
