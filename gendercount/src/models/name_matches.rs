// src/models/name_matches.rs
use std::collections::BTreeMap;

/// Names found in a token sequence, keyed by the matched token, with the
/// frequency the lexicon lists for each.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameMatches {
    pub matches: BTreeMap<String, String>,
    /// Every matching token occurrence, not just unique names.
    pub total: u64,
}

impl NameMatches {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matches: BTreeMap::new(),
            total: 0,
        }
    }

    #[inline]
    pub fn record(&mut self, name: &str, frequency: &str) {
        self.matches.insert(name.to_owned(), frequency.to_owned());
        self.total = self.total.saturating_add(1);
    }

    #[inline]
    #[must_use]
    pub fn unique(&self) -> usize {
        self.matches.len()
    }
}
