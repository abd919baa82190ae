// src/models/analysis.rs
use std::collections::BTreeMap;

use crate::models::{NameMatches, PronounTally};

/// Positional form of an [`Analysis`]: female names, male names, then the
/// hen, hon and han tallies.
pub type AnalysisTuple = (
    (BTreeMap<String, String>, u64),
    (BTreeMap<String, String>, u64),
    (u64, u64, u64),
    (u64, u64, u64),
    (u64, u64, u64),
);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub female: NameMatches,
    pub male: NameMatches,
    /// hen, henom, hens
    pub hen: PronounTally,
    /// hon, henne, hennes
    pub hon: PronounTally,
    /// han, honom, hans
    pub han: PronounTally,
}

impl Analysis {
    #[inline]
    #[must_use]
    pub fn into_tuple(self) -> AnalysisTuple {
        (
            (self.female.matches, self.female.total),
            (self.male.matches, self.male.total),
            self.hen.as_tuple(),
            self.hon.as_tuple(),
            self.han.as_tuple(),
        )
    }
}
