// src/models/pronoun_tally.rs

/// Counts for one pronoun family, in the order base, object, possessive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PronounTally {
    pub base: u64,
    pub object: u64,
    pub possessive: u64,
}

impl PronounTally {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            base: 0,
            object: 0,
            possessive: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_tuple(&self) -> (u64, u64, u64) {
        (self.base, self.object, self.possessive)
    }

    #[inline]
    #[must_use]
    pub const fn sum(&self) -> u64 {
        self.base
            .saturating_add(self.object)
            .saturating_add(self.possessive)
    }
}

impl From<(u64, u64, u64)> for PronounTally {
    #[inline]
    fn from((base, object, possessive): (u64, u64, u64)) -> Self {
        Self {
            base,
            object,
            possessive,
        }
    }
}
