// src/core/scanner/pronouns.rs
use crate::models::PronounTally;

/// A pronoun family and its three forms in priority order:
/// base, object, possessive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PronounFamily {
    /// hen, henom, hens
    Hen,
    /// hon, henne, hennes
    Hon,
    /// han, honom, hans
    Han,
}

impl PronounFamily {
    pub const ALL: [Self; 3] = [Self::Hen, Self::Hon, Self::Han];

    #[inline]
    #[must_use]
    pub const fn forms(self) -> [&'static str; 3] {
        match self {
            Self::Hen => ["hen", "henom", "hens"],
            Self::Hon => ["hon", "henne", "hennes"],
            Self::Han => ["han", "honom", "hans"],
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns `true` if `word` occurs in `haystack` with no word character
/// directly before or after it.
///
/// Both arguments are compared as given; callers lowercase them first for
/// case-insensitive matching.
#[must_use]
pub fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }

    haystack.match_indices(word).any(|(start, found)| {
        let before = haystack.get(..start).and_then(|s| s.chars().next_back());
        let after = haystack
            .get(start.saturating_add(found.len())..)
            .and_then(|s| s.chars().next());
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

/// Counts the forms of `family` across `tokens`.
///
/// Each token is matched case-insensitively against the forms in priority
/// order and adds to at most one counter: a token such as `"hen/hens"`
/// counts as `hen` only.
#[must_use]
pub fn count_pronouns<S: AsRef<str>>(family: PronounFamily, tokens: &[S]) -> PronounTally {
    let [base, object, possessive] = family.forms();
    let mut tally = PronounTally::new();

    for token in tokens {
        let token = token.as_ref().to_lowercase();
        if contains_word(&token, base) {
            tally.base = tally.base.saturating_add(1);
        } else if contains_word(&token, object) {
            tally.object = tally.object.saturating_add(1);
        } else if contains_word(&token, possessive) {
            tally.possessive = tally.possessive.saturating_add(1);
        }
    }

    tally
}
