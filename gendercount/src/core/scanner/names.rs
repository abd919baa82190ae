// src/core/scanner/names.rs
use crate::core::lexicon::Lexicon;
use crate::models::NameMatches;

/// Counts tokens that are exact, case-sensitive keys of `lexicon`.
///
/// Repeated names add to `total` but appear once in `matches`.
#[inline]
#[must_use]
pub fn count_names<S: AsRef<str>>(lexicon: &Lexicon, tokens: &[S]) -> NameMatches {
    let mut names = NameMatches::new();

    for token in tokens {
        let token = token.as_ref();
        if let Some(frequency) = lexicon.frequency(token) {
            names.record(token, frequency);
        }
    }

    names
}
