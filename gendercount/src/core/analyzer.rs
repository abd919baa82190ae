// src/core/analyzer.rs
use crate::config::LexiconPaths;
use crate::core::lexicon::Lexicon;
use crate::core::lexicon::loader::load_lexicon;
use crate::core::scanner::{PronounFamily, count_names, count_pronouns};
use crate::core::tokenizer::tokenize;
use crate::error::Result;
use crate::models::Analysis;

/// Counts female names, male names and the hen, hon and han pronoun
/// families in `text`.
///
/// Both lexicons are read from `female250.tsv` and `male250.tsv` in the
/// working directory on every call.
///
/// # Errors
///
/// This function may return an error if either lexicon file is missing,
/// unreadable or contains a malformed record.
#[inline]
pub fn analyze_text(text: &str) -> Result<Analysis> {
    analyze_text_with(text, &LexiconPaths::default())
}

/// Like [`analyze_text`], reading the lexicons from `paths`.
///
/// # Errors
///
/// This function may return an error if either lexicon file is missing,
/// unreadable or contains a malformed record.
pub fn analyze_text_with(text: &str, paths: &LexiconPaths) -> Result<Analysis> {
    let tokens = tokenize(text);
    let female = load_lexicon(&paths.female)?;
    let male = load_lexicon(&paths.male)?;

    Ok(analyze_tokens(&tokens, &female, &male))
}

/// Runs every counter over an already tokenized text.
#[must_use]
pub fn analyze_tokens<S: AsRef<str>>(tokens: &[S], female: &Lexicon, male: &Lexicon) -> Analysis {
    let analysis = Analysis {
        female: count_names(female, tokens),
        male: count_names(male, tokens),
        hen: count_pronouns(PronounFamily::Hen, tokens),
        hon: count_pronouns(PronounFamily::Hon, tokens),
        han: count_pronouns(PronounFamily::Han, tokens),
    };

    tracing::debug!(
        tokens = tokens.len(),
        female = analysis.female.total,
        male = analysis.male.total,
        hen = analysis.hen.sum(),
        hon = analysis.hon.sum(),
        han = analysis.han.sum(),
        "analyzed text"
    );

    analysis
}
