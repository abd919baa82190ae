// src/core/tokenizer.rs

/// Characters removed from every token, wherever they occur.
pub const STRIPPED_PUNCTUATION: [char; 4] = ['.', ',', '?', '!'];

#[inline]
#[must_use]
pub fn strip_punctuation(word: &str) -> String {
    word.chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// Splits `text` on whitespace and strips punctuation from each token.
///
/// Tokens that are empty after stripping (e.g. a lone `"?!"`) are kept so the
/// token count always equals the number of whitespace-separated words.
#[inline]
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(strip_punctuation).collect()
}
