// src/core/scanner.rs
pub mod names;
pub mod pronouns;

pub use names::count_names;
pub use pronouns::{PronounFamily, contains_word, count_pronouns};
