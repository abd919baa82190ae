// src/core.rs
pub mod analyzer;
pub mod lexicon;
pub mod scanner;
pub mod tokenizer;

#[cfg(test)]
pub mod test_utils;
