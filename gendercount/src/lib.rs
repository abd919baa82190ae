// src/lib.rs
//! Counts gendered Swedish first names and the pronoun families
//! hen/henom/hens, hon/henne/hennes and han/honom/hans in text.
//!
//! ```no_run
//! let analysis = gendercount::analyze_text("Hej hen heter Lisa eller Kalle")?;
//! assert_eq!(analysis.hen.as_tuple(), (1, 0, 0));
//! # Ok::<(), gendercount::AnalysisError>(())
//! ```
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use config::LexiconPaths;
pub use crate::core::analyzer::{analyze_text, analyze_text_with, analyze_tokens};
pub use crate::core::lexicon::Lexicon;
pub use crate::core::lexicon::loader::load_lexicon;
pub use crate::core::scanner::{PronounFamily, count_names, count_pronouns};
pub use crate::core::tokenizer::tokenize;
pub use error::AnalysisError;
pub use models::{Analysis, AnalysisTuple, NameMatches, PronounTally};
pub use utils::{format_report, print_report};
