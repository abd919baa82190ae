// src/models.rs
mod analysis;
mod name_matches;
mod pronoun_tally;

pub use analysis::{Analysis, AnalysisTuple};
pub use name_matches::NameMatches;
pub use pronoun_tally::PronounTally;
