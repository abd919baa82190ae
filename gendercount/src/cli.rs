// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::config::LexiconPaths;
use crate::core::analyzer::analyze_text_with;
use crate::utils::print_report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text file to analyze (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Female name list, `<frequency>\t<name>` per line
    #[arg(short, long)]
    pub female: Option<PathBuf>,

    /// Male name list, `<frequency>\t<name>` per line
    #[arg(short, long)]
    pub male: Option<PathBuf>,
}

impl Args {
    /// Lexicon paths from the flags, falling back to `female250.tsv` and
    /// `male250.tsv` in the working directory.
    #[must_use]
    pub fn lexicon_paths(&self) -> LexiconPaths {
        let defaults = LexiconPaths::default();
        LexiconPaths {
            female: self.female.clone().unwrap_or(defaults.female),
            male: self.male.clone().unwrap_or(defaults.male),
        }
    }
}

/// Reads the input text, analyzes it and prints the report.
///
/// # Errors
///
/// This function may return an error if the input or either lexicon cannot
/// be read, or a lexicon contains a malformed record.
pub fn run(args: Args) -> Result<()> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input: {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
    };

    let paths = args.lexicon_paths();
    let analysis = analyze_text_with(&text, &paths).with_context(|| {
        format!(
            "Failed to analyze text with lexicons {} and {}",
            paths.female.display(),
            paths.male.display()
        )
    })?;

    print_report(&analysis);
    Ok(())
}
