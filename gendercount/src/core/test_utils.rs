use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::LexiconPaths;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// Writes small female and male lexicons and returns their paths.
pub fn setup_lexicons(dir: &TempDir) -> Result<LexiconPaths> {
    let female = create_test_file(
        dir,
        "female250.tsv",
        "31611\tLisa\n8921\tEva\n4512\tHanna\n",
    )?;
    let male = create_test_file(dir, "male250.tsv", "2903\tKalle\n15220\tHans\n9001\tErik\n")?;

    Ok(LexiconPaths { female, male })
}
