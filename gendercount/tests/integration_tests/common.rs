// tests/integration_tests/common.rs
use anyhow::Result;
use gendercount::LexiconPaths;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

/// Lexicons with the names used in the examples, a few extra names and a
/// male name that doubles as a pronoun form.
pub fn setup_lexicons() -> Result<(TempDir, LexiconPaths)> {
    let temp_dir = TempDir::new()?;

    let female = create_test_file(
        temp_dir.path(),
        "female250.tsv",
        "31611\tLisa\n8921\tEva\n4512\tHanna\n2210\tÅsa\n",
    )?;
    let male = create_test_file(
        temp_dir.path(),
        "male250.tsv",
        "2903\tKalle\n15220\tHans\n9001\tErik\n",
    )?;

    Ok((temp_dir, LexiconPaths { female, male }))
}
