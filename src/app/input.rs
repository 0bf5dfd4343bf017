//! URL list loading.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads a newline-delimited URL list.
///
/// Lines are trimmed and blank lines dropped. A missing file is an empty
/// list; a file that exists but cannot be read is an error.
pub async fn load_text_lines(path: &Path) -> Result<Vec<String>> {
    if !tokio::fs::try_exists(path).await.unwrap_or(true) {
        log::debug!("Input file {} not found, treating as empty", path.display());
        return Ok(Vec::new());
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    Ok(parse_lines(&contents))
}

fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
