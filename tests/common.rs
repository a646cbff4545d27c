//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary content directories with posts.

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Creates an empty temporary content directory.
pub fn create_content_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes a post with front matter and body into the content directory.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_post(dir: &Path, file_name: &str, title: &str, date: &str, body: &str) -> Result<()> {
    let source = format!(
        "---\ntitle: {}\npublishedAt: {}\nsummary: Summary of {}\n---\n\n{}",
        title, date, title, body
    );
    std::fs::write(dir.join(file_name), source)?;
    Ok(())
}
