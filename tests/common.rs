//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary content directories and writing
//! post files used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an empty temporary content directory.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_content_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Builds a post document from frontmatter fields and a Markdown body.
///
/// # Arguments
///
/// * `title`: Post title
/// * `date`: Publication date as `YYYY-MM-DD`
/// * `extra`: Additional frontmatter lines (e.g. `draft: true`)
/// * `body`: Markdown body
pub fn post_document(title: &str, date: &str, extra: &[&str], body: &str) -> String {
    let mut text = format!("---\ntitle: \"{}\"\ndate: {}\n", title, date);
    for line in extra {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str("---\n\n");
    text.push_str(body);
    text
}

/// Writes a post file into the content directory.
///
/// # Arguments
///
/// * `dir`: Content directory
/// * `stem`: File name without `.md`
/// * `text`: Full document text
///
/// # Returns
///
/// Path of the written file
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_post(dir: &Path, stem: &str, text: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{}.md", stem));
    fs::write(&path, text)?;
    Ok(path)
}

/// Writes a simple post with only the required fields.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_simple_post(dir: &Path, stem: &str, title: &str, date: &str) -> Result<PathBuf> {
    write_post(dir, stem, &post_document(title, date, &[], "Body text.\n"))
}
