//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::highlight::theme_css;

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const PROSE: &str = include_str!("../assets/prose.css");

const HOME_PAGE: &str = include_str!("../assets/page-home.css");
const POST_PAGE: &str = include_str!("../assets/page-post.css");
const LIST_PAGE: &str = include_str!("../assets/page-list.css");

/// Writes all bundled CSS assets to output directory
///
/// # Arguments
///
/// * `assets_dir`: Destination directory, must exist
/// * `theme`: Syntect theme used for `highlight.css`
///
/// # Errors
///
/// Returns error if the theme is unknown or a file cannot be written
pub fn write_css_assets(assets_dir: &Path, theme: &str) -> Result<()> {
    write_bundled(assets_dir, "home.css", &[BASE, LAYOUT, HOME_PAGE])?;
    write_bundled(assets_dir, "post.css", &[BASE, LAYOUT, PROSE, POST_PAGE])?;
    write_bundled(assets_dir, "list.css", &[BASE, LAYOUT, LIST_PAGE])?;

    let highlight = theme_css(theme)?;
    write_bundled(assets_dir, "highlight.css", &[&highlight])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_css_assets() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp dir");

        // Act
        write_css_assets(dir.path(), "InspiredGitHub").expect("Should write assets");

        // Assert
        for name in ["home.css", "post.css", "list.css", "highlight.css"] {
            assert!(dir.path().join(name).exists(), "{} should exist", name);
        }
        let post = fs::read_to_string(dir.path().join("post.css")).expect("read");
        assert!(post.contains(".prose pre"), "Post bundle includes prose styles");
        let highlight = fs::read_to_string(dir.path().join("highlight.css")).expect("read");
        assert!(highlight.contains(".hljs-"));
    }

    #[test]
    fn test_write_css_assets_unknown_theme() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp dir");

        // Act
        let result = write_css_assets(dir.path(), "Not-A-Theme");

        // Assert
        assert!(result.is_err());
    }
}
