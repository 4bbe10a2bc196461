//! Redirect table generation for the hosting platform.
//!
//! Posts used to live under `/post/<slug>`. Each post that declares a
//! legacy `slug` or `aliases` gets permanent redirects to its current
//! `/posts/<file name>` URL, and a final wildcard rule forwards any other
//! old path.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::post::{Frontmatter, file_slug, markdown_files};

/// HTTP status of every generated redirect.
pub const PERMANENT: u16 = 301;

/// Single redirect line: old path, new path, status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub from: String,
    pub to: String,
    pub status: u16,
}

impl RedirectRule {
    pub fn permanent(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            status: PERMANENT,
        }
    }

    /// Wildcard rule forwarding any `/post/*` path to `/posts/`.
    pub fn catch_all() -> Self {
        Self::permanent("/post/*", "/posts/:splat")
    }
}

impl fmt::Display for RedirectRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.to, self.status)
    }
}

/// Builds the redirects declared by one post.
///
/// # Arguments
///
/// * `file_stem`: Post file name without `.md`
/// * `frontmatter`: Parsed frontmatter of the post
///
/// # Returns
///
/// One rule for the legacy slug (if any), then one per alias, in
/// declaration order. Blank slugs and aliases are skipped.
pub fn rules_for(file_stem: &str, frontmatter: &Frontmatter) -> Vec<RedirectRule> {
    let target = format!("/posts/{}", file_stem);

    let slug = frontmatter
        .slug
        .iter()
        .map(|slug| slug.trim())
        .filter(|slug| !slug.is_empty())
        .map(|slug| format!("/post/{}", slug));
    let aliases = frontmatter
        .aliases
        .iter()
        .map(|alias| alias.trim())
        .filter(|alias| !alias.is_empty())
        .map(String::from);

    slug.chain(aliases)
        .map(|from| RedirectRule::permanent(from, target.clone()))
        .collect()
}

/// Generates the redirect table for every post in a content directory.
///
/// Files are processed in file name order, drafts included. The wildcard
/// rule is always last.
///
/// # Errors
///
/// Returns error if the directory cannot be read or any post has
/// missing or malformed frontmatter.
pub fn generate(dir: impl AsRef<Path>) -> Result<Vec<RedirectRule>> {
    let mut rules = Vec::new();

    for path in markdown_files(dir)? {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read post {}", path.display()))?;
        let frontmatter = Frontmatter::from_document(&text)
            .with_context(|| format!("Invalid post {}", path.display()))?;

        rules.extend(rules_for(&file_slug(&path)?, &frontmatter));
    }

    rules.push(RedirectRule::catch_all());
    log::debug!("Generated {} redirect rules", rules.len());

    Ok(rules)
}

/// Renders rules as newline terminated text lines.
pub fn render(rules: &[RedirectRule]) -> String {
    rules.iter().map(|rule| format!("{}\n", rule)).collect()
}
