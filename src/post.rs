//! Post loading from Markdown files with YAML frontmatter.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker line separating a post excerpt from the rest of the body.
pub const EXCERPT_SEPARATOR: &str = "<!-- more -->";

/// Frontmatter block of a post.
///
/// `title` and `date` are required. `slug` and `aliases` name the legacy
/// URLs of a post and only feed the redirect table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub excerpt: Option<String>,
}

impl Frontmatter {
    /// Parses the frontmatter of a full Markdown document.
    ///
    /// # Errors
    ///
    /// Returns error if the document has no frontmatter block, the YAML is
    /// malformed, or `title`/`date` are missing.
    pub fn from_document(text: &str) -> Result<Self> {
        let Some((yaml, _)) = split_frontmatter(text) else {
            bail!("Missing frontmatter block");
        };
        Self::from_yaml(yaml)
    }

    fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).context("Malformed frontmatter")
    }
}

/// Splits a document into its frontmatter YAML and Markdown body.
///
/// Frontmatter must start on the first line with `---` and end at the
/// next line consisting of `---`. Returns `None` when the document has no
/// complete frontmatter block.
pub fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rest = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Parses a frontmatter date, keeping only the calendar date.
///
/// Accepts `2023-06-01`, RFC 3339 (`2023-06-01T09:30:00Z`), and
/// `2023-06-01 09:30:00`. Date-times with an offset are converted to UTC
/// before the date is taken.
///
/// # Errors
///
/// Returns error if no supported format matches.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.naive_utc().date());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(datetime.date());
        }
    }

    bail!("Invalid date: {}", raw)
}

/// Blog post loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    slug: String,
    title: String,
    date: NaiveDate,
    body: String,
    excerpt: Option<String>,
    draft: bool,
    legacy_slug: Option<String>,
    aliases: Vec<String>,
}

impl Post {
    /// Parses a post document.
    ///
    /// # Arguments
    ///
    /// * `slug`: URL segment of the post, the file name without `.md`
    /// * `text`: Full file contents including frontmatter
    ///
    /// # Errors
    ///
    /// Returns error if frontmatter is missing or malformed, a required
    /// field is absent, or the date cannot be parsed.
    pub fn parse(slug: impl Into<String>, text: &str) -> Result<Self> {
        let Some((yaml, body)) = split_frontmatter(text) else {
            bail!("Missing frontmatter block");
        };
        let frontmatter = Frontmatter::from_yaml(yaml)?;
        let date = parse_date(&frontmatter.date)?;

        let excerpt = frontmatter
            .excerpt
            .filter(|e| !e.trim().is_empty())
            .or_else(|| extract_excerpt(body));

        Ok(Self {
            slug: slug.into(),
            title: frontmatter.title,
            date,
            body: body.to_string(),
            excerpt,
            draft: frontmatter.draft,
            legacy_slug: frontmatter.slug,
            aliases: frontmatter.aliases,
        })
    }

    /// Loads a post from a Markdown file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or fails to parse. The
    /// error names the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let slug = file_slug(path)?;
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read post {}", path.display()))?;

        Self::parse(slug, &text).with_context(|| format!("Invalid post {}", path.display()))
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Markdown body with frontmatter removed.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    pub fn is_draft(&self) -> bool {
        self.draft
    }

    /// Explicit `slug` from frontmatter, the post's old URL segment.
    pub fn legacy_slug(&self) -> Option<&str> {
        self.legacy_slug.as_deref()
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Site relative URL of the post.
    pub fn url(&self) -> String {
        format!("/posts/{}", self.slug)
    }

    /// Output file path relative to the site root.
    pub fn page_path(&self) -> PathBuf {
        Path::new("posts").join(format!("{}.html", self.slug))
    }
}

/// Body text before the excerpt separator, if the body has one.
fn extract_excerpt(body: &str) -> Option<String> {
    let end = body.find(EXCERPT_SEPARATOR)?;
    let excerpt = body[..end].trim();
    (!excerpt.is_empty()).then(|| excerpt.to_string())
}

/// Returns the file name without its `.md` extension.
///
/// # Errors
///
/// Returns error if the path has no UTF8 file stem.
pub fn file_slug(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(String::from)
        .with_context(|| format!("Cannot derive slug from path: {}", path.display()))
}

/// Lists Markdown files of a content directory in file name order.
///
/// Subdirectories and non-Markdown files are skipped.
///
/// # Errors
///
/// Returns error if the directory cannot be read.
pub fn markdown_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read content directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();

        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("md") {
            files.push(path);
        } else {
            log::debug!("Skipping non-post entry {}", path.display());
        }
    }

    files.sort();
    Ok(files)
}

/// Loads every post in a content directory.
///
/// Posts are returned in file name order. Any malformed post aborts the
/// load.
///
/// # Errors
///
/// Returns error if the directory cannot be read or any post is invalid.
pub fn load_posts(dir: impl AsRef<Path>) -> Result<Vec<Post>> {
    markdown_files(dir)?
        .iter()
        .map(|path| {
            log::debug!("Loading post {}", path.display());
            Post::load(path)
        })
        .collect()
}

/// Returns whether a slug can name a post file inside the content directory.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && !slug.contains("..")
        && !slug.contains(['/', '\\'])
}

/// Loads the post with the given slug.
///
/// # Returns
///
/// `Ok(None)` when no post file matches, including slugs that could not
/// name a file in the content directory.
///
/// # Errors
///
/// Returns error if a matching file exists but fails to load.
pub fn load_post_by_slug(dir: impl AsRef<Path>, slug: &str) -> Result<Option<Post>> {
    if !is_valid_slug(slug) {
        return Ok(None);
    }

    let path = dir.as_ref().join(format!("{}.md", slug));
    if !path.is_file() {
        return Ok(None);
    }

    Post::load(&path).map(Some)
}

/// Finds a loaded post by slug.
pub fn find_post<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|post| post.slug == slug)
}
