//! Site generation from loaded posts and site configuration.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_css_assets;
use crate::config::BuildArgs;
use crate::listing::Listing;
use crate::markdown::MarkdownRenderer;
use crate::pages;
use crate::post::{Post, find_post, is_valid_slug, load_posts};
use crate::site::{SiteConfig, site_config};

/// Outcome of rendering a post requested by slug.
#[derive(Debug)]
pub enum PostPage {
    Found(Markup),
    NotFound(Markup),
}

impl PostPage {
    pub fn is_found(&self) -> bool {
        matches!(self, PostPage::Found(_))
    }

    pub fn into_markup(self) -> Markup {
        match self {
            PostPage::Found(markup) | PostPage::NotFound(markup) => markup,
        }
    }
}

/// Counts reported after a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub posts: usize,
    /// Post pages actually written
    pub pages: usize,
    pub listed: usize,
    pub drafts: usize,
    pub index_path: PathBuf,
}

/// Renders the page for the post with the given slug.
///
/// # Returns
///
/// `PostPage::NotFound` with the not-found page when no post matches.
///
/// # Errors
///
/// Returns error if the post body fails to render
pub fn post_page_for_slug(
    site: &SiteConfig,
    posts: &[Post],
    slug: &str,
    renderer: &MarkdownRenderer,
) -> Result<PostPage> {
    let Some(post) = find_post(posts, slug) else {
        return Ok(PostPage::NotFound(pages::not_found::generate(site)));
    };

    let content = renderer
        .render_body(post.body())
        .with_context(|| format!("Failed to render post {}", post.slug()))?;

    Ok(PostPage::Found(pages::post::generate(site, post, &content)))
}

/// Builds the whole site into the output directory.
///
/// Loads every post, then writes the home page, post pages, the posts
/// archive, the projects page, the not-found page, CSS assets, and a copy
/// of the static directory when it exists. Drafts get a page but are never
/// listed.
///
/// # Errors
///
/// Returns error if any post is malformed or any file cannot be written.
/// Nothing is retried; rerunning the build regenerates every file.
pub fn build_site(args: &BuildArgs) -> Result<BuildSummary> {
    let site = site_config()?.with_title(args.title.clone());
    let posts = load_posts(&args.content).context("Failed to load posts")?;
    let listing = Listing::assemble(&posts);
    let renderer = MarkdownRenderer::new();

    log::info!(
        "Loaded {} posts from {}",
        posts.len(),
        args.content.display()
    );

    fs::create_dir_all(&args.output).context("Failed to create output directory")?;

    let assets_dir = args.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir, &args.theme).context("Failed to write CSS assets")?;

    if args.static_dir.is_dir() {
        copy_dir(&args.static_dir, &args.output).with_context(|| {
            format!(
                "Failed to copy static files from {}",
                args.static_dir.display()
            )
        })?;
    } else {
        log::debug!(
            "No static directory at {}, skipping",
            args.static_dir.display()
        );
    }

    let index_path = args.output.join("index.html");
    write_page(&index_path, pages::index::generate(&site, &listing))?;
    write_page(
        &args.output.join("posts").join("index.html"),
        pages::posts::generate(&site, &listing, &renderer)?,
    )?;
    write_page(
        &args.output.join("projects").join("index.html"),
        pages::projects::generate(&site),
    )?;
    write_page(
        &args.output.join("404.html"),
        pages::not_found::generate(&site),
    )?;

    let mut pages = 0;
    let mut drafts = 0;
    for post in &posts {
        if !is_valid_slug(post.slug()) {
            log::warn!("Skipping post with unusable file name: {}", post.slug());
            continue;
        }
        if post.is_draft() {
            drafts += 1;
        }

        let page = post_page_for_slug(&site, &posts, post.slug(), &renderer)?;
        write_page(&args.output.join(post.page_path()), page.into_markup())?;
        pages += 1;
    }

    log::info!(
        "Generated {} post pages ({} drafts unlisted)",
        pages,
        drafts
    );

    Ok(BuildSummary {
        posts: posts.len(),
        pages,
        listed: listing.len(),
        drafts,
        index_path,
    })
}

/// Writes rendered markup, creating parent directories as needed.
fn write_page(path: &Path, markup: Markup) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, markup.into_string())
        .with_context(|| format!("Failed to write page {}", path.display()))?;

    log::debug!("Generated: {}", path.display());
    Ok(())
}

/// Recursively copies directory contents into the destination.
fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to)
        .with_context(|| format!("Failed to create directory {}", to.display()))?;

    for entry in fs::read_dir(from)
        .with_context(|| format!("Failed to read directory {}", from.display()))?
    {
        let entry = entry?;
        let source = entry.path();
        let target = to.join(entry.file_name());

        if source.is_dir() {
            copy_dir(&source, &target)?;
        } else {
            fs::copy(&source, &target)
                .with_context(|| format!("Failed to copy {}", source.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_posts() -> Vec<Post> {
        vec![
            Post::parse(
                "hello",
                "---\ntitle: Hello\ndate: 2023-01-01\n---\n\n```rust\nfn main() {}\n```\n",
            )
            .expect("parse"),
        ]
    }

    #[test]
    fn test_post_page_for_known_slug() {
        // Arrange
        let site = site_config().expect("Built-in config should be valid");
        let posts = sample_posts();
        let renderer = MarkdownRenderer::new();

        // Act
        let page = post_page_for_slug(&site, &posts, "hello", &renderer)
            .expect("Should render");

        // Assert
        assert!(page.is_found());
        let html = page.into_markup().into_string();
        assert!(html.contains("<code class=\"hljs language-rust\">"), "{}", html);
    }

    #[test]
    fn test_post_page_for_unknown_slug() {
        // Arrange
        let site = site_config().expect("Built-in config should be valid");
        let posts = sample_posts();
        let renderer = MarkdownRenderer::new();

        // Act
        let page = post_page_for_slug(&site, &posts, "missing", &renderer)
            .expect("Unknown slug is not an error");

        // Assert
        assert!(!page.is_found());
        assert!(page.into_markup().into_string().contains("Page not found"));
    }

    #[test]
    fn test_build_site_counts_written_pages() {
        // Arrange
        let content = tempfile::tempdir().expect("Should create temp dir");
        let output = tempfile::tempdir().expect("Should create temp dir");
        let post = "---\ntitle: T\ndate: 2023-01-01\n---\nBody\n";
        fs::write(content.path().join("ok.md"), post).expect("write");
        fs::write(content.path().join(".hidden.md"), post).expect("write");
        let args = BuildArgs {
            content: content.path().to_path_buf(),
            output: output.path().to_path_buf(),
            static_dir: content.path().join("public"),
            title: None,
            theme: crate::config::DEFAULT_THEME.to_string(),
            open: false,
        };

        // Act
        let summary = build_site(&args).expect("Should build");

        // Assert
        assert_eq!(summary.posts, 2);
        assert_eq!(summary.pages, 1, "Unusable file names get no page");
        assert!(output.path().join("posts").join("ok.html").exists());
    }

    #[test]
    fn test_copy_dir_nested() {
        // Arrange
        let src = tempfile::tempdir().expect("Should create temp dir");
        let dst = tempfile::tempdir().expect("Should create temp dir");
        fs::create_dir_all(src.path().join("favicon")).expect("mkdir");
        fs::write(src.path().join("favicon").join("favicon.ico"), b"ico").expect("write");
        fs::write(src.path().join("robots.txt"), "User-agent: *").expect("write");

        // Act
        copy_dir(src.path(), dst.path()).expect("Should copy");

        // Assert
        assert!(dst.path().join("favicon").join("favicon.ico").exists());
        assert!(dst.path().join("robots.txt").exists());
    }
}
