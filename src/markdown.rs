//! Markdown rendering for posts.
//!
//! This module converts post Markdown to HTML using comrak with GFM
//! extensions, frontmatter stripping, raw HTML passthrough, and syntect
//! highlighting for fenced code blocks.

mod renderer;

pub use renderer::MarkdownRenderer;
