//! Markdown rendering with frontmatter stripping and code highlighting.

use anyhow::{Context, Result};
use comrak::Options;

use crate::highlight::Highlighter;
use crate::post::split_frontmatter;

/// Opening of a fenced code block as comrak emits it.
const PRE_CODE_OPEN: &str = "<pre><code class=\"language-";
const CODE_CLOSE: &str = "</code>";

/// Renders post Markdown to HTML.
///
/// CommonMark plus the GFM extensions used by posts (tables,
/// strikethrough, autolinks, task lists, footnotes) and heading anchor
/// ids. Raw HTML passes through untouched, and fenced code blocks with a
/// recognized language are highlighted with syntect CSS classes.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: Highlighter,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with the post rendering options.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.header_ids = Some(String::new());

        // Posts are authored by the site owner and embed figures, iframes, video.
        options.render.unsafe_ = true;

        Self {
            options,
            highlighter: Highlighter::new(),
        }
    }

    /// Renders a full Markdown document to an HTML string.
    ///
    /// A leading frontmatter block is dropped before rendering. Output
    /// depends only on the input text, so rendering the same document
    /// twice yields byte-identical HTML.
    ///
    /// # Arguments
    ///
    /// * `document`: Markdown content, optionally starting with frontmatter
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, document: &str) -> Result<String> {
        let body = split_frontmatter(document).map_or(document, |(_, body)| body);
        self.render_body(body)
    }

    /// Renders Markdown that has no frontmatter, such as a post body.
    ///
    /// A leading `---` here is a thematic break, not a delimiter.
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render_body(&self, markdown: &str) -> Result<String> {
        let html = comrak::markdown_to_html(markdown, &self.options);
        self.highlight_code_blocks(&html)
    }

    /// Post-processes HTML to highlight `<pre><code class="language-X">` blocks.
    ///
    /// Recognized languages get `class="hljs language-X"` and syntect
    /// spans. Unknown languages are left exactly as comrak produced them,
    /// as is any `<code>` element outside `<pre>`.
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(offset) = html[search_pos..].find(PRE_CODE_OPEN) {
            let code_start = search_pos + offset;
            let lang_start = code_start + PRE_CODE_OPEN.len();

            let Some(lang_len) = html[lang_start..].find('"') else {
                search_pos = lang_start;
                continue;
            };
            let lang_end = lang_start + lang_len;
            let language = &html[lang_start..lang_end];

            let Some(tag_len) = html[lang_end..].find('>') else {
                search_pos = lang_end;
                continue;
            };
            let content_start = lang_end + tag_len + 1;

            let Some(content_len) = html[content_start..].find(CODE_CLOSE) else {
                search_pos = content_start;
                continue;
            };
            let content_end = content_start + content_len;

            let code = html_decode(&html[content_start..content_end]);
            let highlighted = self
                .highlighter
                .highlight(&code, language)
                .with_context(|| format!("Failed to highlight {} code block", language))?;

            let Some(highlighted) = highlighted else {
                search_pos = content_end + CODE_CLOSE.len();
                continue;
            };

            result.push_str(&html[last_end..code_start]);
            result.push_str("<pre><code class=\"hljs language-");
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str(CODE_CLOSE);

            last_end = content_end + CODE_CLOSE.len();
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);

        Ok(result)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reverses the entity escaping comrak applies inside code blocks.
///
/// `&amp;` is decoded last so `&amp;lt;` becomes `&lt;`, not `<`.
fn html_decode(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
