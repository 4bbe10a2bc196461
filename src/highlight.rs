//! Syntax highlighting with syntect.

use anyhow::{Context, Result};
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// CSS class style shared by generated spans and the theme stylesheet.
///
/// The `hljs-` prefix keeps class names compatible with highlight.js
/// themes written for the same markup.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

/// Highlights code blocks by language tag.
///
/// Loading the bundled syntax definitions is relatively expensive, so one
/// highlighter is built per renderer and reused for every code block.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    /// Creates highlighter with the bundled syntax definitions.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Looks up a syntax by fence tag (`rust`, `py`, `javascript`, ...).
    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        if language.is_empty() {
            return None;
        }

        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
    }

    /// Highlights code with CSS classes.
    ///
    /// # Arguments
    ///
    /// * `code`: Source code, unescaped
    /// * `language`: Fence tag of the code block
    ///
    /// # Returns
    ///
    /// `Some` with `<span class="hljs-*">` markup for known languages,
    /// `None` when the language is not recognized.
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to parse a line.
    pub fn highlight(&self, code: &str, language: &str) -> Result<Option<String>> {
        let Some(syntax) = self.find_syntax(language) else {
            return Ok(None);
        };

        if code.is_empty() {
            return Ok(Some(String::new()));
        }

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(Some(generator.finalize()))
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns whether a theme with this name is bundled.
pub fn theme_exists(name: &str) -> bool {
    ThemeSet::load_defaults().themes.contains_key(name)
}

/// Generates the stylesheet for highlighted code in the given theme.
///
/// # Errors
///
/// Returns error if the theme is unknown or CSS generation fails.
pub fn theme_css(name: &str) -> Result<String> {
    let themes = ThemeSet::load_defaults();
    let theme = themes
        .themes
        .get(name)
        .with_context(|| format!("Unknown syntax highlighting theme: {}", name))?;

    css_for_theme_with_class_style(theme, CLASS_STYLE)
        .with_context(|| format!("Failed to generate CSS for theme {}", name))
}
