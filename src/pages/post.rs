//! Single post page generation

use maud::{Markup, PreEscaped, html};

use crate::components::header::back_home;
use crate::components::layout::{PageHead, page_wrapper};
use crate::post::Post;
use crate::site::SiteConfig;
use crate::util::{format_date, iso_date};

/// Post pages live at `posts/<slug>.html`.
pub const DEPTH: usize = 1;

/// Generates the page for one post
///
/// # Arguments
///
/// * `site`: Site configuration for the title suffix and head metadata
/// * `post`: Post being rendered
/// * `content_html`: Post body already converted to HTML
///
/// # Returns
///
/// Complete HTML markup for the post page
pub fn generate(site: &SiteConfig, post: &Post, content_html: &str) -> Markup {
    let title = format!("{} | {}", post.title(), site.title);

    page_wrapper(
        site,
        PageHead {
            title: &title,
            description: post.excerpt(),
            depth: DEPTH,
            stylesheets: &["post.css", "highlight.css"],
        },
        html! {
            (back_home(site, DEPTH))
            main {
                article class="prose" {
                    header class="post-header" {
                        h1 class="post-title" { (post.title()) }
                        time class="post-date" datetime=(iso_date(post.date())) {
                            (format_date(post.date()))
                        }
                    }
                    div class="post-body" {
                        (PreEscaped(content_html))
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::site_config;

    #[test]
    fn test_post_page() {
        // Arrange
        let site = site_config().expect("Built-in config should be valid");
        let post = Post::parse(
            "evaluator",
            "---\ntitle: Building an Evaluator\ndate: 2021-03-14\n---\nBody\n",
        )
        .expect("Should parse");

        // Act
        let html = generate(&site, &post, "<p>Rendered <em>body</em></p>").into_string();

        // Assert
        assert!(html.contains("<title>Building an Evaluator | Chidi Williams</title>"));
        assert!(html.contains("<h1 class=\"post-title\">Building an Evaluator</h1>"));
        assert!(html.contains("March 14, 2021"));
        assert!(html.contains("<p>Rendered <em>body</em></p>"), "Body is not escaped");
        assert!(html.contains("href=\"../assets/post.css\""));
        assert!(html.contains("href=\"../assets/highlight.css\""));
        assert!(html.contains("href=\"../index.html\""));
    }

    #[test]
    fn test_post_page_uses_excerpt_description() {
        // Arrange
        let site = site_config().expect("Built-in config should be valid");
        let post = Post::parse(
            "p",
            "---\ntitle: P\ndate: 2021-03-14\nexcerpt: A short summary\n---\nBody\n",
        )
        .expect("Should parse");

        // Act
        let html = generate(&site, &post, "").into_string();

        // Assert
        assert!(html.contains("name=\"description\" content=\"A short summary\""));
    }
}
