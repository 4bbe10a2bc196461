//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use crate::site::SiteConfig;
use crate::util::relative_href;

const FONTS_ORIGIN: &str = "https://fonts.gstatic.com";
const FONTS_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=Source+Serif+4:ital,opsz,wght@0,8..60,400;0,8..60,600;0,8..60,800;1,8..60,400&display=swap";

/// Head metadata for a single page.
pub struct PageHead<'a> {
    /// Complete document title
    pub title: &'a str,
    /// Meta description, falls back to the site description when `None`
    pub description: Option<&'a str>,
    /// Directory depth of the page from the site root
    pub depth: usize,
    /// Stylesheets under `assets/` (e.g. `post.css`)
    pub stylesheets: &'a [&'a str],
}

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, charset, viewport, social card metadata, favicon,
/// feed discovery link, fonts, and stylesheets. The caller provides the
/// page-specific body content.
///
/// # Arguments
///
/// * `site`: Site configuration for shared metadata
/// * `page`: Page-specific head metadata
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(site: &SiteConfig, page: PageHead<'_>, body: Markup) -> Markup {
    let description = page.description.unwrap_or(&site.description);
    let favicon = site.absolute_url("favicon.ico");

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                meta name="description" content=(description);
                meta property="og:title" content=(page.title);
                meta property="og:image" content=(favicon);
                meta name="twitter:card" content="summary";
                @if let Some(handle) = &site.twitter {
                    meta name="twitter:site" content=(handle);
                    meta name="twitter:creator" content=(handle);
                }
                meta name="twitter:image:src" content=(favicon);
                link rel="icon" type="image/x-icon" href=(relative_href(page.depth, "favicon.ico"));
                link rel="alternate" type="application/rss+xml" title=(site.title) href=(site.feed_path);
                link rel="preconnect" href=(FONTS_ORIGIN) crossorigin="true";
                link rel="stylesheet" href=(FONTS_STYLESHEET);
                @for stylesheet in page.stylesheets {
                    link rel="stylesheet" href=(relative_href(page.depth, &format!("assets/{}", stylesheet)));
                }
            }
            body {
                div class="container" {
                    (body)
                }
                (footer(site))
            }
        }
    }
}
