//! Site footer component

use maud::{Markup, html};

use crate::site::SiteConfig;

/// Renders the site footer with copyright and feed link
pub fn footer(site: &SiteConfig) -> Markup {
    html! {
        footer class="site-footer" {
            p {
                "© " (site.author) " · "
                a href=(site.feed_path) { "RSS" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::site_config;

    #[test]
    fn test_footer_contents() {
        // Arrange
        let site = site_config().expect("Built-in config should be valid");

        // Act
        let html = footer(&site).into_string();

        // Assert
        assert!(html.contains("site-footer"));
        assert!(html.contains("Chidi Williams"));
        assert!(html.contains("href=\"/feed.xml\""));
    }
}
