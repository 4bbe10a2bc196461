//! Not found page generation

use maud::{Markup, html};

use crate::components::layout::{PageHead, page_wrapper};
use crate::site::SiteConfig;

/// Generates `404.html`, also rendered for unknown post slugs
pub fn generate(site: &SiteConfig) -> Markup {
    let title = format!("Page not found | {}", site.title);

    page_wrapper(
        site,
        PageHead {
            title: &title,
            description: None,
            depth: 0,
            stylesheets: &["list.css"],
        },
        html! {
            main class="not-found" {
                h1 class="list-title" { "Page not found" }
                p { "The page you were looking for does not exist." }
                a href="/" class="home-link" { "← Home" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::site_config;

    #[test]
    fn test_not_found_page() {
        // Arrange
        let site = site_config().expect("Built-in config should be valid");

        // Act
        let html = generate(&site).into_string();

        // Assert
        assert!(html.contains("Page not found"));
        assert!(html.contains("href=\"/\""));
    }
}
