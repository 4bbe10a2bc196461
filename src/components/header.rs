//! Site header and navigation components

use maud::{Markup, html};

use crate::site::{Link, SiteConfig};
use crate::util::relative_href;

/// Renders the home page header
///
/// Shows the site title as the page heading with the social profile
/// links underneath.
///
/// # Arguments
///
/// * `site`: Site configuration providing title and social links
///
/// # Returns
///
/// Header markup for the home page
pub fn site_header(site: &SiteConfig) -> Markup {
    html! {
        header class="site-header" {
            h1 class="site-title" { (site.title) }
            (link_bar(&site.social_links, "social-links"))
        }
    }
}

/// Renders a horizontal list of links
pub fn link_bar(links: &[Link], class: &str) -> Markup {
    html! {
        nav class=(class) {
            ul {
                @for link in links {
                    li {
                        a href=(link.url) { (link.name) }
                    }
                }
            }
        }
    }
}

/// Renders the back link shown at the top of inner pages
///
/// # Arguments
///
/// * `site`: Site configuration providing the navigation links
/// * `depth`: Directory depth of the page, used to reach `index.html`
pub fn back_home(site: &SiteConfig, depth: usize) -> Markup {
    html! {
        header class="page-header" {
            a href=(relative_href(depth, "index.html")) class="home-link" { "← Home" }
            nav class="page-nav" {
                @for link in &site.nav {
                    a href=(relative_href(depth, &format!("{}index.html", link.url.trim_start_matches('/')))) {
                        (link.name)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::site_config;

    #[test]
    fn test_site_header_lists_social_links() {
        // Arrange
        let site = site_config().expect("Built-in config should be valid");

        // Act
        let html = site_header(&site).into_string();

        // Assert
        assert!(html.contains("<h1 class=\"site-title\">Chidi Williams</h1>"));
        assert!(html.contains("href=\"https://github.com/chidiwilliams\""));
        assert!(html.contains(">LinkedIn</a>"));
    }

    #[test]
    fn test_link_bar_empty() {
        // Act
        let html = link_bar(&[], "social-links").into_string();

        // Assert
        assert_eq!(html, "<nav class=\"social-links\"><ul></ul></nav>");
    }

    #[test]
    fn test_back_home_relative_links() {
        // Arrange
        let site = site_config().expect("Built-in config should be valid");

        // Act
        let html = back_home(&site, 1).into_string();

        // Assert
        assert!(html.contains("href=\"../index.html\""));
        assert!(html.contains("← Home"));
        assert!(html.contains("href=\"../projects/index.html\""));
        assert!(html.contains("href=\"../posts/index.html\""));
    }
}
