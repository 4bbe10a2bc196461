//! Home page generation

use maud::{Markup, html};

use crate::components::header::site_header;
use crate::components::layout::{PageHead, page_wrapper};
use crate::components::portfolio::{project_list, talk_list};
use crate::components::post_list::post_column;
use crate::listing::Listing;
use crate::site::SiteConfig;

/// Generates the home page
///
/// Lays out the site header, then three columns: posts split across
/// the first two ("Writing"), projects and talks in the third.
///
/// # Arguments
///
/// * `site`: Site configuration with projects, talks, and social links
/// * `listing`: Published posts, most recent first
///
/// # Returns
///
/// Complete HTML markup for `index.html`
pub fn generate(site: &SiteConfig, listing: &Listing) -> Markup {
    let (first, second) = listing.columns();

    page_wrapper(
        site,
        PageHead {
            title: &site.title,
            description: None,
            depth: 0,
            stylesheets: &["home.css"],
        },
        html! {
            (site_header(site))

            main class="home-grid" {
                section class="home-column" {
                    h2 { "Writing" }
                    @if listing.is_empty() {
                        p class="empty-state" { "No posts yet" }
                    } @else {
                        (post_column(first, 0))
                    }
                }

                section class="home-column" {
                    h2 class="column-spacer" aria-hidden="true" { "Writing" }
                    (post_column(second, 0))
                }

                section class="home-column" {
                    div class="home-group" {
                        h2 { "Projects" }
                        (project_list(&site.projects))
                    }
                    div class="home-group" {
                        h2 { "Talks" }
                        (talk_list(&site.talks))
                    }
                }
            }
        },
    )
}
