//! Post archive page generation

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};

use crate::components::header::back_home;
use crate::components::layout::{PageHead, page_wrapper};
use crate::listing::Listing;
use crate::markdown::MarkdownRenderer;
use crate::site::SiteConfig;
use crate::util::{format_date, iso_date, relative_href};

const DEPTH: usize = 1;

/// Generates the archive of all published posts at `posts/index.html`
///
/// Lists every post with its date and, when present, its rendered excerpt.
///
/// # Errors
///
/// Returns error if an excerpt fails to render
pub fn generate(site: &SiteConfig, listing: &Listing, renderer: &MarkdownRenderer) -> Result<Markup> {
    let mut entries = Vec::with_capacity(listing.len());
    for post in listing.posts() {
        let excerpt = post
            .excerpt
            .as_deref()
            .map(|text| renderer.render_body(text))
            .transpose()
            .with_context(|| format!("Failed to render excerpt of {}", post.slug))?;
        entries.push((post, excerpt));
    }

    let title = format!("Writing | {}", site.title);

    Ok(page_wrapper(
        site,
        PageHead {
            title: &title,
            description: None,
            depth: DEPTH,
            stylesheets: &["list.css"],
        },
        html! {
            (back_home(site, DEPTH))
            main {
                h1 class="list-title" { "Writing" }
                @if entries.is_empty() {
                    p class="empty-state" { "No posts yet" }
                } @else {
                    ul class="entry-list" {
                        @for (post, excerpt) in &entries {
                            li {
                                article class="entry" {
                                    h2 class="entry-title" {
                                        a href=(relative_href(DEPTH, &format!("posts/{}.html", post.slug))) { (post.title) }
                                    }
                                    time class="entry-meta" datetime=(iso_date(post.date)) { (format_date(post.date)) }
                                    @if let Some(excerpt) = excerpt {
                                        div class="entry-excerpt" { (PreEscaped(excerpt)) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    ))
}
