//! Post listing components

use maud::{Markup, html};

use crate::listing::PostSummary;
use crate::util::{format_date, iso_date, relative_href};

/// Renders one post entry with title link and date
///
/// # Arguments
///
/// * `post`: Post summary to render
/// * `depth`: Directory depth of the page containing the list
pub fn post_item(post: &PostSummary, depth: usize) -> Markup {
    let href = relative_href(depth, &format!("posts/{}.html", post.slug));

    html! {
        li {
            article class="entry" {
                h3 class="entry-title" {
                    a href=(href) { (post.title) }
                }
                time class="entry-meta" datetime=(iso_date(post.date)) { (format_date(post.date)) }
            }
        }
    }
}

/// Renders a column of post entries
pub fn post_column(posts: &[PostSummary], depth: usize) -> Markup {
    html! {
        ul class="entry-list" {
            @for post in posts {
                (post_item(post, depth))
            }
        }
    }
}
