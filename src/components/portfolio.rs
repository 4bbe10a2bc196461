//! Project and talk list components

use maud::{Markup, html};

use crate::site::{Link, Project, Talk};
use crate::util::{format_date, iso_date};

fn sub_links(links: &[Link]) -> Markup {
    html! {
        @if !links.is_empty() {
            ul class="sub-links" {
                @for link in links {
                    li { a href=(link.url) { (link.name) } }
                }
            }
        }
    }
}

/// Renders a project with description and optional sub-links
pub fn project_item(project: &Project) -> Markup {
    html! {
        li {
            article class="entry" {
                h3 class="entry-title" {
                    a href=(project.url) { (project.name) }
                }
                p class="entry-meta" { (project.description) }
                (sub_links(&project.links))
            }
        }
    }
}

/// Renders a talk with date and optional sub-links
pub fn talk_item(talk: &Talk) -> Markup {
    html! {
        li {
            article class="entry" {
                h3 class="entry-title" {
                    a href=(talk.url) { (talk.title) }
                }
                time class="entry-meta" datetime=(iso_date(talk.date)) { (format_date(talk.date)) }
                (sub_links(&talk.links))
            }
        }
    }
}

/// Renders a list of projects in configuration order
pub fn project_list(projects: &[Project]) -> Markup {
    html! {
        ul class="entry-list" {
            @for project in projects {
                (project_item(project))
            }
        }
    }
}

/// Renders a list of talks in configuration order
pub fn talk_list(talks: &[Talk]) -> Markup {
    html! {
        ul class="entry-list" {
            @for talk in talks {
                (talk_item(talk))
            }
        }
    }
}
