//! Projects and talks page generation

use maud::{Markup, html};

use crate::components::header::back_home;
use crate::components::layout::{PageHead, page_wrapper};
use crate::components::portfolio::{project_list, talk_list};
use crate::site::SiteConfig;

const DEPTH: usize = 1;

/// Generates `projects/index.html` with every project and talk
pub fn generate(site: &SiteConfig) -> Markup {
    let title = format!("Projects | {}", site.title);

    page_wrapper(
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
                h1 class="list-title" { "Projects" }
                (project_list(&site.projects))
                h2 class="list-title" { "Talks" }
                (talk_list(&site.talks))
            }
        },
    )
}
