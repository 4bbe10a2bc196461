//! Static site generator for a personal blog and portfolio.

mod assets;
pub mod components;
mod config;
mod generators;
mod highlight;
pub mod listing;
mod markdown;
pub mod pages;
pub mod post;
pub mod redirects;
pub mod site;
mod util;

pub use assets::write_css_assets;
pub use config::{BuildArgs, Command, Config, DEFAULT_THEME, RedirectArgs};
pub use generators::{BuildSummary, PostPage, build_site, post_page_for_slug};
pub use highlight::{Highlighter, theme_css, theme_exists};
pub use listing::{Listing, PostSummary, split_columns};
pub use markdown::MarkdownRenderer;
pub use post::{Frontmatter, Post, find_post, load_post_by_slug, load_posts};
pub use redirects::RedirectRule;
pub use site::{SiteConfig, site_config};
