//! Static site configuration.
//!
//! Site metadata, navigation, social links, projects, and talks are
//! compiled into the binary. Only the site title can be overridden from
//! the command line.

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// A named external link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub url: String,
}

impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Social profile shown in the site header.
pub type SocialLink = Link;

/// Portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
    pub links: Vec<Link>,
}

/// Conference or meetup talk entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    pub title: String,
    pub url: String,
    pub date: NaiveDate,
    pub links: Vec<Link>,
}

/// Complete site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub author: String,
    pub base_url: String,
    pub twitter: Option<String>,
    pub feed_path: String,
    pub nav: Vec<Link>,
    pub social_links: Vec<SocialLink>,
    pub projects: Vec<Project>,
    pub talks: Vec<Talk>,
}

impl SiteConfig {
    /// Replaces the site title, keeping everything else.
    pub fn with_title(mut self, title: Option<String>) -> Self {
        if let Some(title) = title {
            self.title = title;
        }
        self
    }

    /// Builds an absolute URL for a site relative path.
    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn project(name: &str, url: &str, description: &str, links: &[(&str, &str)]) -> Project {
    Project {
        name: name.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        links: links.iter().map(|(n, u)| Link::new(*n, *u)).collect(),
    }
}

fn talk(title: &str, url: &str, date: &str, links: &[(&str, &str)]) -> Result<Talk> {
    Ok(Talk {
        title: title.to_string(),
        url: url.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Invalid date for talk {}: {}", title, date))?,
        links: links.iter().map(|(n, u)| Link::new(*n, *u)).collect(),
    })
}

/// Returns the built-in site configuration.
///
/// # Errors
///
/// Returns error if a talk date in the built-in data is malformed.
pub fn site_config() -> Result<SiteConfig> {
    Ok(SiteConfig {
        title: "Chidi Williams".to_string(),
        description: "Personal website of Chidi Williams, co-founder and CTO of Rulebase."
            .to_string(),
        author: "Chidi Williams".to_string(),
        base_url: "https://chidiwilliams.com".to_string(),
        twitter: Some("@ChidiWilliams__".to_string()),
        feed_path: "/feed.xml".to_string(),
        nav: vec![
            Link::new("Projects", "/projects/"),
            Link::new("Writing", "/posts/"),
        ],
        social_links: vec![
            Link::new("Twitter", "https://twitter.com/chidiwilliams__"),
            Link::new("GitHub", "https://github.com/chidiwilliams"),
            Link::new("LinkedIn", "https://www.linkedin.com/in/chidiwilliams/"),
        ],
        talks: vec![
            talk(
                "Hearing Between the Lines",
                "https://talks.chidiwilliams.com/2023/hearing-between-the-lines",
                "2023-08-16",
                &[(
                    "YouTube",
                    "https://www.youtube.com/watch?v=c_PK9HVw1sM&list=PLe4yUFawNXrxsqQ7xPLUiB5J1TyPqfpP2",
                )],
            )?,
            talk(
                "Classical Synchronization Problems",
                "https://talks.chidiwilliams.com/2023/classical-synchronization-problems",
                "2023-12-07",
                &[],
            )?,
        ],
        projects: vec![
            project(
                "SysDsgn",
                "https://bento.me/sysdsgn",
                "Community hosting conversations on software systems design. Organizers of SysDsgn Twitter Spaces and SysConf.",
                &[("Twitter", "https://twitter.com/sysdsgn")],
            ),
            project(
                "GPT Automator",
                "https://github.com/chidiwilliams/GPT-Automator",
                "A voice-controlled Mac assistant using Whisper and GPT-3.",
                &[("Blog", "https://chidiwilliams.com/post/gpt-automator/")],
            ),
            project(
                "Buzz Captions",
                "https://apps.apple.com/us/app/buzz-captions/id6446018936",
                "Speech-to-text transcription and translation app on macOS powered by OpenAI's Whisper.",
                &[],
            ),
            project(
                "Buzz",
                "https://github.com/chidiwilliams/buzz",
                "Open-source, cross-platform version of Buzz Captions.",
                &[],
            ),
            project(
                "Lox Playground",
                "https://chidiwilliams.github.io/lox-playground/",
                "A web-based REPL and web editor for running Lox programs. The playground runs Loxjs, a JavaScript implementation of the tree-walking interpreter from Bob Nystrom's Crafting Interpreters.",
                &[("Source", "https://github.com/chidiwilliams/lox-playground")],
            ),
            project(
                "Glox",
                "https://github.com/chidiwilliams/glox",
                "A Go implementation of the Lox interpreter.",
                &[],
            ),
            project(
                "Wordle AI",
                "https://github.com/chidiwilliams/wordle",
                "A Wordle solver.",
                &[("Blog", "https://chidiwilliams.com/post/a-wordle-solver/")],
            ),
            project(
                "Expression Evaluator",
                "https://chidiwilliams.github.io/expression-evaluator/",
                "A math expression evaluator built with JavaScript.",
                &[
                    ("Source", "https://github.com/chidiwilliams/expression-evaluator"),
                    ("Blog", "https://chidiwilliams.com/post/evaluator/"),
                ],
            ),
            project(
                "GitHub Stories",
                "https://github.com/chidiwilliams/github-stories",
                "A playful Chrome extension for viewing stories on your GitHub dashboard.",
                &[],
            ),
        ],
    })
}
