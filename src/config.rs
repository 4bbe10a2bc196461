//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::highlight::theme_exists;

/// Default syntax highlighting theme, closest bundled match to GitHub light.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Command line configuration for Inkpot.
#[derive(Debug, Clone, Parser)]
#[command(name = "inkpot", version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

/// Top level subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render every post and page into the output directory
    Build(BuildArgs),
    /// Print the redirect table for the hosting platform to stdout
    Redirects(RedirectArgs),
}

/// Options for `inkpot build`.
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Directory containing Markdown posts
    #[arg(long, default_value = "posts")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Directory copied verbatim into the output (favicon, images)
    #[arg(long = "static", default_value = "public")]
    pub static_dir: PathBuf,

    /// Site title (defaults to the built-in site configuration)
    #[arg(long)]
    pub title: Option<String>,

    /// Syntax highlighting theme (InspiredGitHub, base16-ocean.light, etc.)
    #[arg(long, default_value = DEFAULT_THEME)]
    pub theme: String,

    /// Open the generated site in the default browser
    #[arg(long)]
    pub open: bool,
}

/// Options for `inkpot redirects`.
#[derive(Debug, Clone, Args)]
pub struct RedirectArgs {
    /// Directory containing Markdown posts
    #[arg(long, default_value = "posts")]
    pub content: PathBuf,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist or the
    /// highlighting theme is not bundled.
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Build(args) => args.validate(),
            Command::Redirects(args) => validate_content_dir(&args.content),
        }
    }
}

impl BuildArgs {
    /// Validates build options.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist or the theme is unknown.
    pub fn validate(&self) -> Result<()> {
        validate_content_dir(&self.content)?;

        if !theme_exists(&self.theme) {
            bail!("Unknown syntax highlighting theme: {}", self.theme);
        }

        Ok(())
    }
}

fn validate_content_dir(content: &Path) -> Result<()> {
    if !content.is_dir() {
        bail!("Content directory does not exist: {}", content.display());
    }
    Ok(())
}
