use anyhow::{Context, Result};
use inkpot::{BuildArgs, Command, Config, RedirectArgs, redirects};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Build(args) => build(args),
        Command::Redirects(args) => print_redirects(args),
    }
}

fn build(args: &BuildArgs) -> Result<()> {
    let summary = inkpot::build_site(args).context("Failed to build site")?;

    log::info!(
        "Built {} posts ({} listed) into {}",
        summary.posts,
        summary.listed,
        args.output.display()
    );

    if args.open {
        if let Err(e) = open::that(&summary.index_path) {
            log::warn!("Failed to open {}: {}", summary.index_path.display(), e);
        }
    }

    Ok(())
}

fn print_redirects(args: &RedirectArgs) -> Result<()> {
    let rules = redirects::generate(&args.content).context("Failed to generate redirects")?;
    print!("{}", redirects::render(&rules));
    Ok(())
}
