//! picofonts CLI - inspect the font manifest and load font files

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let manifest = commands::manifest(cli.manifest.as_deref())?;
    log::debug!("Using manifest with {} families", manifest.len());

    match cli.command {
        Commands::List => commands::list::run(&manifest),
        Commands::Names(args) => commands::names::run(&manifest, &args),
        Commands::Css => commands::css::run(&manifest),
        Commands::Load(args) => commands::load::run(manifest, &args),
    }
}
