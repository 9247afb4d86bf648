//! CLI argument definitions using Clap v4

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand};

/// picofonts - inspect and load the bundled font families
#[derive(Parser, Debug)]
#[command(name = "picofonts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Manifest JSON file (defaults to the built-in families)
    #[arg(short = 'm', long = "manifest", global = true)]
    pub manifest: Option<Utf8PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List families with their styles and asset directories
    #[command(alias = "ls")]
    List,

    /// Print the logical name of every variant
    Names(NamesArgs),

    /// Print the stylesheet paths used on the web
    Css,

    /// Load fonts from an asset directory into the in-process registry
    Load(LoadArgs),
}

/// Arguments for the names command
#[derive(Parser, Debug)]
pub struct NamesArgs {
    /// Only this family
    pub family: Option<String>,
}

/// Arguments for the load command
#[derive(Parser, Debug)]
pub struct LoadArgs {
    /// Asset root; family paths are resolved against it
    #[arg(short = 'r', long = "root", default_value = ".")]
    pub root: Utf8PathBuf,

    /// Platform to load for: web or native (defaults to detection)
    #[arg(short = 'p', long = "platform")]
    pub platform: Option<String>,

    /// Do not register families where no variant was found
    #[arg(long = "skip-empty")]
    pub skip_empty: bool,
}
