use clap::{Args, Parser, Subcommand, ValueEnum};
use ptable::core::models::family::Family;
use ptable::engine::resolver::ElementKey;
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Rohit De",
    version,
    about = "ptable - derive period, column, electron configuration, and family for any element from its atomic number, symbol, or name.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Load seed rows from a CSV file instead of the built-in table,
    /// overriding `data.seed-file` from the config file.
    #[arg(long, global = true, value_name = "PATH")]
    pub seed_file: Option<PathBuf>,

    /// Output format, overriding `display.format` from the config file.
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every derived attribute of one element.
    Show(ShowArgs),
    /// Print one line per element, optionally filtered.
    List(ListArgs),
    /// Print the 32 column tokens in table order.
    Columns,
    /// Print the element families and their metallic state.
    Families,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Atomic number, symbol, or name (e.g. 26, Fe, iron).
    #[arg(value_name = "KEY")]
    pub key: ElementKey,
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only elements of this family (e.g. "noble gas", transition-metal).
    #[arg(long, value_name = "FAMILY")]
    pub family: Option<Family>,

    /// Only elements in this period.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=7))]
    pub period: Option<u8>,

    /// Leave out the lanthanides and actinides.
    #[arg(long)]
    pub no_inner_transition: bool,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
