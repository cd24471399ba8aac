mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod render;

use crate::cli::{Cli, Commands};
use crate::config::PartialAppConfig;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("ptable CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let app_config = PartialAppConfig::load(cli.config.as_deref())?.merge_with_cli(&cli)?;

    let command_result = match cli.command {
        Commands::Show(args) => {
            info!("Dispatching to 'show' command.");
            commands::show::run(args, &app_config)
        }
        Commands::List(args) => {
            info!("Dispatching to 'list' command.");
            commands::list::run(args, &app_config)
        }
        Commands::Columns => commands::tokens::run_columns(&app_config),
        Commands::Families => commands::tokens::run_families(&app_config),
    };

    if let Err(e) = &command_result {
        error!("Command failed: {}", e);
    }
    command_result
}
