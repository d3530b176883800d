//! getime library root.
//! Duration notation conversion, billing periods and half-open date ranges,
//! plus the CLI parser and the high-level run() used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, config_path, cfg),
        Commands::Hours { action } => cli::commands::hours::handle(action, cfg),
        Commands::Month { action } => cli::commands::month::handle(action, cfg),
        Commands::Range { .. } => cli::commands::range::handle(&cli.command),
        Commands::Filter { .. } => cli::commands::filter::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    // init and config must still work on a broken file
    let cfg = match Config::load_from(&config_path) {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Commands::Init { .. } | Commands::Config { .. }) => {
            ui::messages::warning(format!("{} (using defaults)", e));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    logging::init_logging(&cfg, cli.verbose);

    dispatch(&cli, &cfg, &config_path)
}
