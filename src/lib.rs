//! ABQ data entry library root.
//! Exposes the CLI parser, the high-level run() function and the form,
//! store and UI modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod form;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Form) => cli::commands::form::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::Add { .. }) => cli::commands::add::handle(cmd, cfg),
        Some(Commands::Fields) => cli::commands::fields::handle(),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once; test mode ignores the user's file.
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(dir) = &cli.dir {
        cfg.output_dir = dir.clone();
    }

    dispatch(&cli, &cfg)
}
