//! rFinDash library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (calendar grid, record services, SQLite store).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::user::UserId;

/// Signed-in user: `--user` wins over the configured one.
fn current_user(cli: &Cli, cfg: &Config) -> AppResult<UserId> {
    UserId::new(cli.user.as_deref().unwrap_or(&cfg.user))
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => {
            commands::log::handle(&cli.command, cfg, &current_user(cli, cfg)?)
        }
        Commands::Calendar { .. } => {
            commands::calendar::handle(&cli.command, cfg, &current_user(cli, cfg)?)
        }
        Commands::Reservation { action } => {
            commands::reservation::handle(action, cfg, &current_user(cli, cfg)?)
        }
        Commands::Client { action } => {
            commands::client::handle(action, cfg, &current_user(cli, cfg)?)
        }
        Commands::Budget { action } => {
            commands::budget::handle(action, cfg, &current_user(cli, cfg)?)
        }
        Commands::Transaction { action } => {
            commands::transaction::handle(action, cfg, &current_user(cli, cfg)?)
        }
        Commands::Card { action } => commands::card::handle(action, cfg, &current_user(cli, cfg)?),
        Commands::Installment { action } => {
            commands::installment::handle(action, cfg, &current_user(cli, cfg)?)
        }
        Commands::Investment { action } => {
            commands::investment::handle(action, cfg, &current_user(cli, cfg)?)
        }
        Commands::Project { action } => {
            commands::project::handle(action, cfg, &current_user(cli, cfg)?)
        }
        Commands::Dashboard => commands::dashboard::handle(cfg, &current_user(cli, cfg)?),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
