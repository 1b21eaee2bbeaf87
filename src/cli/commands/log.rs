use crate::cli::parser::Commands;
use crate::cli::commands::open_pool;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::models::user::UserId;

pub fn handle(cmd: &Commands, cfg: &Config, user: &UserId) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = open_pool(cfg)?;
        LogLogic::print_log(&pool, user)?;
    }

    Ok(())
}
