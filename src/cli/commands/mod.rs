//! One handler per top-level command, plus the argument helpers they share.

pub mod budget;
pub mod calendar;
pub mod card;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod init;
pub mod installment;
pub mod investment;
pub mod log;
pub mod project;
pub mod reservation;
pub mod transaction;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::non_blank;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open(&cfg.database)
}

/// Strict YYYY-MM-DD argument.
pub(crate) fn date_arg(raw: &str) -> AppResult<NaiveDate> {
    parse_date(raw.trim()).ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}

/// Date argument defaulting to today.
pub(crate) fn date_or_today(raw: Option<&String>) -> AppResult<NaiveDate> {
    match raw {
        Some(s) => date_arg(s),
        None => Ok(crate::utils::date::today()),
    }
}

/// Edit semantics for optional text: absent keeps `current`, blank clears.
pub(crate) fn edited_text(arg: &Option<String>, current: Option<String>) -> Option<String> {
    match arg {
        Some(v) => non_blank(Some(v)),
        None => current,
    }
}

/// Edit semantics for optional dates: absent keeps `current`, blank clears.
pub(crate) fn edited_date(
    arg: &Option<String>,
    current: Option<NaiveDate>,
) -> AppResult<Option<NaiveDate>> {
    match arg {
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => date_arg(v).map(Some),
        None => Ok(current),
    }
}

/// Edit semantics for links to other rows: absent keeps, 0 unlinks.
pub(crate) fn edited_link(arg: Option<i64>, current: Option<i64>) -> Option<i64> {
    match arg {
        Some(0) => None,
        Some(id) => Some(id),
        None => current,
    }
}
