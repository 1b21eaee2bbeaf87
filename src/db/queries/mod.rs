//! SQLite implementation of the data-access traits.
//!
//! Each record type describes its table through [`SqlRecord`]; the generic
//! `Repository` impl for [`DbPool`] builds the user-scoped statements from
//! that description. Queries alias the main table as `t`.

pub mod budgets;
pub mod cards;
pub mod clients;
pub mod installments;
pub mod investments;
pub mod projects;
pub mod reservations;
pub mod transactions;

use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::store::{AuditLog, Entity, Repository};
use crate::errors::{AppError, AppResult};
use crate::models::user::UserId;
use chrono::{Local, NaiveDate};
use rusqlite::types::{Type, Value};
use rusqlite::{OptionalExtension, Row, params_from_iter};

pub trait SqlRecord: Entity {
    const TABLE: &'static str;

    /// `SELECT ... FROM <table> t [LEFT JOIN ...]`, without WHERE.
    const SELECT: &'static str;

    const ORDER_BY: &'static str;

    /// Writable columns, in the order produced by [`SqlRecord::values`].
    const COLUMNS: &'static [&'static str];

    /// Whether the table carries an `updated_at` column.
    const HAS_UPDATED_AT: bool;

    fn from_row(row: &Row) -> rusqlite::Result<Self>;

    fn values(input: &Self::Input) -> Vec<Value>;
}

pub(crate) fn now_stamp() -> String {
    Local::now().to_rfc3339()
}

pub(crate) fn opt<T: Into<Value>>(v: Option<T>) -> Value {
    v.map_or(Value::Null, Into::into)
}

pub(crate) fn opt_text(v: &Option<String>) -> Value {
    opt(v.clone())
}

pub(crate) fn date_value(d: NaiveDate) -> Value {
    Value::Text(crate::utils::date::to_db(d))
}

pub(crate) fn opt_date_value(d: Option<NaiveDate>) -> Value {
    opt(d.map(crate::utils::date::to_db))
}

pub(crate) fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err))
}

pub(crate) fn date_col(row: &Row, col: &str) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(col)?;
    crate::utils::date::parse_date(&raw).ok_or_else(|| conversion_error(AppError::InvalidDate(raw)))
}

pub(crate) fn opt_date_col(row: &Row, col: &str) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        Some(s) if !s.trim().is_empty() => crate::utils::date::parse_date(&s)
            .map(Some)
            .ok_or_else(|| conversion_error(AppError::InvalidDate(s))),
        _ => Ok(None),
    }
}

/// Decode a text enum column with its `from_db_str`.
pub(crate) fn enum_col<T>(
    row: &Row,
    col: &str,
    entity: &'static str,
    parse: fn(&str) -> Option<T>,
) -> rusqlite::Result<T> {
    let raw: String = row.get(col)?;
    parse(&raw).ok_or_else(|| conversion_error(AppError::InvalidStatus { entity, value: raw }))
}

pub(crate) fn collect_rows<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
) -> AppResult<Vec<T>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

impl<T: SqlRecord> Repository<T> for DbPool {
    fn list(&self, user: &UserId) -> AppResult<Vec<T>> {
        let sql = format!("{} WHERE t.user_id = ?1 ORDER BY {}", T::SELECT, T::ORDER_BY);
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map([user.as_str()], |row| T::from_row(row))?;
        collect_rows(rows)
    }

    fn find(&self, user: &UserId, id: i64) -> AppResult<Option<T>> {
        let sql = format!("{} WHERE t.user_id = ?1 AND t.id = ?2", T::SELECT);
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let found = stmt
            .query_row(rusqlite::params![user.as_str(), id], |row| T::from_row(row))
            .optional()?;
        Ok(found)
    }

    fn insert(&self, user: &UserId, input: &T::Input) -> AppResult<T> {
        let mut columns: Vec<&str> = vec!["user_id"];
        columns.extend_from_slice(T::COLUMNS);
        columns.push("created_at");

        let stamp = now_stamp();
        let mut values: Vec<Value> = vec![Value::Text(user.as_str().to_string())];
        values.extend(T::values(input));
        values.push(Value::Text(stamp.clone()));

        if T::HAS_UPDATED_AT {
            columns.push("updated_at");
            values.push(Value::Text(stamp));
        }

        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            T::TABLE,
            columns.join(", "),
            placeholders
        );

        self.conn.execute(&sql, params_from_iter(values.iter()))?;
        let id = self.conn.last_insert_rowid();

        <Self as Repository<T>>::find(self, user, id)?
            .ok_or_else(|| AppError::not_found(T::NAME, id))
    }

    fn update(&self, user: &UserId, id: i64, input: &T::Input) -> AppResult<Option<T>> {
        let mut assignments: Vec<String> =
            T::COLUMNS.iter().map(|c| format!("{} = ?", c)).collect();
        let mut values = T::values(input);

        if T::HAS_UPDATED_AT {
            assignments.push("updated_at = ?".to_string());
            values.push(Value::Text(now_stamp()));
        }

        values.push(Value::Integer(id));
        values.push(Value::Text(user.as_str().to_string()));

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ? AND user_id = ?",
            T::TABLE,
            assignments.join(", ")
        );

        let changed = self.conn.execute(&sql, params_from_iter(values.iter()))?;
        if changed == 0 {
            return Ok(None);
        }
        <Self as Repository<T>>::find(self, user, id)
    }

    fn delete(&self, user: &UserId, id: i64) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?1 AND user_id = ?2", T::TABLE);
        let changed = self
            .conn
            .execute(&sql, rusqlite::params![id, user.as_str()])?;
        Ok(changed > 0)
    }
}

impl AuditLog for DbPool {
    fn audit(
        &self,
        user: &UserId,
        operation: &str,
        target: &str,
        message: &str,
    ) -> AppResult<()> {
        log::audit(&self.conn, Some(user), operation, target, message)
    }
}
