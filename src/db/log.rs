use crate::errors::AppResult;
use crate::models::user::UserId;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an audit line into the `log` table.
///
/// `user` is `None` for database-wide events (init), which every user sees.
pub fn audit(
    conn: &Connection,
    user: Option<&UserId>,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, user_id, operation, target, message)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    stmt.execute(params![
        now,
        user.map(UserId::as_str),
        operation,
        target,
        message
    ])?;

    Ok(())
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Log rows of `user` plus the database-wide ones (migrations, init),
/// oldest first.
pub fn load_log(conn: &Connection, user: &UserId) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log
         WHERE user_id = ?1 OR user_id IS NULL
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([user.as_str()], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
