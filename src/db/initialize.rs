use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine and
/// returns the migrations it applied.
pub fn init_db(conn: &Connection) -> AppResult<Vec<String>> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    run_pending_migrations(conn)
}
