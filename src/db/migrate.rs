use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// A schema step, applied once and recorded in the `log` table as
/// `migration_applied` with the version as target.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250901_0001_create_core_tables",
        description: "Created clients, budgets, transactions, cards, installments, investments, projects and reservations tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS clients (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            phone       TEXT,
            document    TEXT,
            address     TEXT,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS budgets (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      TEXT NOT NULL,
            client_id    INTEGER REFERENCES clients(id) ON DELETE SET NULL,
            title        TEXT NOT NULL,
            description  TEXT,
            amount       REAL NOT NULL DEFAULT 0,
            status       TEXT NOT NULL DEFAULT 'pending'
                         CHECK(status IN ('pending','approved','rejected','completed')),
            valid_until  TEXT,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS cards (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      TEXT NOT NULL,
            name         TEXT NOT NULL,
            last_digits  TEXT NOT NULL,
            brand        TEXT NOT NULL DEFAULT 'other'
                         CHECK(brand IN ('visa','mastercard','elo','amex','other')),
            card_limit   REAL NOT NULL DEFAULT 0,
            closing_day  INTEGER NOT NULL CHECK(closing_day BETWEEN 1 AND 31),
            due_day      INTEGER NOT NULL CHECK(due_day BETWEEN 1 AND 31),
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS transactions (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id         TEXT NOT NULL,
            type            TEXT NOT NULL CHECK(type IN ('income','expense')),
            category        TEXT NOT NULL,
            description     TEXT NOT NULL,
            amount          REAL NOT NULL,
            date            TEXT NOT NULL,
            payment_method  TEXT,
            card_id         INTEGER REFERENCES cards(id) ON DELETE SET NULL,
            status          TEXT NOT NULL DEFAULT 'completed'
                            CHECK(status IN ('pending','completed','cancelled')),
            created_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS installments (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id            TEXT NOT NULL,
            description        TEXT NOT NULL,
            total_amount       REAL NOT NULL,
            installments       INTEGER NOT NULL CHECK(installments >= 1),
            installment_value  REAL NOT NULL,
            start_date         TEXT NOT NULL,
            created_at         TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS investments (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id          TEXT NOT NULL,
            name             TEXT NOT NULL,
            type             TEXT NOT NULL DEFAULT 'other'
                             CHECK(type IN ('fixed_income','stocks','funds','crypto','other')),
            initial_amount   REAL NOT NULL,
            current_amount   REAL NOT NULL,
            expected_return  REAL NOT NULL DEFAULT 0,
            start_date       TEXT NOT NULL,
            created_at       TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS projects (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      TEXT NOT NULL,
            client_id    INTEGER REFERENCES clients(id) ON DELETE SET NULL,
            name         TEXT NOT NULL,
            description  TEXT,
            status       TEXT NOT NULL DEFAULT 'planning'
                         CHECK(status IN ('planning','in_progress','completed','on_hold','cancelled')),
            budget       REAL,
            start_date   TEXT,
            end_date     TEXT,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS reservations (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      TEXT NOT NULL,
            client_id    INTEGER REFERENCES clients(id) ON DELETE SET NULL,
            title        TEXT NOT NULL,
            description  TEXT,
            date         TEXT NOT NULL,
            start_time   TEXT NOT NULL,
            end_time     TEXT,
            status       TEXT NOT NULL DEFAULT 'scheduled'
                         CHECK(status IN ('scheduled','confirmed','completed','cancelled')),
            location     TEXT,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250901_0002_user_scoped_indexes",
        description: "Added per-user indexes for date-ordered listings",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_reservations_user_date ON reservations(user_id, date, start_time);
        CREATE INDEX IF NOT EXISTS idx_transactions_user_date ON transactions(user_id, date);
        CREATE INDEX IF NOT EXISTS idx_clients_user ON clients(user_id);
        CREATE INDEX IF NOT EXISTS idx_budgets_user ON budgets(user_id);
        CREATE INDEX IF NOT EXISTS idx_projects_user ON projects(user_id);
        "#,
    },
    Migration {
        version: "20250915_0003_log_user_id",
        description: "Added user_id to the log table (NULL for database-wide events)",
        sql: r#"
        ALTER TABLE log ADD COLUMN user_id TEXT;
        CREATE INDEX IF NOT EXISTS idx_log_user ON log(user_id);
        "#,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let script = format!(
        "BEGIN;\n{}\nINSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', '{}', '{}');\nCOMMIT;",
        m.sql,
        m.version,
        m.description.replace('\'', "''"),
    );

    if let Err(e) = conn.execute_batch(&script) {
        let _ = conn.execute_batch("ROLLBACK;");
        return Err(AppError::Migration(format!("{}: {}", m.version, e)));
    }

    Ok(())
}

/// Versions not yet recorded in the `log` table.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Silent: returns "version → description" for each step applied, and
/// `init` / `db --migrate` print them.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
            applied.push(format!("{} → {}", m.version, m.description));
        }
    }

    Ok(applied)
}
