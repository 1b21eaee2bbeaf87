use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

const COUNTED_TABLES: &[&str] = &[
    "reservations",
    "clients",
    "budgets",
    "transactions",
    "cards",
    "installments",
    "investments",
    "projects",
];

/// Row count of every data table, in display order.
pub fn table_counts(pool: &DbPool) -> rusqlite::Result<Vec<(&'static str, i64)>> {
    let mut out = Vec::with_capacity(COUNTED_TABLES.len());
    for table in COUNTED_TABLES {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                    row.get(0)
                })?;
        out.push((*table, count));
    }
    Ok(out)
}

/// Earliest and latest reservation date over all users.
pub fn reservation_range(pool: &DbPool) -> rusqlite::Result<(Option<String>, Option<String>)> {
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM reservations ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM reservations ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok((first, last))
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROWS PER TABLE
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for (table, count) in table_counts(pool)? {
        println!("    {:<14} {}{}{}", table, GREEN, count, RESET);
    }

    //
    // 3) RESERVATION DATE RANGE
    //
    let (first, last) = reservation_range(pool)?;
    let dash = || format!("{GREY}--{RESET}");

    println!("{}• Reservations span:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(dash));
    println!("    to:   {}", last.unwrap_or_else(dash));

    println!();
    Ok(())
}
