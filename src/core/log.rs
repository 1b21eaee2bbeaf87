use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::user::UserId;
use crate::ui::messages::empty;
use crate::utils::formatting::{pad_right, strip_ansi};
use ansi_term::Colour;

const OP_TARGET_MAX: usize = 60;

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "status" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// "operation (target)" with only the operation painted, cut to
/// `OP_TARGET_MAX` visible characters.
fn op_target(entry: &LogEntry) -> String {
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if plain.chars().count() > OP_TARGET_MAX {
        let mut s: String = plain.chars().take(OP_TARGET_MAX - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(&entry.operation);
    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    /// Audit rows visible to `user`: their own plus database-wide events.
    pub fn print_log(pool: &DbPool, user: &UserId) -> AppResult<()> {
        let entries = load_log(&pool.conn, user)?;
        if entries.is_empty() {
            empty("log entries");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, &str)> = entries
            .iter()
            .map(|e| (e.id, display_date(&e.date), op_target(e), e.message.as_str()))
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| strip_ansi(&r.2).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, op, message) in rows {
            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                id,
                date,
                pad_right(&op, op_w),
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
