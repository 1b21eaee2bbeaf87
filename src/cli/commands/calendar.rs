use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{
    CalendarCursor, MonthView, days_in_month, has_reservations, is_supported_month,
};
use crate::core::reservations::ReservationLogic;
use crate::errors::{AppError, AppResult};
use crate::models::reservation::Reservation;
use crate::models::user::UserId;
use crate::ui::calendar_view::{render_details, render_month, render_reservations};
use crate::ui::messages::{empty, header};
use crate::utils::date::{parse_month, to_display, today};
use chrono::NaiveDate;
use serde::Serialize;

const DETAILS_WIDTH: usize = 72;

#[derive(Serialize)]
struct CalendarJson<'a> {
    title: String,
    selected_day: Option<u32>,
    marked_days: Vec<u32>,
    grid: &'a MonthView,
    reservations: Vec<&'a Reservation>,
}

fn cursor_for(month: Option<&String>, day: Option<u32>) -> AppResult<CalendarCursor> {
    let mut cursor = match month {
        Some(m) => {
            let (year, month0) = parse_month(m)
                .filter(|&(y, m0)| is_supported_month(y, m0))
                .ok_or_else(|| AppError::InvalidMonth(m.clone()))?;
            CalendarCursor::new(year, month0)
        }
        None => {
            let mut c = CalendarCursor::today();
            c.clear_selection();
            c
        }
    };

    if let Some(d) = day
        && !cursor.select_day(d)
    {
        return Err(AppError::validation(
            "day",
            format!(
                "must be between 1 and {}",
                days_in_month(cursor.year(), cursor.month0())
            ),
        ));
    }

    Ok(cursor)
}

fn month_bounds(cursor: &CalendarCursor) -> AppResult<(NaiveDate, NaiveDate)> {
    let year = cursor.year();
    let month = cursor.month0() + 1;
    let last = days_in_month(year, cursor.month0());
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let end = NaiveDate::from_ymd_opt(year, month, last);
    match (first, end) {
        (Some(f), Some(e)) => Ok((f, e)),
        _ => Err(AppError::InvalidMonth(format!("{}-{:02}", year, month))),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, user: &UserId) -> AppResult<()> {
    if let Commands::Calendar { month, day, json } = cmd {
        let cursor = cursor_for(month.as_ref(), *day)?;
        let (first, last) = month_bounds(&cursor)?;

        let pool = open_pool(cfg)?;
        let records = ReservationLogic::between(&pool, user, first, last)?;

        let grid = cursor.grid(cfg.week_start);
        let visible = cursor.visible_reservations(&records);

        if *json {
            let marked_days = grid
                .current_month_cells()
                .filter(|c| has_reservations(&records, cursor.year(), cursor.month0(), c.day))
                .map(|c| c.day)
                .collect();

            let out = CalendarJson {
                title: grid.title(),
                selected_day: cursor.selected_day(),
                marked_days,
                grid: &grid,
                reservations: visible,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        println!();
        print!("{}", render_month(&grid, &cursor, &records, today()));

        match cursor.selected_date() {
            Some(d) => header(format!("Reservations on {}", to_display(d))),
            None => header(format!("Reservations in {}", grid.title())),
        }

        if visible.is_empty() {
            empty("reservations");
            return Ok(());
        }

        print!("{}", render_reservations(&visible, &cfg.separator_char));

        if cursor.selected_day().is_some() {
            let details = render_details(&visible, DETAILS_WIDTH);
            if !details.is_empty() {
                println!();
                print!("{}", details);
            }
        }
    }

    Ok(())
}
