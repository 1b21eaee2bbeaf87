//! Terminal rendering of the month grid and of reservation lists.

use crate::core::calendar::{CalendarCursor, MonthView, has_reservations};
use crate::models::reservation::{Reservation, ReservationStatus};
use crate::utils::colors::{BOLD, GREY, INVERSE, RESET, UNDERLINE, colorize_optional};
use crate::utils::date::to_display;
use crate::utils::formatting::{pad_left, wrap};
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::{Datelike, NaiveDate};

/// Visible width of one grid cell: two digits, a marker and a gap.
const CELL_WIDTH: usize = 4;

/// Marker printed after a day that has reservations.
pub const RESERVATION_MARK: char = '•';

/// Status label on its badge colour.
pub fn badge(status: ReservationStatus) -> String {
    let b = status.badge();
    Colour::White
        .on(b.colour)
        .paint(format!(" {} ", b.label))
        .to_string()
}

/// Month title, weekday headers and six week rows.
///
/// Adjacent-month days are grey and never marked; the selected day is shown
/// in reverse video and today is underlined.
pub fn render_month(
    view: &MonthView,
    cursor: &CalendarCursor,
    records: &[Reservation],
    today: NaiveDate,
) -> String {
    let width = CELL_WIDTH * 7;
    let mut out = String::new();

    let title = view.title();
    let indent = width.saturating_sub(title.chars().count()) / 2;
    out.push_str(&format!("{}{BOLD}{}{RESET}\n", " ".repeat(indent), title));

    for label in view.week_start.labels() {
        out.push_str(&pad_left(label, 2));
        out.push_str("  ");
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    for week in view.weeks() {
        let mut line = String::new();
        for cell in week {
            let digits = format!("{:>2}", cell.day);

            if !cell.is_current_month {
                line.push_str(&format!("{GREY}{digits}{RESET}  "));
                continue;
            }

            let mut style = String::new();
            if cursor.is_selected(cell) {
                style.push_str(INVERSE);
            }
            if cell.date == today {
                style.push_str(UNDERLINE);
            }
            let day = if style.is_empty() {
                digits
            } else {
                format!("{style}{digits}{RESET}")
            };

            let mark = if has_reservations(
                records,
                cell.date.year(),
                cell.date.month0(),
                cell.day,
            ) {
                RESERVATION_MARK
            } else {
                ' '
            };

            line.push_str(&format!("{day}{mark} "));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// One row per reservation: time, title, status badge, date, client and
/// location.
pub fn render_reservations(list: &[&Reservation], separator: &str) -> String {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Date"),
        Column::left("Time"),
        Column::left("Title"),
        Column::left("Status"),
        Column::left("Client"),
        Column::left("Location"),
    ]);

    for r in list {
        let date = r
            .day()
            .map(to_display)
            .unwrap_or_else(|| format!("{GREY}{}{RESET}", r.date));

        table.add_row(vec![
            r.id.to_string(),
            date,
            r.time_range(),
            r.title.clone(),
            badge(r.status),
            colorize_optional(r.client_name.as_deref()),
            colorize_optional(r.location.as_deref()),
        ]);
    }

    table.render(separator)
}

/// Descriptions of the given reservations, wrapped under their titles.
/// Reservations without a description are left out.
pub fn render_details(list: &[&Reservation], width: usize) -> String {
    let mut out = String::new();
    for r in list {
        let Some(text) = r.description.as_deref() else {
            continue;
        };
        out.push_str(&format!("{BOLD}{}{RESET} ({})\n", r.title, r.time_range()));
        for line in wrap(text, width.saturating_sub(4)) {
            out.push_str(&format!("    {}\n", line));
        }
    }
    out
}
