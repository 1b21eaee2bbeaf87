//! Month grid for the scheduling view.
//!
//! Months are zero-based (`month0`, 0 = January), the same convention as
//! chrono's `Datelike::month0`. Everything here is pure: a `(year, month0)`
//! pair goes in, a freshly built value comes out, and reservation records are
//! only read.
//!
//! A month index outside `0..12` is a caller bug and panics. The CLI
//! validates user input before reaching this module.

use crate::models::reservation::Reservation;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Six weeks of seven days. The grid never changes height between months.
pub const GRID_CELLS: usize = 42;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Which weekday occupies the first column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column (0..=6) of `weekday` in a week starting on `self`.
    pub fn column_of(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// Two-letter column headers.
    pub fn labels(self) -> [&'static str; 7] {
        match self {
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub day: u32,
    pub is_current_month: bool,
    pub date: NaiveDate,
}

/// 42 cells, row-major, seven per week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month0: u32,
    pub week_start: WeekStart,
    pub cells: Vec<CalendarCell>,
}

impl MonthView {
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    pub fn current_month_cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells.iter().filter(|c| c.is_current_month)
    }

    /// "February 2024"
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month0), self.year)
    }
}

fn check_month(month0: u32) {
    assert!(month0 < 12, "month index {month0} out of range 0..12");
}

fn date_of(year: i32, month0: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month0 + 1, day) {
        Some(d) => d,
        None => panic!("{year}-{:02}-{day:02} is outside the supported calendar", month0 + 1),
    }
}

pub fn month_name(month0: u32) -> &'static str {
    check_month(month0);
    MONTH_NAMES[month0 as usize]
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month0: u32) -> u32 {
    check_month(month0);
    match month0 + 1 {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn previous_month(year: i32, month0: u32) -> (i32, u32) {
    check_month(month0);
    if month0 == 0 {
        (year - 1, 11)
    } else {
        (year, month0 - 1)
    }
}

pub fn next_month(year: i32, month0: u32) -> (i32, u32) {
    check_month(month0);
    if month0 == 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    }
}

/// Whether the grid of this month can be built: the month and both of its
/// neighbours lie inside chrono's date range.
pub fn is_supported_month(year: i32, month0: u32) -> bool {
    if month0 >= 12 || NaiveDate::from_ymd_opt(year, month0 + 1, 1).is_none() {
        return false;
    }
    let (prev_year, prev_month0) = previous_month(year, month0);
    let (next_year, next_month0) = next_month(year, month0);
    NaiveDate::from_ymd_opt(prev_year, prev_month0 + 1, 1).is_some()
        && NaiveDate::from_ymd_opt(
            next_year,
            next_month0 + 1,
            days_in_month(next_year, next_month0),
        )
        .is_some()
}

/// Weekday index of the 1st (0 = Sunday … 6 = Saturday).
pub fn first_weekday_of_month(year: i32, month0: u32) -> u32 {
    first_weekday_of_month_starting(year, month0, WeekStart::Sunday)
}

/// Weekday index of the 1st, counted from `week_start`.
pub fn first_weekday_of_month_starting(year: i32, month0: u32, week_start: WeekStart) -> u32 {
    check_month(month0);
    week_start.column_of(date_of(year, month0, 1).weekday())
}

/// Sunday-first month grid.
pub fn build_month_grid(year: i32, month0: u32) -> MonthView {
    build_month_grid_starting(year, month0, WeekStart::Sunday)
}

/// Trailing days of the previous month, the whole month, then leading days
/// of the next month up to 42 cells. `lead <= 6` and `n <= 31` give
/// `lead + n <= 37`, a tighter form of the usual `lead + n <= 41`, so the
/// tail is never negative.
///
/// Panics on `month0 >= 12` and on months where [`is_supported_month`] is
/// false.
pub fn build_month_grid_starting(year: i32, month0: u32, week_start: WeekStart) -> MonthView {
    let n = days_in_month(year, month0);
    let lead = first_weekday_of_month_starting(year, month0, week_start);

    let (prev_year, prev_month0) = previous_month(year, month0);
    let (next_year, next_month0) = next_month(year, month0);
    let prev_len = days_in_month(prev_year, prev_month0);

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for day in (prev_len - lead + 1)..=prev_len {
        cells.push(CalendarCell {
            day,
            is_current_month: false,
            date: date_of(prev_year, prev_month0, day),
        });
    }

    for day in 1..=n {
        cells.push(CalendarCell {
            day,
            is_current_month: true,
            date: date_of(year, month0, day),
        });
    }

    let tail = GRID_CELLS as u32 - lead - n;
    for day in 1..=tail {
        cells.push(CalendarCell {
            day,
            is_current_month: false,
            date: date_of(next_year, next_month0, day),
        });
    }

    MonthView {
        year,
        month0,
        week_start,
        cells,
    }
}

/// `None` for days that do not exist in the month (e.g. February 30).
fn target_day(year: i32, month0: u32, day: u32) -> Option<NaiveDate> {
    check_month(month0);
    NaiveDate::from_ymd_opt(year, month0 + 1, day)
}

// Unparseable start times sort after every valid one.
fn start_key(r: &Reservation) -> (bool, Option<NaiveTime>) {
    let t = r.start();
    (t.is_none(), t)
}

/// Reservations dated exactly `(year, month0, day)`, stable-sorted by start
/// time. Records whose date does not parse are skipped.
pub fn reservations_on_day(
    records: &[Reservation],
    year: i32,
    month0: u32,
    day: u32,
) -> Vec<&Reservation> {
    let Some(target) = target_day(year, month0, day) else {
        return Vec::new();
    };

    let mut hits: Vec<&Reservation> = records.iter().filter(|r| r.is_on(target)).collect();
    hits.sort_by_key(|r| start_key(r));
    hits
}

/// Same predicate as [`reservations_on_day`], without building the list.
pub fn has_reservations(records: &[Reservation], year: i32, month0: u32, day: u32) -> bool {
    match target_day(year, month0, day) {
        Some(target) => records.iter().any(|r| r.is_on(target)),
        None => false,
    }
}

/// Reservations of the anchor month, in input order.
pub fn reservations_in_month(records: &[Reservation], year: i32, month0: u32) -> Vec<&Reservation> {
    check_month(month0);
    records
        .iter()
        .filter(|r| {
            r.day()
                .is_some_and(|d| d.year() == year && d.month0() == month0)
        })
        .collect()
}

/// Navigation state of the scheduling view: the anchor month and an
/// optional selected day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCursor {
    year: i32,
    month0: u32,
    selected_day: Option<u32>,
}

impl CalendarCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        check_month(month0);
        Self {
            year,
            month0,
            selected_day: None,
        }
    }

    /// Anchored on the month of `date`, with `date` selected.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
            selected_day: Some(date.day()),
        }
    }

    /// Anchored on the local calendar day.
    pub fn today() -> Self {
        Self::on(crate::utils::date::today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_day
            .and_then(|d| NaiveDate::from_ymd_opt(self.year, self.month0 + 1, d))
    }

    pub fn previous_month(&mut self) {
        (self.year, self.month0) = previous_month(self.year, self.month0);
        self.selected_day = None;
    }

    pub fn next_month(&mut self) {
        (self.year, self.month0) = next_month(self.year, self.month0);
        self.selected_day = None;
    }

    pub fn select_month(&mut self, month0: u32) {
        check_month(month0);
        self.month0 = month0;
        self.selected_day = None;
    }

    pub fn select_year(&mut self, year: i32) {
        self.year = year;
        self.selected_day = None;
    }

    /// Select a day of the anchor month. Out-of-range days are ignored.
    pub fn select_day(&mut self, day: u32) -> bool {
        if (1..=days_in_month(self.year, self.month0)).contains(&day) {
            self.selected_day = Some(day);
            true
        } else {
            false
        }
    }

    /// Only cells of the anchor month are selectable.
    pub fn select_cell(&mut self, cell: &CalendarCell) -> bool {
        if !self.owns(cell) {
            return false;
        }
        self.select_day(cell.day)
    }

    pub fn clear_selection(&mut self) {
        self.selected_day = None;
    }

    pub fn is_selected(&self, cell: &CalendarCell) -> bool {
        self.owns(cell) && self.selected_day == Some(cell.day)
    }

    fn owns(&self, cell: &CalendarCell) -> bool {
        cell.is_current_month && cell.date.year() == self.year && cell.date.month0() == self.month0
    }

    pub fn grid(&self, week_start: WeekStart) -> MonthView {
        build_month_grid_starting(self.year, self.month0, week_start)
    }

    /// The selected day's reservations, or the whole month when nothing is
    /// selected.
    pub fn visible_reservations<'a>(&self, records: &'a [Reservation]) -> Vec<&'a Reservation> {
        match self.selected_day {
            Some(day) => reservations_on_day(records, self.year, self.month0, day),
            None => reservations_in_month(records, self.year, self.month0),
        }
    }

    /// Years offered by the year selector: five before to four after.
    pub fn year_options(&self) -> Vec<i32> {
        (self.year - 5..self.year + 5).collect()
    }
}
