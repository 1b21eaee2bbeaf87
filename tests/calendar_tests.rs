mod common;

use chrono::{Datelike, NaiveDate};
use common::reservation;
use rfindash::core::calendar::{
    CalendarCursor, GRID_CELLS, WeekStart, build_month_grid, build_month_grid_starting,
    days_in_month, first_weekday_of_month, first_weekday_of_month_starting, has_reservations,
    is_supported_month, month_name, next_month, previous_month, reservations_in_month, reservations_on_day,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_grid_always_has_42_cells() {
    for year in [1999, 2000, 2023, 2024, 2100] {
        for month0 in 0..12 {
            let view = build_month_grid(year, month0);
            assert_eq!(view.cells.len(), GRID_CELLS, "{year}-{month0}");

            let monday = build_month_grid_starting(year, month0, WeekStart::Monday);
            assert_eq!(monday.cells.len(), GRID_CELLS, "{year}-{month0} monday");
        }
    }
}

#[test]
fn test_current_month_cells_are_1_to_n_in_order() {
    for year in [2023, 2024] {
        for month0 in 0..12 {
            let view = build_month_grid(year, month0);
            let days: Vec<u32> = view.current_month_cells().map(|c| c.day).collect();
            let expected: Vec<u32> = (1..=days_in_month(year, month0)).collect();
            assert_eq!(days, expected, "{year}-{month0}");
        }
    }
}

#[test]
fn test_first_current_cell_sits_at_first_weekday() {
    for year in [2000, 2024, 2026] {
        for month0 in 0..12 {
            let view = build_month_grid(year, month0);
            let pos = view
                .cells
                .iter()
                .position(|c| c.is_current_month)
                .expect("current month present");
            assert_eq!(pos as u32, first_weekday_of_month(year, month0));
            assert_eq!(view.cells[pos].day, 1);
        }
    }
}

#[test]
fn test_cell_dates_are_consecutive() {
    let view = build_month_grid(2024, 11);
    for pair in view.cells.windows(2) {
        assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
    }
    for cell in &view.cells {
        assert_eq!(cell.date.day(), cell.day);
    }
}

#[test]
fn test_february_lengths() {
    assert_eq!(days_in_month(2024, 1), 29);
    assert_eq!(days_in_month(2023, 1), 28);
    assert_eq!(days_in_month(2000, 1), 29);
    assert_eq!(days_in_month(1900, 1), 28);
    assert_eq!(days_in_month(2024, 3), 30);
    assert_eq!(days_in_month(2024, 11), 31);
}

#[test]
fn test_february_2024_grid() {
    assert_eq!(first_weekday_of_month(2024, 1), 4);

    let view = build_month_grid(2024, 1);
    let lead: Vec<u32> = view.cells[..4].iter().map(|c| c.day).collect();
    assert_eq!(lead, vec![28, 29, 30, 31]);
    assert!(view.cells[..4].iter().all(|c| !c.is_current_month));
    assert_eq!(view.cells[4].date, ymd(2024, 2, 1));
    assert_eq!(view.cells[32].date, ymd(2024, 2, 29));

    let tail: Vec<u32> = view.cells[33..].iter().map(|c| c.day).collect();
    assert_eq!(tail, (1..=9).collect::<Vec<u32>>());
    assert_eq!(view.cells[41].date, ymd(2024, 3, 9));
}

#[test]
fn test_month_starting_on_sunday_has_no_leading_cells() {
    let view = build_month_grid(2024, 8);
    assert_eq!(first_weekday_of_month(2024, 8), 0);
    assert!(view.cells[0].is_current_month);
    assert_eq!(view.cells[0].day, 1);
}

#[test]
fn test_january_borrows_december_of_previous_year() {
    let view = build_month_grid(2000, 0);
    assert_eq!(first_weekday_of_month(2000, 0), 6);
    assert_eq!(view.cells[0].date, ymd(1999, 12, 26));
    assert_eq!(view.cells[5].date, ymd(1999, 12, 31));
    assert_eq!(view.cells[6].date, ymd(2000, 1, 1));
}

#[test]
fn test_december_spills_into_next_year() {
    let view = build_month_grid(2024, 11);
    assert_eq!(view.cells[31].date, ymd(2025, 1, 1));
    assert_eq!(view.cells[41].date, ymd(2025, 1, 11));
}

#[test]
fn test_monday_start_shifts_columns() {
    assert_eq!(first_weekday_of_month_starting(2024, 8, WeekStart::Monday), 6);
    assert_eq!(first_weekday_of_month_starting(2021, 1, WeekStart::Monday), 0);

    let view = build_month_grid_starting(2021, 1, WeekStart::Monday);
    assert_eq!(view.cells[0].date, ymd(2021, 2, 1));
    assert_eq!(view.cells.iter().filter(|c| !c.is_current_month).count(), 14);
    assert_eq!(WeekStart::Monday.labels()[0], "Mo");
    assert_eq!(WeekStart::Sunday.labels()[0], "Su");
}

#[test]
fn test_grid_is_idempotent() {
    assert_eq!(build_month_grid(2024, 4), build_month_grid(2024, 4));
}

#[test]
fn test_month_navigation_wraps_years() {
    assert_eq!(previous_month(2024, 0), (2023, 11));
    assert_eq!(next_month(2024, 11), (2025, 0));
    assert_eq!(next_month(2024, 5), (2024, 6));
    assert_eq!(month_name(2), "March");
    assert_eq!(build_month_grid(2024, 1).title(), "February 2024");
}

#[test]
#[should_panic]
fn test_month_out_of_range_panics() {
    build_month_grid(2024, 12);
}

#[test]
fn test_supported_months_stop_at_the_calendar_edges() {
    assert!(is_supported_month(2024, 1));
    assert!(!is_supported_month(2024, 12));

    let min = NaiveDate::MIN.year();
    let max = NaiveDate::MAX.year();
    assert!(!is_supported_month(min, 0));
    assert!(is_supported_month(min, 1));
    assert!(!is_supported_month(max, 11));
    assert!(is_supported_month(max, 10));

    assert_eq!(build_month_grid(min, 1).cells.len(), GRID_CELLS);
    assert_eq!(build_month_grid(max, 10).cells.len(), GRID_CELLS);
}

#[test]
fn test_reservations_on_day_sorted_by_start_time() {
    let records = vec![
        reservation(1, "2024-03-15", "14:00"),
        reservation(2, "2024-03-15", "09:00"),
        reservation(3, "2024-03-16", "08:00"),
    ];

    let hits = reservations_on_day(&records, 2024, 2, 15);
    let ids: Vec<i64> = hits.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);

    assert!(has_reservations(&records, 2024, 2, 16));
    assert!(!has_reservations(&records, 2024, 2, 17));
    assert!(reservations_on_day(&records, 2024, 2, 17).is_empty());
}

#[test]
fn test_equal_start_times_keep_input_order() {
    let records = vec![
        reservation(7, "2024-03-15", "10:00"),
        reservation(3, "2024-03-15", "10:00:00"),
        reservation(5, "2024-03-15", "09:30"),
    ];

    let ids: Vec<i64> = reservations_on_day(&records, 2024, 2, 15)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![5, 7, 3]);
}

#[test]
fn test_malformed_records_are_skipped_or_sorted_last() {
    let records = vec![
        reservation(1, "15/03/2024", "09:00"),
        reservation(2, "2024-03-15", "later"),
        reservation(3, "2024-03-15", "11:00"),
    ];

    let ids: Vec<i64> = reservations_on_day(&records, 2024, 2, 15)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![3, 2]);
}

#[test]
fn test_nonexistent_day_has_no_reservations() {
    let records = vec![reservation(1, "2024-03-01", "09:00")];
    assert!(reservations_on_day(&records, 2024, 1, 30).is_empty());
    assert!(!has_reservations(&records, 2024, 1, 30));
}

#[test]
fn test_empty_record_set() {
    assert!(reservations_on_day(&[], 2024, 2, 15).is_empty());
    assert!(!has_reservations(&[], 2024, 2, 15));
}

#[test]
fn test_reservations_in_month_keeps_input_order() {
    let records = vec![
        reservation(1, "2024-03-20", "09:00"),
        reservation(2, "2024-04-01", "09:00"),
        reservation(3, "2024-03-02", "09:00"),
    ];
    let ids: Vec<i64> = reservations_in_month(&records, 2024, 2)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_cursor_navigation_clears_selection() {
    let mut cursor = CalendarCursor::on(ymd(2024, 12, 24));
    assert_eq!(cursor.selected_day(), Some(24));

    cursor.next_month();
    assert_eq!((cursor.year(), cursor.month0()), (2025, 0));
    assert_eq!(cursor.selected_day(), None);

    cursor.select_day(10);
    cursor.previous_month();
    assert_eq!((cursor.year(), cursor.month0()), (2024, 11));
    assert_eq!(cursor.selected_day(), None);

    cursor.select_day(3);
    cursor.select_month(5);
    assert_eq!(cursor.selected_day(), None);

    cursor.select_day(3);
    cursor.select_year(2030);
    assert_eq!((cursor.year(), cursor.month0()), (2030, 5));
    assert_eq!(cursor.selected_day(), None);
}

#[test]
fn test_cursor_ignores_out_of_range_and_adjacent_cells() {
    let mut cursor = CalendarCursor::new(2024, 1);
    assert!(!cursor.select_day(30));
    assert_eq!(cursor.selected_day(), None);

    assert!(cursor.select_day(29));
    assert_eq!(cursor.selected_date(), Some(ymd(2024, 2, 29)));

    let grid = cursor.grid(WeekStart::Sunday);
    let adjacent = grid.cells[0];
    assert!(!cursor.select_cell(&adjacent));
    assert_eq!(cursor.selected_day(), Some(29));

    let tenth = grid.cells[4 + 9];
    assert!(cursor.select_cell(&tenth));
    assert_eq!(cursor.selected_day(), Some(10));
    assert!(cursor.is_selected(&tenth));
    assert!(!cursor.is_selected(&adjacent));
}

#[test]
fn test_cursor_visible_reservations() {
    let records = vec![
        reservation(1, "2024-03-15", "14:00"),
        reservation(2, "2024-03-15", "09:00"),
        reservation(3, "2024-03-02", "08:00"),
        reservation(4, "2024-04-15", "08:00"),
    ];

    let mut cursor = CalendarCursor::new(2024, 2);
    let month: Vec<i64> = cursor.visible_reservations(&records).iter().map(|r| r.id).collect();
    assert_eq!(month, vec![1, 2, 3]);

    cursor.select_day(15);
    let day: Vec<i64> = cursor.visible_reservations(&records).iter().map(|r| r.id).collect();
    assert_eq!(day, vec![2, 1]);

    cursor.clear_selection();
    assert_eq!(cursor.selected_day(), None);
}

#[test]
fn test_year_options_span_ten_years() {
    let cursor = CalendarCursor::new(2024, 0);
    let years = cursor.year_options();
    assert_eq!(years.len(), 10);
    assert_eq!(years.first(), Some(&2019));
    assert_eq!(years.last(), Some(&2028));
}
