use chrono::{Datelike, Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_optional_date(input: Option<&String>) -> crate::errors::AppResult<Option<NaiveDate>> {
    match input {
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| crate::errors::AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}

/// Parse "YYYY-MM" into `(year, month0)`.
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month0()))
}

pub fn to_db(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// "dd/mm/yyyy", as shown next to each reservation.
pub fn to_display(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `date + days`, saturating at the last representable day.
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
