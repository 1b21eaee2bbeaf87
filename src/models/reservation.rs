use crate::utils::date::parse_date;
use crate::utils::time::{parse_clock, short_clock};
use ansi_term::Colour;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

text_enum! {
    /// Lifecycle of a reservation.
    ReservationStatus, "reservation" {
        Scheduled => "scheduled",
        Confirmed => "confirmed",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

/// Display label and colour of a status badge.
#[derive(Debug)]
pub struct StatusBadge {
    pub label: &'static str,
    pub colour: Colour,
}

// Indexed by `ReservationStatus as usize`.
static BADGES: [StatusBadge; 4] = [
    StatusBadge {
        label: "Scheduled",
        colour: Colour::RGB(0x86, 0xBC, 0xBE),
    },
    StatusBadge {
        label: "Confirmed",
        colour: Colour::RGB(0x31, 0x47, 0x55),
    },
    StatusBadge {
        label: "Completed",
        colour: Colour::RGB(0x98, 0xA3, 0xAA),
    },
    StatusBadge {
        label: "Cancelled",
        colour: Colour::RGB(0xD9, 0x7D, 0x54),
    },
];

impl ReservationStatus {
    pub fn badge(self) -> &'static StatusBadge {
        &BADGES[self as usize]
    }

    /// Scheduled and confirmed reservations still need attention.
    pub fn is_active(self) -> bool {
        matches!(self, ReservationStatus::Scheduled | ReservationStatus::Confirmed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub id: i64,
    pub user_id: String,
    pub client_id: Option<i64>,
    pub client_name: Option<String>, // ⇔ clients.name (LEFT JOIN)
    pub title: String,
    pub description: Option<String>,
    pub date: String,       // ⇔ reservations.date (TEXT "YYYY-MM-DD"), kept raw
    pub start_time: String, // ⇔ reservations.start_time (TEXT "HH:MM[:SS]")
    pub end_time: Option<String>,
    pub status: ReservationStatus,
    pub location: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Reservation {
    /// Calendar day of the reservation, `None` when the stored text is not a date.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(self.date.trim())
    }

    pub fn start(&self) -> Option<NaiveTime> {
        parse_clock(&self.start_time)
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.day() == Some(date)
    }

    /// "HH:MM" or "HH:MM - HH:MM".
    pub fn time_range(&self) -> String {
        match &self.end_time {
            Some(end) => format!("{} - {}", short_clock(&self.start_time), short_clock(end)),
            None => short_clock(&self.start_time).to_string(),
        }
    }
}

/// Validated data for creating or replacing a reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationInput {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub status: ReservationStatus,
    pub location: Option<String>,
    pub client_id: Option<i64>,
}

impl ReservationInput {
    pub fn new(title: &str, date: NaiveDate, start_time: NaiveTime) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            date,
            start_time,
            end_time: None,
            status: ReservationStatus::Scheduled,
            location: None,
            client_id: None,
        }
    }
}

/// Row filters for reservation queries. Empty filter = every row of the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationFilter {
    pub date: Option<NaiveDate>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub client_id: Option<i64>,
    pub status: Option<ReservationStatus>,
    pub exclude_cancelled: bool,
    pub limit: Option<u32>,
}

/// Number of reservations per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub scheduled: u32,
    pub confirmed: u32,
    pub completed: u32,
    pub cancelled: u32,
}

impl StatusCounts {
    pub fn bump(&mut self, status: ReservationStatus) {
        match status {
            ReservationStatus::Scheduled => self.scheduled += 1,
            ReservationStatus::Confirmed => self.confirmed += 1,
            ReservationStatus::Completed => self.completed += 1,
            ReservationStatus::Cancelled => self.cancelled += 1,
        }
    }

    pub fn get(&self, status: ReservationStatus) -> u32 {
        match status {
            ReservationStatus::Scheduled => self.scheduled,
            ReservationStatus::Confirmed => self.confirmed,
            ReservationStatus::Completed => self.completed,
            ReservationStatus::Cancelled => self.cancelled,
        }
    }
}
