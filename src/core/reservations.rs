//! Reservation scheduling: validated CRUD, status changes and the
//! today/upcoming views, all scoped to one user.

use crate::core::records::{
    audited_delete, audited_insert, audited_update, ensure_owned, existing, optional_text,
    required_text, target,
};
use crate::db::store::{AuditLog, Repository, ReservationStore};
use crate::errors::{AppError, AppResult};
use crate::models::client::Client;
use crate::models::reservation::{
    Reservation, ReservationFilter, ReservationInput, ReservationStatus, StatusCounts,
};
use crate::models::user::UserId;
use crate::utils::date::add_days;
use crate::utils::time::format_clock;
use chrono::NaiveDate;

pub struct ReservationLogic;

/// Normalized copy of `input`, or the first rule it breaks.
fn validated<S>(store: &S, user: &UserId, input: &ReservationInput) -> AppResult<ReservationInput>
where
    S: Repository<Client> + ?Sized,
{
    let title = required_text("title", &input.title)?;

    if let Some(end) = input.end_time
        && end < input.start_time
    {
        return Err(AppError::validation(
            "end_time",
            "must not be before the start time",
        ));
    }

    ensure_owned::<Client, S>(store, user, input.client_id)?;

    Ok(ReservationInput {
        title,
        description: optional_text(&input.description),
        location: optional_text(&input.location),
        ..input.clone()
    })
}

impl ReservationLogic {
    pub fn create<S>(store: &S, user: &UserId, input: &ReservationInput) -> AppResult<Reservation>
    where
        S: ReservationStore + Repository<Client> + AuditLog + ?Sized,
    {
        let clean = validated(store, user, input)?;
        let summary = format!(
            "'{}' on {} at {}",
            clean.title,
            clean.date,
            format_clock(clean.start_time)
        );
        audited_insert::<Reservation, S>(store, user, &clean, &summary)
    }

    /// Replace every field of an existing reservation.
    pub fn update<S>(
        store: &S,
        user: &UserId,
        id: i64,
        input: &ReservationInput,
    ) -> AppResult<Reservation>
    where
        S: ReservationStore + Repository<Client> + AuditLog + ?Sized,
    {
        let clean = validated(store, user, input)?;
        let summary = format!("'{}' updated", clean.title);
        audited_update::<Reservation, S>(store, user, id, &clean, &summary)
    }

    pub fn set_status<S>(
        store: &S,
        user: &UserId,
        id: i64,
        status: ReservationStatus,
    ) -> AppResult<Reservation>
    where
        S: ReservationStore + AuditLog + ?Sized,
    {
        let updated = store
            .set_reservation_status(user, id, status)?
            .ok_or_else(|| AppError::not_found("Reservation", id))?;

        store.audit(
            user,
            "status",
            &target("Reservation", id),
            &format!("status set to {}", status),
        )?;
        Ok(updated)
    }

    pub fn confirm<S>(store: &S, user: &UserId, id: i64) -> AppResult<Reservation>
    where
        S: ReservationStore + AuditLog + ?Sized,
    {
        Self::set_status(store, user, id, ReservationStatus::Confirmed)
    }

    pub fn cancel<S>(store: &S, user: &UserId, id: i64) -> AppResult<Reservation>
    where
        S: ReservationStore + AuditLog + ?Sized,
    {
        Self::set_status(store, user, id, ReservationStatus::Cancelled)
    }

    pub fn complete<S>(store: &S, user: &UserId, id: i64) -> AppResult<Reservation>
    where
        S: ReservationStore + AuditLog + ?Sized,
    {
        Self::set_status(store, user, id, ReservationStatus::Completed)
    }

    pub fn delete<S>(store: &S, user: &UserId, id: i64) -> AppResult<()>
    where
        S: ReservationStore + AuditLog + ?Sized,
    {
        audited_delete::<Reservation, S>(store, user, id)
    }

    pub fn get<S>(store: &S, user: &UserId, id: i64) -> AppResult<Reservation>
    where
        S: ReservationStore + ?Sized,
    {
        existing::<Reservation, S>(store, user, id)
    }

    pub fn list<S>(store: &S, user: &UserId, filter: &ReservationFilter) -> AppResult<Vec<Reservation>>
    where
        S: ReservationStore + ?Sized,
    {
        store.list_reservations(user, filter)
    }

    /// Every reservation of `today`, cancelled ones included.
    pub fn today<S>(store: &S, user: &UserId, today: NaiveDate) -> AppResult<Vec<Reservation>>
    where
        S: ReservationStore + ?Sized,
    {
        let filter = ReservationFilter {
            date: Some(today),
            ..ReservationFilter::default()
        };
        store.list_reservations(user, &filter)
    }

    /// Non-cancelled reservations from `today` through `today + days`.
    pub fn upcoming<S>(
        store: &S,
        user: &UserId,
        today: NaiveDate,
        days: u32,
    ) -> AppResult<Vec<Reservation>>
    where
        S: ReservationStore + ?Sized,
    {
        let filter = ReservationFilter {
            from: Some(today),
            to: Some(add_days(today, days)),
            exclude_cancelled: true,
            ..ReservationFilter::default()
        };
        store.list_reservations(user, &filter)
    }

    pub fn count_by_status<S>(store: &S, user: &UserId) -> AppResult<StatusCounts>
    where
        S: ReservationStore + ?Sized,
    {
        let mut counts = StatusCounts::default();
        for r in store.list_reservations(user, &ReservationFilter::default())? {
            counts.bump(r.status);
        }
        Ok(counts)
    }

    /// Reservations dated `first..=last`, for the grid view.
    pub fn between<S>(
        store: &S,
        user: &UserId,
        first: NaiveDate,
        last: NaiveDate,
    ) -> AppResult<Vec<Reservation>>
    where
        S: ReservationStore + ?Sized,
    {
        let filter = ReservationFilter {
            from: Some(first),
            to: Some(last),
            ..ReservationFilter::default()
        };
        store.list_reservations(user, &filter)
    }
}
