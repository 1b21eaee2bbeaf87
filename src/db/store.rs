//! Data-access traits.
//!
//! Services in `core` only see these traits plus the caller's [`UserId`];
//! `DbPool` is the SQLite implementation. Every operation is scoped to the
//! given user: rows of other users are invisible, as if they did not exist.

use crate::errors::AppResult;
use crate::models::reservation::{Reservation, ReservationFilter, ReservationStatus};
use crate::models::user::UserId;

/// A stored record type and the data needed to create or replace one.
pub trait Entity: Sized {
    type Input;

    /// Human-readable name used in errors and audit entries.
    const NAME: &'static str;

    fn id(&self) -> i64;
}

/// Basic CRUD over one record type.
pub trait Repository<T: Entity> {
    /// All rows of the user, in the record type's natural order.
    fn list(&self, user: &UserId) -> AppResult<Vec<T>>;

    fn find(&self, user: &UserId, id: i64) -> AppResult<Option<T>>;

    fn insert(&self, user: &UserId, input: &T::Input) -> AppResult<T>;

    /// Replace every writable field. `None` when the row does not exist.
    fn update(&self, user: &UserId, id: i64, input: &T::Input) -> AppResult<Option<T>>;

    /// Returns true if the row was found and deleted.
    fn delete(&self, user: &UserId, id: i64) -> AppResult<bool>;
}

/// Reservation-specific queries on top of the basic CRUD.
pub trait ReservationStore: Repository<Reservation> {
    /// Rows matching `filter`, ordered by date then start time.
    fn list_reservations(
        &self,
        user: &UserId,
        filter: &ReservationFilter,
    ) -> AppResult<Vec<Reservation>>;

    fn set_reservation_status(
        &self,
        user: &UserId,
        id: i64,
        status: ReservationStatus,
    ) -> AppResult<Option<Reservation>>;
}

/// Append-only trail of mutating operations.
pub trait AuditLog {
    /// Record `operation` on `target` as done by `user`.
    fn audit(&self, user: &UserId, operation: &str, target: &str, message: &str)
    -> AppResult<()>;
}
