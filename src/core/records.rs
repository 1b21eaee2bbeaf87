//! Field checks and audited CRUD shared by the record services.

use crate::db::store::{AuditLog, Entity, Repository};
use crate::errors::{AppError, AppResult};
use crate::models::user::UserId;

/// Trimmed, non-empty text.
pub fn required_text(field: &'static str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Trimmed optional text, blank becomes `None`.
pub fn optional_text(value: &Option<String>) -> Option<String> {
    crate::models::non_blank(value.as_deref())
}

pub fn non_negative(field: &'static str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(field, "must be zero or greater"));
    }
    Ok(value)
}

pub fn positive(field: &'static str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::validation(field, "must be greater than zero"));
    }
    Ok(value)
}

/// A referenced row (client, card) must exist for the same user.
pub fn ensure_owned<T, S>(store: &S, user: &UserId, id: Option<i64>) -> AppResult<()>
where
    T: Entity,
    S: Repository<T> + ?Sized,
{
    if let Some(id) = id
        && store.find(user, id)?.is_none()
    {
        return Err(AppError::not_found(T::NAME, id));
    }
    Ok(())
}

/// Fetch a row or fail with `NotFound`.
pub fn existing<T, S>(store: &S, user: &UserId, id: i64) -> AppResult<T>
where
    T: Entity,
    S: Repository<T> + ?Sized,
{
    store
        .find(user, id)?
        .ok_or_else(|| AppError::not_found(T::NAME, id))
}

/// Delete a row or fail with `NotFound`.
pub fn remove<T, S>(store: &S, user: &UserId, id: i64) -> AppResult<()>
where
    T: Entity,
    S: Repository<T> + ?Sized,
{
    if !store.delete(user, id)? {
        return Err(AppError::not_found(T::NAME, id));
    }
    Ok(())
}

/// Audit target such as "client #4".
pub fn target(entity: &str, id: i64) -> String {
    format!("{} #{}", entity.to_lowercase(), id)
}

pub fn audited_insert<T, S>(store: &S, user: &UserId, input: &T::Input, summary: &str) -> AppResult<T>
where
    T: Entity,
    S: Repository<T> + AuditLog + ?Sized,
{
    let created = store.insert(user, input)?;
    store.audit(user, "add", &target(T::NAME, created.id()), summary)?;
    Ok(created)
}

pub fn audited_update<T, S>(
    store: &S,
    user: &UserId,
    id: i64,
    input: &T::Input,
    summary: &str,
) -> AppResult<T>
where
    T: Entity,
    S: Repository<T> + AuditLog + ?Sized,
{
    let updated = store
        .update(user, id, input)?
        .ok_or_else(|| AppError::not_found(T::NAME, id))?;
    store.audit(user, "edit", &target(T::NAME, id), summary)?;
    Ok(updated)
}

pub fn audited_delete<T, S>(store: &S, user: &UserId, id: i64) -> AppResult<()>
where
    T: Entity,
    S: Repository<T> + AuditLog + ?Sized,
{
    remove::<T, S>(store, user, id)?;
    store.audit(user, "del", &target(T::NAME, id), &format!("{} deleted", T::NAME))?;
    Ok(())
}
