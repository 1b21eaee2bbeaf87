use crate::core::records::{
    audited_delete, audited_insert, audited_update, existing, non_negative, required_text,
};
use crate::db::store::{AuditLog, Repository};
use crate::errors::{AppError, AppResult};
use crate::models::card::{Card, CardInput};
use crate::models::user::UserId;

pub struct CardLogic;

fn billing_day(field: &'static str, day: u32) -> AppResult<u32> {
    if !(1..=31).contains(&day) {
        return Err(AppError::validation(field, "must be between 1 and 31"));
    }
    Ok(day)
}

fn validated(input: &CardInput) -> AppResult<CardInput> {
    let name = required_text("name", &input.name)?;

    let last_digits = input.last_digits.trim().to_string();
    if last_digits.len() != 4 || !last_digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::validation("last_digits", "must be exactly four digits"));
    }

    Ok(CardInput {
        name,
        last_digits,
        brand: input.brand,
        card_limit: non_negative("limit", input.card_limit)?,
        closing_day: billing_day("closing_day", input.closing_day)?,
        due_day: billing_day("due_day", input.due_day)?,
    })
}

impl CardLogic {
    pub fn create<S>(store: &S, user: &UserId, input: &CardInput) -> AppResult<Card>
    where
        S: Repository<Card> + AuditLog + ?Sized,
    {
        let clean = validated(input)?;
        let summary = format!("'{}' ending in {}", clean.name, clean.last_digits);
        audited_insert::<Card, S>(store, user, &clean, &summary)
    }

    /// Newest first.
    pub fn list<S>(store: &S, user: &UserId) -> AppResult<Vec<Card>>
    where
        S: Repository<Card> + ?Sized,
    {
        store.list(user)
    }

    pub fn get<S>(store: &S, user: &UserId, id: i64) -> AppResult<Card>
    where
        S: Repository<Card> + ?Sized,
    {
        existing::<Card, S>(store, user, id)
    }

    pub fn update<S>(store: &S, user: &UserId, id: i64, input: &CardInput) -> AppResult<Card>
    where
        S: Repository<Card> + AuditLog + ?Sized,
    {
        let clean = validated(input)?;
        let summary = format!("'{}' updated", clean.name);
        audited_update::<Card, S>(store, user, id, &clean, &summary)
    }

    /// Transactions paid with the card keep existing without a card.
    pub fn delete<S>(store: &S, user: &UserId, id: i64) -> AppResult<()>
    where
        S: Repository<Card> + AuditLog + ?Sized,
    {
        audited_delete::<Card, S>(store, user, id)
    }
}
