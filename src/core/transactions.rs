use crate::core::records::{
    audited_delete, audited_insert, audited_update, ensure_owned, existing, optional_text,
    positive, required_text,
};
use crate::db::store::{AuditLog, Repository};
use crate::errors::AppResult;
use crate::models::card::Card;
use crate::models::transaction::{Transaction, TransactionInput};
use crate::models::user::UserId;

pub struct TransactionLogic;

fn validated<S>(store: &S, user: &UserId, input: &TransactionInput) -> AppResult<TransactionInput>
where
    S: Repository<Card> + ?Sized,
{
    let category = required_text("category", &input.category)?;
    let description = required_text("description", &input.description)?;
    let amount = positive("amount", input.amount)?;
    ensure_owned::<Card, S>(store, user, input.card_id)?;

    Ok(TransactionInput {
        category,
        description,
        amount,
        payment_method: optional_text(&input.payment_method),
        ..input.clone()
    })
}

impl TransactionLogic {
    pub fn create<S>(store: &S, user: &UserId, input: &TransactionInput) -> AppResult<Transaction>
    where
        S: Repository<Transaction> + Repository<Card> + AuditLog + ?Sized,
    {
        let clean = validated(store, user, input)?;
        let summary = format!(
            "{} '{}' {:.2} on {}",
            clean.kind, clean.description, clean.amount, clean.date
        );
        audited_insert::<Transaction, S>(store, user, &clean, &summary)
    }

    /// Most recent date first.
    pub fn list<S>(store: &S, user: &UserId) -> AppResult<Vec<Transaction>>
    where
        S: Repository<Transaction> + ?Sized,
    {
        store.list(user)
    }

    pub fn get<S>(store: &S, user: &UserId, id: i64) -> AppResult<Transaction>
    where
        S: Repository<Transaction> + ?Sized,
    {
        existing::<Transaction, S>(store, user, id)
    }

    pub fn update<S>(
        store: &S,
        user: &UserId,
        id: i64,
        input: &TransactionInput,
    ) -> AppResult<Transaction>
    where
        S: Repository<Transaction> + Repository<Card> + AuditLog + ?Sized,
    {
        let clean = validated(store, user, input)?;
        let summary = format!("'{}' updated", clean.description);
        audited_update::<Transaction, S>(store, user, id, &clean, &summary)
    }

    pub fn delete<S>(store: &S, user: &UserId, id: i64) -> AppResult<()>
    where
        S: Repository<Transaction> + AuditLog + ?Sized,
    {
        audited_delete::<Transaction, S>(store, user, id)
    }
}
