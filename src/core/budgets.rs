use crate::core::records::{
    audited_delete, audited_insert, audited_update, ensure_owned, existing, non_negative,
    optional_text, required_text,
};
use crate::db::store::{AuditLog, Repository};
use crate::errors::AppResult;
use crate::models::budget::{Budget, BudgetInput};
use crate::models::client::Client;
use crate::models::user::UserId;

pub struct BudgetLogic;

fn validated<S>(store: &S, user: &UserId, input: &BudgetInput) -> AppResult<BudgetInput>
where
    S: Repository<Client> + ?Sized,
{
    let title = required_text("title", &input.title)?;
    let amount = non_negative("amount", input.amount)?;
    ensure_owned::<Client, S>(store, user, input.client_id)?;

    Ok(BudgetInput {
        title,
        amount,
        description: optional_text(&input.description),
        ..input.clone()
    })
}

impl BudgetLogic {
    pub fn create<S>(store: &S, user: &UserId, input: &BudgetInput) -> AppResult<Budget>
    where
        S: Repository<Budget> + Repository<Client> + AuditLog + ?Sized,
    {
        let clean = validated(store, user, input)?;
        let summary = format!("'{}' ({:.2}, {})", clean.title, clean.amount, clean.status);
        audited_insert::<Budget, S>(store, user, &clean, &summary)
    }

    /// Newest first.
    pub fn list<S>(store: &S, user: &UserId) -> AppResult<Vec<Budget>>
    where
        S: Repository<Budget> + ?Sized,
    {
        store.list(user)
    }

    pub fn get<S>(store: &S, user: &UserId, id: i64) -> AppResult<Budget>
    where
        S: Repository<Budget> + ?Sized,
    {
        existing::<Budget, S>(store, user, id)
    }

    pub fn update<S>(store: &S, user: &UserId, id: i64, input: &BudgetInput) -> AppResult<Budget>
    where
        S: Repository<Budget> + Repository<Client> + AuditLog + ?Sized,
    {
        let clean = validated(store, user, input)?;
        let summary = format!("'{}' updated ({})", clean.title, clean.status);
        audited_update::<Budget, S>(store, user, id, &clean, &summary)
    }

    pub fn delete<S>(store: &S, user: &UserId, id: i64) -> AppResult<()>
    where
        S: Repository<Budget> + AuditLog + ?Sized,
    {
        audited_delete::<Budget, S>(store, user, id)
    }
}
