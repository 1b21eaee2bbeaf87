use crate::core::records::{
    audited_delete, audited_insert, audited_update, existing, non_negative, required_text,
};
use crate::db::store::{AuditLog, Repository};
use crate::errors::{AppError, AppResult};
use crate::models::investment::{Investment, InvestmentInput};
use crate::models::user::UserId;

pub struct InvestmentLogic;

fn validated(input: &InvestmentInput) -> AppResult<InvestmentInput> {
    if !input.expected_return.is_finite() {
        return Err(AppError::validation("expected_return", "must be a number"));
    }

    Ok(InvestmentInput {
        name: required_text("name", &input.name)?,
        kind: input.kind,
        initial_amount: non_negative("initial_amount", input.initial_amount)?,
        current_amount: non_negative("current_amount", input.current_amount)?,
        expected_return: input.expected_return,
        start_date: input.start_date,
    })
}

impl InvestmentLogic {
    pub fn create<S>(store: &S, user: &UserId, input: &InvestmentInput) -> AppResult<Investment>
    where
        S: Repository<Investment> + AuditLog + ?Sized,
    {
        let clean = validated(input)?;
        let summary = format!("'{}' ({}) {:.2}", clean.name, clean.kind, clean.initial_amount);
        audited_insert::<Investment, S>(store, user, &clean, &summary)
    }

    /// Latest start date first.
    pub fn list<S>(store: &S, user: &UserId) -> AppResult<Vec<Investment>>
    where
        S: Repository<Investment> + ?Sized,
    {
        store.list(user)
    }

    pub fn get<S>(store: &S, user: &UserId, id: i64) -> AppResult<Investment>
    where
        S: Repository<Investment> + ?Sized,
    {
        existing::<Investment, S>(store, user, id)
    }

    pub fn update<S>(
        store: &S,
        user: &UserId,
        id: i64,
        input: &InvestmentInput,
    ) -> AppResult<Investment>
    where
        S: Repository<Investment> + AuditLog + ?Sized,
    {
        let clean = validated(input)?;
        let summary = format!("'{}' now {:.2}", clean.name, clean.current_amount);
        audited_update::<Investment, S>(store, user, id, &clean, &summary)
    }

    pub fn delete<S>(store: &S, user: &UserId, id: i64) -> AppResult<()>
    where
        S: Repository<Investment> + AuditLog + ?Sized,
    {
        audited_delete::<Investment, S>(store, user, id)
    }
}
