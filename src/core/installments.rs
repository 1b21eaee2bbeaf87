use crate::core::records::{
    audited_delete, audited_insert, audited_update, existing, positive, required_text,
};
use crate::db::store::{AuditLog, Repository};
use crate::errors::{AppError, AppResult};
use crate::models::installment::{Installment, InstallmentInput};
use crate::models::user::UserId;

pub struct InstallmentLogic;

fn validated(input: &InstallmentInput) -> AppResult<InstallmentInput> {
    if input.installments == 0 {
        return Err(AppError::validation("installments", "must be at least 1"));
    }

    Ok(InstallmentInput {
        description: required_text("description", &input.description)?,
        total_amount: positive("total_amount", input.total_amount)?,
        installments: input.installments,
        start_date: input.start_date,
    })
}

impl InstallmentLogic {
    pub fn create<S>(store: &S, user: &UserId, input: &InstallmentInput) -> AppResult<Installment>
    where
        S: Repository<Installment> + AuditLog + ?Sized,
    {
        let clean = validated(input)?;
        let summary = format!(
            "'{}' {}x {:.2}",
            clean.description,
            clean.installments,
            clean.installment_value()
        );
        audited_insert::<Installment, S>(store, user, &clean, &summary)
    }

    /// Latest start date first.
    pub fn list<S>(store: &S, user: &UserId) -> AppResult<Vec<Installment>>
    where
        S: Repository<Installment> + ?Sized,
    {
        store.list(user)
    }

    pub fn get<S>(store: &S, user: &UserId, id: i64) -> AppResult<Installment>
    where
        S: Repository<Installment> + ?Sized,
    {
        existing::<Installment, S>(store, user, id)
    }

    /// The per-installment value is recomputed from the new plan.
    pub fn update<S>(
        store: &S,
        user: &UserId,
        id: i64,
        input: &InstallmentInput,
    ) -> AppResult<Installment>
    where
        S: Repository<Installment> + AuditLog + ?Sized,
    {
        let clean = validated(input)?;
        let summary = format!(
            "'{}' now {}x {:.2}",
            clean.description,
            clean.installments,
            clean.installment_value()
        );
        audited_update::<Installment, S>(store, user, id, &clean, &summary)
    }

    pub fn delete<S>(store: &S, user: &UserId, id: i64) -> AppResult<()>
    where
        S: Repository<Installment> + AuditLog + ?Sized,
    {
        audited_delete::<Installment, S>(store, user, id)
    }
}
