use crate::db::queries::{SqlRecord, date_col, date_value};
use crate::db::store::Entity;
use crate::models::installment::{Installment, InstallmentInput};
use rusqlite::Row;
use rusqlite::types::Value;

impl Entity for Installment {
    type Input = InstallmentInput;
    const NAME: &'static str = "Installment";

    fn id(&self) -> i64 {
        self.id
    }
}

impl SqlRecord for Installment {
    const TABLE: &'static str = "installments";
    const SELECT: &'static str = "SELECT t.id, t.user_id, t.description, t.total_amount, t.installments,
                t.installment_value, t.start_date, t.created_at
         FROM installments t";
    const ORDER_BY: &'static str = "t.start_date DESC, t.id DESC";
    const COLUMNS: &'static [&'static str] = &[
        "description",
        "total_amount",
        "installments",
        "installment_value",
        "start_date",
    ];
    const HAS_UPDATED_AT: bool = false;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Installment {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            description: row.get("description")?,
            total_amount: row.get("total_amount")?,
            installments: row.get("installments")?,
            installment_value: row.get("installment_value")?,
            start_date: date_col(row, "start_date")?,
            created_at: row.get("created_at")?,
        })
    }

    // installment_value is always recomputed from the plan.
    fn values(input: &InstallmentInput) -> Vec<Value> {
        vec![
            Value::Text(input.description.clone()),
            Value::Real(input.total_amount),
            Value::Integer(i64::from(input.installments)),
            Value::Real(input.installment_value()),
            date_value(input.start_date),
        ]
    }
}
