use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Installment {
    pub id: i64,
    pub user_id: String,
    pub description: String,
    pub total_amount: f64,
    pub installments: u32,
    pub installment_value: f64,
    pub start_date: NaiveDate,
    pub created_at: String,
}

/// Caller-supplied installment plan. The per-installment value is derived,
/// never accepted from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentInput {
    pub description: String,
    pub total_amount: f64,
    pub installments: u32,
    pub start_date: NaiveDate,
}

impl InstallmentInput {
    pub fn installment_value(&self) -> f64 {
        installment_value(self.total_amount, self.installments)
    }
}

/// Value of a single installment. `count` must be at least 1.
pub fn installment_value(total: f64, count: u32) -> f64 {
    total / f64::from(count)
}
