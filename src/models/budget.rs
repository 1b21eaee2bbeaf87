use chrono::NaiveDate;
use serde::Serialize;

text_enum! {
    BudgetStatus, "budget" {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
        Completed => "completed",
    }
}

impl BudgetStatus {
    /// Pending and approved budgets count as open on the dashboard.
    pub fn is_active(self) -> bool {
        matches!(self, BudgetStatus::Pending | BudgetStatus::Approved)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Budget {
    pub id: i64,
    pub user_id: String,
    pub client_id: Option<i64>,
    pub client_name: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub amount: f64,
    pub status: BudgetStatus,
    pub valid_until: Option<NaiveDate>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetInput {
    pub client_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub amount: f64,
    pub status: BudgetStatus,
    pub valid_until: Option<NaiveDate>,
}
