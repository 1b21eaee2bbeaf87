use chrono::NaiveDate;
use serde::Serialize;

text_enum! {
    TransactionKind, "transaction type" {
        Income => "income",
        Expense => "expense",
    }
}

text_enum! {
    TransactionStatus, "transaction" {
        Pending => "pending",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: String,
    pub kind: TransactionKind, // ⇔ transactions.type
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payment_method: Option<String>,
    pub card_id: Option<i64>,
    pub status: TransactionStatus,
    pub created_at: String,
}

impl Transaction {
    /// Amount with its sign: expenses are negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payment_method: Option<String>,
    pub card_id: Option<i64>,
    pub status: TransactionStatus,
}
