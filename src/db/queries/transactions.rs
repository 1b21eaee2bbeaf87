use crate::db::queries::{SqlRecord, date_col, date_value, enum_col, opt, opt_text};
use crate::db::store::Entity;
use crate::models::transaction::{Transaction, TransactionInput, TransactionKind, TransactionStatus};
use rusqlite::Row;
use rusqlite::types::Value;

impl Entity for Transaction {
    type Input = TransactionInput;
    const NAME: &'static str = "Transaction";

    fn id(&self) -> i64 {
        self.id
    }
}

impl SqlRecord for Transaction {
    const TABLE: &'static str = "transactions";
    const SELECT: &'static str = "SELECT t.id, t.user_id, t.type, t.category, t.description, t.amount,
                t.date, t.payment_method, t.card_id, t.status, t.created_at
         FROM transactions t";
    const ORDER_BY: &'static str = "t.date DESC, t.id DESC";
    const COLUMNS: &'static [&'static str] = &[
        "type",
        "category",
        "description",
        "amount",
        "date",
        "payment_method",
        "card_id",
        "status",
    ];
    const HAS_UPDATED_AT: bool = false;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Transaction {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            kind: enum_col(row, "type", "transaction type", TransactionKind::from_db_str)?,
            category: row.get("category")?,
            description: row.get("description")?,
            amount: row.get("amount")?,
            date: date_col(row, "date")?,
            payment_method: row.get("payment_method")?,
            card_id: row.get("card_id")?,
            status: enum_col(row, "status", "transaction", TransactionStatus::from_db_str)?,
            created_at: row.get("created_at")?,
        })
    }

    fn values(input: &TransactionInput) -> Vec<Value> {
        vec![
            Value::Text(input.kind.to_db_str().to_string()),
            Value::Text(input.category.clone()),
            Value::Text(input.description.clone()),
            Value::Real(input.amount),
            date_value(input.date),
            opt_text(&input.payment_method),
            opt(input.card_id),
            Value::Text(input.status.to_db_str().to_string()),
        ]
    }
}
