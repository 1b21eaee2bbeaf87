use crate::db::queries::{SqlRecord, enum_col, opt, opt_date_col, opt_date_value, opt_text};
use crate::db::store::Entity;
use crate::models::budget::{Budget, BudgetInput, BudgetStatus};
use rusqlite::Row;
use rusqlite::types::Value;

impl Entity for Budget {
    type Input = BudgetInput;
    const NAME: &'static str = "Budget";

    fn id(&self) -> i64 {
        self.id
    }
}

impl SqlRecord for Budget {
    const TABLE: &'static str = "budgets";
    const SELECT: &'static str = "SELECT t.id, t.user_id, t.client_id, c.name AS client_name, t.title,
                t.description, t.amount, t.status, t.valid_until, t.created_at, t.updated_at
         FROM budgets t
         LEFT JOIN clients c ON c.id = t.client_id AND c.user_id = t.user_id";
    const ORDER_BY: &'static str = "t.created_at DESC, t.id DESC";
    const COLUMNS: &'static [&'static str] = &[
        "client_id",
        "title",
        "description",
        "amount",
        "status",
        "valid_until",
    ];
    const HAS_UPDATED_AT: bool = true;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Budget {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            client_id: row.get("client_id")?,
            client_name: row.get("client_name")?,
            title: row.get("title")?,
            description: row.get("description")?,
            amount: row.get("amount")?,
            status: enum_col(row, "status", "budget", BudgetStatus::from_db_str)?,
            valid_until: opt_date_col(row, "valid_until")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn values(input: &BudgetInput) -> Vec<Value> {
        vec![
            opt(input.client_id),
            Value::Text(input.title.clone()),
            opt_text(&input.description),
            Value::Real(input.amount),
            Value::Text(input.status.to_db_str().to_string()),
            opt_date_value(input.valid_until),
        ]
    }
}
