use crate::db::queries::{SqlRecord, date_col, date_value, enum_col};
use crate::db::store::Entity;
use crate::models::investment::{Investment, InvestmentInput, InvestmentKind};
use rusqlite::Row;
use rusqlite::types::Value;

impl Entity for Investment {
    type Input = InvestmentInput;
    const NAME: &'static str = "Investment";

    fn id(&self) -> i64 {
        self.id
    }
}

impl SqlRecord for Investment {
    const TABLE: &'static str = "investments";
    const SELECT: &'static str = "SELECT t.id, t.user_id, t.name, t.type, t.initial_amount, t.current_amount,
                t.expected_return, t.start_date, t.created_at
         FROM investments t";
    const ORDER_BY: &'static str = "t.start_date DESC, t.id DESC";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "type",
        "initial_amount",
        "current_amount",
        "expected_return",
        "start_date",
    ];
    const HAS_UPDATED_AT: bool = false;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Investment {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            name: row.get("name")?,
            kind: enum_col(row, "type", "investment type", InvestmentKind::from_db_str)?,
            initial_amount: row.get("initial_amount")?,
            current_amount: row.get("current_amount")?,
            expected_return: row.get("expected_return")?,
            start_date: date_col(row, "start_date")?,
            created_at: row.get("created_at")?,
        })
    }

    fn values(input: &InvestmentInput) -> Vec<Value> {
        vec![
            Value::Text(input.name.clone()),
            Value::Text(input.kind.to_db_str().to_string()),
            Value::Real(input.initial_amount),
            Value::Real(input.current_amount),
            Value::Real(input.expected_return),
            date_value(input.start_date),
        ]
    }
}
