use crate::db::queries::{SqlRecord, enum_col};
use crate::db::store::Entity;
use crate::models::card::{Card, CardBrand, CardInput};
use rusqlite::Row;
use rusqlite::types::Value;

impl Entity for Card {
    type Input = CardInput;
    const NAME: &'static str = "Card";

    fn id(&self) -> i64 {
        self.id
    }
}

impl SqlRecord for Card {
    const TABLE: &'static str = "cards";
    const SELECT: &'static str = "SELECT t.id, t.user_id, t.name, t.last_digits, t.brand, t.card_limit,
                t.closing_day, t.due_day, t.created_at
         FROM cards t";
    const ORDER_BY: &'static str = "t.created_at DESC, t.id DESC";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "last_digits",
        "brand",
        "card_limit",
        "closing_day",
        "due_day",
    ];
    const HAS_UPDATED_AT: bool = false;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Card {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            name: row.get("name")?,
            last_digits: row.get("last_digits")?,
            brand: enum_col(row, "brand", "card brand", CardBrand::from_db_str)?,
            card_limit: row.get("card_limit")?,
            closing_day: row.get("closing_day")?,
            due_day: row.get("due_day")?,
            created_at: row.get("created_at")?,
        })
    }

    fn values(input: &CardInput) -> Vec<Value> {
        vec![
            Value::Text(input.name.clone()),
            Value::Text(input.last_digits.clone()),
            Value::Text(input.brand.to_db_str().to_string()),
            Value::Real(input.card_limit),
            Value::Integer(i64::from(input.closing_day)),
            Value::Integer(i64::from(input.due_day)),
        ]
    }
}
