use crate::db::queries::{SqlRecord, opt_text};
use crate::db::store::Entity;
use crate::models::client::{Client, ClientInput};
use rusqlite::Row;
use rusqlite::types::Value;

impl Entity for Client {
    type Input = ClientInput;
    const NAME: &'static str = "Client";

    fn id(&self) -> i64 {
        self.id
    }
}

impl SqlRecord for Client {
    const TABLE: &'static str = "clients";
    const SELECT: &'static str = "SELECT t.id, t.user_id, t.name, t.email, t.phone, t.document, t.address,
                t.created_at, t.updated_at
         FROM clients t";
    const ORDER_BY: &'static str = "t.created_at DESC, t.id DESC";
    const COLUMNS: &'static [&'static str] = &["name", "email", "phone", "document", "address"];
    const HAS_UPDATED_AT: bool = true;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Client {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            document: row.get("document")?,
            address: row.get("address")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn values(input: &ClientInput) -> Vec<Value> {
        vec![
            Value::Text(input.name.clone()),
            Value::Text(input.email.clone()),
            opt_text(&input.phone),
            opt_text(&input.document),
            opt_text(&input.address),
        ]
    }
}
