use crate::db::queries::{SqlRecord, enum_col, opt, opt_date_col, opt_date_value, opt_text};
use crate::db::store::Entity;
use crate::models::project::{Project, ProjectInput, ProjectStatus};
use rusqlite::Row;
use rusqlite::types::Value;

impl Entity for Project {
    type Input = ProjectInput;
    const NAME: &'static str = "Project";

    fn id(&self) -> i64 {
        self.id
    }
}

impl SqlRecord for Project {
    const TABLE: &'static str = "projects";
    const SELECT: &'static str = "SELECT t.id, t.user_id, t.client_id, c.name AS client_name, t.name,
                t.description, t.status, t.budget, t.start_date, t.end_date,
                t.created_at, t.updated_at
         FROM projects t
         LEFT JOIN clients c ON c.id = t.client_id AND c.user_id = t.user_id";
    const ORDER_BY: &'static str = "t.created_at DESC, t.id DESC";
    const COLUMNS: &'static [&'static str] = &[
        "client_id",
        "name",
        "description",
        "status",
        "budget",
        "start_date",
        "end_date",
    ];
    const HAS_UPDATED_AT: bool = true;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Project {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            client_id: row.get("client_id")?,
            client_name: row.get("client_name")?,
            name: row.get("name")?,
            description: row.get("description")?,
            status: enum_col(row, "status", "project", ProjectStatus::from_db_str)?,
            budget: row.get("budget")?,
            start_date: opt_date_col(row, "start_date")?,
            end_date: opt_date_col(row, "end_date")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn values(input: &ProjectInput) -> Vec<Value> {
        vec![
            opt(input.client_id),
            Value::Text(input.name.clone()),
            opt_text(&input.description),
            Value::Text(input.status.to_db_str().to_string()),
            opt(input.budget),
            opt_date_value(input.start_date),
            opt_date_value(input.end_date),
        ]
    }
}
