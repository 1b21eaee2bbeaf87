use chrono::NaiveDate;
use serde::Serialize;

text_enum! {
    ProjectStatus, "project" {
        Planning => "planning",
        InProgress => "in_progress",
        Completed => "completed",
        OnHold => "on_hold",
        Cancelled => "cancelled",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: i64,
    pub user_id: String,
    pub client_id: Option<i64>,
    pub client_name: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInput {
    pub client_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub budget: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
