use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub document: Option<String>, // tax id / registration number
    pub address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub address: Option<String>,
}
