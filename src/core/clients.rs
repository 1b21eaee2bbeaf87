use crate::core::records::{
    audited_delete, audited_insert, audited_update, existing, optional_text, required_text,
};
use crate::db::store::{AuditLog, Repository};
use crate::errors::{AppError, AppResult};
use crate::models::client::{Client, ClientInput};
use crate::models::user::UserId;

pub struct ClientLogic;

fn validated(input: &ClientInput) -> AppResult<ClientInput> {
    let name = required_text("name", &input.name)?;
    let email = required_text("email", &input.email)?;
    if !email.contains('@') {
        return Err(AppError::validation("email", "must be an e-mail address"));
    }

    Ok(ClientInput {
        name,
        email,
        phone: optional_text(&input.phone),
        document: optional_text(&input.document),
        address: optional_text(&input.address),
    })
}

impl ClientLogic {
    pub fn create<S>(store: &S, user: &UserId, input: &ClientInput) -> AppResult<Client>
    where
        S: Repository<Client> + AuditLog + ?Sized,
    {
        let clean = validated(input)?;
        let summary = format!("'{}' <{}>", clean.name, clean.email);
        audited_insert::<Client, S>(store, user, &clean, &summary)
    }

    /// Newest first.
    pub fn list<S>(store: &S, user: &UserId) -> AppResult<Vec<Client>>
    where
        S: Repository<Client> + ?Sized,
    {
        store.list(user)
    }

    pub fn get<S>(store: &S, user: &UserId, id: i64) -> AppResult<Client>
    where
        S: Repository<Client> + ?Sized,
    {
        existing::<Client, S>(store, user, id)
    }

    pub fn update<S>(store: &S, user: &UserId, id: i64, input: &ClientInput) -> AppResult<Client>
    where
        S: Repository<Client> + AuditLog + ?Sized,
    {
        let clean = validated(input)?;
        let summary = format!("'{}' updated", clean.name);
        audited_update::<Client, S>(store, user, id, &clean, &summary)
    }

    /// Budgets, projects and reservations of the client keep existing
    /// without a client.
    pub fn delete<S>(store: &S, user: &UserId, id: i64) -> AppResult<()>
    where
        S: Repository<Client> + AuditLog + ?Sized,
    {
        audited_delete::<Client, S>(store, user, id)
    }
}
