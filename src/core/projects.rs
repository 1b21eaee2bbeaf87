use crate::core::records::{
    audited_delete, audited_insert, audited_update, ensure_owned, existing, non_negative,
    optional_text, required_text,
};
use crate::db::store::{AuditLog, Repository};
use crate::errors::{AppError, AppResult};
use crate::models::client::Client;
use crate::models::project::{Project, ProjectInput};
use crate::models::user::UserId;

pub struct ProjectLogic;

fn validated<S>(store: &S, user: &UserId, input: &ProjectInput) -> AppResult<ProjectInput>
where
    S: Repository<Client> + ?Sized,
{
    let name = required_text("name", &input.name)?;

    let budget = match input.budget {
        Some(b) => Some(non_negative("budget", b)?),
        None => None,
    };

    if let (Some(start), Some(end)) = (input.start_date, input.end_date)
        && end < start
    {
        return Err(AppError::validation(
            "end_date",
            "must not be before the start date",
        ));
    }

    ensure_owned::<Client, S>(store, user, input.client_id)?;

    Ok(ProjectInput {
        name,
        budget,
        description: optional_text(&input.description),
        ..input.clone()
    })
}

impl ProjectLogic {
    pub fn create<S>(store: &S, user: &UserId, input: &ProjectInput) -> AppResult<Project>
    where
        S: Repository<Project> + Repository<Client> + AuditLog + ?Sized,
    {
        let clean = validated(store, user, input)?;
        let summary = format!("'{}' ({})", clean.name, clean.status);
        audited_insert::<Project, S>(store, user, &clean, &summary)
    }

    /// Newest first.
    pub fn list<S>(store: &S, user: &UserId) -> AppResult<Vec<Project>>
    where
        S: Repository<Project> + ?Sized,
    {
        store.list(user)
    }

    pub fn get<S>(store: &S, user: &UserId, id: i64) -> AppResult<Project>
    where
        S: Repository<Project> + ?Sized,
    {
        existing::<Project, S>(store, user, id)
    }

    pub fn update<S>(store: &S, user: &UserId, id: i64, input: &ProjectInput) -> AppResult<Project>
    where
        S: Repository<Project> + Repository<Client> + AuditLog + ?Sized,
    {
        let clean = validated(store, user, input)?;
        let summary = format!("'{}' updated ({})", clean.name, clean.status);
        audited_update::<Project, S>(store, user, id, &clean, &summary)
    }

    pub fn delete<S>(store: &S, user: &UserId, id: i64) -> AppResult<()>
    where
        S: Repository<Project> + AuditLog + ?Sized,
    {
        audited_delete::<Project, S>(store, user, id)
    }
}
