use crate::cli::commands::{edited_date, edited_link, edited_text, open_pool};
use crate::cli::parser::ProjectCmd;
use crate::config::Config;
use crate::core::projects::ProjectLogic;
use crate::errors::AppResult;
use crate::models::non_blank;
use crate::models::project::{ProjectInput, ProjectStatus};
use crate::models::user::UserId;
use crate::ui::messages::{empty, header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::colorize_optional;
use crate::utils::date::{parse_optional_date, to_display};
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(action: &ProjectCmd, cfg: &Config, user: &UserId) -> AppResult<()> {
    let pool = open_pool(cfg)?;

    match action {
        ProjectCmd::Add {
            name,
            client,
            description,
            status,
            budget,
            start,
            end,
        } => {
            let input = ProjectInput {
                client_id: *client,
                name: name.clone(),
                description: non_blank(description.as_deref()),
                status: match status {
                    Some(s) => ProjectStatus::from_code(s)?,
                    None => ProjectStatus::Planning,
                },
                budget: *budget,
                start_date: parse_optional_date(start.as_ref())?,
                end_date: parse_optional_date(end.as_ref())?,
            };
            let created = ProjectLogic::create(&pool, user, &input)?;
            success(format!(
                "Project #{} '{}' added ({}).",
                created.id, created.name, created.status
            ));
        }

        ProjectCmd::List => {
            let list = ProjectLogic::list(&pool, user)?;
            header("Projects");
            if list.is_empty() {
                empty("projects");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Name"),
                Column::left("Client"),
                Column::left("Status"),
                Column::right("Budget"),
                Column::left("Start"),
                Column::left("End"),
            ]);
            for p in &list {
                let budget = p.budget.map(|b| money(b, &cfg.currency));
                table.add_row(vec![
                    p.id.to_string(),
                    p.name.clone(),
                    colorize_optional(p.client_name.as_deref()),
                    p.status.to_string(),
                    colorize_optional(budget.as_deref()),
                    colorize_optional(p.start_date.map(to_display).as_deref()),
                    colorize_optional(p.end_date.map(to_display).as_deref()),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        ProjectCmd::Edit {
            id,
            name,
            client,
            description,
            status,
            budget,
            no_budget,
            start,
            end,
        } => {
            let current = ProjectLogic::get(&pool, user, *id)?;
            let input = ProjectInput {
                client_id: edited_link(*client, current.client_id),
                name: name.clone().unwrap_or(current.name),
                description: edited_text(description, current.description),
                status: match status {
                    Some(s) => ProjectStatus::from_code(s)?,
                    None => current.status,
                },
                budget: if *no_budget {
                    None
                } else {
                    budget.or(current.budget)
                },
                start_date: edited_date(start, current.start_date)?,
                end_date: edited_date(end, current.end_date)?,
            };
            let updated = ProjectLogic::update(&pool, user, *id, &input)?;
            success(format!(
                "Project #{} '{}' updated ({}).",
                updated.id, updated.name, updated.status
            ));
        }

        ProjectCmd::Del { id, yes } => {
            let current = ProjectLogic::get(&pool, user, *id)?;
            let prompt = format!("Delete project #{} '{}'?", current.id, current.name);
            if !ask_confirmation(&prompt, *yes) {
                info("Deletion cancelled.");
                return Ok(());
            }
            ProjectLogic::delete(&pool, user, *id)?;
            success(format!("Project #{} deleted.", id));
        }
    }

    Ok(())
}
