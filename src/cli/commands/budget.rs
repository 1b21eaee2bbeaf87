use crate::cli::commands::{edited_date, edited_link, edited_text, open_pool};
use crate::cli::parser::BudgetCmd;
use crate::config::Config;
use crate::core::budgets::BudgetLogic;
use crate::errors::AppResult;
use crate::models::budget::{BudgetInput, BudgetStatus};
use crate::models::non_blank;
use crate::models::user::UserId;
use crate::ui::messages::{empty, header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::colorize_optional;
use crate::utils::date::{parse_optional_date, to_display};
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(action: &BudgetCmd, cfg: &Config, user: &UserId) -> AppResult<()> {
    let pool = open_pool(cfg)?;

    match action {
        BudgetCmd::Add {
            title,
            amount,
            client,
            status,
            valid_until,
            description,
        } => {
            let input = BudgetInput {
                client_id: *client,
                title: title.clone(),
                description: non_blank(description.as_deref()),
                amount: *amount,
                status: match status {
                    Some(s) => BudgetStatus::from_code(s)?,
                    None => BudgetStatus::Pending,
                },
                valid_until: parse_optional_date(valid_until.as_ref())?,
            };
            let created = BudgetLogic::create(&pool, user, &input)?;
            success(format!(
                "Budget #{} '{}' added ({}).",
                created.id,
                created.title,
                money(created.amount, &cfg.currency)
            ));
        }

        BudgetCmd::List => {
            let budgets = BudgetLogic::list(&pool, user)?;
            header("Budgets");
            if budgets.is_empty() {
                empty("budgets");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Title"),
                Column::left("Client"),
                Column::right("Amount"),
                Column::left("Status"),
                Column::left("Valid until"),
            ]);
            for b in &budgets {
                table.add_row(vec![
                    b.id.to_string(),
                    b.title.clone(),
                    colorize_optional(b.client_name.as_deref()),
                    money(b.amount, &cfg.currency),
                    b.status.to_string(),
                    colorize_optional(b.valid_until.map(to_display).as_deref()),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        BudgetCmd::Edit {
            id,
            title,
            amount,
            client,
            status,
            valid_until,
            description,
        } => {
            let current = BudgetLogic::get(&pool, user, *id)?;
            let input = BudgetInput {
                client_id: edited_link(*client, current.client_id),
                title: title.clone().unwrap_or(current.title),
                description: edited_text(description, current.description),
                amount: amount.unwrap_or(current.amount),
                status: match status {
                    Some(s) => BudgetStatus::from_code(s)?,
                    None => current.status,
                },
                valid_until: edited_date(valid_until, current.valid_until)?,
            };
            let updated = BudgetLogic::update(&pool, user, *id, &input)?;
            success(format!(
                "Budget #{} '{}' updated ({}).",
                updated.id, updated.title, updated.status
            ));
        }

        BudgetCmd::Del { id, yes } => {
            let current = BudgetLogic::get(&pool, user, *id)?;
            let prompt = format!("Delete budget #{} '{}'?", current.id, current.title);
            if !ask_confirmation(&prompt, *yes) {
                info("Deletion cancelled.");
                return Ok(());
            }
            BudgetLogic::delete(&pool, user, *id)?;
            success(format!("Budget #{} deleted.", id));
        }
    }

    Ok(())
}
