use crate::cli::commands::{date_arg, date_or_today, open_pool};
use crate::cli::parser::InstallmentCmd;
use crate::config::Config;
use crate::core::installments::InstallmentLogic;
use crate::errors::AppResult;
use crate::models::installment::InstallmentInput;
use crate::models::user::UserId;
use crate::ui::messages::{empty, header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::date::to_display;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(action: &InstallmentCmd, cfg: &Config, user: &UserId) -> AppResult<()> {
    let pool = open_pool(cfg)?;

    match action {
        InstallmentCmd::Add {
            description,
            total,
            count,
            start,
        } => {
            let input = InstallmentInput {
                description: description.clone(),
                total_amount: *total,
                installments: *count,
                start_date: date_or_today(start.as_ref())?,
            };
            let created = InstallmentLogic::create(&pool, user, &input)?;
            success(format!(
                "Installment plan #{} added: {}x {}.",
                created.id,
                created.installments,
                money(created.installment_value, &cfg.currency)
            ));
        }

        InstallmentCmd::List => {
            let list = InstallmentLogic::list(&pool, user)?;
            header("Installments");
            if list.is_empty() {
                empty("installments");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Description"),
                Column::right("Total"),
                Column::right("Count"),
                Column::right("Each"),
                Column::left("Start"),
            ]);
            for i in &list {
                table.add_row(vec![
                    i.id.to_string(),
                    i.description.clone(),
                    money(i.total_amount, &cfg.currency),
                    i.installments.to_string(),
                    money(i.installment_value, &cfg.currency),
                    to_display(i.start_date),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        InstallmentCmd::Edit {
            id,
            description,
            total,
            count,
            start,
        } => {
            let current = InstallmentLogic::get(&pool, user, *id)?;
            let input = InstallmentInput {
                description: description.clone().unwrap_or(current.description),
                total_amount: total.unwrap_or(current.total_amount),
                installments: count.unwrap_or(current.installments),
                start_date: match start {
                    Some(s) => date_arg(s)?,
                    None => current.start_date,
                },
            };
            let updated = InstallmentLogic::update(&pool, user, *id, &input)?;
            success(format!(
                "Installment plan #{} updated: {}x {}.",
                updated.id,
                updated.installments,
                money(updated.installment_value, &cfg.currency)
            ));
        }

        InstallmentCmd::Del { id, yes } => {
            let current = InstallmentLogic::get(&pool, user, *id)?;
            let prompt = format!(
                "Delete installment plan #{} '{}'?",
                current.id, current.description
            );
            if !ask_confirmation(&prompt, *yes) {
                info("Deletion cancelled.");
                return Ok(());
            }
            InstallmentLogic::delete(&pool, user, *id)?;
            success(format!("Installment plan #{} deleted.", id));
        }
    }

    Ok(())
}
