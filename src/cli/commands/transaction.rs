use crate::cli::commands::{date_arg, date_or_today, edited_link, edited_text, open_pool};
use crate::cli::parser::TransactionCmd;
use crate::config::Config;
use crate::core::transactions::TransactionLogic;
use crate::errors::AppResult;
use crate::models::non_blank;
use crate::models::transaction::{TransactionInput, TransactionKind, TransactionStatus};
use crate::models::user::UserId;
use crate::ui::messages::{empty, header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::{color_for_amount, colorize_optional, paint};
use crate::utils::date::to_display;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(action: &TransactionCmd, cfg: &Config, user: &UserId) -> AppResult<()> {
    let pool = open_pool(cfg)?;

    match action {
        TransactionCmd::Add {
            kind,
            category,
            description,
            amount,
            date,
            payment_method,
            card,
            status,
        } => {
            let input = TransactionInput {
                kind: TransactionKind::from_code(kind)?,
                category: category.clone(),
                description: description.clone(),
                amount: *amount,
                date: date_or_today(date.as_ref())?,
                payment_method: non_blank(payment_method.as_deref()),
                card_id: *card,
                status: match status {
                    Some(s) => TransactionStatus::from_code(s)?,
                    None => TransactionStatus::Completed,
                },
            };
            let created = TransactionLogic::create(&pool, user, &input)?;
            success(format!(
                "Transaction #{} added: {} {} on {}.",
                created.id,
                created.kind,
                money(created.amount, &cfg.currency),
                to_display(created.date)
            ));
        }

        TransactionCmd::List => {
            let list = TransactionLogic::list(&pool, user)?;
            header("Transactions");
            if list.is_empty() {
                empty("transactions");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Date"),
                Column::left("Category"),
                Column::left("Description"),
                Column::right("Amount"),
                Column::left("Status"),
                Column::left("Payment"),
            ]);
            for t in &list {
                let signed = t.signed_amount();
                table.add_row(vec![
                    t.id.to_string(),
                    to_display(t.date),
                    t.category.clone(),
                    t.description.clone(),
                    paint(color_for_amount(signed), &money(signed, &cfg.currency)),
                    t.status.to_string(),
                    colorize_optional(t.payment_method.as_deref()),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        TransactionCmd::Edit {
            id,
            kind,
            category,
            description,
            amount,
            date,
            payment_method,
            card,
            status,
        } => {
            let current = TransactionLogic::get(&pool, user, *id)?;
            let input = TransactionInput {
                kind: match kind {
                    Some(k) => TransactionKind::from_code(k)?,
                    None => current.kind,
                },
                category: category.clone().unwrap_or(current.category),
                description: description.clone().unwrap_or(current.description),
                amount: amount.unwrap_or(current.amount),
                date: match date {
                    Some(d) => date_arg(d)?,
                    None => current.date,
                },
                payment_method: edited_text(payment_method, current.payment_method),
                card_id: edited_link(*card, current.card_id),
                status: match status {
                    Some(s) => TransactionStatus::from_code(s)?,
                    None => current.status,
                },
            };
            let updated = TransactionLogic::update(&pool, user, *id, &input)?;
            success(format!("Transaction #{} updated.", updated.id));
        }

        TransactionCmd::Del { id, yes } => {
            let current = TransactionLogic::get(&pool, user, *id)?;
            let prompt = format!(
                "Delete transaction #{} '{}' ({})?",
                current.id,
                current.description,
                money(current.signed_amount(), &cfg.currency)
            );
            if !ask_confirmation(&prompt, *yes) {
                info("Deletion cancelled.");
                return Ok(());
            }
            TransactionLogic::delete(&pool, user, *id)?;
            success(format!("Transaction #{} deleted.", id));
        }
    }

    Ok(())
}
