use crate::cli::commands::{date_arg, date_or_today, open_pool};
use crate::cli::parser::InvestmentCmd;
use crate::config::Config;
use crate::core::investments::InvestmentLogic;
use crate::errors::AppResult;
use crate::models::investment::{InvestmentInput, InvestmentKind};
use crate::models::user::UserId;
use crate::ui::messages::{empty, header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::{GREY, RESET, color_for_amount, paint};
use crate::utils::date::to_display;
use crate::utils::table::{Column, Table};
use crate::utils::{money, percent};

pub fn handle(action: &InvestmentCmd, cfg: &Config, user: &UserId) -> AppResult<()> {
    let pool = open_pool(cfg)?;

    match action {
        InvestmentCmd::Add {
            name,
            kind,
            initial,
            current,
            expected_return,
            start,
        } => {
            let input = InvestmentInput {
                name: name.clone(),
                kind: match kind {
                    Some(k) => InvestmentKind::from_code(k)?,
                    None => InvestmentKind::Other,
                },
                initial_amount: *initial,
                current_amount: current.unwrap_or(*initial),
                expected_return: expected_return.unwrap_or(0.0),
                start_date: date_or_today(start.as_ref())?,
            };
            let created = InvestmentLogic::create(&pool, user, &input)?;
            success(format!(
                "Investment #{} '{}' added ({}).",
                created.id,
                created.name,
                money(created.current_amount, &cfg.currency)
            ));
        }

        InvestmentCmd::List => {
            let list = InvestmentLogic::list(&pool, user)?;
            header("Investments");
            if list.is_empty() {
                empty("investments");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Name"),
                Column::left("Type"),
                Column::right("Initial"),
                Column::right("Current"),
                Column::right("Profit"),
                Column::right("Return"),
                Column::left("Since"),
            ]);
            for i in &list {
                let profit = i.profit();
                let ret = match i.return_percentage() {
                    Some(p) => paint(color_for_amount(p), &percent(p, 2, true)),
                    None => format!("{GREY}--{RESET}"),
                };
                table.add_row(vec![
                    i.id.to_string(),
                    i.name.clone(),
                    i.kind.to_string(),
                    money(i.initial_amount, &cfg.currency),
                    money(i.current_amount, &cfg.currency),
                    paint(color_for_amount(profit), &money(profit, &cfg.currency)),
                    ret,
                    to_display(i.start_date),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        InvestmentCmd::Edit {
            id,
            name,
            kind,
            initial,
            current,
            expected_return,
            start,
        } => {
            let existing = InvestmentLogic::get(&pool, user, *id)?;
            let input = InvestmentInput {
                name: name.clone().unwrap_or(existing.name),
                kind: match kind {
                    Some(k) => InvestmentKind::from_code(k)?,
                    None => existing.kind,
                },
                initial_amount: initial.unwrap_or(existing.initial_amount),
                current_amount: current.unwrap_or(existing.current_amount),
                expected_return: expected_return.unwrap_or(existing.expected_return),
                start_date: match start {
                    Some(s) => date_arg(s)?,
                    None => existing.start_date,
                },
            };
            let updated = InvestmentLogic::update(&pool, user, *id, &input)?;
            success(format!(
                "Investment #{} '{}' updated ({}).",
                updated.id,
                updated.name,
                money(updated.current_amount, &cfg.currency)
            ));
        }

        InvestmentCmd::Del { id, yes } => {
            let existing = InvestmentLogic::get(&pool, user, *id)?;
            let prompt = format!("Delete investment #{} '{}'?", existing.id, existing.name);
            if !ask_confirmation(&prompt, *yes) {
                info("Deletion cancelled.");
                return Ok(());
            }
            InvestmentLogic::delete(&pool, user, *id)?;
            success(format!("Investment #{} deleted.", id));
        }
    }

    Ok(())
}
