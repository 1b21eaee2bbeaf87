use crate::cli::commands::open_pool;
use crate::cli::parser::CardCmd;
use crate::config::Config;
use crate::core::cards::CardLogic;
use crate::errors::AppResult;
use crate::models::card::{CardBrand, CardInput};
use crate::models::user::UserId;
use crate::ui::messages::{empty, header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(action: &CardCmd, cfg: &Config, user: &UserId) -> AppResult<()> {
    let pool = open_pool(cfg)?;

    match action {
        CardCmd::Add {
            name,
            last_digits,
            brand,
            limit,
            closing_day,
            due_day,
        } => {
            let input = CardInput {
                name: name.clone(),
                last_digits: last_digits.clone(),
                brand: match brand {
                    Some(b) => CardBrand::from_code(b)?,
                    None => CardBrand::Other,
                },
                card_limit: *limit,
                closing_day: *closing_day,
                due_day: *due_day,
            };
            let created = CardLogic::create(&pool, user, &input)?;
            success(format!("Card #{} {} added.", created.id, created.masked()));
        }

        CardCmd::List => {
            let cards = CardLogic::list(&pool, user)?;
            header("Cards");
            if cards.is_empty() {
                empty("cards");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Name"),
                Column::left("Card"),
                Column::right("Limit"),
                Column::right("Closing"),
                Column::right("Due"),
            ]);
            for c in &cards {
                table.add_row(vec![
                    c.id.to_string(),
                    c.name.clone(),
                    c.masked(),
                    money(c.card_limit, &cfg.currency),
                    c.closing_day.to_string(),
                    c.due_day.to_string(),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        CardCmd::Edit {
            id,
            name,
            last_digits,
            brand,
            limit,
            closing_day,
            due_day,
        } => {
            let current = CardLogic::get(&pool, user, *id)?;
            let input = CardInput {
                name: name.clone().unwrap_or(current.name),
                last_digits: last_digits.clone().unwrap_or(current.last_digits),
                brand: match brand {
                    Some(b) => CardBrand::from_code(b)?,
                    None => current.brand,
                },
                card_limit: limit.unwrap_or(current.card_limit),
                closing_day: closing_day.unwrap_or(current.closing_day),
                due_day: due_day.unwrap_or(current.due_day),
            };
            let updated = CardLogic::update(&pool, user, *id, &input)?;
            success(format!("Card #{} {} updated.", updated.id, updated.masked()));
        }

        CardCmd::Del { id, yes } => {
            let current = CardLogic::get(&pool, user, *id)?;
            let prompt = format!("Delete card #{} {}?", current.id, current.masked());
            if !ask_confirmation(&prompt, *yes) {
                info("Deletion cancelled.");
                return Ok(());
            }
            CardLogic::delete(&pool, user, *id)?;
            success(format!("Card #{} deleted.", id));
        }
    }

    Ok(())
}
