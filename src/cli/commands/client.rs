use crate::cli::commands::{edited_text, open_pool};
use crate::cli::parser::ClientCmd;
use crate::config::Config;
use crate::core::clients::ClientLogic;
use crate::errors::AppResult;
use crate::models::client::ClientInput;
use crate::models::non_blank;
use crate::models::user::UserId;
use crate::ui::messages::{empty, header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

pub fn handle(action: &ClientCmd, cfg: &Config, user: &UserId) -> AppResult<()> {
    let pool = open_pool(cfg)?;

    match action {
        ClientCmd::Add {
            name,
            email,
            phone,
            document,
            address,
        } => {
            let input = ClientInput {
                name: name.clone(),
                email: email.clone(),
                phone: non_blank(phone.as_deref()),
                document: non_blank(document.as_deref()),
                address: non_blank(address.as_deref()),
            };
            let created = ClientLogic::create(&pool, user, &input)?;
            success(format!("Client #{} '{}' added.", created.id, created.name));
        }

        ClientCmd::List => {
            let clients = ClientLogic::list(&pool, user)?;
            header("Clients");
            if clients.is_empty() {
                empty("clients");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Name"),
                Column::left("E-mail"),
                Column::left("Phone"),
                Column::left("Document"),
            ]);
            for c in &clients {
                table.add_row(vec![
                    c.id.to_string(),
                    c.name.clone(),
                    c.email.clone(),
                    colorize_optional(c.phone.as_deref()),
                    colorize_optional(c.document.as_deref()),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        ClientCmd::Edit {
            id,
            name,
            email,
            phone,
            document,
            address,
        } => {
            let current = ClientLogic::get(&pool, user, *id)?;
            let input = ClientInput {
                name: name.clone().unwrap_or(current.name),
                email: email.clone().unwrap_or(current.email),
                phone: edited_text(phone, current.phone),
                document: edited_text(document, current.document),
                address: edited_text(address, current.address),
            };
            let updated = ClientLogic::update(&pool, user, *id, &input)?;
            success(format!("Client #{} '{}' updated.", updated.id, updated.name));
        }

        ClientCmd::Del { id, yes } => {
            let current = ClientLogic::get(&pool, user, *id)?;
            let prompt = format!("Delete client #{} '{}'?", current.id, current.name);
            if !ask_confirmation(&prompt, *yes) {
                info("Deletion cancelled.");
                return Ok(());
            }
            ClientLogic::delete(&pool, user, *id)?;
            success(format!("Client #{} deleted.", id));
        }
    }

    Ok(())
}
