use crate::cli::commands::open_pool;
use crate::config::Config;
use crate::core::dashboard::DashboardLogic;
use crate::errors::AppResult;
use crate::models::reservation::Reservation;
use crate::models::user::UserId;
use crate::ui::calendar_view::render_reservations;
use crate::ui::messages::{empty, header};
use crate::utils::colors::{CYAN, RESET, color_for_amount, paint};
use crate::utils::date::to_display;
use crate::utils::formatting::pad_right;
use crate::utils::table::{Column, Table};
use crate::utils::{money, percent};

fn line(label: &str, value: String) {
    println!("{}{}{} {}", CYAN, pad_right(label, 22), RESET, value);
}

pub fn handle(cfg: &Config, user: &UserId) -> AppResult<()> {
    let pool = open_pool(cfg)?;
    let dash = DashboardLogic::load(&pool, user)?;
    let s = &dash.stats;
    let cur = cfg.currency.as_str();

    header(format!("Dashboard · {}", user));
    line("Total income", money(s.total_income, cur));
    line("Total expenses", money(s.total_expenses, cur));
    line(
        "Balance",
        paint(color_for_amount(s.balance), &money(s.balance, cur)),
    );
    line(
        "Monthly profit",
        paint(color_for_amount(s.monthly_profit), &money(s.monthly_profit, cur)),
    );
    line("Profit margin", percent(s.profit_margin, 1, false));
    line("Investments", money(s.total_investments, cur));
    line("Clients", s.total_clients.to_string());
    line("Active budgets", s.active_budgets.to_string());
    line("Active reservations", s.active_reservations.to_string());
    line("Projects", s.total_projects.to_string());

    header("Reservations");
    if dash.reservations.is_empty() {
        empty("reservations");
    } else {
        let refs: Vec<&Reservation> = dash.reservations.iter().collect();
        print!("{}", render_reservations(&refs, &cfg.separator_char));
    }

    header("Recent transactions");
    if dash.transactions.is_empty() {
        empty("transactions");
    } else {
        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::left("Description"),
            Column::right("Amount"),
        ]);
        for t in &dash.transactions {
            let signed = t.signed_amount();
            table.add_row(vec![
                to_display(t.date),
                t.description.clone(),
                paint(color_for_amount(signed), &money(signed, cur)),
            ]);
        }
        print!("{}", table.render(&cfg.separator_char));
    }

    Ok(())
}
