use crate::cli::commands::{date_arg, edited_link, edited_text, open_pool};
use crate::cli::parser::ReservationCmd;
use crate::config::Config;
use crate::core::reservations::ReservationLogic;
use crate::errors::AppResult;
use crate::models::non_blank;
use crate::models::reservation::{
    Reservation, ReservationFilter, ReservationInput, ReservationStatus,
};
use crate::models::user::UserId;
use crate::ui::calendar_view::{badge, render_reservations};
use crate::ui::messages::{empty, header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::date::{parse_optional_date, to_display, today};
use crate::utils::time::{parse_clock, parse_optional_clock, parse_required_clock};

fn print_list(list: &[Reservation], cfg: &Config) {
    if list.is_empty() {
        empty("reservations");
        return;
    }
    let refs: Vec<&Reservation> = list.iter().collect();
    print!("{}", render_reservations(&refs, &cfg.separator_char));
}

fn describe(r: &Reservation) -> String {
    let date = r.day().map(to_display).unwrap_or_else(|| r.date.clone());
    format!("#{} '{}' on {} at {}", r.id, r.title, date, r.time_range())
}

pub fn handle(action: &ReservationCmd, cfg: &Config, user: &UserId) -> AppResult<()> {
    let pool = open_pool(cfg)?;

    match action {
        ReservationCmd::Add {
            title,
            date,
            start,
            end,
            status,
            location,
            description,
            client,
        } => {
            let input = ReservationInput {
                title: title.clone(),
                description: non_blank(description.as_deref()),
                date: date_arg(date)?,
                start_time: parse_required_clock(start)?,
                end_time: parse_optional_clock(end.as_ref())?,
                status: match status {
                    Some(s) => ReservationStatus::from_code(s)?,
                    None => ReservationStatus::Scheduled,
                },
                location: non_blank(location.as_deref()),
                client_id: *client,
            };

            let created = ReservationLogic::create(&pool, user, &input)?;
            success(format!("Reservation {} added.", describe(&created)));
        }

        ReservationCmd::List {
            date,
            from,
            to,
            client,
            status,
            limit,
        } => {
            let filter = ReservationFilter {
                date: parse_optional_date(date.as_ref())?,
                from: parse_optional_date(from.as_ref())?,
                to: parse_optional_date(to.as_ref())?,
                client_id: *client,
                status: status
                    .as_deref()
                    .map(ReservationStatus::from_code)
                    .transpose()?,
                exclude_cancelled: false,
                limit: *limit,
            };

            let list = ReservationLogic::list(&pool, user, &filter)?;
            header("Reservations");
            print_list(&list, cfg);
        }

        ReservationCmd::Edit {
            id,
            title,
            date,
            start,
            end,
            status,
            location,
            description,
            client,
        } => {
            let current = ReservationLogic::get(&pool, user, *id)?;

            let start_time = match start {
                Some(s) => parse_required_clock(s)?,
                None => parse_required_clock(&current.start_time)?,
            };

            let end_time = match end {
                Some(_) => parse_optional_clock(end.as_ref())?,
                None => current.end_time.as_deref().and_then(parse_clock),
            };

            let input = ReservationInput {
                title: title.clone().unwrap_or_else(|| current.title.clone()),
                description: edited_text(description, current.description.clone()),
                date: match date {
                    Some(d) => date_arg(d)?,
                    None => date_arg(&current.date)?,
                },
                start_time,
                end_time,
                status: match status {
                    Some(s) => ReservationStatus::from_code(s)?,
                    None => current.status,
                },
                location: edited_text(location, current.location.clone()),
                client_id: edited_link(*client, current.client_id),
            };

            let updated = ReservationLogic::update(&pool, user, *id, &input)?;
            success(format!("Reservation {} updated.", describe(&updated)));
        }

        ReservationCmd::Status { id, status } => {
            let status = ReservationStatus::from_code(status)?;
            let updated = ReservationLogic::set_status(&pool, user, *id, status)?;
            success(format!(
                "Reservation #{} is now {}",
                updated.id,
                badge(updated.status)
            ));
        }

        ReservationCmd::Del { id, yes } => {
            let current = ReservationLogic::get(&pool, user, *id)?;
            let prompt = format!("Delete reservation {}?", describe(&current));
            if !ask_confirmation(&prompt, *yes) {
                info("Deletion cancelled.");
                return Ok(());
            }

            ReservationLogic::delete(&pool, user, *id)?;
            success(format!("Reservation #{} deleted.", id));
        }

        ReservationCmd::Today => {
            let day = today();
            let list = ReservationLogic::today(&pool, user, day)?;
            header(format!("Reservations on {}", to_display(day)));
            print_list(&list, cfg);
        }

        ReservationCmd::Upcoming { days } => {
            let days = days.unwrap_or(cfg.upcoming_days);
            let list = ReservationLogic::upcoming(&pool, user, today(), days)?;
            header(format!("Upcoming reservations (next {} days)", days));
            print_list(&list, cfg);
        }

        ReservationCmd::Count => {
            let counts = ReservationLogic::count_by_status(&pool, user)?;
            header("Reservations by status");
            for status in ReservationStatus::ALL {
                println!("{}  {}", badge(*status), counts.get(*status));
            }
        }
    }

    Ok(())
}
