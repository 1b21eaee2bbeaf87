use crate::db::pool::DbPool;
use crate::db::queries::{SqlRecord, collect_rows, date_value, enum_col, now_stamp, opt, opt_text};
use crate::db::store::{Entity, Repository, ReservationStore};
use crate::errors::AppResult;
use crate::models::reservation::{
    Reservation, ReservationFilter, ReservationInput, ReservationStatus,
};
use crate::models::user::UserId;
use crate::utils::time::format_clock;
use rusqlite::types::Value;
use rusqlite::{Row, params_from_iter};

impl Entity for Reservation {
    type Input = ReservationInput;
    const NAME: &'static str = "Reservation";

    fn id(&self) -> i64 {
        self.id
    }
}

impl SqlRecord for Reservation {
    const TABLE: &'static str = "reservations";
    const SELECT: &'static str = "SELECT t.id, t.user_id, t.client_id, c.name AS client_name, t.title,
                t.description, t.date, t.start_time, t.end_time, t.status, t.location,
                t.created_at, t.updated_at
         FROM reservations t
         LEFT JOIN clients c ON c.id = t.client_id AND c.user_id = t.user_id";
    const ORDER_BY: &'static str = "t.date ASC, t.start_time ASC, t.id ASC";
    const COLUMNS: &'static [&'static str] = &[
        "client_id",
        "title",
        "description",
        "date",
        "start_time",
        "end_time",
        "status",
        "location",
    ];
    const HAS_UPDATED_AT: bool = true;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Reservation {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            client_id: row.get("client_id")?,
            client_name: row.get("client_name")?,
            title: row.get("title")?,
            description: row.get("description")?,
            date: row.get("date")?,
            start_time: row.get("start_time")?,
            end_time: row.get("end_time")?,
            status: enum_col(row, "status", "reservation", ReservationStatus::from_db_str)?,
            location: row.get("location")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn values(input: &ReservationInput) -> Vec<Value> {
        vec![
            opt(input.client_id),
            Value::Text(input.title.clone()),
            opt_text(&input.description),
            date_value(input.date),
            Value::Text(format_clock(input.start_time)),
            opt(input.end_time.map(format_clock)),
            Value::Text(input.status.to_db_str().to_string()),
            opt_text(&input.location),
        ]
    }
}

/// WHERE clause and bound values for a reservation filter.
fn filter_clause(user: &UserId, filter: &ReservationFilter) -> (String, Vec<Value>) {
    let mut conditions = vec!["t.user_id = ?".to_string()];
    let mut values = vec![Value::Text(user.as_str().to_string())];

    if let Some(d) = filter.date {
        conditions.push("t.date = ?".into());
        values.push(date_value(d));
    }
    if let Some(d) = filter.from {
        conditions.push("t.date >= ?".into());
        values.push(date_value(d));
    }
    if let Some(d) = filter.to {
        conditions.push("t.date <= ?".into());
        values.push(date_value(d));
    }
    if let Some(id) = filter.client_id {
        conditions.push("t.client_id = ?".into());
        values.push(Value::Integer(id));
    }
    if let Some(status) = filter.status {
        conditions.push("t.status = ?".into());
        values.push(Value::Text(status.to_db_str().to_string()));
    }
    if filter.exclude_cancelled {
        conditions.push("t.status <> 'cancelled'".into());
    }

    (conditions.join(" AND "), values)
}

impl ReservationStore for DbPool {
    fn list_reservations(
        &self,
        user: &UserId,
        filter: &ReservationFilter,
    ) -> AppResult<Vec<Reservation>> {
        let (clause, mut values) = filter_clause(user, filter);

        let mut sql = format!(
            "{} WHERE {} ORDER BY {}",
            Reservation::SELECT,
            clause,
            Reservation::ORDER_BY
        );
        if let Some(limit) = filter.limit {
            sql.push_str(" LIMIT ?");
            values.push(Value::Integer(i64::from(limit)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), |row| {
            Reservation::from_row(row)
        })?;
        collect_rows(rows)
    }

    fn set_reservation_status(
        &self,
        user: &UserId,
        id: i64,
        status: ReservationStatus,
    ) -> AppResult<Option<Reservation>> {
        let changed = self.conn.execute(
            "UPDATE reservations SET status = ?1, updated_at = ?2
             WHERE id = ?3 AND user_id = ?4",
            rusqlite::params![status.to_db_str(), now_stamp(), id, user.as_str()],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        Repository::<Reservation>::find(self, user, id)
    }
}
