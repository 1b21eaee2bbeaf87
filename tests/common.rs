#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rfindash::db::pool::DbPool;
use rfindash::models::reservation::{Reservation, ReservationStatus};
use rfindash::models::user::UserId;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rfd() -> Command {
    cargo_bin_cmd!("rfindash")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfindash.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// `init` in test mode: creates the schema without touching the config file
pub fn init_db(db_path: &str) {
    rfd()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Fresh migrated database for library-level tests
pub fn open_test_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    DbPool::open(&db_path).expect("open test db")
}

pub fn user(name: &str) -> UserId {
    UserId::new(name).expect("valid user id")
}

/// In-memory reservation record, as the store would return it
pub fn reservation(id: i64, date: &str, start: &str) -> Reservation {
    Reservation {
        id,
        user_id: "tester".to_string(),
        client_id: None,
        client_name: None,
        title: format!("Reservation {}", id),
        description: None,
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: None,
        status: ReservationStatus::Scheduled,
        location: None,
        created_at: "2024-01-01T00:00:00+00:00".to_string(),
        updated_at: "2024-01-01T00:00:00+00:00".to_string(),
    }
}
