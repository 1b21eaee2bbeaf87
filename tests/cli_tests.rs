mod common;

use common::{init_db, rfd, setup_test_db};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;

fn add_reservation(db_path: &str, title: &str, date: &str, start: &str) {
    rfd()
        .args([
            "--db", db_path, "--user", "tester", "reservation", "add", title, "--date", date,
            "--start", start,
        ])
        .assert()
        .success()
        .stdout(contains("added"));
}

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rfd()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("Migration applied: 20250915_0003_log_user_id"));

    rfd()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    rfd()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("already up to date"));
}

#[test]
fn test_reservation_add_and_list() {
    let db_path = setup_test_db("cli_res_list");
    init_db(&db_path);

    add_reservation(&db_path, "Afternoon shoot", "2024-03-15", "14:00");
    add_reservation(&db_path, "Morning call", "2024-03-15", "09:00");

    let out = rfd()
        .args(["--db", &db_path, "--user", "tester", "reservation", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);

    let morning = text.find("Morning call").expect("morning listed");
    let afternoon = text.find("Afternoon shoot").expect("afternoon listed");
    assert!(morning < afternoon, "ordered by start time:\n{text}");
    assert!(text.contains("15/03/2024"));

    // Other users see nothing.
    rfd()
        .args(["--db", &db_path, "--user", "someone-else", "reservation", "list"])
        .assert()
        .success()
        .stdout(contains("No reservations found"));
}

#[test]
fn test_reservation_rejects_bad_input() {
    let db_path = setup_test_db("cli_res_bad");
    init_db(&db_path);

    rfd()
        .args([
            "--db", &db_path, "--user", "tester", "reservation", "add", "Bad", "--date",
            "2024-02-30", "--start", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rfd()
        .args([
            "--db", &db_path, "--user", "tester", "reservation", "add", "Bad", "--date",
            "2024-02-10", "--start", "25:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));

    rfd()
        .args([
            "--db", &db_path, "--user", "tester", "reservation", "status", "1", "postponed",
        ])
        .assert()
        .failure();
}

#[test]
fn test_calendar_text_output() {
    let db_path = setup_test_db("cli_calendar_text");
    init_db(&db_path);
    add_reservation(&db_path, "Portrait session", "2024-03-15", "10:00");

    rfd()
        .args([
            "--db", &db_path, "--user", "tester", "calendar", "--month", "2024-03",
        ])
        .assert()
        .success()
        .stdout(contains("March 2024"))
        .stdout(contains("Su  Mo  Tu  We  Th  Fr  Sa"))
        .stdout(contains("Portrait session"));

    rfd()
        .args([
            "--db", &db_path, "--user", "tester", "calendar", "--month", "2024-03", "--day",
            "16",
        ])
        .assert()
        .success()
        .stdout(contains("Reservations on 16/03/2024"))
        .stdout(contains("No reservations found"));
}

#[test]
fn test_calendar_json_output() {
    let db_path = setup_test_db("cli_calendar_json");
    init_db(&db_path);
    add_reservation(&db_path, "Late", "2024-02-29", "16:00");
    add_reservation(&db_path, "Early", "2024-02-29", "08:30");
    add_reservation(&db_path, "Next month", "2024-03-01", "08:30");

    let out = rfd()
        .args([
            "--db", &db_path, "--user", "tester", "calendar", "--month", "2024-02", "--day",
            "29", "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&out).expect("valid JSON");
    assert_eq!(json["title"], "February 2024");
    assert_eq!(json["selected_day"], 29);
    assert_eq!(json["marked_days"], serde_json::json!([29]));
    assert_eq!(json["grid"]["cells"].as_array().map(Vec::len), Some(42));
    assert_eq!(json["grid"]["cells"][4]["day"], 1);
    assert_eq!(json["grid"]["cells"][4]["is_current_month"], true);

    let titles: Vec<&str> = json["reservations"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|r| r["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Early", "Late"]);
}

#[test]
fn test_calendar_rejects_bad_month_and_day() {
    let db_path = setup_test_db("cli_calendar_bad");
    init_db(&db_path);

    rfd()
        .args(["--db", &db_path, "calendar", "--month", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));

    rfd()
        .args(["--db", &db_path, "calendar", "--month", "2023-02", "--day", "29"])
        .assert()
        .failure()
        .stderr(contains("between 1 and 28"));
}

#[test]
fn test_reservation_status_and_delete() {
    let db_path = setup_test_db("cli_res_delete");
    init_db(&db_path);
    add_reservation(&db_path, "To remove", "2024-04-01", "09:00");

    rfd()
        .args([
            "--db", &db_path, "--user", "tester", "reservation", "status", "1", "confirmed",
        ])
        .assert()
        .success()
        .stdout(contains("Confirmed"));

    rfd()
        .args([
            "--db", &db_path, "--user", "tester", "reservation", "del", "1", "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("deleted"));

    rfd()
        .args([
            "--db", &db_path, "--user", "tester", "reservation", "del", "1", "--yes",
        ])
        .assert()
        .failure()
        .stderr(contains("not found"));

    rfd()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("reservation #1").and(contains("del")));
}

#[test]
fn test_client_add_list_and_edit() {
    let db_path = setup_test_db("cli_clients");
    init_db(&db_path);

    rfd()
        .args([
            "--db", &db_path, "--user", "tester", "client", "add", "Acme Ltd", "--email",
            "hello@acme.test", "--phone", "555-0100",
        ])
        .assert()
        .success()
        .stdout(contains("Client #1 'Acme Ltd' added"));

    rfd()
        .args([
            "--db", &db_path, "--user", "tester", "client", "edit", "1", "--phone", "",
        ])
        .assert()
        .success();

    rfd()
        .args(["--db", &db_path, "--user", "tester", "client", "list"])
        .assert()
        .success()
        .stdout(contains("Acme Ltd"))
        .stdout(contains("hello@acme.test"))
        .stdout(contains("555-0100").not());

    rfd()
        .args([
            "--db", &db_path, "--user", "tester", "client", "add", "Nobody", "--email",
            "nobody",
        ])
        .assert()
        .failure()
        .stderr(contains("email"));
}

#[test]
fn test_dashboard_totals() {
    let db_path = setup_test_db("cli_dashboard");
    init_db(&db_path);

    for (kind, amount) in [("income", "1000"), ("expense", "400")] {
        rfd()
            .args([
                "--db", &db_path, "--user", "tester", "tx", "add", "--type", kind, "--category",
                "work", "--description", "entry", "--amount", amount, "--date", "2024-05-01",
            ])
            .assert()
            .success();
    }

    rfd()
        .args(["--db", &db_path, "--user", "tester", "dashboard"])
        .assert()
        .success()
        .stdout(contains("R$ 1000.00"))
        .stdout(contains("R$ 400.00"))
        .stdout(contains("60.0%"));
}

#[test]
fn test_log_print_is_scoped_to_the_user() {
    let db_path = setup_test_db("cli_log_scope");
    init_db(&db_path);

    rfd()
        .args([
            "--db", &db_path, "--user", "alice", "reservation", "add", "Secret dinner", "--date",
            "2024-03-15", "--start", "20:00",
        ])
        .assert()
        .success();

    rfd()
        .args(["--db", &db_path, "--user", "bob", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("Secret dinner").not())
        .stdout(contains("reservation #1").not());

    rfd()
        .args(["--db", &db_path, "--user", "alice", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Secret dinner"));
}

#[test]
fn test_calendar_json_on_fresh_database() {
    // No `init`: the schema is created on open and nothing else reaches stdout.
    let db_path = setup_test_db("cli_calendar_json_fresh");

    let out = rfd()
        .args(["--db", &db_path, "calendar", "--month", "2024-02", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&out).expect("valid JSON");
    assert_eq!(json["title"], "February 2024");
    assert_eq!(json["marked_days"], serde_json::json!([]));
}

#[test]
fn test_calendar_rejects_months_outside_the_calendar() {
    let db_path = setup_test_db("cli_calendar_edges");
    init_db(&db_path);

    rfd()
        .args(["--db", &db_path, "calendar", "--month=-262143-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));

    rfd()
        .args(["--db", &db_path, "calendar", "--month=+262143-12"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_uses_editor_then_fallback() {
    rfd()
        .env("EDITOR", "true")
        .args(["config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("edited successfully using 'true'"));

    rfd()
        .env("EDITOR", "true")
        .args(["config", "--edit", "--editor", "/nonexistent/rfindash-editor"])
        .assert()
        .success()
        .stdout(contains("falling back to 'true'"))
        .stdout(contains("using fallback 'true'"));

    rfd()
        .env("EDITOR", "false")
        .args(["config", "--edit"])
        .assert()
        .success()
        .stderr(contains("Failed to edit configuration file using 'false'"));
}
