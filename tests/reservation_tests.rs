mod common;

use chrono::{NaiveDate, NaiveTime};
use common::{open_test_pool, user};
use rfindash::core::clients::ClientLogic;
use rfindash::core::reservations::ReservationLogic;
use rfindash::db::log::load_log;
use rfindash::errors::AppError;
use rfindash::models::client::ClientInput;
use rfindash::models::reservation::{ReservationFilter, ReservationInput, ReservationStatus};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn client_input(name: &str) -> ClientInput {
    ClientInput {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        ..ClientInput::default()
    }
}

#[test]
fn test_create_normalizes_and_lists_by_date_then_time() {
    let pool = open_test_pool("res_create_order");
    let alice = user("alice");

    let mut late = ReservationInput::new("  Afternoon shoot ", ymd(2024, 3, 15), hm(14, 0));
    late.location = Some("   ".to_string());
    ReservationLogic::create(&pool, &alice, &late).expect("create late");
    ReservationLogic::create(
        &pool,
        &alice,
        &ReservationInput::new("Morning call", ymd(2024, 3, 15), hm(9, 0)),
    )
    .expect("create early");
    ReservationLogic::create(
        &pool,
        &alice,
        &ReservationInput::new("Day before", ymd(2024, 3, 14), hm(18, 0)),
    )
    .expect("create previous day");

    let all = ReservationLogic::list(&pool, &alice, &ReservationFilter::default()).expect("list");
    let titles: Vec<&str> = all.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Day before", "Morning call", "Afternoon shoot"]);

    let shoot = &all[2];
    assert_eq!(shoot.date, "2024-03-15");
    assert_eq!(shoot.start_time, "14:00");
    assert_eq!(shoot.location, None);
    assert_eq!(shoot.status, ReservationStatus::Scheduled);
    assert_eq!(shoot.user_id, "alice");
}

#[test]
fn test_validation_rules() {
    let pool = open_test_pool("res_validation");
    let alice = user("alice");

    let blank = ReservationInput::new("   ", ymd(2024, 3, 15), hm(9, 0));
    assert!(matches!(
        ReservationLogic::create(&pool, &alice, &blank),
        Err(AppError::Validation { field: "title", .. })
    ));

    let mut backwards = ReservationInput::new("Backwards", ymd(2024, 3, 15), hm(10, 0));
    backwards.end_time = Some(hm(9, 0));
    assert!(matches!(
        ReservationLogic::create(&pool, &alice, &backwards),
        Err(AppError::Validation {
            field: "end_time",
            ..
        })
    ));

    let mut orphan = ReservationInput::new("Orphan", ymd(2024, 3, 15), hm(10, 0));
    orphan.client_id = Some(999);
    assert!(matches!(
        ReservationLogic::create(&pool, &alice, &orphan),
        Err(AppError::NotFound { id: 999, .. })
    ));
}

#[test]
fn test_rows_are_scoped_to_their_user() {
    let pool = open_test_pool("res_scoping");
    let alice = user("alice");
    let bob = user("bob");

    let created = ReservationLogic::create(
        &pool,
        &alice,
        &ReservationInput::new("Private", ymd(2024, 5, 2), hm(9, 0)),
    )
    .expect("create");

    assert!(
        ReservationLogic::list(&pool, &bob, &ReservationFilter::default())
            .expect("list")
            .is_empty()
    );
    assert!(matches!(
        ReservationLogic::get(&pool, &bob, created.id),
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        ReservationLogic::cancel(&pool, &bob, created.id),
        Err(AppError::NotFound { .. })
    ));
    assert!(matches!(
        ReservationLogic::delete(&pool, &bob, created.id),
        Err(AppError::NotFound { .. })
    ));

    // Another user's client cannot be linked either.
    let bobs_client = ClientLogic::create(&pool, &bob, &client_input("Carol")).expect("client");
    let mut linked = ReservationInput::new("Linked", ymd(2024, 5, 3), hm(9, 0));
    linked.client_id = Some(bobs_client.id);
    assert!(matches!(
        ReservationLogic::create(&pool, &alice, &linked),
        Err(AppError::NotFound { .. })
    ));

    assert_eq!(
        ReservationLogic::get(&pool, &alice, created.id)
            .expect("still there")
            .status,
        ReservationStatus::Scheduled
    );
}

#[test]
fn test_client_name_is_joined() {
    let pool = open_test_pool("res_client_join");
    let alice = user("alice");

    let client = ClientLogic::create(&pool, &alice, &client_input("Dana")).expect("client");
    let mut input = ReservationInput::new("Meeting", ymd(2024, 6, 1), hm(15, 30));
    input.client_id = Some(client.id);

    let created = ReservationLogic::create(&pool, &alice, &input).expect("create");
    assert_eq!(created.client_name.as_deref(), Some("Dana"));

    ClientLogic::delete(&pool, &alice, client.id).expect("delete client");
    let orphaned = ReservationLogic::get(&pool, &alice, created.id).expect("get");
    assert_eq!(orphaned.client_id, None);
    assert_eq!(orphaned.client_name, None);
}

#[test]
fn test_update_replaces_all_fields() {
    let pool = open_test_pool("res_update");
    let alice = user("alice");

    let mut input = ReservationInput::new("Draft", ymd(2024, 7, 1), hm(9, 0));
    input.location = Some("Studio".to_string());
    input.end_time = Some(hm(10, 0));
    let created = ReservationLogic::create(&pool, &alice, &input).expect("create");

    let replacement = ReservationInput::new("Final", ymd(2024, 7, 2), hm(11, 15));
    let updated =
        ReservationLogic::update(&pool, &alice, created.id, &replacement).expect("update");

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.date, "2024-07-02");
    assert_eq!(updated.start_time, "11:15");
    assert_eq!(updated.end_time, None);
    assert_eq!(updated.location, None);
    assert_eq!(updated.time_range(), "11:15");

    assert!(matches!(
        ReservationLogic::update(&pool, &alice, 4242, &replacement),
        Err(AppError::NotFound { id: 4242, .. })
    ));
}

#[test]
fn test_status_changes_and_counts() {
    let pool = open_test_pool("res_status");
    let alice = user("alice");

    let mut ids = Vec::new();
    for day in 1..=4 {
        let r = ReservationLogic::create(
            &pool,
            &alice,
            &ReservationInput::new("Slot", ymd(2024, 8, day), hm(9, 0)),
        )
        .expect("create");
        ids.push(r.id);
    }

    let confirmed = ReservationLogic::confirm(&pool, &alice, ids[0]).expect("confirm");
    assert_eq!(confirmed.status, ReservationStatus::Confirmed);
    ReservationLogic::cancel(&pool, &alice, ids[1]).expect("cancel");
    ReservationLogic::complete(&pool, &alice, ids[2]).expect("complete");

    let counts = ReservationLogic::count_by_status(&pool, &alice).expect("count");
    assert_eq!(counts.scheduled, 1);
    assert_eq!(counts.confirmed, 1);
    assert_eq!(counts.completed, 1);
    assert_eq!(counts.cancelled, 1);

    let empty = ReservationLogic::count_by_status(&pool, &user("nobody")).expect("count");
    assert_eq!(empty.get(ReservationStatus::Scheduled), 0);
}

#[test]
fn test_today_and_upcoming_windows() {
    let pool = open_test_pool("res_upcoming");
    let alice = user("alice");
    let today = ymd(2024, 9, 10);

    let mk = |title: &str, date: NaiveDate| {
        ReservationLogic::create(
            &pool,
            &alice,
            &ReservationInput::new(title, date, hm(9, 0)),
        )
        .expect("create")
    };

    mk("yesterday", ymd(2024, 9, 9));
    mk("today", today);
    let cancelled = mk("cancelled today", today);
    mk("in a week", ymd(2024, 9, 17));
    mk("too far", ymd(2024, 9, 18));
    ReservationLogic::cancel(&pool, &alice, cancelled.id).expect("cancel");

    let todays: Vec<String> = ReservationLogic::today(&pool, &alice, today)
        .expect("today")
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(todays, vec!["today", "cancelled today"]);

    let upcoming: Vec<String> = ReservationLogic::upcoming(&pool, &alice, today, 7)
        .expect("upcoming")
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(upcoming, vec!["today", "in a week"]);
}

#[test]
fn test_list_filters() {
    let pool = open_test_pool("res_filters");
    let alice = user("alice");

    for day in [1, 5, 10, 20] {
        ReservationLogic::create(
            &pool,
            &alice,
            &ReservationInput::new(&format!("day {}", day), ymd(2024, 10, day), hm(9, 0)),
        )
        .expect("create");
    }

    let range = ReservationFilter {
        from: Some(ymd(2024, 10, 5)),
        to: Some(ymd(2024, 10, 10)),
        ..ReservationFilter::default()
    };
    assert_eq!(ReservationLogic::list(&pool, &alice, &range).expect("range").len(), 2);

    let limited = ReservationFilter {
        limit: Some(3),
        ..ReservationFilter::default()
    };
    assert_eq!(ReservationLogic::list(&pool, &alice, &limited).expect("limit").len(), 3);

    let confirmed = ReservationFilter {
        status: Some(ReservationStatus::Confirmed),
        ..ReservationFilter::default()
    };
    assert!(
        ReservationLogic::list(&pool, &alice, &confirmed)
            .expect("status")
            .is_empty()
    );
}

#[test]
fn test_mutations_are_audited() {
    let pool = open_test_pool("res_audit");
    let alice = user("alice");

    let r = ReservationLogic::create(
        &pool,
        &alice,
        &ReservationInput::new("Audited", ymd(2024, 11, 1), hm(9, 0)),
    )
    .expect("create");
    ReservationLogic::confirm(&pool, &alice, r.id).expect("confirm");
    ReservationLogic::delete(&pool, &alice, r.id).expect("delete");

    let ops: Vec<String> = load_log(&pool.conn, &alice)
        .expect("log")
        .into_iter()
        .filter(|e| e.operation != "migration_applied")
        .map(|e| e.operation)
        .collect();
    assert_eq!(ops, vec!["add", "status", "del"]);

    let others: Vec<String> = load_log(&pool.conn, &user("bob"))
        .expect("log")
        .into_iter()
        .map(|e| e.operation)
        .collect();
    assert!(!others.is_empty());
    assert!(others.iter().all(|op| op == "migration_applied"));
}
