mod common;

use chrono::{NaiveDate, NaiveTime};
use common::{open_test_pool, user};
use rfindash::core::budgets::BudgetLogic;
use rfindash::core::cards::CardLogic;
use rfindash::core::clients::ClientLogic;
use rfindash::core::dashboard::{DashboardLogic, DashboardStats};
use rfindash::core::installments::InstallmentLogic;
use rfindash::core::investments::InvestmentLogic;
use rfindash::core::projects::ProjectLogic;
use rfindash::core::reservations::ReservationLogic;
use rfindash::core::transactions::TransactionLogic;
use rfindash::errors::AppError;
use rfindash::models::budget::{BudgetInput, BudgetStatus};
use rfindash::models::card::{CardBrand, CardInput};
use rfindash::models::client::ClientInput;
use rfindash::models::installment::{InstallmentInput, installment_value};
use rfindash::models::investment::{InvestmentInput, InvestmentKind, return_percentage};
use rfindash::models::project::{ProjectInput, ProjectStatus};
use rfindash::models::reservation::ReservationInput;
use rfindash::models::transaction::{TransactionInput, TransactionKind, TransactionStatus};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn tx(kind: TransactionKind, amount: f64, status: TransactionStatus, day: u32) -> TransactionInput {
    TransactionInput {
        kind,
        category: "services".to_string(),
        description: format!("{} {}", kind, amount),
        amount,
        date: ymd(2024, 5, day),
        payment_method: None,
        card_id: None,
        status,
    }
}

fn card(digits: &str, closing: u32) -> CardInput {
    CardInput {
        name: "Main".to_string(),
        last_digits: digits.to_string(),
        brand: CardBrand::Visa,
        card_limit: 5000.0,
        closing_day: closing,
        due_day: 10,
    }
}

#[test]
fn test_installment_value_is_derived() {
    assert_eq!(installment_value(1200.0, 12), 100.0);
    assert_eq!(installment_value(99.0, 1), 99.0);

    let pool = open_test_pool("rec_installments");
    let alice = user("alice");

    let plan = InstallmentLogic::create(
        &pool,
        &alice,
        &InstallmentInput {
            description: "Laptop".to_string(),
            total_amount: 3000.0,
            installments: 10,
            start_date: ymd(2024, 1, 5),
        },
    )
    .expect("create");
    assert_eq!(plan.installment_value, 300.0);

    let updated = InstallmentLogic::update(
        &pool,
        &alice,
        plan.id,
        &InstallmentInput {
            description: "Laptop".to_string(),
            total_amount: 3000.0,
            installments: 12,
            start_date: ymd(2024, 1, 5),
        },
    )
    .expect("update");
    assert_eq!(updated.installment_value, 250.0);

    let zero = InstallmentInput {
        description: "Nothing".to_string(),
        total_amount: 10.0,
        installments: 0,
        start_date: ymd(2024, 1, 5),
    };
    assert!(matches!(
        InstallmentLogic::create(&pool, &alice, &zero),
        Err(AppError::Validation {
            field: "installments",
            ..
        })
    ));
}

#[test]
fn test_investment_return() {
    assert_eq!(return_percentage(1000.0, 1100.0), Some(10.0));
    assert_eq!(return_percentage(200.0, 150.0), Some(-25.0));
    assert_eq!(return_percentage(0.0, 50.0), None);

    let pool = open_test_pool("rec_investments");
    let alice = user("alice");
    let inv = InvestmentLogic::create(
        &pool,
        &alice,
        &InvestmentInput {
            name: "Treasury".to_string(),
            kind: InvestmentKind::FixedIncome,
            initial_amount: 1000.0,
            current_amount: 1050.0,
            expected_return: 10.5,
            start_date: ymd(2023, 6, 1),
        },
    )
    .expect("create");
    assert_eq!(inv.kind, InvestmentKind::FixedIncome);
    assert_eq!(inv.profit(), 50.0);
    assert_eq!(inv.return_percentage(), Some(5.0));
}

#[test]
fn test_client_and_card_validation() {
    let pool = open_test_pool("rec_validation");
    let alice = user("alice");

    let bad_email = ClientInput {
        name: "Eve".to_string(),
        email: "not-an-address".to_string(),
        ..ClientInput::default()
    };
    assert!(matches!(
        ClientLogic::create(&pool, &alice, &bad_email),
        Err(AppError::Validation { field: "email", .. })
    ));

    assert!(matches!(
        CardLogic::create(&pool, &alice, &card("12a4", 5)),
        Err(AppError::Validation {
            field: "last_digits",
            ..
        })
    ));
    assert!(matches!(
        CardLogic::create(&pool, &alice, &card("1234", 32)),
        Err(AppError::Validation {
            field: "closing_day",
            ..
        })
    ));

    let ok = CardLogic::create(&pool, &alice, &card(" 4321 ", 5)).expect("card");
    assert_eq!(ok.last_digits, "4321");
    assert_eq!(ok.masked(), "visa •••• 4321");
}

fn budget(title: &str, amount: f64, client_id: Option<i64>) -> BudgetInput {
    BudgetInput {
        client_id,
        title: title.to_string(),
        description: None,
        amount,
        status: BudgetStatus::Pending,
        valid_until: None,
    }
}

fn investment(initial: f64, current: f64) -> InvestmentInput {
    InvestmentInput {
        name: "Fund".to_string(),
        kind: InvestmentKind::Funds,
        initial_amount: initial,
        current_amount: current,
        expected_return: 8.0,
        start_date: ymd(2024, 1, 2),
    }
}

#[test]
fn test_budget_validation() {
    let pool = open_test_pool("rec_budget_validation");
    let alice = user("alice");
    let bob = user("bob");

    assert!(matches!(
        BudgetLogic::create(&pool, &alice, &budget("   ", 100.0, None)),
        Err(AppError::Validation { field: "title", .. })
    ));
    assert!(matches!(
        BudgetLogic::create(&pool, &alice, &budget("Website", -1.0, None)),
        Err(AppError::Validation { field: "amount", .. })
    ));

    let bobs_client = ClientLogic::create(
        &pool,
        &bob,
        &ClientInput {
            name: "Bob's client".to_string(),
            email: "client@example.com".to_string(),
            ..ClientInput::default()
        },
    )
    .expect("client");
    assert!(matches!(
        BudgetLogic::create(&pool, &alice, &budget("Website", 100.0, Some(bobs_client.id))),
        Err(AppError::NotFound { .. })
    ));
    assert!(BudgetLogic::list(&pool, &alice).expect("list").is_empty());

    let free = BudgetLogic::create(&pool, &alice, &budget("  Logo  ", 0.0, None)).expect("budget");
    assert_eq!(free.title, "Logo");
    assert_eq!(free.amount, 0.0);

    assert!(matches!(
        BudgetLogic::update(&pool, &alice, free.id, &budget("Logo", -5.0, None)),
        Err(AppError::Validation { field: "amount", .. })
    ));
    assert!(matches!(
        BudgetLogic::update(&pool, &bob, free.id, &budget("Logo", 5.0, None)),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn test_client_requires_name_and_email() {
    let pool = open_test_pool("rec_client_validation");
    let alice = user("alice");

    let nameless = ClientInput {
        name: "  ".to_string(),
        email: "ana@example.com".to_string(),
        ..ClientInput::default()
    };
    assert!(matches!(
        ClientLogic::create(&pool, &alice, &nameless),
        Err(AppError::Validation { field: "name", .. })
    ));

    let ana = ClientLogic::create(
        &pool,
        &alice,
        &ClientInput {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            ..ClientInput::default()
        },
    )
    .expect("client");

    let no_at = ClientInput {
        name: "Ana".to_string(),
        email: "ana.example.com".to_string(),
        ..ClientInput::default()
    };
    assert!(matches!(
        ClientLogic::update(&pool, &alice, ana.id, &no_at),
        Err(AppError::Validation { field: "email", .. })
    ));
    assert_eq!(
        ClientLogic::get(&pool, &alice, ana.id).expect("get").email,
        "ana@example.com"
    );
}

#[test]
fn test_investment_amounts_must_not_be_negative() {
    let pool = open_test_pool("rec_investment_validation");
    let alice = user("alice");

    assert!(matches!(
        InvestmentLogic::create(&pool, &alice, &investment(-100.0, 50.0)),
        Err(AppError::Validation {
            field: "initial_amount",
            ..
        })
    ));
    assert!(matches!(
        InvestmentLogic::create(&pool, &alice, &investment(100.0, -1.0)),
        Err(AppError::Validation {
            field: "current_amount",
            ..
        })
    ));
    assert!(InvestmentLogic::list(&pool, &alice).expect("list").is_empty());

    let wiped = InvestmentLogic::create(&pool, &alice, &investment(100.0, 0.0)).expect("zero ok");
    assert_eq!(wiped.return_percentage(), Some(-100.0));
}

#[test]
fn test_transactions_require_positive_amount_and_own_card() {
    let pool = open_test_pool("rec_transactions");
    let alice = user("alice");
    let bob = user("bob");

    let zero = tx(TransactionKind::Expense, 0.0, TransactionStatus::Completed, 1);
    assert!(matches!(
        TransactionLogic::create(&pool, &alice, &zero),
        Err(AppError::Validation { field: "amount", .. })
    ));

    let bobs_card = CardLogic::create(&pool, &bob, &card("9999", 1)).expect("card");
    let mut paid = tx(TransactionKind::Expense, 80.0, TransactionStatus::Completed, 2);
    paid.card_id = Some(bobs_card.id);
    assert!(matches!(
        TransactionLogic::create(&pool, &alice, &paid),
        Err(AppError::NotFound { .. })
    ));

    TransactionLogic::create(&pool, &alice, &tx(TransactionKind::Income, 10.0, TransactionStatus::Completed, 3))
        .expect("older");
    TransactionLogic::create(&pool, &alice, &tx(TransactionKind::Income, 20.0, TransactionStatus::Completed, 9))
        .expect("newer");

    let dates: Vec<NaiveDate> = TransactionLogic::list(&pool, &alice)
        .expect("list")
        .into_iter()
        .map(|t| t.date)
        .collect();
    assert_eq!(dates, vec![ymd(2024, 5, 9), ymd(2024, 5, 3)]);
}

#[test]
fn test_project_dates_and_budget() {
    let pool = open_test_pool("rec_projects");
    let alice = user("alice");

    let mut input = ProjectInput {
        client_id: None,
        name: "Website".to_string(),
        description: None,
        status: ProjectStatus::InProgress,
        budget: Some(-1.0),
        start_date: Some(ymd(2024, 3, 1)),
        end_date: Some(ymd(2024, 2, 1)),
    };
    assert!(matches!(
        ProjectLogic::create(&pool, &alice, &input),
        Err(AppError::Validation { field: "budget", .. })
    ));

    input.budget = Some(5000.0);
    assert!(matches!(
        ProjectLogic::create(&pool, &alice, &input),
        Err(AppError::Validation {
            field: "end_date",
            ..
        })
    ));

    input.end_date = Some(ymd(2024, 6, 30));
    let created = ProjectLogic::create(&pool, &alice, &input).expect("create");
    assert_eq!(created.status, ProjectStatus::InProgress);
    assert_eq!(created.end_date, Some(ymd(2024, 6, 30)));

    ProjectLogic::delete(&pool, &alice, created.id).expect("delete");
    assert!(ProjectLogic::list(&pool, &alice).expect("list").is_empty());
}

#[test]
fn test_dashboard_margin_without_income_is_zero() {
    let stats = DashboardStats::compute(&[], &[], &[], &[], &[], &[]);
    assert_eq!(stats.profit_margin, 0.0);
    assert_eq!(stats.balance, 0.0);
}

#[test]
fn test_dashboard_counts_only_completed_transactions() {
    let pool = open_test_pool("rec_dashboard");
    let alice = user("alice");

    for input in [
        tx(TransactionKind::Income, 1000.0, TransactionStatus::Completed, 1),
        tx(TransactionKind::Income, 500.0, TransactionStatus::Pending, 2),
        tx(TransactionKind::Expense, 250.0, TransactionStatus::Completed, 3),
        tx(TransactionKind::Expense, 100.0, TransactionStatus::Cancelled, 4),
    ] {
        TransactionLogic::create(&pool, &alice, &input).expect("tx");
    }

    for status in [BudgetStatus::Pending, BudgetStatus::Approved, BudgetStatus::Rejected] {
        BudgetLogic::create(
            &pool,
            &alice,
            &BudgetInput {
                client_id: None,
                title: format!("{} quote", status),
                description: None,
                amount: 100.0,
                status,
                valid_until: None,
            },
        )
        .expect("budget");
    }

    let nine = NaiveTime::from_hms_opt(9, 0, 0).expect("time");
    for day in 1..=7 {
        ReservationLogic::create(
            &pool,
            &alice,
            &ReservationInput::new("Session", ymd(2024, 5, day), nine),
        )
        .expect("reservation");
    }
    ReservationLogic::cancel(&pool, &alice, 1).expect("cancel");

    let dash = DashboardLogic::load(&pool, &alice).expect("dashboard");
    let s = &dash.stats;
    assert_eq!(s.total_income, 1000.0);
    assert_eq!(s.total_expenses, 250.0);
    assert_eq!(s.balance, 750.0);
    assert_eq!(s.monthly_profit, 750.0);
    assert_eq!(s.profit_margin, 75.0);
    assert_eq!(s.active_budgets, 2);
    assert_eq!(s.active_reservations, 6);
    assert_eq!(s.total_clients, 0);

    assert_eq!(dash.reservations.len(), 5);
    assert_eq!(dash.reservations[0].date, "2024-05-01");
    assert_eq!(dash.transactions.len(), 4);
    assert_eq!(dash.transactions[0].date, ymd(2024, 5, 4));
}
