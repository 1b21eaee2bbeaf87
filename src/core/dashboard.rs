//! Headline figures for the dashboard screen.

use crate::db::store::{Repository, ReservationStore};
use crate::errors::AppResult;
use crate::models::budget::Budget;
use crate::models::client::Client;
use crate::models::investment::Investment;
use crate::models::project::Project;
use crate::models::reservation::{Reservation, ReservationFilter};
use crate::models::transaction::{Transaction, TransactionKind, TransactionStatus};
use crate::models::user::UserId;
use serde::Serialize;

/// Rows shown in each dashboard list.
pub const DASHBOARD_LIST_LEN: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub monthly_profit: f64,
    pub profit_margin: f64,
    pub total_clients: usize,
    pub active_budgets: usize,
    pub total_investments: f64,
    pub active_reservations: usize,
    pub total_projects: usize,
}

impl DashboardStats {
    /// Only completed transactions count towards income and expenses.
    pub fn compute(
        transactions: &[Transaction],
        clients: &[Client],
        budgets: &[Budget],
        investments: &[Investment],
        reservations: &[Reservation],
        projects: &[Project],
    ) -> Self {
        let completed_sum = |kind: TransactionKind| -> f64 {
            transactions
                .iter()
                .filter(|t| t.kind == kind && t.status == TransactionStatus::Completed)
                .map(|t| t.amount)
                .sum()
        };

        let total_income = completed_sum(TransactionKind::Income);
        let total_expenses = completed_sum(TransactionKind::Expense);
        let balance = total_income - total_expenses;

        let profit_margin = if total_income > 0.0 {
            balance / total_income * 100.0
        } else {
            0.0
        };

        Self {
            total_income,
            total_expenses,
            balance,
            monthly_profit: balance,
            profit_margin,
            total_clients: clients.len(),
            active_budgets: budgets.iter().filter(|b| b.status.is_active()).count(),
            total_investments: investments.iter().map(|i| i.current_amount).sum(),
            active_reservations: reservations.iter().filter(|r| r.status.is_active()).count(),
            total_projects: projects.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub stats: DashboardStats,
    /// First reservations by date and start time.
    pub reservations: Vec<Reservation>,
    /// Most recent transactions.
    pub transactions: Vec<Transaction>,
}

pub struct DashboardLogic;

impl DashboardLogic {
    pub fn load<S>(store: &S, user: &UserId) -> AppResult<Dashboard>
    where
        S: ReservationStore
            + Repository<Transaction>
            + Repository<Client>
            + Repository<Budget>
            + Repository<Investment>
            + Repository<Project>
            + ?Sized,
    {
        let transactions = Repository::<Transaction>::list(store, user)?;
        let clients = Repository::<Client>::list(store, user)?;
        let budgets = Repository::<Budget>::list(store, user)?;
        let investments = Repository::<Investment>::list(store, user)?;
        let projects = Repository::<Project>::list(store, user)?;
        let reservations = store.list_reservations(user, &ReservationFilter::default())?;

        let stats = DashboardStats::compute(
            &transactions,
            &clients,
            &budgets,
            &investments,
            &reservations,
            &projects,
        );

        Ok(Dashboard {
            stats,
            reservations: reservations.into_iter().take(DASHBOARD_LIST_LEN).collect(),
            transactions: transactions.into_iter().take(DASHBOARD_LIST_LEN).collect(),
        })
    }
}
