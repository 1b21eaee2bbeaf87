pub mod budgets;
pub mod calendar;
pub mod cards;
pub mod clients;
pub mod dashboard;
pub mod installments;
pub mod investments;
pub mod log;
pub mod projects;
pub mod records;
pub mod reservations;
pub mod transactions;
