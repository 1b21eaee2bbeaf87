use chrono::NaiveDate;
use serde::Serialize;

text_enum! {
    InvestmentKind, "investment type" {
        FixedIncome => "fixed_income",
        Stocks => "stocks",
        Funds => "funds",
        Crypto => "crypto",
        Other => "other",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Investment {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub kind: InvestmentKind, // ⇔ investments.type
    pub initial_amount: f64,
    pub current_amount: f64,
    pub expected_return: f64, // yearly %, as entered
    pub start_date: NaiveDate,
    pub created_at: String,
}

impl Investment {
    /// Gain (positive) or loss (negative) since the initial amount.
    pub fn profit(&self) -> f64 {
        self.current_amount - self.initial_amount
    }

    /// Return in percent; undefined for a zero initial amount.
    pub fn return_percentage(&self) -> Option<f64> {
        return_percentage(self.initial_amount, self.current_amount)
    }
}

pub fn return_percentage(initial: f64, current: f64) -> Option<f64> {
    if initial == 0.0 {
        return None;
    }
    Some((current - initial) / initial * 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentInput {
    pub name: String,
    pub kind: InvestmentKind,
    pub initial_amount: f64,
    pub current_amount: f64,
    pub expected_return: f64,
    pub start_date: NaiveDate,
}
