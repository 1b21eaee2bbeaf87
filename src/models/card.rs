use serde::Serialize;

text_enum! {
    CardBrand, "card brand" {
        Visa => "visa",
        Mastercard => "mastercard",
        Elo => "elo",
        Amex => "amex",
        Other => "other",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub last_digits: String,
    pub brand: CardBrand,
    pub card_limit: f64,
    pub closing_day: u32,
    pub due_day: u32,
    pub created_at: String,
}

impl Card {
    /// "Visa •••• 1234"
    pub fn masked(&self) -> String {
        format!("{} •••• {}", self.brand, self.last_digits)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardInput {
    pub name: String,
    pub last_digits: String,
    pub brand: CardBrand,
    pub card_limit: f64,
    pub closing_day: u32,
    pub due_day: u32,
}
