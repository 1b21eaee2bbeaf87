//! Formatting utilities used for CLI outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern compiles")
});

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Terminal width of a string, ignoring ANSI escapes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(pad), s)
}

/// "R$ 1234.50", "-R$ 12.00"
pub fn money(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{} {:.2}", sign, currency, amount.abs())
}

/// Percentage with a fixed number of decimals; `want_sign` adds "+" to
/// positive values.
pub fn percent(value: f64, decimals: usize, want_sign: bool) -> String {
    let sign = if want_sign && value >= 0.0 { "+" } else { "" };
    format!("{}{:.*}%", sign, decimals, value)
}

/// Wrap free text (descriptions, addresses) for display under a row.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(10))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}
