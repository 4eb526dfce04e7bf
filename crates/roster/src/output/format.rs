//! Display formatting for money and dates.

use chrono::{DateTime, NaiveDate, Utc};

/// Currency prefix for salaries
const CURRENCY_PREFIX: &str = "Rp";

/// Format an amount as Indonesian Rupiah: `Rp 3.500.000`.
///
/// Thousands are separated by dots and no decimals are shown.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{CURRENCY_PREFIX} {grouped}")
}

/// Format a date as `dd/mm/yyyy`, used in tables.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a date as `d Month yyyy`, used in detail views.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Format a timestamp as `d Month yyyy HH:MM` (UTC).
pub fn format_long_datetime(at: DateTime<Utc>) -> String {
    at.format("%-d %B %Y %H:%M").to_string()
}
