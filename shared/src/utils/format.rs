//! Display formatting and date arithmetic helpers

use chrono::{Datelike, Months, NaiveDate};

/// `123456` -> `$1,234.56`, negatives as `-$1,234.56`
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `format_percentage(12.345, 1)` -> `12.3%`
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// `Jan 5, 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Signed number of days from `start` to `end`
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Add calendar months, clamping to the last day of shorter months
/// (Jan 31 + 1 month = Feb 28/29). `None` on overflow.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// Rent owed from `move_in` through the end of its month, rounded to the
/// nearest cent
pub fn prorated_rent_cents(monthly_rent_cents: u64, move_in: NaiveDate) -> u64 {
    let total_days = u64::from(days_in_month(move_in));
    let occupied_days = total_days - u64::from(move_in.day()) + 1;
    (monthly_rent_cents * occupied_days + total_days / 2) / total_days
}

/// Shorten to at most `max_chars` characters, ending with `...` when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let mut out: String = text.chars().take(max_chars - 3).collect();
    out.push_str("...");
    out
}
