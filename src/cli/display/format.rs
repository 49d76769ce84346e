//! Number and timestamp formatters for Kiwoom payload fields.

use chrono::NaiveDateTime;

/// Format an integer with thousands separators: 1234567 -> "1,234,567".
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a zero-padded amount string ("-00000000012345") as "-12,345".
///
/// Values that are not integers are returned trimmed but otherwise as-is.
pub fn format_amount(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches('+');
    trimmed
        .parse::<i64>()
        .map_or_else(|_| trimmed.to_string(), group_thousands)
}

/// Format a price. A leading sign on prices marks the day's direction, not
/// the value, so it is dropped.
pub fn format_price(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches(['+', '-']);
    format_amount(trimmed)
}

/// Format a rate ("-000003.52") as "-3.52%".
pub fn format_rate(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches('+');
    match trimmed.parse::<f64>() {
        Ok(rate) => format!("{rate:.2}%"),
        Err(_) => trimmed.to_string(),
    }
}

/// Format a `YYYYMMDDhhmmss` expiry as "YYYY-MM-DD hh:mm:ss".
pub fn format_expiry(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw.trim(), "%Y%m%d%H%M%S")
        .map_or_else(|_| raw.to_string(), |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}
