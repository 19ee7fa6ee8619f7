use chrono::{DateTime, Utc};

pub const DATE_FORMAT: &str = "%d %b %Y %H:%M";
/// Shown for a missing value
pub const EMPTY_CELL: &str = "-";

/// Two decimals, `.` between thousands and `,` before the cents: `1.250,75`
pub fn amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped},{:02}", cents % 100)
}

pub fn date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

pub fn age(value: Option<u32>) -> String {
    value
        .map(|a| a.to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// One decimal: `25.0%`
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}
