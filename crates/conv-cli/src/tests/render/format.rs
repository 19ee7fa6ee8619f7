use crate::render::format::{age, amount, date, percent};

use chrono::{TimeZone, Utc};

#[test]
fn test_amount_groups_thousands_with_dots() {
    assert_eq!(amount(1250.75), "1.250,75");
    assert_eq!(amount(1_234_567.5), "1.234.567,50");
    assert_eq!(amount(100.0), "100,00");
    assert_eq!(amount(0.0), "0,00");
}

#[test]
fn test_amount_rounds_to_cents() {
    assert_eq!(amount(999.999), "1.000,00");
    assert_eq!(amount(0.004), "0,00");
}

#[test]
fn test_amount_keeps_sign() {
    assert_eq!(amount(-5.0), "-5,00");
    assert_eq!(amount(-0.001), "0,00");
}

#[test]
fn test_date_format() {
    let registered = Utc.with_ymd_and_hms(2025, 3, 1, 10, 5, 0).unwrap();
    assert_eq!(date(Some(&registered)), "01 Mar 2025 10:05");
    assert_eq!(date(None), "-");
}

#[test]
fn test_age_and_percent() {
    assert_eq!(age(Some(10)), "10");
    assert_eq!(age(None), "-");
    assert_eq!(percent(25.0), "25.0%");
    assert_eq!(percent(100.0 / 3.0), "33.3%");
}
