//! Unit tests for month bucketing

use chrono::NaiveDate;
use core_kernel::{MonthYear, TemporalError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_dates_in_same_month_share_a_bucket() {
    assert_eq!(
        MonthYear::from_date(date(2023, 4, 1)),
        MonthYear::from_date(date(2023, 4, 30))
    );
}

#[test]
fn test_same_month_different_year_are_distinct() {
    assert_ne!(
        MonthYear::from_date(date(2022, 4, 1)),
        MonthYear::from_date(date(2023, 4, 1))
    );
}

#[test]
fn test_every_month_name() {
    let names: Vec<&str> = (1..=12)
        .map(|m| MonthYear::new(2023, m).unwrap().month_name())
        .collect();
    assert_eq!(names[0], "January");
    assert_eq!(names[8], "September");
    assert_eq!(names[11], "December");
}

#[test]
fn test_year_is_four_digits() {
    assert_eq!(MonthYear::new(999, 1).unwrap().label(), "January 0999");
}

#[test]
fn test_serde_uses_label() {
    let bucket = MonthYear::new(2022, 11).unwrap();
    let json = serde_json::to_string(&bucket).unwrap();
    assert_eq!(json, "\"November 2022\"");
    let back: MonthYear = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bucket);
}

#[test]
fn test_zero_month_rejected() {
    assert_eq!(MonthYear::new(2023, 0), Err(TemporalError::InvalidMonth(0)));
}
