use chrono::NaiveDate;
use hrnet_core::calendar::math::{is_leap_year, is_same_day, is_same_month};
use hrnet_core::{
    days_in_month, first_weekday_of_month, is_date_value, is_valid_iso, next_month, parse_date,
    previous_month, to_iso, to_iso_text, CalendarError, MonthYear,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn days_in_month_covers_all_month_lengths() {
    assert_eq!(days_in_month(1, 2023), 31);
    assert_eq!(days_in_month(2, 2023), 28);
    assert_eq!(days_in_month(2, 2024), 29);
    assert_eq!(days_in_month(4, 2024), 30);
    assert_eq!(days_in_month(9, 2024), 30);
    assert_eq!(days_in_month(12, 2024), 31);
}

#[test]
fn leap_rule_does_not_special_case_centuries() {
    assert!(is_leap_year(1900));
    assert!(is_leap_year(2000));
    assert_eq!(days_in_month(2, 1900), 29);
    assert_eq!(days_in_month(2, 2100), 29);
}

#[test]
fn first_weekday_counts_from_sunday() {
    // 2024-09-01 is a Sunday, 2024-06-01 a Saturday, 2024-01-01 a Monday.
    assert_eq!(first_weekday_of_month(9, 2024).unwrap(), 1);
    assert_eq!(first_weekday_of_month(6, 2024).unwrap(), 7);
    assert_eq!(first_weekday_of_month(1, 2024).unwrap(), 2);
}

#[test]
fn first_weekday_rejects_impossible_months() {
    assert_eq!(
        first_weekday_of_month(0, 2024).unwrap_err(),
        CalendarError::InvalidMonth(0)
    );
    assert_eq!(
        first_weekday_of_month(13, 2024).unwrap_err(),
        CalendarError::InvalidMonth(13)
    );
}

#[test]
fn month_navigation_wraps_at_year_boundaries() {
    assert_eq!(previous_month(1, 2024), MonthYear::new(12, 2023));
    assert_eq!(previous_month(7, 2024), MonthYear::new(6, 2024));
    assert_eq!(next_month(12, 2024), MonthYear::new(1, 2025));
    assert_eq!(next_month(3, 2024), MonthYear::new(4, 2024));
    assert_eq!(MonthYear::new(1, 2024).previous().next(), MonthYear::new(1, 2024));
}

#[test]
fn month_navigation_saturates_at_year_limits() {
    assert_eq!(previous_month(1, i32::MIN), MonthYear::new(12, i32::MIN));
    assert_eq!(next_month(12, i32::MAX), MonthYear::new(1, i32::MAX));
    assert_eq!(previous_month(2, i32::MIN), MonthYear::new(1, i32::MIN));
}

#[test]
fn to_iso_zero_pads() {
    assert_eq!(to_iso(date(2024, 3, 7)), "2024-03-07");
}

#[test]
fn to_iso_text_returns_none_for_non_dates() {
    assert_eq!(to_iso_text("2024-03-07").as_deref(), Some("2024-03-07"));
    assert_eq!(to_iso_text("3/7/2024").as_deref(), Some("2024-03-07"));
    assert_eq!(to_iso_text(""), None);
    assert_eq!(to_iso_text("not a date"), None);
    assert_eq!(to_iso_text("2024-02-30"), None);
}

#[test]
fn iso_round_trip_is_stable() {
    for original in [date(2024, 2, 29), date(1999, 12, 31), date(2000, 1, 1)] {
        let first = to_iso(original);
        let reparsed = parse_date(&first).unwrap();
        assert_eq!(reparsed, original);
        assert_eq!(to_iso(reparsed), first);
    }
}

#[test]
fn is_valid_iso_requires_shape_and_real_date() {
    assert!(is_valid_iso("2024-02-29"));
    assert!(!is_valid_iso("2023-02-30"));
    assert!(!is_valid_iso("2023-2-3"));
    assert!(!is_valid_iso("2023-02-03T00:00"));
    assert!(!is_valid_iso("02/03/2023"));
    assert!(!is_valid_iso(""));
}

#[test]
fn is_date_value_accepts_only_real_dates() {
    assert!(is_date_value("2024-01-15"));
    assert!(is_date_value("1/15/2024"));
    assert!(!is_date_value("13/15/2024"));
    assert!(!is_date_value("tomorrow"));
}

#[test]
fn same_month_and_same_day_checks() {
    assert!(is_same_month(date(2024, 5, 1), date(2024, 5, 31)));
    assert!(!is_same_month(date(2024, 5, 1), date(2023, 5, 1)));
    assert!(is_same_day(date(2024, 5, 1), date(2024, 5, 1)));
    assert!(!is_same_day(date(2024, 5, 1), date(2024, 5, 2)));
}
