//! Month arithmetic and ISO date helpers.
//!
//! # Invariants
//! - `is_valid_iso` requires both the `YYYY-MM-DD` shape and a real date.
//! - Invalid date text is reported as `None`/`false`, never as an error.

use super::{CalendarError, CalendarResult};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid iso date regex"));
static SHORT_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid short date regex"));

/// A month of a given year, as used for calendar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthYear {
    /// 1-based month.
    pub month: u32,
    pub year: i32,
}

impl MonthYear {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    /// Month/year the given date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    pub fn previous(self) -> Self {
        previous_month(self.month, self.year)
    }

    pub fn next(self) -> Self {
        next_month(self.month, self.year)
    }
}

/// Returns whether `year` has a February 29th.
///
/// Century years are not special-cased.
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0
}

/// Number of days in `month` of `year`, from 28 to 31.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday of the first day of the month, `1` = Sunday through `7` = Saturday.
///
/// # Errors
/// - `CalendarError::InvalidMonth` when `month` is outside `1..=12`.
/// - `CalendarError::YearOutOfRange` when no date can be built for `year`.
pub fn first_weekday_of_month(month: u32, year: i32) -> CalendarResult<u32> {
    first_day_of_month(month, year).map(|date| date.weekday().number_from_sunday())
}

pub(crate) fn first_day_of_month(month: u32, year: i32) -> CalendarResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::YearOutOfRange(year))
}

/// Month before `month`/`year`, wrapping January to December of the prior year.
///
/// The year saturates at `i32::MIN`.
pub fn previous_month(month: u32, year: i32) -> MonthYear {
    if month > 1 {
        MonthYear::new(month - 1, year)
    } else {
        MonthYear::new(12, year.saturating_sub(1))
    }
}

/// Month after `month`/`year`, wrapping December to January of the next year.
///
/// The year saturates at `i32::MAX`.
pub fn next_month(month: u32, year: i32) -> MonthYear {
    if month < 12 {
        MonthYear::new(month + 1, year)
    } else {
        MonthYear::new(1, year.saturating_add(1))
    }
}

/// Formats a date as zero-padded `YYYY-MM-DD`.
pub fn to_iso(date: NaiveDate) -> String {
    iso_key(date.year(), date.month(), date.day())
}

/// ISO rendering of stored date text, or `None` when it is not a date.
pub fn to_iso_text(text: &str) -> Option<String> {
    parse_date(text).map(to_iso)
}

pub(crate) fn iso_key(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Parses stored date text.
///
/// Accepts strict `YYYY-MM-DD` and the `M/D/YYYY` short form. Returns `None`
/// for anything that is not a real calendar date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Some(caps) = ISO_DATE_RE.captures(text) {
        return date_from_parts(&caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = SHORT_DATE_RE.captures(text) {
        return date_from_parts(&caps[3], &caps[1], &caps[2]);
    }
    None
}

fn date_from_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// True only for `YYYY-MM-DD` text naming a real calendar date.
pub fn is_valid_iso(text: &str) -> bool {
    match ISO_DATE_RE.captures(text) {
        Some(caps) => date_from_parts(&caps[1], &caps[2], &caps[3]).is_some(),
        None => false,
    }
}

/// True when `text` holds an actual date value.
pub fn is_date_value(text: &str) -> bool {
    parse_date(text).is_some()
}

/// Whether both dates fall in the same month of the same year.
pub fn is_same_month(date: NaiveDate, base: NaiveDate) -> bool {
    MonthYear::of(date) == MonthYear::of(base)
}

/// Whether both dates are the same calendar day.
pub fn is_same_day(date: NaiveDate, base: NaiveDate) -> bool {
    date == base
}
