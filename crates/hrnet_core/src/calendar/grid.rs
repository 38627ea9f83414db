//! Month grid and year-picker views.
//!
//! # Responsibility
//! - Build the 42-cell month view rendered by the date picker.
//! - Provide the year range shown by the year picker.
//!
//! # Invariants
//! - Grid cells are ordered week by week, each week starting on Sunday.
//! - Each cell carries the month/year it actually belongs to.

use super::math::{days_in_month, first_weekday_of_month, iso_key, next_month, previous_month};
use super::{CalendarResult, CALENDAR_WEEKS, DEFAULT_YEAR_RANGE};
use chrono::NaiveDate;

const GRID_CELLS: usize = CALENDAR_WEEKS * 7;

/// Weekday column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Full English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a 1-based month, `None` outside `1..=12`.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// `YYYY-MM-DD`, unique within a grid.
    pub iso: String,
}

impl CalendarDay {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            iso: iso_key(year, month, day),
        }
    }

    /// Calendar date of this cell.
    ///
    /// `None` for cells the `year % 4` leap rule produces but the Gregorian
    /// calendar does not have (e.g. `1900-02-29`).
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Fixed 6-week view of one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// Displayed month.
    pub month: u32,
    /// Displayed year.
    pub year: i32,
    /// Exactly 42 cells.
    pub days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Whether `day` belongs to the displayed month (not a spill-over cell).
    pub fn is_in_month(&self, day: &CalendarDay) -> bool {
        day.month == self.month && day.year == self.year
    }

    /// The six week rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Builds the month view for `month`/`year`.
///
/// The grid starts with the tail of the previous month so the first row
/// begins on Sunday, then every day of the month, then the head of the next
/// month until 42 cells are filled.
///
/// # Errors
/// Fails when `month` is outside `1..=12` or the year cannot hold a date.
pub fn build_month_grid(month: u32, year: i32) -> CalendarResult<MonthGrid> {
    let month_days = days_in_month(month, year);
    let first_weekday = first_weekday_of_month(month, year)?;

    let leading = first_weekday - 1;
    let trailing = GRID_CELLS as u32 - (leading + month_days);

    let prev = previous_month(month, year);
    let next = next_month(month, year);
    let prev_days = days_in_month(prev.month, prev.year);

    let mut days = Vec::with_capacity(GRID_CELLS);
    days.extend(
        (prev_days - leading + 1..=prev_days).map(|day| CalendarDay::new(prev.year, prev.month, day)),
    );
    days.extend((1..=month_days).map(|day| CalendarDay::new(year, month, day)));
    days.extend((1..=trailing).map(|day| CalendarDay::new(next.year, next.month, day)));

    Ok(MonthGrid { month, year, days })
}

/// Years listed by the year picker: `year - range ..= year + range`.
///
/// Bounds saturate at the `i32` limits; a negative `range` yields no years.
pub fn year_range(year: i32, range: i32) -> Vec<i32> {
    (year.saturating_sub(range)..=year.saturating_add(range)).collect()
}

/// One page of the year picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearPage {
    /// Center year of the page.
    pub base: i32,
    /// Years on each side of `base`.
    pub range: i32,
}

impl YearPage {
    pub fn new(base: i32) -> Self {
        Self {
            base,
            range: DEFAULT_YEAR_RANGE,
        }
    }

    pub fn years(&self) -> Vec<i32> {
        year_range(self.base, self.range)
    }

    /// The page immediately before this one, with no overlap.
    pub fn previous(self) -> Self {
        Self {
            base: self.base.saturating_sub(self.span()),
            ..self
        }
    }

    /// The page immediately after this one, with no overlap.
    pub fn next(self) -> Self {
        Self {
            base: self.base.saturating_add(self.span()),
            ..self
        }
    }

    fn span(&self) -> i32 {
        self.range.saturating_mul(2).saturating_add(1)
    }
}
