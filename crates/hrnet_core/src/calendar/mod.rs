//! Calendar computation for the date-picker widget.
//!
//! # Responsibility
//! - Provide month arithmetic and ISO date helpers (`math`).
//! - Build the fixed 6-week month grid and the year-picker range (`grid`).
//!
//! # Invariants
//! - Every function here is pure; no clock reads, no I/O.
//! - A month grid always has `CALENDAR_WEEKS * 7` entries.
//! - Leap years follow `year % 4 == 0` without century exceptions.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod grid;
pub mod math;

/// Number of week rows rendered by the month view.
pub const CALENDAR_WEEKS: usize = 6;

/// Years shown on each side of the base year in the year picker.
pub const DEFAULT_YEAR_RANGE: i32 = 12;

pub type CalendarResult<T> = Result<T, CalendarError>;

/// Rejected month/year input for grid construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    /// Month outside `1..=12`.
    InvalidMonth(u32),
    /// Year outside the range a calendar date can be built for.
    YearOutOfRange(i32),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => write!(f, "month must be in 1..=12, got {month}"),
            Self::YearOutOfRange(year) => write!(f, "year {year} is outside the supported range"),
        }
    }
}

impl Error for CalendarError {}
