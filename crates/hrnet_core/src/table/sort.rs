//! Field/direction ordering for employee collections.
//!
//! # Responsibility
//! - Validate sort requests coming from the UI by field name.
//! - Compare dates chronologically and text with a locale-style collation.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep their input order in both
//!   directions.
//! - Unknown field names are rejected, never ignored.
//! - Date values that do not parse order before every real date.

use crate::calendar::math::parse_date;
use crate::model::employee::{Employee, EmployeeField};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub type SortResult<T> = Result<T, SortError>;

/// Sort request error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Field name is not one of the employee fields.
    UnknownField(String),
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "unknown sort field `{name}`"),
        }
    }
}

impl Error for SortError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Field and direction a collection is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: EmployeeField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// First name, ascending.
    fn default() -> Self {
        Self::new(EmployeeField::FirstName, SortDirection::Asc)
    }
}

impl SortSpec {
    pub fn new(field: EmployeeField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Builds a spec from a field name as sent by the UI.
    ///
    /// # Errors
    /// Returns `SortError::UnknownField` when `field` names no employee field.
    pub fn parse(field: &str, direction: SortDirection) -> SortResult<Self> {
        EmployeeField::from_key(field)
            .map(|field| Self::new(field, direction))
            .ok_or_else(|| SortError::UnknownField(field.to_string()))
    }

    /// Spec after the user picks `field` in the sort menu.
    ///
    /// Picking the active field flips its direction; picking another field
    /// starts ascending.
    pub fn toggle(self, field: EmployeeField) -> Self {
        if field == self.field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }
}

/// Returns `records` ordered by `spec`. The input is left untouched.
pub fn sort(records: &[Employee], spec: &SortSpec) -> Vec<Employee> {
    let mut keyed = records
        .iter()
        .map(|employee| (SortKey::of(employee, spec.field), employee))
        .collect::<Vec<_>>();

    // `sort_by` is stable, which keeps ties in input order.
    keyed.sort_by(|(left, _), (right, _)| spec.direction.apply(left.cmp(right)));

    keyed
        .into_iter()
        .map(|(_, employee)| employee.clone())
        .collect()
}

/// Orders `records` by a field name coming straight from the UI.
pub fn sort_by_field(
    records: &[Employee],
    field: &str,
    direction: SortDirection,
) -> SortResult<Vec<Employee>> {
    let spec = SortSpec::parse(field, direction)?;
    Ok(sort(records, &spec))
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Date(Option<NaiveDate>),
    Text(CollationKey),
}

impl SortKey {
    fn of(employee: &Employee, field: EmployeeField) -> Self {
        let value = employee.value(field);
        if field.is_date() {
            Self::Date(parse_date(value))
        } else {
            Self::Text(CollationKey::new(value))
        }
    }
}

/// Three-level comparison key: base letters, then accents, then case with
/// lowercase first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: String,
    accented: String,
    uppercase_mask: Vec<bool>,
}

impl CollationKey {
    fn new(value: &str) -> Self {
        let accented = value.nfd().flat_map(char::to_lowercase).collect::<String>();
        let base = accented
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .collect();
        let uppercase_mask = value.nfd().map(char::is_uppercase).collect();
        Self {
            base,
            accented,
            uppercase_mask,
        }
    }
}

/// Locale-style comparison used for text columns.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    CollationKey::new(left).cmp(&CollationKey::new(right))
}
