//! Employee domain model.
//!
//! # Responsibility
//! - Define the persisted employee record and the form payload it is
//!   created from.
//! - Provide form-level field checks and the fixed state/department lists.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused.
//! - Every field is always present; empty strings are allowed in storage.
//! - Wire keys match the persisted JSON array (`firstName`, `startDay`, ...).

use crate::calendar::math::is_valid_iso;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of an employee record.
pub type EmployeeId = Uuid;

/// Departments offered by the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Sales,
    Marketing,
    Engineering,
    HumanResources,
    Legal,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Sales,
        Department::Marketing,
        Department::Engineering,
        Department::HumanResources,
        Department::Legal,
    ];

    /// Display label, also the stored value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Engineering => "Engineering",
            Self::HumanResources => "Human Resources",
            Self::Legal => "Legal",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dept| dept.label() == value)
    }
}

/// US state or territory offered by the state dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsState {
    pub name: &'static str,
    pub abbreviation: &'static str,
}

const fn state(name: &'static str, abbreviation: &'static str) -> UsState {
    UsState { name, abbreviation }
}

/// States and territories; the stored value is `name`.
pub const US_STATES: &[UsState] = &[
    state("Alabama", "AL"),
    state("Alaska", "AK"),
    state("American Samoa", "AS"),
    state("Arizona", "AZ"),
    state("Arkansas", "AR"),
    state("California", "CA"),
    state("Colorado", "CO"),
    state("Connecticut", "CT"),
    state("Delaware", "DE"),
    state("District Of Columbia", "DC"),
    state("Federated States Of Micronesia", "FM"),
    state("Florida", "FL"),
    state("Georgia", "GA"),
    state("Guam", "GU"),
    state("Hawaii", "HI"),
    state("Idaho", "ID"),
    state("Illinois", "IL"),
    state("Indiana", "IN"),
    state("Iowa", "IA"),
    state("Kansas", "KS"),
    state("Kentucky", "KY"),
    state("Louisiana", "LA"),
    state("Maine", "ME"),
    state("Marshall Islands", "MH"),
    state("Maryland", "MD"),
    state("Massachusetts", "MA"),
    state("Michigan", "MI"),
    state("Minnesota", "MN"),
    state("Mississippi", "MS"),
    state("Missouri", "MO"),
    state("Montana", "MT"),
    state("Nebraska", "NE"),
    state("Nevada", "NV"),
    state("New Hampshire", "NH"),
    state("New Jersey", "NJ"),
    state("New Mexico", "NM"),
    state("New York", "NY"),
    state("North Carolina", "NC"),
    state("North Dakota", "ND"),
    state("Northern Mariana Islands", "MP"),
    state("Ohio", "OH"),
    state("Oklahoma", "OK"),
    state("Oregon", "OR"),
    state("Palau", "PW"),
    state("Pennsylvania", "PA"),
    state("Puerto Rico", "PR"),
    state("Rhode Island", "RI"),
    state("South Carolina", "SC"),
    state("South Dakota", "SD"),
    state("Tennessee", "TN"),
    state("Texas", "TX"),
    state("Utah", "UT"),
    state("Vermont", "VT"),
    state("Virgin Islands", "VI"),
    state("Virginia", "VA"),
    state("Washington", "WA"),
    state("West Virginia", "WV"),
    state("Wisconsin", "WI"),
    state("Wyoming", "WY"),
];

/// Looks up a state by its stored name.
pub fn find_state(name: &str) -> Option<&'static UsState> {
    US_STATES.iter().find(|state| state.name == name)
}

/// Form payload for a new employee. Carries no identifier yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub street: String,
    pub city: String,
    /// State name from [`US_STATES`].
    pub state: String,
    pub zipcode: String,
    /// `YYYY-MM-DD`. Stored as `startDay`.
    #[serde(rename = "startDay")]
    pub start_date: String,
    /// Label from [`Department`].
    pub department: String,
}

/// Field of an employee record, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    FirstName,
    LastName,
    DateOfBirth,
    Street,
    City,
    State,
    Zipcode,
    StartDate,
    Department,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 9] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::DateOfBirth,
        EmployeeField::Street,
        EmployeeField::City,
        EmployeeField::State,
        EmployeeField::Zipcode,
        EmployeeField::StartDate,
        EmployeeField::Department,
    ];

    /// Persisted key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfBirth => "dateOfBirth",
            Self::Street => "street",
            Self::City => "city",
            Self::State => "state",
            Self::Zipcode => "zipcode",
            Self::StartDate => "startDay",
            Self::Department => "department",
        }
    }

    /// Human label used by the sort menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::DateOfBirth => "Date of birth",
            Self::Street => "Street",
            Self::City => "City",
            Self::State => "State",
            Self::Zipcode => "Zip code",
            Self::StartDate => "Start day",
            Self::Department => "Department",
        }
    }

    /// Resolves a persisted key (or its snake_case spelling).
    pub fn from_key(key: &str) -> Option<Self> {
        let field = match key {
            "firstName" | "first_name" => Self::FirstName,
            "lastName" | "last_name" => Self::LastName,
            "dateOfBirth" | "date_of_birth" => Self::DateOfBirth,
            "street" => Self::Street,
            "city" => Self::City,
            "state" => Self::State,
            "zipcode" => Self::Zipcode,
            "startDay" | "start_date" => Self::StartDate,
            "department" => Self::Department,
            _ => return None,
        };
        Some(field)
    }

    pub fn is_date(self) -> bool {
        matches!(self, Self::DateOfBirth | Self::StartDate)
    }
}

/// One failed form check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeValidationError {
    pub field: EmployeeField,
    pub message: &'static str,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.key(), self.message)
    }
}

impl Error for EmployeeValidationError {}

impl NewEmployee {
    /// Checks every field and returns all failures in form order.
    pub fn validate(&self) -> Result<(), Vec<EmployeeValidationError>> {
        let errors = EmployeeField::ALL
            .into_iter()
            .filter_map(|field| {
                check_field(field, self.value(field)).map(|message| EmployeeValidationError {
                    field,
                    message,
                })
            })
            .collect::<Vec<_>>();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    ///
    /// This is the form the service validates and stores.
    pub fn trimmed(&self) -> Self {
        let trim = |value: &str| value.trim().to_string();
        Self {
            first_name: trim(&self.first_name),
            last_name: trim(&self.last_name),
            date_of_birth: trim(&self.date_of_birth),
            street: trim(&self.street),
            city: trim(&self.city),
            state: trim(&self.state),
            zipcode: trim(&self.zipcode),
            start_date: trim(&self.start_date),
            department: trim(&self.department),
        }
    }

    /// Raw text of `field`.
    pub fn value(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::DateOfBirth => &self.date_of_birth,
            EmployeeField::Street => &self.street,
            EmployeeField::City => &self.city,
            EmployeeField::State => &self.state,
            EmployeeField::Zipcode => &self.zipcode,
            EmployeeField::StartDate => &self.start_date,
            EmployeeField::Department => &self.department,
        }
    }
}

fn check_field(field: EmployeeField, value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    match field {
        EmployeeField::FirstName | EmployeeField::LastName => {
            (trimmed.chars().count() < 2).then_some("must contain at least 2 characters")
        }
        EmployeeField::DateOfBirth | EmployeeField::StartDate => {
            (!is_valid_iso(trimmed)).then_some("must be a valid date (YYYY-MM-DD)")
        }
        EmployeeField::Street | EmployeeField::City => {
            trimmed.is_empty().then_some("is required")
        }
        EmployeeField::State => find_state(trimmed).is_none().then_some("must be a known state"),
        EmployeeField::Zipcode => (trimmed.len() != 5
            || !trimmed.bytes().all(|byte| byte.is_ascii_digit()))
        .then_some("must contain exactly 5 digits"),
        EmployeeField::Department => {
            Department::from_label(trimmed).is_none().then_some("must be a known department")
        }
    }
}

/// Persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(flatten)]
    pub fields: NewEmployee,
}

impl Employee {
    /// Creates a record with a freshly generated id.
    pub fn new(fields: NewEmployee) -> Self {
        Self::with_id(Uuid::new_v4(), fields)
    }

    /// Creates a record with a caller-provided id (import paths, tests).
    pub fn with_id(id: EmployeeId, fields: NewEmployee) -> Self {
        Self { id, fields }
    }

    /// Raw text of `field`.
    pub fn value(&self, field: EmployeeField) -> &str {
        self.fields.value(field)
    }
}
