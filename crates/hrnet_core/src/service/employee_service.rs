//! Employee use-case service.
//!
//! # Responsibility
//! - Validate form payloads before they reach the store.
//! - Run the search -> sort -> paginate pipeline for a caller-owned
//!   [`TableState`].
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - The pipeline works on a snapshot; stored records are never mutated.
//! - Zero matches is a normal `TablePage`, not an error.

use crate::model::employee::{Employee, EmployeeField, EmployeeValidationError, NewEmployee};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use crate::search::filter::{search_with, SearchQuery};
use crate::table::page::{build_page_window, page_count, paginate, PageItem};
use crate::table::sort::{sort, SortDirection, SortError, SortSpec};
use crate::table::{normalize_page_size, DEFAULT_NEIGHBOURS, DEFAULT_PAGE_SIZE};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for employee use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Form payload failed one or more field checks.
    Validation(Vec<EmployeeValidationError>),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => {
                let fields = errors
                    .iter()
                    .map(|err| err.field.key())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "invalid employee fields: {fields}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Browse screen state owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    query: String,
    sort: SortSpec,
    page: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortSpec::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replaces the search text and goes back to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Applies a sort-menu click on `field` (see [`SortSpec::toggle`]).
    pub fn set_sort_field(&mut self, field: EmployeeField) {
        self.sort = self.sort.toggle(field);
        self.page = 1;
    }

    /// Applies a sort-menu click by field name.
    ///
    /// # Errors
    /// Returns `SortError::UnknownField` and leaves the state untouched when
    /// `field` names no employee field.
    pub fn set_sort_field_name(&mut self, field: &str) -> Result<(), SortError> {
        let parsed = SortSpec::parse(field, SortDirection::Asc)?;
        self.set_sort_field(parsed.field);
        Ok(())
    }

    /// Changes rows per page, snapping to a supported size, and goes back
    /// to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = normalize_page_size(Some(page_size));
        self.page = 1;
    }

    /// Moves to `page` without clamping; pages past the end render empty.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// One rendered page of the browse table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePage {
    /// Rows of the current page.
    pub rows: Vec<Employee>,
    /// Number of records matching the query across all pages.
    pub total_matches: usize,
    /// Number of pages for `total_matches`.
    pub page_count: usize,
    /// Navigation strip for the current page.
    pub page_window: Vec<PageItem>,
}

impl TablePage {
    /// Whether the query matched nothing ("no matching records").
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }
}

/// Runs search, sort and pagination over `records` for `state`.
pub fn build_table_page(records: &[Employee], state: &TableState) -> TablePage {
    let query = SearchQuery::parse(&state.query);
    let matches = sort(&search_with(records, &query), &state.sort);
    let total_matches = matches.len();
    let pages = page_count(total_matches, state.page_size);

    TablePage {
        rows: paginate(&matches, state.page, state.page_size).to_vec(),
        total_matches,
        page_count: pages,
        page_window: build_page_window(pages, state.page, DEFAULT_NEIGHBOURS),
    }
}

/// Employee service facade over repository implementations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Trims, validates and stores a new employee.
    ///
    /// # Errors
    /// - `ServiceError::Validation` listing every failing field.
    /// - `ServiceError::Repo` when persistence fails.
    pub fn create_employee(&mut self, employee: NewEmployee) -> ServiceResult<Employee> {
        let employee = employee.trimmed();
        if let Err(errors) = employee.validate() {
            warn!(
                "event=employee_create module=service status=rejected invalid_fields={}",
                errors.len()
            );
            return Err(ServiceError::Validation(errors));
        }
        Ok(self.repo.append(employee)?)
    }

    /// Lists all stored employees in insertion order.
    pub fn list_employees(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.repo.list()?)
    }

    /// Loads the stored collection and renders the page described by `state`.
    pub fn browse(&self, state: &TableState) -> ServiceResult<TablePage> {
        let employees = self.repo.list()?;
        let page = build_table_page(&employees, state);
        debug!(
            "event=employee_browse module=service status=ok total={} matches={} page={} page_count={}",
            employees.len(),
            page.total_matches,
            state.page,
            page.page_count
        );
        Ok(page)
    }
}
