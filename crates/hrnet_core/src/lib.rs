//! Core logic for the HRnet employee records app.
//!
//! The UI layer owns rendering and screen state; this crate owns the
//! employee model, its storage, the search/sort/paginate table engine and
//! the date-picker calendar math.

pub mod calendar;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod table;

pub use calendar::grid::{build_month_grid, CalendarDay, MonthGrid, YearPage};
pub use calendar::math::{
    days_in_month, first_weekday_of_month, is_date_value, is_valid_iso, next_month,
    parse_date, previous_month, to_iso, to_iso_text, MonthYear,
};
pub use calendar::{CalendarError, CalendarResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{
    Department, Employee, EmployeeField, EmployeeId, EmployeeValidationError, NewEmployee,
};
pub use repo::employee_repo::{
    EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository,
};
pub use search::filter::{search, SearchQuery};
pub use service::employee_service::{
    build_table_page, EmployeeService, ServiceError, ServiceResult, TablePage, TableState,
};
pub use table::page::{build_page_window, page_count, paginate, PageItem};
pub use table::sort::{sort, sort_by_field, SortDirection, SortError, SortSpec};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
