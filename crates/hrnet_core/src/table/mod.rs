//! Tabular data engine: ordering and pagination of employee collections.
//!
//! # Responsibility
//! - Order records by one field and direction (`sort`).
//! - Slice collections into pages and build the page navigation strip
//!   (`page`).
//!
//! # Invariants
//! - Inputs are never mutated; every operation returns a new value or a
//!   borrowed slice.
//! - Empty collections are ordinary input, not an error.

pub mod page;
pub mod sort;

/// Rows per page when the caller has not chosen one.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page sizes offered by the entries-per-page selector.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];

/// Page numbers shown on each side of the current page.
pub const DEFAULT_NEIGHBOURS: usize = 2;

/// Snaps a requested page size to one of [`PAGE_SIZE_OPTIONS`].
///
/// Unknown sizes fall back to [`DEFAULT_PAGE_SIZE`].
pub fn normalize_page_size(page_size: Option<usize>) -> usize {
    match page_size {
        Some(size) if PAGE_SIZE_OPTIONS.contains(&size) => size,
        _ => DEFAULT_PAGE_SIZE,
    }
}
