//! Repository layer for the persisted employee collection.
//!
//! # Responsibility
//! - Define the append/list storage contract used by services.
//! - Isolate SQLite and JSON slot details from the table engine.
//!
//! # Invariants
//! - Repositories never reorder, mutate or drop stored records.

pub mod employee_repo;
