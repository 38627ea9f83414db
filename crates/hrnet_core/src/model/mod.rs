//! Domain model for employee records.
//!
//! # Responsibility
//! - Define the canonical record persisted by the store and consumed by the
//!   table engine.
//!
//! # Invariants
//! - Every record is identified by a stable `EmployeeId`.
//! - Records are append-only; the core never mutates or deletes them.

pub mod employee;
