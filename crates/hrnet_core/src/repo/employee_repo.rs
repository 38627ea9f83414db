//! Employee store contract and SQLite slot implementation.
//!
//! # Responsibility
//! - Append employees with a fresh identifier and list the stored
//!   collection.
//! - Keep the JSON slot layout inside the persistence boundary.
//!
//! # Invariants
//! - The collection is stored as one JSON array in the `employees` slot.
//! - A missing slot is an empty collection.
//! - Appends are read-modify-write inside one transaction and preserve
//!   insertion order.
//! - Identifiers are unique across the stored collection.

use crate::db::slot::{read_slot, write_slot};
use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId, NewEmployee};
use log::{debug, info};
use rusqlite::{Connection, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Slot holding the serialized employee array.
pub const EMPLOYEES_SLOT: &str = "employees";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Stored slot content is not a valid employee array.
    InvalidData(String),
    /// Collection could not be encoded for storage.
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
            Self::Encode(err) => write!(f, "failed to encode employees: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for the employee collection.
pub trait EmployeeRepository {
    /// Stores a new employee under a fresh id and returns the stored record.
    fn append(&mut self, employee: NewEmployee) -> RepoResult<Employee>;
    /// Returns every stored employee in insertion order.
    fn list(&self) -> RepoResult<Vec<Employee>>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn append(&mut self, employee: NewEmployee) -> RepoResult<Employee> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut employees = load_employees(&tx)?;
        let id = fresh_id(&employees);
        let stored = Employee::with_id(id, employee);
        employees.push(stored.clone());

        let payload = serde_json::to_string(&employees).map_err(RepoError::Encode)?;
        write_slot(&tx, EMPLOYEES_SLOT, &payload)?;
        tx.commit()?;

        info!(
            "event=employee_append module=repo status=ok total={}",
            employees.len()
        );
        Ok(stored)
    }

    fn list(&self) -> RepoResult<Vec<Employee>> {
        let employees = load_employees(self.conn)?;
        debug!(
            "event=employee_list module=repo status=ok total={}",
            employees.len()
        );
        Ok(employees)
    }
}

fn load_employees(conn: &Connection) -> RepoResult<Vec<Employee>> {
    let Some(payload) = read_slot(conn, EMPLOYEES_SLOT)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&payload)
        .map_err(|err| RepoError::InvalidData(format!("slot `{EMPLOYEES_SLOT}`: {err}")))
}

fn fresh_id(existing: &[Employee]) -> EmployeeId {
    loop {
        let candidate = Uuid::new_v4();
        if existing.iter().all(|employee| employee.id != candidate) {
            return candidate;
        }
    }
}
