//! SQLite slot storage.
//!
//! A slot is one row of the `slots` table holding a serialized collection
//! under a fixed name. Connections come out of [`open_db`] or
//! [`open_db_in_memory`] with the table in place; [`slot`] reads and writes
//! rows.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod schema;
pub mod slot;

pub use open::{open_db, open_db_in_memory};
pub use schema::SLOTS_SCHEMA_VERSION;

pub type DbResult<T> = Result<T, DbError>;

/// Storage failure below the repository layer.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file carries a slot layout newer than this build writes.
    NewerSchema { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
            Self::NewerSchema { found, supported } => write!(
                f,
                "slot store layout v{found} was written by a newer build (this build knows v{supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::NewerSchema { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
