//! Layout of the `slots` table.
//!
//! The store has a single table, so the layout is tracked as one number in
//! `PRAGMA user_version`: `0` on a fresh file, [`SLOTS_SCHEMA_VERSION`] once
//! the table exists. Files stamped by a newer build are refused so an older
//! binary never rewrites slots it does not understand.

use super::{DbError, DbResult};
use log::info;
use rusqlite::Connection;
use std::cmp::Ordering;

/// Slot table layout written by this build.
pub const SLOTS_SCHEMA_VERSION: u32 = 1;

const CREATE_SLOTS_TABLE: &str = include_str!("slots.sql");

/// Creates the slot table on a fresh database.
///
/// # Errors
/// - `DbError::NewerSchema` when the file was stamped by a newer build.
/// - `DbError::Sqlite` when the table cannot be created.
pub(crate) fn ensure_slot_table(conn: &mut Connection) -> DbResult<()> {
    let found = stamped_version(conn)?;
    match found.cmp(&SLOTS_SCHEMA_VERSION) {
        Ordering::Greater => Err(DbError::NewerSchema {
            found,
            supported: SLOTS_SCHEMA_VERSION,
        }),
        Ordering::Equal => Ok(()),
        Ordering::Less => {
            let tx = conn.transaction()?;
            tx.execute_batch(CREATE_SLOTS_TABLE)?;
            tx.pragma_update(None, "user_version", SLOTS_SCHEMA_VERSION)?;
            tx.commit()?;
            info!(
                "event=slot_table module=db status=created from_version={found} version={SLOTS_SCHEMA_VERSION}"
            );
            Ok(())
        }
    }
}

pub(crate) fn stamped_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?)
}
