//! Named-slot key/value access.
//!
//! A slot holds one serialized value under a fixed name. A missing slot is
//! reported as `None`, which callers treat as "no data yet".

use super::DbResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Reads the raw value stored under `name`.
pub fn read_slot(conn: &Connection, name: &str) -> DbResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM slots WHERE name = ?1;", [name], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

/// Stores `value` under `name`, replacing any previous value.
///
/// Takes a plain connection so it also works inside a `Transaction`.
pub fn write_slot(conn: &Connection, name: &str, value: &str) -> DbResult<()> {
    conn.execute(
        "INSERT INTO slots (name, value) VALUES (?1, ?2)
         ON CONFLICT(name) DO UPDATE SET
            value = excluded.value,
            updated_at = (strftime('%s', 'now') * 1000);",
        params![name, value],
    )?;
    Ok(())
}
