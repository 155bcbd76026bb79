//! Embedded schema and database version check.
//!
//! The schema is embedded at compile time via [`include_str!`] and executed
//! in a single transaction. A compiled trace database records the compiler
//! version in its `settings` table; [`version_check`] rejects databases
//! written by an incompatible compiler before any load pass runs.

use rusqlite::Connection;
use tracing::debug;

use crate::errors::{Result, StoreError};

/// Database layout version this crate understands.
pub const SCHEMA_VERSION: i64 = 1;

/// Create all tables and indexes on the given connection.
///
/// Idempotent: every statement is `IF NOT EXISTS`. Runs inside one
/// transaction, so a failure leaves no partial schema behind.
pub fn create_schema(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(include_str!("schema.sql"))
        .map_err(|e| StoreError::Schema(format!("schema creation failed: {e}")))?;
    tx.commit()?;
    debug!(version = SCHEMA_VERSION, "schema created");
    Ok(())
}

/// Check that the database was produced by a compatible compiler version.
///
/// # Errors
///
/// [`StoreError::VersionMismatch`] when the recorded version differs from
/// [`SCHEMA_VERSION`]; [`StoreError::Schema`] when the `settings` table is
/// missing or empty.
pub fn version_check(conn: &Connection) -> Result<()> {
    let found: i64 = conn
        .query_row("SELECT version FROM settings LIMIT 1", [], |row| row.get(0))
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                StoreError::Schema("settings table is empty".to_string())
            }
            other => StoreError::Sqlite(other),
        })?;

    if found != SCHEMA_VERSION {
        return Err(StoreError::VersionMismatch {
            found,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
