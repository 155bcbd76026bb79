//! Settings repository — the log-wide time span and compiler version row.

use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, StoreError};

/// Absolute start and end of the compiled log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogSpan {
    /// First timestamp in the log.
    pub start: f64,
    /// Last timestamp in the log.
    pub end: f64,
}

/// Settings repository — stateless, every method takes `&Connection`.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Write the singleton settings row; used by tests and seeding tools.
    pub fn write(conn: &Connection, version: i64, span: LogSpan) -> Result<()> {
        let _ = conn.execute("DELETE FROM settings", [])?;
        let _ = conn.execute(
            "INSERT INTO settings (version, start_time, end_time) VALUES (?1, ?2, ?3)",
            params![version, span.start, span.end],
        )?;
        Ok(())
    }

    /// The log-wide `[start, end]` span.
    ///
    /// # Errors
    ///
    /// [`StoreError::Schema`] when the settings row is missing (database not
    /// produced by the compiler).
    pub fn log_span(conn: &Connection) -> Result<LogSpan> {
        conn.query_row(
            "SELECT start_time, end_time FROM settings LIMIT 1",
            [],
            |row| {
                Ok(LogSpan {
                    start: row.get(0)?,
                    end: row.get(1)?,
                })
            },
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                StoreError::Schema("settings table is empty".to_string())
            }
            other => StoreError::Sqlite(other),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
