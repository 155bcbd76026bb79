//! Summary repository — the coarse per-bucket event-count strip.
//!
//! The compiler divides the whole log into fixed buckets and records how
//! many events fall into each; the viewer draws this as an overview strip.

use rusqlite::{Connection, params};

use crate::errors::Result;

/// Summary repository — stateless, every method takes `&Connection`.
pub struct SummaryRepo;

impl SummaryRepo {
    /// Append one bucket count; used by tests and seeding tools.
    pub fn append(conn: &Connection, events: i64) -> Result<()> {
        let _ = conn.execute(
            "INSERT INTO summary (events) VALUES (?1)",
            params![events],
        )?;
        Ok(())
    }

    /// Per-bucket event counts in bucket order.
    pub fn bucket_counts(conn: &Connection) -> Result<Vec<i64>> {
        let mut stmt = conn.prepare("SELECT events FROM summary ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
