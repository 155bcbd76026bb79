//! Thread repository — the thread label list in stable store order.

use rusqlite::{Connection, params};

use crate::errors::Result;
use crate::row_types::ThreadRow;

/// Thread repository — stateless, every method takes `&Connection`.
pub struct ThreadRepo;

impl ThreadRepo {
    /// Insert one thread row; used by tests and seeding tools.
    pub fn insert(conn: &Connection, node: &str, process: &str, thread: &str) -> Result<()> {
        let _ = conn.execute(
            "INSERT INTO threads (node, process, thread) VALUES (?1, ?2, ?3)",
            params![node, process, thread],
        )?;
        Ok(())
    }

    /// All thread rows in stable store-assigned order.
    pub fn all(conn: &Connection) -> Result<Vec<ThreadRow>> {
        let mut stmt =
            conn.prepare("SELECT id, node, process, thread FROM threads ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ThreadRow {
                    id: row.get(0)?,
                    node: row.get(1)?,
                    process: row.get(2)?,
                    thread: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Display labels (`node-process-thread`) in stable store order.
    pub fn labels(conn: &Connection) -> Result<Vec<String>> {
        Ok(Self::all(conn)?.iter().map(ThreadRow::label).collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
