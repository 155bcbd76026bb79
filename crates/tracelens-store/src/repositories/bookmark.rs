//! Bookmark repository — unfiltered reads over `BMARK`-tagged rows.
//!
//! Bookmarks never pass through the reconstruction engine; the viewer reads
//! them directly, plus two point queries used for jump-to-bookmark
//! navigation.

use rusqlite::{Connection, params};
use tracelens_core::Bookmark;

use crate::errors::Result;

/// Bookmark repository — stateless, every method takes `&Connection`.
pub struct BookmarkRepo;

impl BookmarkRepo {
    /// Visit every bookmark in ascending time order. Returns the count.
    pub fn for_each(conn: &Connection, mut on_row: impl FnMut(Bookmark)) -> Result<usize> {
        let mut stmt = conn.prepare(
            "SELECT start_time, start_text FROM events
             WHERE start_type = 'BMARK' ORDER BY start_time",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Bookmark {
                time: row.get(0)?,
                label: row.get(1)?,
            })
        })?;

        let mut count = 0;
        for row in rows {
            on_row(row?);
            count += 1;
        }
        Ok(count)
    }

    /// All bookmarks in ascending time order.
    pub fn all(conn: &Connection) -> Result<Vec<Bookmark>> {
        let mut out = Vec::new();
        let _ = Self::for_each(conn, |b| out.push(b))?;
        Ok(out)
    }

    /// Time of the first bookmark strictly after `hint`, if any.
    pub fn earliest_after(conn: &Connection, hint: f64) -> Result<Option<f64>> {
        let time: Option<f64> = conn.query_row(
            "SELECT min(start_time) FROM events
             WHERE start_time > ?1 AND start_type = 'BMARK'",
            params![hint],
            |row| row.get(0),
        )?;
        Ok(time)
    }

    /// Time of the last bookmark strictly before `hint`, if any.
    pub fn latest_before(conn: &Connection, hint: f64) -> Result<Option<f64>> {
        let time: Option<f64> = conn.query_row(
            "SELECT max(start_time) FROM events
             WHERE start_time < ?1 AND start_type = 'BMARK'",
            params![hint],
            |row| row.get(0),
        )?;
        Ok(time)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
