//! Event repository — the windowed interval scan feeding the load pass.
//!
//! [`EventRepo::scan_window`] implements the store side of the load
//! contract: rows whose extent overlaps the window and whose duration meets
//! the cutoff (bookmarks are exempt), in canonical order — ascending
//! `start_time`, ties broken by descending `end_time`. The reconstruction
//! engine depends on exactly this order.
//!
//! Failure semantics are deliberately soft: a row that fails column mapping
//! or kind parsing is skipped and counted; a mid-stream query error ends the
//! scan early and marks the stats truncated. Neither aborts the pass.

use rusqlite::{Connection, Row, params};
use tracing::warn;

use tracelens_core::{TimeWindow, TimelineEvent};

use crate::errors::Result;
use crate::row_types::EventRow;

/// Columns of the `events` table, in scan order.
const EVENT_COLUMNS: &str = "id, thread_id, start_location, end_location, \
     start_time, end_time, start_type, end_type, start_text, end_text";

/// Flow control returned by a scan callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanControl {
    /// Keep delivering rows.
    Continue,
    /// Stop the scan (cooperative cancellation).
    Stop,
}

/// Outcome of a window scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Rows delivered to the callback.
    pub delivered: usize,
    /// Malformed rows skipped (bad column type or unknown kind tag).
    pub skipped: usize,
    /// Whether the row stream ended early on a query error.
    pub truncated: bool,
}

/// Event repository — stateless, every method takes `&Connection`.
pub struct EventRepo;

impl EventRepo {
    /// Insert one raw event row, maintaining the interval index.
    ///
    /// Mirrors what the trace compiler writes; used by tests and seeding
    /// tools.
    pub fn insert(conn: &Connection, row: &EventRow) -> Result<()> {
        let _ = conn.execute(
            "INSERT INTO events (id, thread_id, start_location, end_location,
             start_time, end_time, start_type, end_type, start_text, end_text)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                row.id,
                row.thread_id,
                row.start_location,
                row.end_location,
                row.start_time,
                row.end_time,
                row.start_type,
                row.end_type,
                row.start_text,
                row.end_text,
            ],
        )?;
        let _ = conn.execute(
            "INSERT INTO events_index (id, start_time, end_time) VALUES (?1, ?2, ?3)",
            params![row.id, row.start_time, row.end_time],
        )?;
        Ok(())
    }

    /// Stream the interval rows for one load pass.
    ///
    /// Delivers every well-formed row overlapping `window` whose duration is
    /// ≥ `cutoff` (or whose start tag is `BMARK`, which is exempt), in
    /// canonical order. The callback decides whether to continue after each
    /// row.
    ///
    /// # Errors
    ///
    /// Only for failures before the first row (pool, prepare, bind). Errors
    /// mid-stream are absorbed into [`ScanStats::truncated`].
    pub fn scan_window(
        conn: &Connection,
        window: TimeWindow,
        cutoff: f64,
        mut on_row: impl FnMut(TimelineEvent) -> ScanControl,
    ) -> Result<ScanStats> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {EVENT_COLUMNS}
             FROM events
             WHERE id IN (SELECT id FROM events_index
                          WHERE end_time > ?1 AND start_time < ?2)
               AND ((end_time - start_time) >= ?3 OR start_type = 'BMARK')
             ORDER BY start_time ASC, end_time DESC"
        ))?;
        let mut rows = stmt.query(params![window.start, window.end, cutoff])?;

        let mut stats = ScanStats::default();
        loop {
            let row = match rows.next() {
                Ok(Some(row)) => row,
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "event scan ended early");
                    stats.truncated = true;
                    break;
                }
            };

            let raw = match Self::map_row(row) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(error = %e, "skipping malformed event row");
                    stats.skipped += 1;
                    continue;
                }
            };

            match TimelineEvent::try_from(raw) {
                Ok(event) => {
                    stats.delivered += 1;
                    if on_row(event) == ScanControl::Stop {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "skipping event row with unknown kind");
                    stats.skipped += 1;
                }
            }
        }
        Ok(stats)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<EventRow> {
        Ok(EventRow {
            id: row.get(0)?,
            thread_id: row.get(1)?,
            start_location: row.get(2)?,
            end_location: row.get(3)?,
            start_time: row.get(4)?,
            end_time: row.get(5)?,
            start_type: row.get(6)?,
            end_type: row.get(7)?,
            start_text: row.get(8)?,
            end_text: row.get(9)?,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
