//! Database row types for mapping between `SQLite` rows and Rust structs.
//!
//! These represent the raw database row shape — not the public API types.
//! Conversion to [`TimelineEvent`] (including strict kind parsing) happens
//! here; the repository layer decides what to do with rows that fail it.

use serde::{Deserialize, Serialize};
use tracelens_core::{EventKind, TimelineEvent, UnknownKindError};

/// Raw event row from the `events` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    /// Record id.
    pub id: i64,
    /// Raw thread id.
    pub thread_id: i64,
    /// Source location of the start edge.
    pub start_location: String,
    /// Source location of the end edge.
    pub end_location: String,
    /// Interval start, store-relative seconds.
    pub start_time: f64,
    /// Interval end, store-relative seconds.
    pub end_time: f64,
    /// Start classification tag as stored (e.g. "OPEN").
    pub start_type: String,
    /// End classification tag as stored.
    pub end_type: String,
    /// Descriptive text of the start edge.
    pub start_text: String,
    /// Descriptive text of the end edge.
    pub end_text: String,
}

impl TryFrom<EventRow> for TimelineEvent {
    type Error = UnknownKindError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let start_kind: EventKind = row.start_type.parse()?;
        let end_kind: EventKind = row.end_type.parse()?;
        Ok(Self {
            id: row.id,
            thread_id: row.thread_id,
            thread_index: 0,
            start_time: row.start_time,
            end_time: row.end_time,
            start_kind,
            end_kind,
            start_location: row.start_location,
            end_location: row.end_location,
            start_text: row.start_text,
            end_text: row.end_text,
            depth: 0,
        })
    }
}

/// Raw thread row from the `threads` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreadRow {
    /// Thread table id (stable store-assigned order).
    pub id: i64,
    /// Originating node name.
    pub node: String,
    /// Originating process name.
    pub process: String,
    /// Thread name within the process.
    pub thread: String,
}

impl ThreadRow {
    /// The display label used by the viewer: `node-process-thread`.
    pub fn label(&self) -> String {
        format!("{}-{}-{}", self.node, self.process, self.thread)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
