//! Half-open time windows for store queries.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` window, seconds relative to the store's zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Inclusive window start.
    pub start: f64,
    /// Exclusive window end.
    pub end: f64,
}

impl TimeWindow {
    /// Build a window from a start point and a non-negative length.
    pub fn from_length(start: f64, length: f64) -> Self {
        Self {
            start,
            end: start + length.max(0.0),
        }
    }

    /// Whether an interval `[start_time, end_time)` overlaps this window.
    ///
    /// Matches the store's index predicate: `end_time > window.start AND
    /// start_time < window.end`.
    pub fn overlaps(&self, start_time: f64, end_time: f64) -> bool {
        end_time > self.start && start_time < self.end
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
