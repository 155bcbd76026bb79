//! Reconstructed timeline entries and the published load snapshot.
//!
//! A [`TimelineEvent`] is built from one or more source rows during a load
//! pass (coalescing may fold several rows into one event). It lives only
//! inside the [`LoadResult`] it belongs to and is discarded wholesale when
//! the next pass publishes a new snapshot.

use serde::{Deserialize, Serialize};

use crate::kind::EventKind;

/// One reconstructed timeline entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Store-assigned record id. Used only for bookkeeping during one pass;
    /// not a business identity across loads.
    pub id: i64,
    /// Raw thread id from the store.
    pub thread_id: i64,
    /// Dense thread index assigned in first-seen order for this load.
    /// Not stable across loads.
    pub thread_index: usize,
    /// Interval start, seconds relative to the log-wide zero.
    pub start_time: f64,
    /// Interval end, seconds relative to the log-wide zero.
    pub end_time: f64,
    /// Classification of the interval's start edge.
    pub start_kind: EventKind,
    /// Classification of the interval's end edge.
    pub end_kind: EventKind,
    /// Source location of the start edge.
    pub start_location: String,
    /// Source location of the end edge.
    pub end_location: String,
    /// Descriptive text of the start edge.
    pub start_text: String,
    /// Descriptive text of the end edge.
    pub end_text: String,
    /// Nesting level within the thread, 0 = outermost.
    /// Left at 0 (unused) for kinds that never join the stack.
    pub depth: usize,
}

impl TimelineEvent {
    /// Interval duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// A `(time, label)` marker, independent of the reconstruction algorithm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Bookmark time, seconds relative to the log-wide zero.
    pub time: f64,
    /// Human-readable label.
    pub label: String,
}

/// The snapshot published at the end of a load pass.
///
/// Built entirely in invocation-local state and installed by atomic `Arc`
/// replacement — no caller ever observes an in-progress build.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    /// Reconstructed events in the final deterministic order.
    pub events: Vec<TimelineEvent>,
    /// Raw thread ids, positioned by their dense thread index.
    pub thread_indices: Vec<i64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TimelineEvent {
        TimelineEvent {
            id: 1,
            thread_id: 42,
            thread_index: 0,
            start_time: 1.5,
            end_time: 4.0,
            start_kind: EventKind::Open,
            end_kind: EventKind::Close,
            start_location: "a.c:10".to_string(),
            end_location: "a.c:20".to_string(),
            start_text: "work()".to_string(),
            end_text: "done".to_string(),
            depth: 0,
        }
    }

    #[test]
    fn duration_is_end_minus_start() {
        assert_eq!(sample().duration(), 2.5);
    }

    #[test]
    fn empty_load_result_by_default() {
        let result = LoadResult::default();
        assert!(result.events.is_empty());
        assert!(result.thread_indices.is_empty());
    }
}
