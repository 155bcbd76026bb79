//! Final deterministic ordering and snapshot assembly.
//!
//! The render layer depends on a reproducible event order. The rule is a
//! stable sort by [`EventKind`] rank (declaration order: `Open`, `Close`,
//! `Bookmark`), which preserves the canonical time order within each kind.

use tracelens_core::{LoadResult, TimelineEvent};

/// Apply the final total order and build the snapshot value.
pub fn assemble(mut events: Vec<TimelineEvent>, thread_indices: Vec<i64>) -> LoadResult {
    events.sort_by_key(|e| e.start_kind.rank());
    LoadResult {
        events,
        thread_indices,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use tracelens_core::EventKind;

    use super::*;

    fn ev(id: i64, start: f64, kind: EventKind) -> TimelineEvent {
        TimelineEvent {
            id,
            thread_id: 1,
            thread_index: 0,
            start_time: start,
            end_time: start + 1.0,
            start_kind: kind,
            end_kind: kind,
            start_location: String::new(),
            end_location: String::new(),
            start_text: String::new(),
            end_text: String::new(),
            depth: 0,
        }
    }

    #[test]
    fn sorts_by_kind_rank() {
        let events = vec![
            ev(1, 0.0, EventKind::Bookmark),
            ev(2, 1.0, EventKind::Open),
            ev(3, 2.0, EventKind::Bookmark),
            ev(4, 3.0, EventKind::Open),
        ];
        let result = assemble(events, vec![1]);
        let kinds: Vec<EventKind> = result.events.iter().map(|e| e.start_kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Open,
                EventKind::Open,
                EventKind::Bookmark,
                EventKind::Bookmark
            ]
        );
    }

    #[test]
    fn order_within_a_kind_is_stable() {
        // Regression for the documented comparator: within one kind, the
        // incoming (time) order must be preserved exactly
        let events = vec![
            ev(10, 5.0, EventKind::Open),
            ev(11, 0.0, EventKind::Bookmark),
            ev(12, 6.0, EventKind::Open),
            ev(13, 1.0, EventKind::Bookmark),
            ev(14, 7.0, EventKind::Open),
        ];
        let result = assemble(events, vec![1]);
        let ids: Vec<i64> = result.events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![10, 12, 14, 11, 13]);
    }

    #[test]
    fn thread_indices_pass_through() {
        let result = assemble(Vec::new(), vec![42, 7]);
        assert!(result.events.is_empty());
        assert_eq!(result.thread_indices, vec![42, 7]);
    }
}
