//! The coalescing policy: when two adjacent sibling intervals become one.
//!
//! [`can_merge`] is the pure decision; [`merge`] is the mutation. The
//! compatibility rule is classification-tag equality, written as an
//! exhaustive match — text and location payloads do not block merging, and
//! the merged event keeps the first interval's start payload while taking
//! the second's end payload.

use tracelens_core::{EventKind, TimelineEvent};

/// Whether `candidate` may be folded into `previous`.
///
/// Approves when the two intervals belong to the same thread, their
/// classification tags are pairwise compatible, and the gap between
/// `previous.end_time` and `candidate.start_time` does not exceed
/// `threshold_seconds`. A threshold ≤ 0 disables coalescing entirely.
pub fn can_merge(
    previous: &TimelineEvent,
    candidate: &TimelineEvent,
    threshold_seconds: f64,
) -> bool {
    if threshold_seconds <= 0.0 {
        return false;
    }
    if previous.thread_id != candidate.thread_id {
        return false;
    }
    if !kinds_compatible(previous.start_kind, candidate.start_kind)
        || !kinds_compatible(previous.end_kind, candidate.end_kind)
    {
        return false;
    }
    candidate.start_time - previous.end_time <= threshold_seconds
}

/// Extend `previous` in place to cover `candidate`.
///
/// Takes the candidate's end fields; start fields are untouched.
pub fn merge(previous: &mut TimelineEvent, candidate: &TimelineEvent) {
    previous.end_time = candidate.end_time;
    previous.end_kind = candidate.end_kind;
    previous.end_location = candidate.end_location.clone();
    previous.end_text = candidate.end_text.clone();
}

/// Merge-compatibility table over classification tags.
fn kinds_compatible(a: EventKind, b: EventKind) -> bool {
    match (a, b) {
        (EventKind::Open, EventKind::Open)
        | (EventKind::Close, EventKind::Close)
        | (EventKind::Bookmark, EventKind::Bookmark) => true,
        (EventKind::Open | EventKind::Close | EventKind::Bookmark, _) => false,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
