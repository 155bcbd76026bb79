//! Stack reconstruction: depth assignment and coalescing in one pass.
//!
//! [`Reconstructor`] consumes interval records in canonical order (ascending
//! `start_time`, ties by descending `end_time`) and maintains one stack of
//! still-open ancestors per thread:
//!
//! 1. Records whose kind never joins the stack are appended verbatim.
//! 2. For a stack-participating record, ancestors that have already closed
//!    are popped; the last popped entry is the immediately preceding sibling
//!    at the depth the record will occupy — the merge candidate.
//! 3. Depth = number of still-open ancestors after popping.
//! 4. The record is either folded into the candidate (coalescing) or pushed
//!    as a new open entry and appended to the output.
//!
//! The tie order is load-bearing: among same-start siblings the longer-lived
//! interval is processed first and becomes the ancestor. Each record is
//! pushed and popped at most once, so the pass is O(n) amortized.

use std::cmp::Ordering;

use tracing::warn;

use tracelens_core::TimelineEvent;

use crate::merge;
use crate::thread_index::ThreadIndexer;

/// Invocation-local build state for one reconstruction pass.
///
/// Owns everything it mutates; nothing is shared until the caller publishes
/// the finished output.
#[derive(Debug)]
pub struct Reconstructor {
    coalesce_threshold: f64,
    indexer: ThreadIndexer,
    /// Per-thread stacks of output-list indices of still-open intervals.
    stacks: Vec<Vec<usize>>,
    events: Vec<TimelineEvent>,
}

impl Reconstructor {
    /// Create a pass with the given coalesce threshold (≤ 0 disables).
    pub fn new(coalesce_threshold: f64) -> Self {
        Self {
            coalesce_threshold,
            indexer: ThreadIndexer::new(),
            stacks: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Feed the next record in canonical order.
    pub fn push(&mut self, mut event: TimelineEvent) {
        let thread_index = self.indexer.index_of(event.thread_id);
        event.thread_index = thread_index;
        if self.stacks.len() <= thread_index {
            self.stacks.resize_with(thread_index + 1, Vec::new);
        }

        if !event.start_kind.joins_stack() {
            // Leaf kinds bypass the stack entirely; depth stays at its default.
            self.events.push(event);
            return;
        }

        // Pop completed siblings; the last one popped is the merge candidate.
        let stack = &mut self.stacks[thread_index];
        let mut candidate = None;
        while let Some(&top) = stack.last() {
            if self.events[top].end_time > event.start_time {
                break;
            }
            candidate = Some(top);
            let _ = stack.pop();
        }

        event.depth = stack.len();

        if self.coalesce_threshold > 0.0 {
            if let Some(prev) = candidate {
                if merge::can_merge(&self.events[prev], &event, self.coalesce_threshold) {
                    // The previous sibling stays the most recent entry at this
                    // level: extend it and put it back.
                    merge::merge(&mut self.events[prev], &event);
                    stack.push(prev);
                    return;
                }
            }
        }

        stack.push(self.events.len());
        self.events.push(event);
    }

    /// Finish the pass, yielding the output list (in input order) and the
    /// thread-index table.
    pub fn finish(self) -> (Vec<TimelineEvent>, Vec<i64>) {
        (self.events, self.indexer.into_thread_ids())
    }
}

/// Run a full reconstruction pass over `rows`.
///
/// Verifies the canonical input order first and re-sorts defensively (with a
/// warning) if the store failed to guarantee it — a misbehaving collaborator
/// degrades, it does not abort the pass.
pub fn reconstruct(
    mut rows: Vec<TimelineEvent>,
    coalesce_threshold: f64,
) -> (Vec<TimelineEvent>, Vec<i64>) {
    if !is_canonical_order(&rows) {
        warn!(rows = rows.len(), "input rows out of canonical order, re-sorting");
        rows.sort_by(canonical_order);
    }

    let mut pass = Reconstructor::new(coalesce_threshold);
    for row in rows {
        pass.push(row);
    }
    pass.finish()
}

/// Canonical input order: ascending start time, ties by descending end time.
fn canonical_order(a: &TimelineEvent, b: &TimelineEvent) -> Ordering {
    a.start_time
        .partial_cmp(&b.start_time)
        .unwrap_or(Ordering::Equal)
        .then(
            b.end_time
                .partial_cmp(&a.end_time)
                .unwrap_or(Ordering::Equal),
        )
}

fn is_canonical_order(rows: &[TimelineEvent]) -> bool {
    rows.windows(2)
        .all(|pair| canonical_order(&pair[0], &pair[1]) != Ordering::Greater)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
