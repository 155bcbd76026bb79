//! The [`Timeline`] facade: one load pass end to end, plus the published
//! snapshot and the simple unfiltered readers around it.
//!
//! A load pass runs scan → reconstruct → assemble entirely in
//! invocation-local state and installs the result by atomic `Arc`
//! replacement. Concurrent passes against the same `Timeline` are safe:
//! each builds privately and whichever finishes last owns the snapshot
//! (last writer wins — an accepted race, not a bug).
//!
//! Failures degrade instead of aborting: an unavailable store or a
//! truncated row stream publishes whatever was reconstructed, surfaced via
//! the status sink and log, never as a hard error from the load path.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use tracelens_core::{Bookmark, LoadResult, TimeWindow, TimelineEvent};
use tracelens_store::repositories::bookmark::BookmarkRepo;
use tracelens_store::repositories::event::{EventRepo, ScanControl};
use tracelens_store::repositories::settings::{LogSpan, SettingsRepo};
use tracelens_store::repositories::summary::SummaryRepo;
use tracelens_store::repositories::thread::ThreadRepo;
use tracelens_store::{ConnectionConfig, ConnectionPool, Result, new_file, version_check};

use crate::assemble::assemble;
use crate::options::LoadOptions;
use crate::reconstruct::reconstruct;
use crate::status::{CancelToken, StatusSink};

/// Row-count granularity of scan progress messages.
const SCAN_PROGRESS_EVERY: usize = 10_000;

/// Row-count granularity of bookmark progress messages.
const BOOKMARK_PROGRESS_EVERY: usize = 1_000;

/// A compiled trace opened for viewing.
pub struct Timeline {
    pool: ConnectionPool,
    log_span: LogSpan,
    status: StatusSink,
    snapshot: RwLock<Arc<LoadResult>>,
}

impl Timeline {
    /// Open a compiled trace database, checking its compiler version.
    pub fn open(database: &Path, config: &ConnectionConfig) -> Result<Self> {
        let pool = new_file(&database.to_string_lossy(), config)?;
        Self::from_pool(pool)
    }

    /// Build a timeline over an existing pool (tests, in-memory tooling).
    pub fn from_pool(pool: ConnectionPool) -> Result<Self> {
        let conn = pool.get()?;
        version_check(&conn)?;
        let log_span = SettingsRepo::log_span(&conn)?;
        drop(conn);
        debug!(start = log_span.start, end = log_span.end, "timeline opened");
        Ok(Self {
            pool,
            log_span,
            status: StatusSink::disabled(),
            snapshot: RwLock::new(Arc::new(LoadResult::default())),
        })
    }

    /// Register the status sink used by subsequent loads.
    pub fn set_status_sink(&mut self, sink: StatusSink) {
        self.status = sink;
    }

    /// The log-wide `[start, end]` span.
    pub fn log_span(&self) -> LogSpan {
        self.log_span
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<LoadResult> {
        Arc::clone(&self.snapshot.read())
    }

    /// Run one load pass and publish its result.
    ///
    /// Returns the newly published snapshot — or, when the pass was
    /// cancelled, the previously published one (a cancelled pass publishes
    /// nothing).
    pub fn load_events(&self, options: &LoadOptions, cancel: &CancelToken) -> Arc<LoadResult> {
        self.status.emit("loading: events");

        let window = TimeWindow::from_length(
            options.render_start - self.log_span.start,
            options.render_length,
        );

        let mut rows: Vec<TimelineEvent> = Vec::new();
        match self.pool.get() {
            Ok(conn) => {
                let scan = EventRepo::scan_window(
                    &conn,
                    window,
                    options.duration_cutoff,
                    |event| {
                        if cancel.is_cancelled() {
                            return ScanControl::Stop;
                        }
                        rows.push(event);
                        if rows.len() % SCAN_PROGRESS_EVERY == 0 {
                            self.status
                                .emit(&format!("loading... ({}k records)", rows.len() / 1000));
                        }
                        ScanControl::Continue
                    },
                );
                match scan {
                    Ok(stats) => {
                        if stats.skipped > 0 {
                            warn!(skipped = stats.skipped, "malformed rows skipped during load");
                        }
                        if stats.truncated {
                            warn!(delivered = stats.delivered, "row stream ended early");
                            self.status.emit("load ended early, showing partial data");
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "event query failed");
                        self.status.emit("store query failed, showing empty data");
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "store unavailable");
                self.status.emit("store unavailable, showing empty data");
            }
        }

        if cancel.is_cancelled() {
            self.status.emit("loading: cancelled");
            return self.snapshot();
        }

        let (events, thread_ids) = reconstruct(rows, options.coalesce_threshold);

        self.status.emit("sorting events");
        let result = Arc::new(assemble(events, thread_ids));

        *self.snapshot.write() = Arc::clone(&result);
        self.status.emit("loading: done");
        result
    }

    // ─────────────────────────────────────────────────────────────────────
    // Simple unfiltered readers
    // ─────────────────────────────────────────────────────────────────────

    /// All bookmarks, ascending by time.
    pub fn bookmarks(&self) -> Result<Vec<Bookmark>> {
        self.status.emit("loading: bookmarks");
        let conn = self.pool.get()?;
        let mut out = Vec::new();
        let count = BookmarkRepo::for_each(&conn, |bookmark| {
            out.push(bookmark);
            if out.len() % BOOKMARK_PROGRESS_EVERY == 0 {
                self.status.emit(&format!("loaded {} bookmarks", out.len()));
            }
        })?;
        debug!(count, "bookmarks loaded");
        Ok(out)
    }

    /// Time of the first bookmark strictly after `hint`, if any.
    pub fn earliest_bookmark_after(&self, hint: f64) -> Result<Option<f64>> {
        let conn = self.pool.get()?;
        BookmarkRepo::earliest_after(&conn, hint)
    }

    /// Time of the last bookmark strictly before `hint`, if any.
    pub fn latest_bookmark_before(&self, hint: f64) -> Result<Option<f64>> {
        let conn = self.pool.get()?;
        BookmarkRepo::latest_before(&conn, hint)
    }

    /// Thread display labels in stable store order.
    pub fn thread_labels(&self) -> Result<Vec<String>> {
        self.status.emit("loading: threads");
        let conn = self.pool.get()?;
        ThreadRepo::labels(&conn)
    }

    /// Coarse per-bucket event counts for the overview strip.
    pub fn summary(&self) -> Result<Vec<i64>> {
        self.status.emit("loading: summary");
        let conn = self.pool.get()?;
        SummaryRepo::bucket_counts(&conn)
    }
}
