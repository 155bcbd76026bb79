//! End-to-end load pass tests over a real compiled trace database.

use std::path::Path;
use std::sync::{Arc, Mutex};

use tracelens_core::EventKind;
use tracelens_engine::{CancelToken, LoadOptions, StatusSink, Timeline};
use tracelens_store::row_types::EventRow;
use tracelens_store::{
    ConnectionConfig, ConnectionPool, EventRepo, LogSpan, SCHEMA_VERSION, SettingsRepo,
    SummaryRepo, ThreadRepo, create_schema, new_file,
};

fn open_pool(path: &Path) -> ConnectionPool {
    new_file(path.to_str().unwrap(), &ConnectionConfig::default()).unwrap()
}

fn interval(id: i64, thread_id: i64, start: f64, end: f64) -> EventRow {
    EventRow {
        id,
        thread_id,
        start_location: format!("src.c:{id}"),
        end_location: format!("src.c:{id}"),
        start_time: start,
        end_time: end,
        start_type: "OPEN".to_string(),
        end_type: "CLOSE".to_string(),
        start_text: format!("ev{id}"),
        end_text: String::new(),
    }
}

fn bookmark(id: i64, time: f64, label: &str) -> EventRow {
    EventRow {
        id,
        thread_id: 0,
        start_location: String::new(),
        end_location: String::new(),
        start_time: time,
        end_time: time,
        start_type: "BMARK".to_string(),
        end_type: "BMARK".to_string(),
        start_text: label.to_string(),
        end_text: String::new(),
    }
}

/// Create a compiled trace database with the given log span and rows.
fn seed(path: &Path, span: LogSpan, rows: &[EventRow]) -> ConnectionPool {
    let pool = open_pool(path);
    let conn = pool.get().unwrap();
    create_schema(&conn).unwrap();
    SettingsRepo::write(&conn, SCHEMA_VERSION, span).unwrap();
    ThreadRepo::insert(&conn, "node1", "app", "main").unwrap();
    ThreadRepo::insert(&conn, "node1", "app", "worker").unwrap();
    SummaryRepo::append(&conn, rows.len() as i64).unwrap();
    for row in rows {
        EventRepo::insert(&conn, row).unwrap();
    }
    pool
}

#[test]
fn full_load_pass_publishes_a_complete_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("trace.cbin");
    let pool = seed(
        &db,
        LogSpan { start: 0.0, end: 20.0 },
        &[
            interval(1, 7, 0.0, 10.0),
            interval(2, 7, 2.0, 4.0),
            bookmark(3, 3.0, "checkpoint"),
            interval(4, 9, 1.0, 6.0),
            interval(5, 7, 0.1, 0.2), // below the cutoff
        ],
    );
    let timeline = Timeline::from_pool(pool).unwrap();

    let result = timeline.load_events(
        &LoadOptions {
            render_start: 0.0,
            render_length: 20.0,
            coalesce_threshold: 0.0,
            duration_cutoff: 0.5,
        },
        &CancelToken::new(),
    );

    // Stack-participating events first (kind rank), bookmark last
    let kinds: Vec<EventKind> = result.events.iter().map(|e| e.start_kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::Open,
            EventKind::Open,
            EventKind::Open,
            EventKind::Bookmark
        ]
    );

    // The cutoff removed row 5 entirely
    assert!(result.events.iter().all(|e| e.id != 5));

    // Nesting: row 2 sits inside row 1; row 4 is alone on its thread
    let by_id = |id: i64| result.events.iter().find(|e| e.id == id).unwrap();
    assert_eq!(by_id(1).depth, 0);
    assert_eq!(by_id(2).depth, 1);
    assert_eq!(by_id(4).depth, 0);

    // Thread indices are dense first-seen order: thread 7 (row 1) before
    // thread 9 (row 4), the bookmark's thread 0 last
    assert_eq!(result.thread_indices, vec![7, 9, 0]);

    // The returned arc is the published snapshot
    assert_eq!(timeline.snapshot(), result);
}

#[test]
fn window_translation_respects_log_start() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("trace.cbin");
    let pool = seed(
        &db,
        LogSpan { start: 100.0, end: 130.0 },
        &[interval(1, 1, 5.0, 6.0)],
    );
    let timeline = Timeline::from_pool(pool).unwrap();

    // Render window is absolute; stored times are log-relative
    let hit = timeline.load_events(
        &LoadOptions { render_start: 104.0, render_length: 4.0, ..LoadOptions::default() },
        &CancelToken::new(),
    );
    assert_eq!(hit.events.len(), 1);

    let miss = timeline.load_events(
        &LoadOptions { render_start: 110.0, render_length: 4.0, ..LoadOptions::default() },
        &CancelToken::new(),
    );
    assert!(miss.events.is_empty());
}

#[test]
fn coalescing_folds_near_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("trace.cbin");
    let pool = seed(
        &db,
        LogSpan::default(),
        &[interval(1, 1, 0.0, 1.0), interval(2, 1, 1.05, 2.0)],
    );
    let timeline = Timeline::from_pool(pool).unwrap();

    let merged = timeline.load_events(
        &LoadOptions { coalesce_threshold: 0.1, ..LoadOptions::default() },
        &CancelToken::new(),
    );
    assert_eq!(merged.events.len(), 1);
    assert_eq!(merged.events[0].start_time, 0.0);
    assert_eq!(merged.events[0].end_time, 2.0);

    let distinct = timeline.load_events(
        &LoadOptions { coalesce_threshold: 0.01, ..LoadOptions::default() },
        &CancelToken::new(),
    );
    assert_eq!(distinct.events.len(), 2);
}

#[test]
fn empty_window_publishes_an_empty_result() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("trace.cbin");
    let pool = seed(&db, LogSpan::default(), &[interval(1, 1, 50.0, 60.0)]);
    let timeline = Timeline::from_pool(pool).unwrap();

    let result = timeline.load_events(
        &LoadOptions { render_start: 0.0, render_length: 10.0, ..LoadOptions::default() },
        &CancelToken::new(),
    );
    assert!(result.events.is_empty());
    assert!(result.thread_indices.is_empty());
}

#[test]
fn cancelled_pass_keeps_the_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("trace.cbin");
    let pool = seed(
        &db,
        LogSpan::default(),
        &[interval(1, 1, 0.0, 1.0), interval(2, 1, 2.0, 3.0)],
    );
    let timeline = Timeline::from_pool(pool).unwrap();

    let first = timeline.load_events(&LoadOptions::default(), &CancelToken::new());
    assert_eq!(first.events.len(), 2);

    let cancelled = CancelToken::new();
    cancelled.cancel();
    let returned = timeline.load_events(
        &LoadOptions { render_start: 2.0, render_length: 2.0, ..LoadOptions::default() },
        &cancelled,
    );

    // Nothing was published; the previous snapshot is still current
    assert_eq!(returned, first);
    assert_eq!(timeline.snapshot(), first);
}

#[test]
fn concurrent_loads_publish_one_complete_result() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("trace.cbin");
    let pool = seed(
        &db,
        LogSpan::default(),
        &[
            interval(1, 1, 0.0, 1.0),
            interval(2, 1, 5.0, 6.0),
            interval(3, 1, 5.5, 5.9),
        ],
    );
    let timeline = Timeline::from_pool(pool).unwrap();

    let narrow = LoadOptions { render_start: 0.0, render_length: 2.0, ..LoadOptions::default() };
    let wide = LoadOptions { render_start: 0.0, render_length: 10.0, ..LoadOptions::default() };

    let (a, b) = std::thread::scope(|scope| {
        let t1 = scope.spawn(|| timeline.load_events(&narrow, &CancelToken::new()));
        let t2 = scope.spawn(|| timeline.load_events(&wide, &CancelToken::new()));
        (t1.join().unwrap(), t2.join().unwrap())
    });

    // Last writer wins: the snapshot is exactly one of the two results,
    // never a mixture
    let published = timeline.snapshot();
    assert!(published == a || published == b);
    assert_eq!(a.events.len(), 1);
    assert_eq!(b.events.len(), 3);
}

#[test]
fn status_sink_observes_the_pass() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("trace.cbin");
    let pool = seed(&db, LogSpan::default(), &[interval(1, 1, 0.0, 1.0)]);
    let mut timeline = Timeline::from_pool(pool).unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    {
        let seen = Arc::clone(&seen);
        timeline.set_status_sink(StatusSink::new(move |msg| {
            seen.lock().unwrap().push(msg.to_string());
        }));
    }

    let _ = timeline.load_events(&LoadOptions::default(), &CancelToken::new());
    let messages = seen.lock().unwrap();
    assert!(messages.contains(&"loading: events".to_string()));
    assert!(messages.contains(&"sorting events".to_string()));
    assert!(messages.contains(&"loading: done".to_string()));
}

#[test]
fn version_mismatch_refuses_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("trace.cbin");
    let pool = open_pool(&db);
    {
        let conn = pool.get().unwrap();
        create_schema(&conn).unwrap();
        SettingsRepo::write(&conn, SCHEMA_VERSION + 7, LogSpan::default()).unwrap();
    }

    assert!(Timeline::from_pool(pool).is_err());
}

#[test]
fn readers_outside_the_core() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("trace.cbin");
    let pool = seed(
        &db,
        LogSpan { start: 0.0, end: 10.0 },
        &[bookmark(1, 2.0, "first"), bookmark(2, 8.0, "second")],
    );
    let timeline = Timeline::from_pool(pool).unwrap();

    let bookmarks = timeline.bookmarks().unwrap();
    let labels: Vec<&str> = bookmarks.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["first", "second"]);

    assert_eq!(timeline.earliest_bookmark_after(2.0).unwrap(), Some(8.0));
    assert_eq!(timeline.latest_bookmark_before(8.0).unwrap(), Some(2.0));

    assert_eq!(
        timeline.thread_labels().unwrap(),
        vec!["node1-app-main", "node1-app-worker"]
    );
    assert_eq!(timeline.summary().unwrap(), vec![2]);
}
