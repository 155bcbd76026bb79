//! # tracelens-cli
//!
//! Command-line frontend for compiled trace databases: opens a trace, runs
//! one load pass, and dumps the reconstructed timeline as indented text.

#![deny(unsafe_code)]

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tracelens_core::{EventKind, LoadResult};
use tracelens_engine::{CancelToken, LoadOptions, StatusSink, Timeline};
use tracelens_store::ConnectionConfig;
use tracelens_store::paths::database_path_for;

/// Trace timeline viewer.
#[derive(Parser, Debug)]
#[command(name = "tracelens", about = "Dump the reconstructed timeline of a compiled trace")]
struct Cli {
    /// Trace log (.ctxt) or compiled database (.cbin).
    file: PathBuf,

    /// Absolute render window start, seconds (default: config, else log start).
    #[arg(long)]
    start: Option<f64>,

    /// Render window length, seconds.
    #[arg(long)]
    length: Option<f64>,

    /// Maximum sibling gap to coalesce, seconds (0 disables).
    #[arg(long)]
    coalesce: Option<f64>,

    /// Minimum interval duration to load, seconds (0 = no cutoff).
    #[arg(long)]
    cutoff: Option<f64>,

    /// Also list bookmarks.
    #[arg(long)]
    bookmarks: bool,

    /// Config file path (default: ~/.tracelens/config.json).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load(&config_path);

    let database = database_path_for(&cli.file);
    let mut timeline = Timeline::open(&database, &ConnectionConfig::default())
        .with_context(|| format!("failed to open {}", database.display()))?;
    timeline.set_status_sink(StatusSink::new(|msg| eprintln!("{msg}")));

    let span = timeline.log_span();
    let render_start = cli.start.unwrap_or(if cfg.render.start > 0.0 {
        cfg.render.start
    } else {
        span.start
    });
    let options = LoadOptions {
        render_start,
        render_length: cli.length.unwrap_or(cfg.render.length),
        coalesce_threshold: cli.coalesce.unwrap_or(cfg.render.coalesce),
        duration_cutoff: cli.cutoff.unwrap_or(cfg.render.cutoff),
    };

    let result = timeline.load_events(&options, &CancelToken::new());
    let labels = timeline.thread_labels().unwrap_or_default();
    print_timeline(&result, &labels);

    if cli.bookmarks || cfg.render.bookmarks {
        println!();
        println!("bookmarks:");
        for bookmark in timeline.bookmarks()? {
            let time = if cfg.bookmarks.absolute {
                bookmark.time
            } else {
                bookmark.time - span.start
            };
            println!("  {time:>12.6}  {}", bookmark.label);
        }
    }

    Ok(())
}

/// Print one reconstructed snapshot, grouped by thread, indented by depth.
fn print_timeline(result: &LoadResult, labels: &[String]) {
    for (index, thread_id) in result.thread_indices.iter().enumerate() {
        // Thread rows are 1-based in the store
        let label = usize::try_from(thread_id - 1)
            .ok()
            .and_then(|i| labels.get(i))
            .cloned()
            .unwrap_or_else(|| format!("thread {thread_id}"));
        println!("== {label}");

        for event in result.events.iter().filter(|e| e.thread_index == index) {
            let indent = "  ".repeat(event.depth + 1);
            match event.start_kind {
                EventKind::Bookmark => {
                    println!("  @ {:>12.6}  {}", event.start_time, event.start_text);
                }
                _ => {
                    println!(
                        "{indent}{:>12.6} [{:>9.6}s] {}",
                        event.start_time,
                        event.duration(),
                        event.start_text
                    );
                }
            }
        }
    }
}
