//! # tracelens-core
//!
//! Shared domain types for the tracelens timeline backend:
//!
//! - **[`EventKind`]**: closed classification enum replacing the store's
//!   string tags, with strict wire-string parsing
//! - **[`TimelineEvent`]**: one reconstructed timeline entry (interval,
//!   classification, thread assignment, nesting depth)
//! - **[`Bookmark`]**: a `(time, label)` marker, independent of nesting
//! - **[`LoadResult`]**: the immutable snapshot published after a load pass
//! - **[`TimeWindow`]**: half-open query window in store-relative seconds

#![deny(unsafe_code)]

pub mod event;
pub mod kind;
pub mod window;

pub use event::{Bookmark, LoadResult, TimelineEvent};
pub use kind::{EventKind, UnknownKindError};
pub use window::TimeWindow;
