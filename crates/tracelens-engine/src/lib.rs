//! # tracelens-engine
//!
//! The timeline reconstruction and coalescing engine. Turns a flat,
//! time-ordered stream of interval records into a render-ready event list:
//!
//! - **[`thread_index`]**: dense first-seen-order thread index assignment
//! - **[`merge`]**: the coalescing decision and mutation policy
//! - **[`reconstruct`]**: the per-thread ancestor-stack state machine that
//!   computes nesting depth and drives merging
//! - **[`assemble`]**: the final deterministic ordering over the output list
//! - **[`status`]**: fire-and-forget progress sink and cooperative
//!   cancellation token
//! - **[`timeline`]**: the facade that owns the published snapshot and
//!   drives one load pass end to end (scan → reconstruct → assemble →
//!   atomic publish)
//!
//! A load pass builds all of its state in invocation-local storage and
//! publishes by atomic `Arc` replacement; concurrent passes race only at the
//! publish point (last writer wins).

#![deny(unsafe_code)]

pub mod assemble;
pub mod merge;
pub mod options;
pub mod reconstruct;
pub mod status;
pub mod thread_index;
pub mod timeline;

pub use assemble::assemble;
pub use options::LoadOptions;
pub use reconstruct::{Reconstructor, reconstruct};
pub use status::{CancelToken, StatusSink};
pub use thread_index::ThreadIndexer;
pub use timeline::Timeline;
