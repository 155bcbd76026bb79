//! Progress reporting and cooperative cancellation.
//!
//! [`StatusSink`] is a one-way, fire-and-forget status string callback: the
//! engine calls it during long operations, nothing flows back, and an absent
//! sink is a no-op. It must never affect the outcome of a pass.
//!
//! [`CancelToken`] is a shared flag checked at coarse granularity during row
//! fetch; a cancelled pass stops without publishing.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Fire-and-forget status string sink.
#[derive(Default)]
pub struct StatusSink(Option<Box<dyn Fn(&str) + Send + Sync>>);

impl StatusSink {
    /// A sink that forwards messages to the given callback.
    pub fn new(callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self(Some(Box::new(callback)))
    }

    /// A sink that drops every message.
    pub fn disabled() -> Self {
        Self(None)
    }

    /// Emit one status message. No-op when no callback is registered.
    pub fn emit(&self, message: &str) {
        if let Some(callback) = &self.0 {
            callback(message);
        }
    }
}

impl fmt::Debug for StatusSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StatusSink")
            .field(&self.0.as_ref().map(|_| "…"))
            .finish()
    }
}

/// Shared cooperative cancellation flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
