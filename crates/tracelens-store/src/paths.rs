//! Path derivation between text logs and compiled trace databases.
//!
//! A trace lives as a pair of sibling files: the raw text log (`.ctxt`) and
//! its compiled form (`.cbin`). Opening either should resolve to the same
//! database path.

use std::path::{Path, PathBuf};

/// Extension of raw text logs.
pub const LOG_EXTENSION: &str = "ctxt";

/// Extension of compiled trace databases.
pub const DATABASE_EXTENSION: &str = "cbin";

/// The compiled database path for a given log or database file.
pub fn database_path_for(given: &Path) -> PathBuf {
    given.with_extension(DATABASE_EXTENSION)
}

/// The raw log path for a given log or database file.
pub fn log_path_for(given: &Path) -> PathBuf {
    given.with_extension(LOG_EXTENSION)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
