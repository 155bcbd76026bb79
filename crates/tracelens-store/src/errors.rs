//! Error types for the store subsystem.
//!
//! [`StoreError`] is returned by open/version-check and repository methods.
//! The reconstruction path itself never propagates these as hard failures —
//! a failing scan degrades to a truncated row stream at the engine boundary.

use thiserror::Error;

/// Errors that can occur while accessing a compiled trace database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `SQLite` database error.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// The database was compiled by an incompatible version of the compiler.
    #[error("incompatible database version: {found} != {expected}")]
    VersionMismatch {
        /// Version recorded in the database.
        found: i64,
        /// Version this crate understands.
        expected: i64,
    },

    /// The database is missing required tables or settings rows.
    #[error("schema error: {0}")]
    Schema(String),
}

/// Convenience type alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
