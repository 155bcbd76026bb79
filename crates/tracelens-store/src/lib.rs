//! # tracelens-store
//!
//! Read-side `SQLite` access layer for compiled trace databases.
//!
//! The trace compiler (an external process) turns text logs into a `.cbin`
//! `SQLite` file; this crate reads it back:
//!
//! - **[`connection`]**: `r2d2` connection pool with WAL mode and
//!   performance pragmas applied to every connection
//! - **[`schema`]**: embedded schema + database version check
//! - **[`row_types`]**: raw database row structs for `rusqlite` row mapping
//! - **[`repositories`]**: stateless repository structs — each method takes
//!   `&Connection` and executes SQL, no shared mutable state
//! - **[`paths`]**: log-file to database-file path derivation
//!
//! Write paths mirror what the compiler produces; they back the test suites
//! and seeding tools, not the viewer itself.

#![deny(unsafe_code)]

pub mod connection;
pub mod errors;
pub mod paths;
pub mod repositories;
pub mod row_types;
pub mod schema;

pub use connection::{ConnectionConfig, ConnectionPool, PooledConnection, new_file, new_in_memory};
pub use errors::{Result, StoreError};
pub use repositories::bookmark::BookmarkRepo;
pub use repositories::event::{EventRepo, ScanControl, ScanStats};
pub use repositories::settings::{LogSpan, SettingsRepo};
pub use repositories::summary::SummaryRepo;
pub use repositories::thread::ThreadRepo;
pub use schema::{SCHEMA_VERSION, create_schema, version_check};
