//! The [`EventKind`] enum — classification tags for interval records.
//!
//! Every variant has an exact `#[serde(rename)]` matching the string stored
//! in the trace database (e.g. `"BMARK"`). Parsing is strict: a tag outside
//! the closed set is an [`UnknownKindError`], which the load path treats as a
//! malformed row.
//!
//! Domain helpers like [`EventKind::joins_stack()`] replace ad hoc string
//! comparison with compile-time exhaustiveness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification tag of an interval record.
///
/// Declaration order is load-bearing: [`EventKind::rank()`] follows it, and
/// the final snapshot ordering sorts by rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Interval opened — the only kind that participates in stack nesting.
    #[serde(rename = "OPEN")]
    Open,
    /// Interval closed.
    #[serde(rename = "CLOSE")]
    Close,
    /// Bookmark / leaf marker — never nests, exempt from the duration cutoff.
    #[serde(rename = "BMARK")]
    Bookmark,
}

impl EventKind {
    /// The exact string stored in the trace database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Close => "CLOSE",
            Self::Bookmark => "BMARK",
        }
    }

    /// Whether records of this kind participate in per-thread stack nesting.
    ///
    /// Everything else is appended to the output verbatim, with no depth
    /// semantics.
    pub fn joins_stack(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Sort rank for the final snapshot ordering (declaration order).
    pub fn rank(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Close => 1,
            Self::Bookmark => 2,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classification tag outside the closed [`EventKind`] set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event kind: {0:?}")]
pub struct UnknownKindError(pub String);

impl FromStr for EventKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(Self::Open),
            "CLOSE" => Ok(Self::Close),
            "BMARK" => Ok(Self::Bookmark),
            other => Err(UnknownKindError(other.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
