//! Per-invocation load parameters.

/// Parameters for one load pass. Supplied per invocation, never stored as
/// engine state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadOptions {
    /// Absolute start of the render window, seconds.
    pub render_start: f64,
    /// Length of the render window, seconds.
    pub render_length: f64,
    /// Maximum sibling gap to coalesce, seconds. ≤ 0 disables coalescing.
    pub coalesce_threshold: f64,
    /// Minimum interval duration to load, seconds. 0 = no cutoff.
    /// Bookmarks are exempt.
    pub duration_cutoff: f64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            render_start: 0.0,
            render_length: 20.0,
            coalesce_threshold: 0.0,
            duration_cutoff: 0.0,
        }
    }
}
