//! Viewer configuration with JSON persistence.
//!
//! Loading flow:
//! 1. Start with compiled [`ViewerConfig::default()`]
//! 2. If the config file exists and parses, its values replace the defaults
//! 3. Any read or parse error falls back to defaults with a logged warning
//!
//! Every field carries a serde default, so a partial file overlays cleanly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Render-pass settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Absolute render window start, seconds.
    pub start: f64,
    /// Render window length, seconds.
    pub length: f64,
    /// Pixels per second.
    pub scale: f64,
    /// Deepest nesting level to draw.
    pub max_depth: u32,
    /// Minimum interval duration to load, seconds.
    pub cutoff: f64,
    /// Maximum sibling gap to coalesce, seconds.
    pub coalesce: f64,
    /// Whether to draw bookmarks.
    pub bookmarks: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            length: 20.0,
            scale: 50.0,
            max_depth: 7,
            cutoff: 0.0,
            coalesce: 0.0,
            bookmarks: false,
        }
    }
}

/// Shell behavior settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Re-render automatically after navigation.
    pub render_auto: bool,
    /// Directory of the last opened log.
    pub last_log_dir: String,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            render_auto: true,
            last_log_dir: home_dir(),
        }
    }
}

/// Bookmark display settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarkConfig {
    /// Show absolute timestamps instead of log-relative offsets.
    pub absolute: bool,
    /// Timestamp format string.
    pub format: String,
}

impl Default for BookmarkConfig {
    fn default() -> Self {
        Self {
            absolute: true,
            format: "%Y/%m/%d %H:%M:%S".to_string(),
        }
    }
}

/// The complete viewer configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Render-pass settings.
    pub render: RenderConfig,
    /// Shell behavior settings.
    pub gui: GuiConfig,
    /// Bookmark display settings.
    pub bookmarks: BookmarkConfig,
}

fn home_dir() -> String {
    std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string())
}

/// Resolve the default config path (`~/.tracelens/config.json`).
pub fn config_path() -> PathBuf {
    PathBuf::from(home_dir()).join(".tracelens").join("config.json")
}

/// Load configuration from `path`, falling back to defaults on any error.
pub fn load(path: &Path) -> ViewerConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(?path, error = %e, "config not read, using defaults");
            return ViewerConfig::default();
        }
    };
    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!(?path, error = %e, "config failed to parse, using defaults");
            ViewerConfig::default()
        }
    }
}

/// Save configuration to `path`, creating parent directories as needed.
pub fn save(path: &Path, config: &ViewerConfig) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
