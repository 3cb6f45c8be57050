//! Configuration constants for learning-graph-check
//!
//! Defaults used by the CLI and the discovery walk. Every CLI default can be
//! overridden with a `LEARNING_GRAPH_*` environment variable.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while searching for graphs
    pub const SPINNER_FRAMES: &[&str] = &["📕", "📙", "📒", "📗", "📘", "📓"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default visualization format for `render`
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

/// Graph discovery configuration
pub mod discovery {
    /// File name pattern matched inside directories
    pub const DEFAULT_PATTERN: &str = "learning-graph.json";

    /// Directories never descended into
    pub const SKIPPED_DIRS: &[&str] = &[".git", "node_modules", "target", "site"];
}
