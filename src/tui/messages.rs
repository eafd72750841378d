//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::feed::{DashboardSnapshot, FeedError};

use super::state::EmotionFilter;

/// Messages for the dashboard TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Anomaly viewer
    /// Apply a new emotion filter.
    SetFilter(EmotionFilter),
    /// Return to the "All" filter.
    ClearFilter,
    /// Cycle through the available filter options.
    CycleFilter,
    /// Reveal the entire filtered set.
    RevealAll,
    /// Toggle the anomaly panel between expanded and collapsed.
    ToggleAnomalies,
    /// Write the filtered anomalies to the CSV artifact.
    ExportRequested,

    // Feed polling
    /// Trigger a poll of the feed endpoints.
    PollTick,
    /// A poll round finished.
    PollComplete {
        /// Data gathered from the endpoints that answered.
        snapshot: Box<DashboardSnapshot>,
        /// Wall-clock duration of the round in milliseconds.
        latency_ms: u64,
    },
    /// The poll round failed outright.
    PollFailed(String),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a poll failure message from a `FeedError`.
    #[must_use]
    pub fn from_error(error: &FeedError) -> Self {
        Self::PollFailed(error.to_string())
    }
}
