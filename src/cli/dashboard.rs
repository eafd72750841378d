//! Dashboard TUI mode.
//!
//! This module provides the entry point for the interactive terminal user
//! interface over the sentiment pipeline.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use pulseboard::telemetry::StderrJsonlTelemetrySink;
use pulseboard::tui::{
    DashboardApp, set_initial_snapshot, set_poll_context, set_telemetry_sink,
};
use pulseboard::{FeedError, HttpSentimentFeed, PulseboardConfig, poll_snapshot};

/// Runs the dashboard TUI mode.
///
/// Fetches one snapshot up front so the first frame has data, then hands
/// polling over to the TUI's timer.
///
/// # Errors
///
/// Returns an error if:
/// - A configured endpoint URL is invalid
/// - The HTTP client fails to initialise
/// - The TUI fails to initialise
pub async fn run(config: &PulseboardConfig) -> Result<(), FeedError> {
    let locator = config.resolve_locator()?;

    let feed = HttpSentimentFeed::new(locator)?;
    let snapshot = poll_snapshot(&feed).await;

    // Store the snapshot in global state for Model::init() to retrieve.
    // If already set (e.g. re-running the TUI in the same process), this is
    // a no-op and the existing data remains.
    let _ = set_initial_snapshot(snapshot);

    // Hand the same feed to the poll timer so every round reuses its
    // connection pool. Same set-once semantics as above.
    let _ = set_poll_context(feed, config.poll_interval());

    // Poll telemetry goes to stderr as JSONL; the alt screen hides it.
    let _ = set_telemetry_sink(Arc::new(StderrJsonlTelemetrySink));

    run_tui().await.map_err(|error| FeedError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // Build and run the program using the builder pattern.
    // DashboardApp::init() will retrieve data from module-level storage.
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_app_can_be_created_empty() {
        use bubbletea_rs::Model;

        let app = DashboardApp::empty();
        assert!(app.view().contains("Pulseboard"));
    }
}
