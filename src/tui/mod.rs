//! Terminal User Interface for the sentiment dashboard.
//!
//! This module provides an interactive TUI over the sentiment pipeline
//! using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::DashboardApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Anomaly filter and reveal state management
//! - [`components`]: Panel renderers
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for initial data. Call
//! [`set_initial_snapshot`] before starting the program, and
//! `DashboardApp::init()` will automatically retrieve the data.
//!
//! # Polling
//!
//! Similarly, [`set_poll_context`] must be called to enable the poll timer.
//! It stores the HTTP feed and the poll interval used to fetch fresh data
//! from the pipeline services; the feed's client and its connection pool
//! are shared across every poll round.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crate::feed::{DashboardSnapshot, HttpSentimentFeed};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::DashboardApp;

/// Poll interval applied when no context was configured.
const FALLBACK_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Global storage for the first snapshot.
///
/// This is set before the TUI program starts and read by
/// `DashboardApp::init()`.
static INITIAL_SNAPSHOT: OnceLock<DashboardSnapshot> = OnceLock::new();

/// Global storage for the poll context (feed and interval).
///
/// This is set before the TUI program starts to enable the poll timer.
static POLL_CONTEXT: OnceLock<PollContext> = OnceLock::new();

/// Global storage for the telemetry sink.
///
/// Defaults to a no-op sink when never set.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Context required to poll the pipeline services.
struct PollContext {
    feed: HttpSentimentFeed,
    interval: Duration,
}

/// Sets the telemetry sink used by the TUI.
///
/// # Returns
///
/// `true` if the sink was set, `false` if one was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(NoopTelemetrySink))
}

/// Records the outcome of one feed poll round.
pub(crate) fn record_poll_telemetry(latency_ms: u64, anomaly_count: usize, complete: bool) {
    get_telemetry_sink().record(TelemetryEvent::FeedPollRecorded {
        latency_ms,
        anomaly_count: u64::try_from(anomaly_count).unwrap_or(u64::MAX),
        complete,
    });
}

/// Records a CSV export of the filtered anomaly set.
pub(crate) fn record_export_telemetry(rows: usize) {
    get_telemetry_sink().record(TelemetryEvent::AnomalyExportRecorded {
        rows: u64::try_from(rows).unwrap_or(u64::MAX),
    });
}

/// Sets the initial snapshot for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The
/// snapshot will be read by `DashboardApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the snapshot was set, `false` if it was already set.
pub fn set_initial_snapshot(snapshot: DashboardSnapshot) -> bool {
    INITIAL_SNAPSHOT.set(snapshot).is_ok()
}

/// Sets the poll context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program to enable
/// the poll timer. Without this context, poll rounds fail with a status-line
/// error and the panels keep their last data.
///
/// The feed is stored whole so every poll round reuses the same HTTP client
/// and connection pool.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_poll_context(feed: HttpSentimentFeed, interval: Duration) -> bool {
    POLL_CONTEXT.set(PollContext { feed, interval }).is_ok()
}

/// Gets a clone of the initial snapshot from storage.
///
/// Called internally by `DashboardApp::init()`. Returns the stored snapshot
/// or an empty one if not set.
pub(crate) fn get_initial_snapshot() -> DashboardSnapshot {
    INITIAL_SNAPSHOT.get().cloned().unwrap_or_default()
}

/// Returns the configured poll interval, or the fallback when the context
/// was never set.
pub(crate) fn poll_interval() -> Duration {
    POLL_CONTEXT
        .get()
        .map_or(FALLBACK_POLL_INTERVAL, |context| context.interval)
}

/// Fetches one snapshot round from the pipeline services.
///
/// Uses the poll context set by [`set_poll_context`]. Returns an error when
/// the context was not set; individual endpoint failures degrade to `None`
/// fields inside the snapshot instead.
pub(crate) async fn fetch_snapshot() -> Result<DashboardSnapshot, crate::feed::FeedError> {
    let context = POLL_CONTEXT
        .get()
        .ok_or_else(|| crate::feed::FeedError::Configuration {
            message: "Poll context not configured".to_owned(),
        })?;

    Ok(crate::feed::poll_snapshot(&context.feed).await)
}
