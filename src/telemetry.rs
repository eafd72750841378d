//! Application telemetry events and sinks.
//!
//! Pulseboard is a local-first tool, but it still benefits from lightweight
//! telemetry to support debugging and to capture operational signals such as
//! feed poll latency.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Pulseboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records the outcome of one feed poll round.
    FeedPollRecorded {
        /// Wall-clock duration of the round in milliseconds.
        latency_ms: u64,
        /// Number of anomalous posts held after the round.
        anomaly_count: u64,
        /// Whether every endpoint answered with usable data.
        complete: bool,
    },
    /// Records a CSV export of the filtered anomaly set.
    AnomalyExportRecorded {
        /// Number of rows written.
        rows: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
