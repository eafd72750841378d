//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.pulseboard.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PULSEBOARD_API_URL`, `PULSEBOARD_POLL_INTERVAL_SECONDS`, …
//! 4. **Command-line arguments** – `--api-url`/`-a`, `--snapshot`, …
//!
//! # Configuration File
//!
//! Place `.pulseboard.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! api_url = "http://127.0.0.1:8005"
//! data_url = "http://127.0.0.1:8001"
//! poll_interval_seconds = 5
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::feed::FeedError;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive dashboard TUI.
    Dashboard,
    /// One-shot snapshot printed to stdout.
    Snapshot,
    /// Export the anomalous posts to CSV and exit.
    ExportAnomalies,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PULSEBOARD_API_URL` or `--api-url`: Anomaly/alert service base URL
/// - `PULSEBOARD_DATA_URL` or `--data-url`: Sentiment data service base URL
/// - `PULSEBOARD_GEO_URL` or `--geo-url`: Geo service base URL
/// - `PULSEBOARD_TRENDS_URL` or `--trends-url`: Trend forecast service base URL
/// - `PULSEBOARD_INSIGHTS_URL` or `--insights-url`: Insights service base URL
/// - `PULSEBOARD_POLL_INTERVAL_SECONDS` or `--poll-interval-seconds`: Poll cadence
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use pulseboard::PulseboardConfig;
///
/// let config = PulseboardConfig::load().expect("failed to load configuration");
/// let locator = config.resolve_locator().expect("valid endpoint URLs");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PULSEBOARD",
    discovery(
        dotfile_name = ".pulseboard.toml",
        config_file_name = "pulseboard.toml",
        app_name = "pulseboard"
    )
)]
pub struct PulseboardConfig {
    /// Base URL of the anomaly/alert service.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-a <URL>`
    /// - Environment: `PULSEBOARD_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_url: Option<String>,

    /// Base URL of the sentiment data service.
    pub data_url: Option<String>,

    /// Base URL of the geo service.
    pub geo_url: Option<String>,

    /// Base URL of the trend forecast service.
    pub trends_url: Option<String>,

    /// Base URL of the insights service.
    pub insights_url: Option<String>,

    /// Single base URL serving every endpoint; overrides the per-service
    /// URLs when set.
    ///
    /// Can be provided via:
    /// - CLI: `--host <URL>` or `-H <URL>`
    /// - Environment: `PULSEBOARD_HOST`
    /// - Config file: `host = "..."`
    #[ortho_config(cli_short = 'H')]
    pub host: Option<String>,

    /// Seconds between feed poll rounds in dashboard mode.
    #[ortho_config()]
    pub poll_interval_seconds: u64,

    /// Prints one snapshot to stdout and exits instead of opening the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--snapshot` / `-s`
    /// - Config file: `snapshot = true`
    ///
    /// Note: Environment variable `PULSEBOARD_SNAPSHOT` is not supported
    /// because `ortho_config` does not load boolean values from the
    /// environment.
    #[ortho_config(cli_short = 's')]
    pub snapshot: bool,

    /// Exports the anomalous posts to CSV and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--export-anomalies` / `-x`
    /// - Config file: `export_anomalies = true`
    #[ortho_config(cli_short = 'x')]
    pub export_anomalies: bool,

    /// Output path for the CSV export. Writes to stdout when set to `-`.
    ///
    /// Can be provided via:
    /// - CLI: `--output <PATH>` or `-o <PATH>`
    /// - Environment: `PULSEBOARD_OUTPUT`
    /// - Config file: `output = "..."`
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,

    /// Restricts the CSV export to one emotion label (literal match).
    ///
    /// Can be provided via:
    /// - CLI: `--emotion <LABEL>` or `-e <LABEL>`
    /// - Environment: `PULSEBOARD_EMOTION`
    /// - Config file: `emotion = "..."`
    #[ortho_config(cli_short = 'e')]
    pub emotion: Option<String>,
}

const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 5;

impl Default for PulseboardConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            data_url: None,
            geo_url: None,
            trends_url: None,
            insights_url: None,
            host: None,
            poll_interval_seconds: DEFAULT_POLL_INTERVAL_SECONDS,
            snapshot: false,
            export_anomalies: false,
            output: None,
            emotion: None,
        }
    }
}

impl PulseboardConfig {
    /// Resolves the endpoint locator from the configured base URLs.
    ///
    /// When `host` is set, every endpoint is served from that single base.
    /// Otherwise each service falls back to its default local port.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] when a configured URL does not
    /// parse.
    pub fn resolve_locator(&self) -> Result<crate::feed::FeedLocator, FeedError> {
        if let Some(host) = &self.host {
            return crate::feed::FeedLocator::single_host(host);
        }
        crate::feed::FeedLocator::resolve(
            self.api_url.as_deref(),
            self.data_url.as_deref(),
            self.geo_url.as_deref(),
            self.trends_url.as_deref(),
            self.insights_url.as_deref(),
        )
    }

    /// Returns the poll interval as a duration.
    #[must_use]
    pub const fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_seconds)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `ExportAnomalies` when the export flag is set, `Snapshot`
    /// when the snapshot flag is set, and `Dashboard` otherwise. The export
    /// flag wins when both are set.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.export_anomalies {
            OperationMode::ExportAnomalies
        } else if self.snapshot {
            OperationMode::Snapshot
        } else {
            OperationMode::Dashboard
        }
    }
}
