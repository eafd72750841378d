//! Feed poll handlers for the dashboard TUI.
//!
//! This module contains the message handlers related to the poll timer and
//! snapshot application. Panels keep their previous data when an endpoint
//! degrades to `None` in the incoming snapshot.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::feed::DashboardSnapshot;
use crate::tui::messages::AppMsg;

impl DashboardApp {
    /// Dispatches poll messages to their handlers.
    pub(super) fn handle_poll_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::PollTick => self.handle_poll_tick(),
            AppMsg::PollComplete {
                snapshot,
                latency_ms,
            } => self.handle_poll_complete(snapshot, *latency_ms),
            AppMsg::PollFailed(error_msg) => self.handle_poll_failed(error_msg),
            _ => {
                debug_assert!(false, "non-poll message routed to handle_poll_msg");
                None
            }
        }
    }

    /// Applies one snapshot round, keeping previous data for every panel
    /// whose endpoint failed.
    pub(super) fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        if let Some(anomalies) = snapshot.anomalies {
            self.anomaly.set_posts(anomalies);
        }
        if let Some(recent) = snapshot.recent {
            self.recent = recent;
        }
        if let Some(emotions) = snapshot.emotions {
            self.emotions = emotions;
        }
        if let Some(locations) = snapshot.locations {
            self.locations = locations;
        }
        if let Some(geo) = snapshot.geo {
            self.geo = geo;
        }
        if let Some(series) = snapshot.series {
            self.series = series;
        }
        if let Some(trends) = snapshot.trends {
            self.trends = trends;
        }
        if let Some(insights) = snapshot.insights {
            self.insights = Some(insights);
        }
        if let Some(alert) = snapshot.alert {
            self.alert = Some(alert);
        }
    }

    /// Handles a poll timer tick.
    ///
    /// Skips the round if one is already in flight to prevent duplicate
    /// requests. Returns a command that fetches a snapshot and records
    /// timing.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn handle_poll_tick(&mut self) -> Option<Cmd> {
        if self.loading {
            return Some(Self::arm_poll_timer());
        }

        self.loading = true;
        self.error = None;

        Some(Box::pin(async {
            let start = std::time::Instant::now();
            match crate::tui::fetch_snapshot().await {
                Ok(snapshot) => {
                    #[expect(
                        clippy::cast_possible_truncation,
                        reason = "Latency over u64::MAX milliseconds is unrealistic"
                    )]
                    let latency_ms = start.elapsed().as_millis() as u64;
                    Some(Box::new(AppMsg::PollComplete {
                        snapshot: Box::new(snapshot),
                        latency_ms,
                    }) as Box<dyn Any + Send>)
                }
                Err(error) => {
                    Some(Box::new(AppMsg::from_error(&error)) as Box<dyn Any + Send>)
                }
            }
        }))
    }

    /// Handles a completed poll round, then re-arms the timer.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn handle_poll_complete(
        &mut self,
        snapshot: &DashboardSnapshot,
        latency_ms: u64,
    ) -> Option<Cmd> {
        let complete = snapshot_is_complete(snapshot);
        self.apply_snapshot(snapshot.clone());
        self.loading = false;
        self.status = Some(format!("Updated in {latency_ms} ms"));

        crate::tui::record_poll_telemetry(latency_ms, self.anomaly.posts().len(), complete);

        Some(Self::arm_poll_timer())
    }

    /// Handles a failed poll round. The timer is re-armed so transient
    /// failures do not stop periodic polling.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn handle_poll_failed(&mut self, error_msg: &str) -> Option<Cmd> {
        self.loading = false;
        self.error = Some(error_msg.to_owned());

        Some(Self::arm_poll_timer())
    }

    /// Creates a command that triggers a poll tick after the configured
    /// interval.
    pub(super) fn arm_poll_timer() -> Cmd {
        Box::pin(async {
            tokio::time::sleep(crate::tui::poll_interval()).await;
            Some(Box::new(AppMsg::PollTick) as Box<dyn Any + Send>)
        })
    }
}

/// Returns true when every endpoint contributed to the round.
const fn snapshot_is_complete(snapshot: &DashboardSnapshot) -> bool {
    snapshot.anomalies.is_some()
        && snapshot.recent.is_some()
        && snapshot.emotions.is_some()
        && snapshot.locations.is_some()
        && snapshot.geo.is_some()
        && snapshot.series.is_some()
        && snapshot.trends.is_some()
        && snapshot.insights.is_some()
        && snapshot.alert.is_some()
}
