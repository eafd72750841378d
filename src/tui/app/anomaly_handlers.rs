//! Anomaly viewer handlers for the dashboard TUI.
//!
//! This module contains the message handlers for the anomaly panel: filter
//! changes, reveal-all, panel expansion, and the CSV export of the filtered
//! set.

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::export::{ANOMALY_EXPORT_FILENAME, ExportedPost, write_csv_file};
use crate::tui::messages::AppMsg;
use crate::tui::state::EmotionFilter;

impl DashboardApp {
    /// Dispatches anomaly viewer messages to their handlers.
    pub(super) fn handle_anomaly_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SetFilter(filter) => self.handle_set_filter(filter),
            AppMsg::ClearFilter => self.handle_clear_filter(),
            AppMsg::CycleFilter => self.handle_cycle_filter(),
            AppMsg::RevealAll => self.handle_reveal_all(),
            AppMsg::ToggleAnomalies => self.handle_toggle_anomalies(),
            AppMsg::ExportRequested => self.handle_export_requested(),
            _ => {
                debug_assert!(false, "non-anomaly message routed to handle_anomaly_msg");
                None
            }
        }
    }

    fn handle_set_filter(&mut self, filter: &EmotionFilter) -> Option<Cmd> {
        self.anomaly.set_filter(filter.clone());
        None
    }

    fn handle_clear_filter(&mut self) -> Option<Cmd> {
        self.anomaly.set_filter(EmotionFilter::All);
        None
    }

    fn handle_cycle_filter(&mut self) -> Option<Cmd> {
        self.anomaly.cycle_filter();
        None
    }

    fn handle_reveal_all(&mut self) -> Option<Cmd> {
        self.anomaly.reveal_all();
        None
    }

    fn handle_toggle_anomalies(&mut self) -> Option<Cmd> {
        self.anomaly.toggle_expanded();
        None
    }

    /// Writes the filtered anomaly set to the CSV artifact.
    ///
    /// An empty filtered set produces no file; the status line reports the
    /// outcome either way.
    fn handle_export_requested(&mut self) -> Option<Cmd> {
        let records: Vec<ExportedPost> = self
            .anomaly
            .filtered_posts()
            .into_iter()
            .map(ExportedPost::from)
            .collect();

        if records.is_empty() {
            self.status = Some("No anomalous posts to export".to_owned());
            return None;
        }

        match write_csv_file(ANOMALY_EXPORT_FILENAME, &records) {
            Ok(()) => {
                self.status = Some(format!(
                    "Exported {count} posts to {ANOMALY_EXPORT_FILENAME}",
                    count = records.len(),
                ));
                self.error = None;
                crate::tui::record_export_telemetry(records.len());
            }
            Err(error) => {
                self.error = Some(format!("Export failed: {error}"));
            }
        }
        None
    }
}
