//! Rendering logic for the dashboard TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::DashboardApp;
use crate::feed::{EmotionCount, LocationCount};
use crate::tui::components::BarDatum;
use crate::tui::state::emotion_badge;

/// Maximum geo records shown in the geo panel.
const GEO_PANEL_ROWS: usize = 5;

/// Maximum analysed posts shown in the analysed-posts panel.
const ANALYSED_PANEL_ROWS: usize = 5;

impl DashboardApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Pulseboard - Social Sentiment Dashboard";
        let loading_indicator = if self.loading { " [Polling...]" } else { "" };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the alert line when the anomaly detector has raised a flag.
    pub(super) fn render_alert_line(&self) -> String {
        match &self.alert {
            Some(alert) if alert.alert => format!("!! ALERT: {message}\n", message = alert.message),
            _ => String::new(),
        }
    }

    /// Renders the aggregate sentiment shares.
    pub(super) fn render_insights_line(&self) -> String {
        self.insights.as_ref().map_or_else(String::new, |insights| {
            format!(
                "Sentiment: {positive:.1}% positive / {negative:.1}% negative / {neutral:.1}% neutral ({total} posts)\n",
                positive = insights.positive,
                negative = insights.negative,
                neutral = insights.neutral,
                total = insights.total_posts,
            )
        })
    }

    /// Renders the latest analysed posts with their emotion badges.
    pub(super) fn render_analysed_posts(&self) -> String {
        let mut output = String::from("Latest Analysed Posts\n");
        if self.recent.is_empty() {
            output.push_str("  (no posts)\n");
            return output;
        }

        for post in self.recent.iter().take(ANALYSED_PANEL_ROWS) {
            let badge = emotion_badge(&post.emotion);
            output.push_str(&format!(
                "  [{label}] {score}  {text}\n",
                label = badge.label,
                score = post.score_display(),
                text = post.text.lines().next().unwrap_or(""),
            ));
        }
        output
    }

    /// Renders the most recent geo-tagged records.
    pub(super) fn render_geo_panel(&self) -> String {
        let mut output = String::from("Geo Pulse\n");
        if self.geo.is_empty() {
            output.push_str("  (no data)\n");
            return output;
        }

        for record in self.geo.iter().take(GEO_PANEL_ROWS) {
            output.push_str(&format!(
                "  {location} - {emotion} ({source})\n",
                location = record.location,
                emotion = record.emotion,
                source = record.source,
            ));
        }
        output
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        if let Some(status) = &self.status {
            return format!("{status}\n");
        }

        format!("{hints}\n", hints = self.status_hints())
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Anomaly viewer:
  f, Tab     Cycle emotion filter
  Esc        Clear filter (show all)
  v          Reveal all filtered posts
  a          Expand/collapse the anomaly panel
  e          Export filtered anomalies to CSV

Other:
  r          Poll the feed now
  ?          Toggle this help
  q          Quit

Press ? to close this help.
";
        help_text.to_owned()
    }

    /// Converts emotion counts to chart rows.
    pub(super) fn emotion_data(emotions: &[EmotionCount]) -> Vec<BarDatum> {
        emotions
            .iter()
            .map(|e| BarDatum {
                label: e.emotion.clone(),
                count: e.count,
            })
            .collect()
    }

    /// Converts location counts to chart rows.
    pub(super) fn location_data(locations: &[LocationCount]) -> Vec<BarDatum> {
        locations
            .iter()
            .map(|l| BarDatum {
                label: l.location.clone(),
                count: l.count,
            })
            .collect()
    }

    const fn status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  f:filter  v:reveal  e:export"
        } else {
            "f:filter  Esc:clear  v:reveal all  a:toggle panel  e:export CSV  r:poll  ?:help  q:quit"
        }
    }
}
