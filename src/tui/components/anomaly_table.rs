//! Anomalous-post table component.
//!
//! Renders the collapsible anomaly panel: header with the filtered count,
//! a filter bar of emotion categories, the revealed rows, and a reveal-all
//! hint when more posts remain past the cutoff.

use crate::tui::components::text_truncate::preview_line;
use crate::tui::state::{AnomalyProjection, emotion_badge};

/// Message shown when no negative-classified post passes the filter.
pub const EMPTY_ANOMALY_MESSAGE: &str = "No anomalies detected at the moment.";

/// Default column budget for the post-text preview.
const DEFAULT_TEXT_WIDTH: usize = 72;

/// Component for the anomalous-post panel.
#[derive(Debug, Clone)]
pub struct AnomalyTableComponent {
    text_width: usize,
}

impl Default for AnomalyTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl AnomalyTableComponent {
    /// Creates the component with the default preview width.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text_width: DEFAULT_TEXT_WIDTH,
        }
    }

    /// Updates the preview width after a terminal resize.
    pub const fn set_text_width(&mut self, width: usize) {
        self.text_width = width;
    }

    /// Renders the panel from the viewer's projection.
    #[must_use]
    pub fn view(&self, projection: &AnomalyProjection<'_>) -> String {
        let marker = if projection.expanded { "▼" } else { "►" };
        let mut output = format!(
            "{marker} Anomalous Posts ({count})\n",
            count = projection.filtered_len
        );

        if !projection.expanded {
            return output;
        }

        output.push_str(&Self::filter_bar(projection));

        if projection.visible.is_empty() {
            output.push_str("  ");
            output.push_str(EMPTY_ANOMALY_MESSAGE);
            output.push('\n');
            return output;
        }

        for post in &projection.visible {
            let badge = emotion_badge(&post.emotion);
            let preview = preview_line(&post.text, self.text_width);
            output.push_str(&format!(
                "  [{label}] {score}  {preview}\n",
                label = badge.label,
                score = post.score_display(),
            ));
        }

        if projection.has_more {
            output.push_str(&format!(
                "  View All {count} Posts\n",
                count = projection.filtered_len
            ));
        }

        output
    }

    /// Renders the filter bar, bracketing the active option.
    fn filter_bar(projection: &AnomalyProjection<'_>) -> String {
        let mut bar = String::from("  Filter:");
        for option in &projection.category_options {
            if *option == projection.active_label {
                bar.push_str(&format!(" [{option}]"));
            } else {
                bar.push_str(&format!(" {option}"));
            }
        }
        bar.push('\n');
        bar
    }
}
