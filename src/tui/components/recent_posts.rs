//! Recent posts panel.
//!
//! Lists the latest analysed posts with a polarity marker derived from the
//! sentiment label and the record timestamp when one is present.

use chrono::DateTime;

use crate::feed::SentimentSample;
use crate::tui::components::text_truncate::preview_line;

/// Default column budget for the post-text preview.
const DEFAULT_TEXT_WIDTH: usize = 64;

/// Component rendering the recent sentiment series.
#[derive(Debug, Clone)]
pub struct RecentPostsComponent {
    text_width: usize,
}

impl Default for RecentPostsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentPostsComponent {
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

    /// Renders the panel. Samples keep their served order.
    #[must_use]
    pub fn view(&self, samples: &[SentimentSample]) -> String {
        let mut output = String::from("Recent Posts\n");
        if samples.is_empty() {
            output.push_str("  (no posts)\n");
            return output;
        }

        for sample in samples {
            let marker = polarity_marker(sample);
            let stamp = timestamp_label(sample);
            let preview = preview_line(&sample.text, self.text_width);
            output.push_str(&format!("  {marker} {stamp}  {preview}\n"));
        }
        output
    }
}

/// Maps the sample's polarity to a single-character marker.
fn polarity_marker(sample: &SentimentSample) -> char {
    match sample.polarity() {
        1 => '+',
        -1 => '-',
        _ => '·',
    }
}

/// Formats the record's unix timestamp as `HH:MM:SS`, or a placeholder when
/// absent or out of range.
fn timestamp_label(sample: &SentimentSample) -> String {
    sample
        .timestamp
        .and_then(|secs| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "Unix timestamps from the pipeline fit in i64 seconds"
            )]
            DateTime::from_timestamp(secs as i64, 0)
        })
        .map_or_else(|| "--:--:--".to_owned(), |dt| dt.format("%H:%M:%S").to_string())
}
