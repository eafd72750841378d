//! Anomaly export operation for structured output.
//!
//! This module fetches the anomalous posts, applies the negative-emotion
//! classification and an optional emotion filter, and writes the result as
//! CSV to a file or stdout for downstream processing.

use std::io::{self, Write};

use pulseboard::export::{ANOMALY_EXPORT_FILENAME, ExportedPost, write_csv, write_csv_file};
use pulseboard::tui::state::{EmotionFilter, negative_emotion_style};
use pulseboard::{FeedError, HttpSentimentFeed, Post, PulseboardConfig, SentimentFeed};

/// Exports the anomalous posts as CSV.
///
/// An empty filtered set writes nothing and reports that on stderr via the
/// caller's error path being skipped; the file is simply not created.
///
/// # Errors
///
/// Returns an error if:
/// - A configured endpoint URL is invalid
/// - The anomaly endpoint fails or serves a malformed payload
/// - Writing the output fails
pub async fn run(config: &PulseboardConfig) -> Result<(), FeedError> {
    let locator = config.resolve_locator()?;
    let feed = HttpSentimentFeed::new(locator)?;
    let posts = feed.anomalous_posts().await?;

    let records = filter_records(&posts, config.emotion.as_deref());
    write_output(config, &records)
}

/// Applies the negative-emotion classification and the optional literal
/// emotion filter, preserving input order.
fn filter_records(posts: &[Post], emotion: Option<&str>) -> Vec<ExportedPost> {
    let filter = emotion.map_or(EmotionFilter::All, |label| {
        EmotionFilter::Emotion(label.to_owned())
    });

    posts
        .iter()
        .filter(|post| negative_emotion_style(&post.emotion).is_some())
        .filter(|post| filter.matches(post))
        .map(ExportedPost::from)
        .collect()
}

/// Writes the records to the configured destination.
///
/// `--output -` selects stdout; any other path is created as a file. When
/// no output is configured the default artifact name is used.
fn write_output(config: &PulseboardConfig, records: &[ExportedPost]) -> Result<(), FeedError> {
    match config.output.as_deref() {
        Some("-") => {
            if records.is_empty() {
                return Ok(());
            }
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_csv(&mut writer, records)?;
            writeln!(writer).map_err(|error| FeedError::Io {
                message: error.to_string(),
            })
        }
        Some(path) => write_csv_file(path, records),
        None => write_csv_file(ANOMALY_EXPORT_FILENAME, records),
    }
}
