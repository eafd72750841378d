//! One-shot snapshot mode.
//!
//! Fetches a single round of data from the pipeline services and prints a
//! plain-text summary to stdout, for scripting and quick health checks.

use std::io::{self, Write};

use pulseboard::{
    DashboardSnapshot, FeedError, HttpSentimentFeed, PulseboardConfig, poll_snapshot,
};

/// Runs the snapshot mode.
///
/// # Errors
///
/// Returns an error if a configured endpoint URL is invalid, the HTTP client
/// fails to initialise, or writing to stdout fails.
pub async fn run(config: &PulseboardConfig) -> Result<(), FeedError> {
    let locator = config.resolve_locator()?;
    let feed = HttpSentimentFeed::new(locator)?;
    let snapshot = poll_snapshot(&feed).await;

    let mut stdout = io::stdout().lock();
    write_summary(&mut stdout, &snapshot)
}

/// Writes the snapshot summary, one line per panel.
fn write_summary<W: Write>(writer: &mut W, snapshot: &DashboardSnapshot) -> Result<(), FeedError> {
    let io_error = |error: io::Error| FeedError::Io {
        message: error.to_string(),
    };

    if let Some(alert) = &snapshot.alert {
        if alert.alert {
            writeln!(writer, "ALERT: {message}", message = alert.message).map_err(io_error)?;
        }
    }

    if let Some(insights) = &snapshot.insights {
        writeln!(
            writer,
            "Sentiment: {positive:.1}% positive / {negative:.1}% negative / {neutral:.1}% neutral ({total} posts)",
            positive = insights.positive,
            negative = insights.negative,
            neutral = insights.neutral,
            total = insights.total_posts,
        )
        .map_err(io_error)?;
    }

    writeln!(
        writer,
        "Anomalous posts: {}",
        count_or_dash(snapshot.anomalies.as_deref())
    )
    .map_err(io_error)?;
    writeln!(
        writer,
        "Recent posts: {}",
        count_or_dash(snapshot.recent.as_deref())
    )
    .map_err(io_error)?;
    writeln!(
        writer,
        "Emotion categories: {}",
        count_or_dash(snapshot.emotions.as_deref())
    )
    .map_err(io_error)?;
    writeln!(
        writer,
        "Top locations: {}",
        count_or_dash(snapshot.locations.as_deref())
    )
    .map_err(io_error)?;
    writeln!(
        writer,
        "Geo records: {}",
        count_or_dash(snapshot.geo.as_deref())
    )
    .map_err(io_error)?;
    writeln!(
        writer,
        "Trend points: {}",
        count_or_dash(snapshot.trends.as_deref())
    )
    .map_err(io_error)?;

    Ok(())
}

/// Formats a panel's record count, or a dash when its endpoint failed.
fn count_or_dash<T>(records: Option<&[T]>) -> String {
    records.map_or_else(|| "-".to_owned(), |r| r.len().to_string())
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "Tests panic on failure")]

    use pulseboard::{SentimentAlert, SentimentInsights};

    use super::*;

    #[test]
    fn summary_reports_counts_and_dashes() {
        let snapshot = DashboardSnapshot {
            anomalies: Some(Vec::new()),
            insights: Some(SentimentInsights {
                positive: 50.0,
                negative: 30.0,
                neutral: 20.0,
                total_posts: 10,
            }),
            alert: Some(SentimentAlert {
                alert: true,
                message: "spike".to_owned(),
            }),
            ..DashboardSnapshot::default()
        };

        let mut buffer = Vec::new();
        write_summary(&mut buffer, &snapshot).expect("summary should write");
        let text = String::from_utf8(buffer).expect("summary should be UTF-8");

        assert!(text.contains("ALERT: spike"));
        assert!(text.contains("Anomalous posts: 0"));
        assert!(text.contains("Recent posts: -"));
        assert!(text.contains("Sentiment: 50.0% positive"));
    }
}
