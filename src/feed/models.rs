//! Data models for records served by the sentiment pipeline.
//!
//! Public structs are the domain types the dashboard works with. Types
//! prefixed with `Api` are internal deserialisation targets for the envelope
//! shapes the pipeline services answer with (`{"posts": [...]}`,
//! `{"data": [...]}`, bare count maps, or `{"error": "..."}`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A social media post scored by the sentiment pipeline.
///
/// Only `text` and `emotion` are guaranteed by the feed contract; everything
/// else degrades gracefully. Fields beyond the known three are preserved in
/// `extra` in arrival order so that exports can reproduce the upstream
/// record byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post body text, arbitrary length. Truncation is a display concern.
    #[serde(default)]
    pub text: String,
    /// Emotion label assigned by the classifier, case preserved as served.
    #[serde(default)]
    pub emotion: String,
    /// Confidence score. Absent, null, or non-numeric values all display as
    /// "N/A" rather than erroring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    /// Any additional upstream fields, in arrival order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    /// Formats the score for display: two-decimal fixed point when the value
    /// is numeric or numeric-coercible, otherwise "N/A".
    #[must_use]
    pub fn score_display(&self) -> String {
        self.score
            .as_ref()
            .and_then(Score::as_f64)
            .map_or_else(|| "N/A".to_owned(), |value| format!("{value:.2}"))
    }
}

/// A confidence score as served by the pipeline: a JSON number, or a string
/// that may or may not parse as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    /// Numeric score.
    Number(f64),
    /// String-typed score, coerced on display when it parses.
    Text(String),
}

impl Score {
    /// Returns the numeric value when the score is a number or a
    /// numeric-coercible string.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Converts the score to its JSON value for export.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Number(value) => {
                serde_json::Number::from_f64(*value).map_or(Value::Null, Value::Number)
            }
            Self::Text(text) => Value::String(text.clone()),
        }
    }
}

/// Count of posts carrying one emotion label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionCount {
    /// Emotion label as served.
    pub emotion: String,
    /// Number of posts with that label.
    pub count: u64,
}

/// Count of posts originating from one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCount {
    /// Location name as served.
    pub location: String,
    /// Number of posts from that location.
    pub count: u64,
}

/// One point of the sentiment trend forecast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendPoint {
    /// Timestamp label for the forecast point.
    #[serde(default)]
    pub ds: String,
    /// Predicted sentiment value.
    #[serde(default)]
    pub yhat: f64,
}

/// A geo-tagged sentiment record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeoRecord {
    /// Location name.
    #[serde(default)]
    pub location: String,
    /// Emotion label.
    #[serde(default)]
    pub emotion: String,
    /// Source platform the post came from.
    #[serde(default)]
    pub source: String,
}

/// Aggregate sentiment share across all analysed posts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentInsights {
    /// Percentage of positive posts.
    #[serde(default)]
    pub positive: f64,
    /// Percentage of negative posts.
    #[serde(default)]
    pub negative: f64,
    /// Percentage of neutral posts.
    #[serde(default)]
    pub neutral: f64,
    /// Total number of analysed posts.
    #[serde(default)]
    pub total_posts: u64,
}

/// One raw record of the recent sentiment series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentSample {
    /// Sentiment label (POSITIVE / NEGATIVE / NEUTRAL).
    #[serde(default)]
    pub sentiment: String,
    /// Post text.
    #[serde(default)]
    pub text: String,
    /// Unix timestamp of the record, when present.
    #[serde(default)]
    pub timestamp: Option<f64>,
}

impl SentimentSample {
    /// Maps the sentiment label to a signed polarity: positive 1,
    /// negative -1, anything else 0.
    #[must_use]
    pub fn polarity(&self) -> i8 {
        match self.sentiment.to_uppercase().as_str() {
            "POSITIVE" => 1,
            "NEGATIVE" => -1,
            _ => 0,
        }
    }
}

/// Alert flag raised by the anomaly detector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SentimentAlert {
    /// Whether an alert is currently active.
    #[serde(default)]
    pub alert: bool,
    /// Human-readable alert message.
    #[serde(default)]
    pub message: String,
}

/// One round of data for every dashboard panel.
///
/// Each field is `None` when its endpoint failed or answered with a
/// malformed payload; the consumer keeps the previous panel state in that
/// case rather than blanking it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    /// Posts flagged by the anomaly detector.
    pub anomalies: Option<Vec<Post>>,
    /// Most recent analysed posts.
    pub recent: Option<Vec<Post>>,
    /// Emotion label counts.
    pub emotions: Option<Vec<EmotionCount>>,
    /// Top locations by post count.
    pub locations: Option<Vec<LocationCount>>,
    /// Geo-tagged sentiment records.
    pub geo: Option<Vec<GeoRecord>>,
    /// Raw recent sentiment series.
    pub series: Option<Vec<SentimentSample>>,
    /// Sentiment trend forecast points.
    pub trends: Option<Vec<TrendPoint>>,
    /// Aggregate sentiment shares.
    pub insights: Option<SentimentInsights>,
    /// Current alert flag.
    pub alert: Option<SentimentAlert>,
}

/// Envelope for `{"posts": [...]}` payloads.
#[derive(Debug, Deserialize)]
pub(super) struct ApiPostsEnvelope {
    pub(super) posts: Option<Value>,
    pub(super) error: Option<String>,
}

/// Envelope for `{"data": [...]}` payloads.
#[derive(Debug, Deserialize)]
pub(super) struct ApiDataEnvelope {
    pub(super) data: Option<Value>,
    pub(super) error: Option<String>,
}

/// Envelope for `{"insights": {...}}` payloads.
#[derive(Debug, Deserialize)]
pub(super) struct ApiInsightsEnvelope {
    pub(super) insights: Option<SentimentInsights>,
    pub(super) error: Option<String>,
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "Tests panic on failure")]

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(r#"{"text":"a","emotion":"anger","score":0.9}"#, Some(0.9))]
    #[case(r#"{"text":"a","emotion":"anger","score":"0.7"}"#, Some(0.7))]
    #[case(r#"{"text":"a","emotion":"anger","score":null}"#, None)]
    #[case(r#"{"text":"a","emotion":"anger"}"#, None)]
    #[case(r#"{"text":"a","emotion":"anger","score":"n/a"}"#, None)]
    fn post_score_coerces_numbers_and_numeric_strings(
        #[case] payload: &str,
        #[case] expected: Option<f64>,
    ) {
        let post: Post = serde_json::from_str(payload).expect("post should deserialise");
        assert_eq!(post.score.as_ref().and_then(Score::as_f64), expected);
    }

    #[rstest]
    #[case(r#"{"text":"a","emotion":"anger","score":"0.7"}"#, "0.70")]
    #[case(r#"{"text":"a","emotion":"anger","score":0.9}"#, "0.90")]
    #[case(r#"{"text":"a","emotion":"anger","score":null}"#, "N/A")]
    #[case(r#"{"text":"a","emotion":"anger","score":""}"#, "N/A")]
    fn score_display_is_fixed_point_or_not_available(
        #[case] payload: &str,
        #[case] expected: &str,
    ) {
        let post: Post = serde_json::from_str(payload).expect("post should deserialise");
        assert_eq!(post.score_display(), expected);
    }

    #[test]
    fn post_preserves_extra_fields_in_arrival_order() {
        let payload = r#"{"text":"a","emotion":"fear","score":0.3,"timestamp":1700000000,"location":"Berlin"}"#;
        let post: Post = serde_json::from_str(payload).expect("post should deserialise");

        let keys: Vec<&str> = post.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["timestamp", "location"]);
    }

    #[test]
    fn post_defaults_missing_required_display_fields() {
        let post: Post = serde_json::from_str("{}").expect("empty record should deserialise");
        assert!(post.text.is_empty());
        assert!(post.emotion.is_empty());
        assert!(post.score.is_none());
    }

    #[test]
    fn posts_envelope_carries_error_payloads() {
        let envelope: ApiPostsEnvelope =
            serde_json::from_str(r#"{"error":"File not found"}"#).expect("should deserialise");
        assert!(envelope.posts.is_none());
        assert_eq!(envelope.error.as_deref(), Some("File not found"));
    }
}
