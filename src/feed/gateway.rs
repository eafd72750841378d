//! HTTP gateway to the sentiment pipeline services.
//!
//! The gateway hides the pipeline's envelope conventions behind a trait so
//! the dashboard and CLI can be exercised against fakes. Every service
//! answers `200 OK` even for failures, carrying `{"error": "..."}` in the
//! body; the gateway maps that to [`FeedError::Api`] and structural
//! surprises to [`FeedError::Malformed`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::error::FeedError;
use super::locator::FeedLocator;
use super::models::{
    ApiDataEnvelope, ApiInsightsEnvelope, ApiPostsEnvelope, DashboardSnapshot, EmotionCount,
    GeoRecord, LocationCount, Post, SentimentAlert, SentimentInsights, SentimentSample,
    TrendPoint,
};

/// Request timeout applied to every feed call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Read access to every sentiment pipeline endpoint.
#[async_trait]
pub trait SentimentFeed: Send + Sync {
    /// Fetches the posts flagged by the anomaly detector.
    async fn anomalous_posts(&self) -> Result<Vec<Post>, FeedError>;

    /// Fetches the most recent analysed posts.
    async fn recent_posts(&self) -> Result<Vec<Post>, FeedError>;

    /// Fetches emotion label counts, in the order the service emits them.
    async fn emotion_distribution(&self) -> Result<Vec<EmotionCount>, FeedError>;

    /// Fetches the top locations by post count.
    async fn top_locations(&self) -> Result<Vec<LocationCount>, FeedError>;

    /// Fetches geo-tagged sentiment records.
    async fn geo_records(&self) -> Result<Vec<GeoRecord>, FeedError>;

    /// Fetches the raw recent sentiment series.
    async fn sentiment_series(&self) -> Result<Vec<SentimentSample>, FeedError>;

    /// Fetches the sentiment trend forecast.
    async fn sentiment_trends(&self) -> Result<Vec<TrendPoint>, FeedError>;

    /// Fetches the aggregate sentiment shares.
    async fn sentiment_insights(&self) -> Result<SentimentInsights, FeedError>;

    /// Fetches the current alert flag.
    async fn sentiment_alert(&self) -> Result<SentimentAlert, FeedError>;
}

/// [`SentimentFeed`] implementation over HTTP with a shared client.
#[derive(Debug, Clone)]
pub struct HttpSentimentFeed {
    client: Client,
    locator: FeedLocator,
}

impl HttpSentimentFeed {
    /// Creates a gateway for the given endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Network`] when the HTTP client cannot be built.
    pub fn new(locator: FeedLocator) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| FeedError::Network {
                message: error.to_string(),
            })?;
        Ok(Self { client, locator })
    }

    /// Performs a GET and decodes the body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FeedError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|error| FeedError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Api {
                message: format!("{url} answered {status}"),
            });
        }

        response.json().await.map_err(|error| FeedError::Malformed {
            message: format!("{url}: {error}"),
        })
    }

    /// Decodes a `{"posts": [...]}` envelope into typed posts.
    async fn get_posts(&self, url: Url) -> Result<Vec<Post>, FeedError> {
        let envelope: ApiPostsEnvelope = self.get_json(url).await?;
        if let Some(message) = envelope.error {
            return Err(FeedError::Api { message });
        }
        decode_records(envelope.posts, "posts")
    }

    /// Decodes a bare `{"label": count}` map, preserving emission order.
    async fn get_counts(&self, url: Url) -> Result<Vec<(String, u64)>, FeedError> {
        let value: Value = self.get_json(url).await?;
        let Value::Object(map) = value else {
            return Err(FeedError::Malformed {
                message: "count payload is not an object".to_owned(),
            });
        };
        if let Some(message) = map.get("error").and_then(Value::as_str) {
            return Err(FeedError::Api {
                message: message.to_owned(),
            });
        }
        Ok(map
            .into_iter()
            .map(|(label, count)| (label, count.as_u64().unwrap_or(0)))
            .collect())
    }

    /// Decodes a `{"data": [...]}` envelope into typed records.
    async fn get_data<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, FeedError> {
        let envelope: ApiDataEnvelope = self.get_json(url).await?;
        if let Some(message) = envelope.error {
            return Err(FeedError::Api { message });
        }
        decode_records(envelope.data, "data")
    }
}

/// Deserialises an optional array value into typed records, treating an
/// absent or non-array value as malformed so callers keep previous state.
fn decode_records<T: DeserializeOwned>(
    value: Option<Value>,
    field: &str,
) -> Result<Vec<T>, FeedError> {
    let records = value.ok_or_else(|| FeedError::Malformed {
        message: format!("payload is missing the '{field}' field"),
    })?;
    if !records.is_array() {
        return Err(FeedError::Malformed {
            message: format!("'{field}' is not an array"),
        });
    }
    serde_json::from_value(records).map_err(|error| FeedError::Malformed {
        message: format!("'{field}' records did not decode: {error}"),
    })
}

#[async_trait]
impl SentimentFeed for HttpSentimentFeed {
    async fn anomalous_posts(&self) -> Result<Vec<Post>, FeedError> {
        self.get_posts(self.locator.anomalous_posts()).await
    }

    async fn recent_posts(&self) -> Result<Vec<Post>, FeedError> {
        self.get_posts(self.locator.recent_posts()).await
    }

    async fn emotion_distribution(&self) -> Result<Vec<EmotionCount>, FeedError> {
        let counts = self.get_counts(self.locator.emotion_distribution()).await?;
        Ok(counts
            .into_iter()
            .map(|(emotion, count)| EmotionCount { emotion, count })
            .collect())
    }

    async fn top_locations(&self) -> Result<Vec<LocationCount>, FeedError> {
        let counts = self.get_counts(self.locator.top_locations()).await?;
        Ok(counts
            .into_iter()
            .map(|(location, count)| LocationCount { location, count })
            .collect())
    }

    async fn geo_records(&self) -> Result<Vec<GeoRecord>, FeedError> {
        self.get_data(self.locator.geo_data()).await
    }

    async fn sentiment_series(&self) -> Result<Vec<SentimentSample>, FeedError> {
        self.get_data(self.locator.sentiment_data()).await
    }

    async fn sentiment_trends(&self) -> Result<Vec<TrendPoint>, FeedError> {
        self.get_data(self.locator.sentiment_trends()).await
    }

    async fn sentiment_insights(&self) -> Result<SentimentInsights, FeedError> {
        let envelope: ApiInsightsEnvelope =
            self.get_json(self.locator.sentiment_insights()).await?;
        if let Some(message) = envelope.error {
            return Err(FeedError::Api { message });
        }
        envelope.insights.ok_or_else(|| FeedError::Malformed {
            message: "payload is missing the 'insights' field".to_owned(),
        })
    }

    async fn sentiment_alert(&self) -> Result<SentimentAlert, FeedError> {
        self.get_json(self.locator.sentiment_alert()).await
    }
}

/// Fetches one round of data for every panel, degrading per endpoint.
///
/// A failed or malformed endpoint logs a warning and leaves its snapshot
/// field `None`, so consumers keep the previous panel state. Nothing in a
/// poll is fatal.
pub async fn poll_snapshot(feed: &dyn SentimentFeed) -> DashboardSnapshot {
    DashboardSnapshot {
        anomalies: logged_ok("anomalous_posts", feed.anomalous_posts().await),
        recent: logged_ok("recent_posts", feed.recent_posts().await),
        emotions: logged_ok("emotion_distribution", feed.emotion_distribution().await),
        locations: logged_ok("top_locations", feed.top_locations().await),
        geo: logged_ok("geo_records", feed.geo_records().await),
        series: logged_ok("sentiment_series", feed.sentiment_series().await),
        trends: logged_ok("sentiment_trends", feed.sentiment_trends().await),
        insights: logged_ok("sentiment_insights", feed.sentiment_insights().await),
        alert: logged_ok("sentiment_alert", feed.sentiment_alert().await),
    }
}

/// Converts an endpoint result to an option, logging the failure.
fn logged_ok<T>(endpoint: &str, result: Result<T, FeedError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(endpoint, %error, "feed endpoint failed, keeping previous data");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "Tests panic on failure")]

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn gateway_for(server: &MockServer) -> HttpSentimentFeed {
        let locator = FeedLocator::single_host(&server.uri()).expect("mock URI should parse");
        HttpSentimentFeed::new(locator).expect("client should build")
    }

    async fn mount_json(server: &MockServer, endpoint: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn anomalous_posts_decodes_the_envelope() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/get_anomalous_posts",
            json!({"posts": [
                {"text": "a", "emotion": "Anger", "score": 0.9},
                {"text": "b", "emotion": "fear", "score": "0.3"}
            ]}),
        )
        .await;

        let gateway = gateway_for(&server);
        let posts = gateway
            .anomalous_posts()
            .await
            .expect("request should succeed");

        assert_eq!(posts.len(), 2);
        let first = posts.first().expect("should have first post");
        assert_eq!(first.text, "a");
        assert_eq!(first.emotion, "Anger");
        assert_eq!(first.score_display(), "0.90");
    }

    #[tokio::test]
    async fn error_payload_maps_to_api_error() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/get_anomalous_posts",
            json!({"error": "File 'data/anomaly_detection_results.csv' not found"}),
        )
        .await;

        let gateway = gateway_for(&server);
        let error = gateway
            .anomalous_posts()
            .await
            .expect_err("request should fail");

        assert!(
            matches!(error, FeedError::Api { ref message } if message.contains("not found")),
            "expected Api error, got {error:?}"
        );
    }

    #[tokio::test]
    async fn non_array_posts_field_is_malformed() {
        let server = MockServer::start().await;
        mount_json(&server, "/get_anomalous_posts", json!({"posts": "nope"})).await;

        let gateway = gateway_for(&server);
        let error = gateway
            .anomalous_posts()
            .await
            .expect_err("request should fail");

        assert!(matches!(error, FeedError::Malformed { .. }));
    }

    #[tokio::test]
    async fn emotion_distribution_preserves_service_order() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/get_emotion_distribution",
            json!({"joy": 40, "anger": 25, "fear": 10}),
        )
        .await;

        let gateway = gateway_for(&server);
        let counts = gateway
            .emotion_distribution()
            .await
            .expect("request should succeed");

        let labels: Vec<&str> = counts.iter().map(|c| c.emotion.as_str()).collect();
        assert_eq!(labels, vec!["joy", "anger", "fear"]);
        assert_eq!(counts.first().map(|c| c.count), Some(40));
    }

    #[tokio::test]
    async fn http_failure_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_recent_posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let error = gateway
            .recent_posts()
            .await
            .expect_err("request should fail");

        assert!(matches!(error, FeedError::Api { .. }));
    }

    #[tokio::test]
    async fn poll_snapshot_degrades_per_endpoint() {
        let server = MockServer::start().await;
        // Only two endpoints answer; the rest return connection-level 404s.
        mount_json(
            &server,
            "/get_anomalous_posts",
            json!({"posts": [{"text": "a", "emotion": "sadness", "score": 0.8}]}),
        )
        .await;
        mount_json(&server, "/get_sentiment_alert", json!({"alert": true, "message": "spike"}))
            .await;

        let gateway = gateway_for(&server);
        let snapshot = poll_snapshot(&gateway).await;

        assert_eq!(snapshot.anomalies.map(|posts| posts.len()), Some(1));
        assert_eq!(
            snapshot.alert.map(|alert| alert.message),
            Some("spike".to_owned())
        );
        assert!(snapshot.emotions.is_none());
        assert!(snapshot.trends.is_none());
        assert!(snapshot.recent.is_none());
    }

    #[tokio::test]
    async fn empty_posts_array_is_a_valid_payload() {
        let server = MockServer::start().await;
        mount_json(&server, "/get_recent_posts", json!({"posts": []})).await;

        let gateway = gateway_for(&server);
        let posts = gateway.recent_posts().await.expect("request should succeed");
        assert!(posts.is_empty());
    }
}
