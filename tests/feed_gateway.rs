//! Integration tests for the feed gateway against a mock pipeline.
//!
//! These spin up a single wiremock server standing in for every pipeline
//! service and verify snapshot aggregation with per-endpoint degradation.

#![expect(clippy::expect_used, reason = "Tests panic on failure")]

use pulseboard::{FeedLocator, HttpSentimentFeed, SentimentFeed, poll_snapshot};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_pipeline() -> (MockServer, HttpSentimentFeed) {
    let server = MockServer::start().await;
    let locator =
        FeedLocator::single_host(&server.uri()).expect("mock server URI should parse");
    let feed = HttpSentimentFeed::new(locator).expect("client should build");
    (server, feed)
}

async fn mount_json(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_round_fills_every_panel() {
    let (server, feed) = mock_pipeline().await;

    mount_json(&server, "/get_anomalous_posts", json!({"posts": []})).await;
    mount_json(
        &server,
        "/get_recent_posts",
        json!({"posts": [{"text": "b", "emotion": "joy", "score": "0.7"}]}),
    )
    .await;
    mount_json(&server, "/get_emotion_distribution", json!({"anger": 4, "joy": 2})).await;
    mount_json(&server, "/get_top_locations", json!({"London": 3})).await;
    mount_json(
        &server,
        "/get_geo_data",
        json!({"data": [{"location": "London", "emotion": "fear", "source": "forum"}]}),
    )
    .await;
    mount_json(
        &server,
        "/get_sentiment_data",
        json!({"data": [{"sentiment": "POSITIVE", "text": "x", "timestamp": 1000.0}]}),
    )
    .await;
    mount_json(
        &server,
        "/get_sentiment_trends",
        json!({"data": [{"ds": "2026-08-29", "yhat": 0.4}]}),
    )
    .await;
    mount_json(
        &server,
        "/get_sentiment_insights",
        json!({"insights": {"positive": 50.0, "negative": 30.0, "neutral": 20.0, "total_posts": 10}}),
    )
    .await;
    mount_json(&server, "/get_sentiment_alert", json!({"alert": false, "message": ""})).await;

    let snapshot = poll_snapshot(&feed).await;

    assert_eq!(snapshot.anomalies.as_deref(), Some(&[][..]));
    assert_eq!(snapshot.recent.map(|r| r.len()), Some(1));
    assert_eq!(snapshot.emotions.map(|e| e.len()), Some(2));
    assert_eq!(snapshot.locations.map(|l| l.len()), Some(1));
    assert_eq!(snapshot.geo.map(|g| g.len()), Some(1));
    assert_eq!(snapshot.series.map(|s| s.len()), Some(1));
    assert_eq!(snapshot.trends.map(|t| t.len()), Some(1));
    assert!(snapshot.insights.is_some());
    assert!(snapshot.alert.is_some());
}

#[tokio::test]
async fn error_envelope_degrades_that_panel_only() {
    let (server, feed) = mock_pipeline().await;

    mount_json(
        &server,
        "/get_anomalous_posts",
        json!({"error": "detector offline"}),
    )
    .await;
    mount_json(
        &server,
        "/get_recent_posts",
        json!({"posts": [{"text": "b", "emotion": "joy"}]}),
    )
    .await;

    let snapshot = poll_snapshot(&feed).await;

    assert!(snapshot.anomalies.is_none());
    assert_eq!(snapshot.recent.map(|r| r.len()), Some(1));
}

#[tokio::test]
async fn direct_fetch_surfaces_the_api_error() {
    let (server, feed) = mock_pipeline().await;

    mount_json(
        &server,
        "/get_anomalous_posts",
        json!({"error": "detector offline"}),
    )
    .await;

    let error = feed
        .anomalous_posts()
        .await
        .expect_err("error payload should surface");
    assert!(error.to_string().contains("detector offline"));
}
