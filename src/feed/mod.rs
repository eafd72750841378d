//! Sentiment feed layer: endpoint resolution, HTTP gateway, and the domain
//! models served by the pipeline.
//!
//! The pipeline runs as several small HTTP services; [`FeedLocator`] resolves
//! their base URLs, [`HttpSentimentFeed`] fetches and decodes the payloads,
//! and [`poll_snapshot`] aggregates one round of data for every dashboard
//! panel with per-endpoint degradation.

mod error;
mod gateway;
mod locator;
mod models;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::FeedError;
pub use gateway::{HttpSentimentFeed, SentimentFeed, poll_snapshot};
pub use locator::{
    DEFAULT_API_BASE, DEFAULT_DATA_BASE, DEFAULT_GEO_BASE, DEFAULT_INSIGHTS_BASE,
    DEFAULT_TRENDS_BASE, FeedLocator,
};
pub use models::{
    DashboardSnapshot, EmotionCount, GeoRecord, LocationCount, Post, Score, SentimentAlert,
    SentimentInsights, SentimentSample, TrendPoint,
};
