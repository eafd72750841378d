//! Pulseboard library crate providing a terminal dashboard over a social
//! sentiment analysis pipeline.
//!
//! The library resolves the pipeline's service endpoints, fetches and
//! decodes their payloads with per-endpoint degradation, classifies the
//! anomalous posts against a fixed negative-emotion set, and reproduces the
//! upstream records byte-for-byte in CSV exports.

pub mod config;
pub mod export;
pub mod feed;
pub mod telemetry;
pub mod tui;

pub use config::{OperationMode, PulseboardConfig};
pub use feed::{
    DashboardSnapshot, EmotionCount, FeedError, FeedLocator, GeoRecord, HttpSentimentFeed,
    LocationCount, Post, Score, SentimentAlert, SentimentFeed, SentimentInsights,
    SentimentSample, TrendPoint, poll_snapshot,
};
