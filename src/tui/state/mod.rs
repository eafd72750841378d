//! State management for the dashboard TUI.
//!
//! This module provides the core state types: the anomaly viewer's filter,
//! reveal, and expansion machinery, independent of any rendering concern.

mod anomaly;

pub use anomaly::{
    ALL_FILTER_LABEL, AnomalyProjection, AnomalyState, DEFAULT_REVEAL_COUNT, EmotionBadge,
    EmotionFilter, EmotionStyle, NEUTRAL_COLOR, emotion_badge, negative_emotion_style,
};
