//! Test builders for feed records.
//!
//! Available behind the `test-support` feature so integration tests can
//! assemble posts without hand-writing JSON.

use serde_json::Value;

use super::models::{Post, Score};

/// Builder for [`Post`] records in tests.
#[derive(Debug, Default, Clone)]
pub struct PostBuilder {
    text: String,
    emotion: String,
    score: Option<Score>,
    extra: Vec<(String, Value)>,
}

impl PostBuilder {
    /// Starts a builder with the given text and emotion.
    #[must_use]
    pub fn new(text: &str, emotion: &str) -> Self {
        Self {
            text: text.to_owned(),
            emotion: emotion.to_owned(),
            ..Self::default()
        }
    }

    /// Sets a numeric score.
    #[must_use]
    pub fn score(mut self, score: f64) -> Self {
        self.score = Some(Score::Number(score));
        self
    }

    /// Sets a string-typed score.
    #[must_use]
    pub fn score_text(mut self, score: &str) -> Self {
        self.score = Some(Score::Text(score.to_owned()));
        self
    }

    /// Appends an extra upstream field.
    #[must_use]
    pub fn extra(mut self, key: &str, value: Value) -> Self {
        self.extra.push((key.to_owned(), value));
        self
    }

    /// Builds the post.
    #[must_use]
    pub fn build(self) -> Post {
        Post {
            text: self.text,
            emotion: self.emotion,
            score: self.score,
            extra: self.extra.into_iter().collect(),
        }
    }
}

/// The worked example from the anomaly viewer's contract: one negative post
/// with a numeric score, one non-negative post, one negative post with a
/// low score.
#[must_use]
pub fn mixed_emotion_posts() -> Vec<Post> {
    vec![
        PostBuilder::new("a", "Anger").score(0.9).build(),
        PostBuilder::new("b", "joy").score(0.5).build(),
        PostBuilder::new("c", "fear").score(0.3).build(),
    ]
}
