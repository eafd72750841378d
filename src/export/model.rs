//! Export data model for anomalous posts.
//!
//! An [`ExportedPost`] is an ordered key→value record: the known fields in
//! declaration order first, then any extra upstream fields in arrival
//! order. Keeping the record keyed (rather than a fixed struct) lets the
//! CSV writer reproduce the upstream convention of taking the header from
//! the first record's key set, even when records are heterogeneous.

use serde_json::{Map, Value};

use crate::feed::Post;

/// A post flattened into an ordered record for export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedPost {
    record: Map<String, Value>,
}

impl ExportedPost {
    /// Returns the record's keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.record.keys().map(String::as_str)
    }

    /// Returns the value for a key, if the record carries it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.record.get(key)
    }
}

impl From<&Post> for ExportedPost {
    fn from(post: &Post) -> Self {
        let mut record = Map::new();
        record.insert("text".to_owned(), Value::String(post.text.clone()));
        record.insert("emotion".to_owned(), Value::String(post.emotion.clone()));
        if let Some(score) = &post.score {
            record.insert("score".to_owned(), score.to_value());
        }
        for (key, value) in &post.extra {
            record.insert(key.clone(), value.clone());
        }
        Self { record }
    }
}
