//! CSV writer for the anomalous-post export artifact.
//!
//! The artifact format is a user-facing deliverable and must stay
//! bit-reproducible:
//!
//! - the header row is the first record's key names in declaration order,
//!   joined by commas, unquoted;
//! - every data field is rendered as a string and wrapped in double quotes,
//!   with embedded `"` doubled;
//! - rows are joined by `\n` with no trailing newline, UTF-8 throughout;
//! - records carrying keys the first record lacks lose those fields, and
//!   records missing a header key render an empty field. This mirrors the
//!   upstream exporter and is deliberate.
//!
//! Writing an empty set is a silent no-op, not an error.

use std::io::Write;

use serde_json::Value;

use crate::feed::FeedError;

use super::model::ExportedPost;

/// Suggested filename for the export artifact.
pub const ANOMALY_EXPORT_FILENAME: &str = "anomalous_posts.csv";

/// Writes posts as CSV to the given writer.
///
/// # Errors
///
/// Returns [`FeedError::Io`] when writing to the output fails.
pub fn write_csv<W: Write>(writer: &mut W, posts: &[ExportedPost]) -> Result<(), FeedError> {
    let Some(first) = posts.first() else {
        return Ok(());
    };

    let header: Vec<&str> = first.keys().collect();
    write_row(writer, &header.join(","))?;

    for post in posts {
        let fields: Vec<String> = header
            .iter()
            .map(|key| quote_field(&field_text(post.get(key))))
            .collect();
        write_row(writer, &format!("\n{}", fields.join(",")))?;
    }
    Ok(())
}

/// Writes posts as CSV to a file at `path`.
///
/// An empty set writes no file at all, matching the silent no-op contract.
///
/// # Errors
///
/// Returns [`FeedError::Io`] when the file cannot be created or written.
pub fn write_csv_file(path: &str, posts: &[ExportedPost]) -> Result<(), FeedError> {
    if posts.is_empty() {
        return Ok(());
    }
    let file = std::fs::File::create(path).map_err(|error| FeedError::Io {
        message: format!("failed to create '{path}': {error}"),
    })?;
    let mut writer = std::io::BufWriter::new(file);
    write_csv(&mut writer, posts)?;
    writer.flush().map_err(|error| FeedError::Io {
        message: format!("failed to flush '{path}': {error}"),
    })
}

/// Renders posts as a CSV string, or `None` when no posts are loaded.
#[must_use]
pub fn csv_string(posts: &[ExportedPost]) -> Option<String> {
    if posts.is_empty() {
        return None;
    }
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail.
    write_csv(&mut buffer, posts).ok()?;
    String::from_utf8(buffer).ok()
}

fn write_row<W: Write>(writer: &mut W, text: &str) -> Result<(), FeedError> {
    writer
        .write_all(text.as_bytes())
        .map_err(|error| FeedError::Io {
            message: error.to_string(),
        })
}

/// Renders a JSON value the way the export format expects: null and missing
/// values become empty fields, scalars render plainly, and structured
/// values fall back to their JSON text.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Wraps a field in double quotes, doubling embedded quotes.
fn quote_field(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
