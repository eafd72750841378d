//! Structured export of anomalous posts.
//!
//! The only supported artifact is the CSV deliverable described in the
//! anomaly viewer's contract; its byte format is fixed and reproduced
//! exactly by [`write_csv`].

mod csv;
mod model;

pub use csv::{ANOMALY_EXPORT_FILENAME, csv_string, write_csv, write_csv_file};
pub use model::ExportedPost;
