//! CLI operation mode handlers.
//!
//! This module contains the implementations for the operation modes:
//! - [`dashboard`]: Interactive TUI over the sentiment pipeline
//! - [`snapshot_view`]: One-shot snapshot printed to stdout
//! - [`export_anomalies`]: CSV export of the anomalous posts

pub mod dashboard;
pub mod export_anomalies;
pub mod snapshot_view;
