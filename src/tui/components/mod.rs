//! UI components for the dashboard TUI.
//!
//! This module provides the panel renderers following the bubbletea-rs
//! Model-View pattern. Each component renders its slice of the snapshot;
//! the anomaly table additionally renders its state projection.

mod anomaly_table;
mod bar_chart;
mod recent_posts;
mod text_truncate;
mod trend_panel;

pub use anomaly_table::{AnomalyTableComponent, EMPTY_ANOMALY_MESSAGE};
pub use bar_chart::{BarChartComponent, BarDatum};
pub use recent_posts::RecentPostsComponent;
pub use trend_panel::TrendPanelComponent;
