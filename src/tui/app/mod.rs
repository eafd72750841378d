//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! sentiment dashboard. It coordinates the panel components, owns the anomaly
//! viewer state, and drives the feed poll timer.
//!
//! # Module Structure
//!
//! - `anomaly_handlers`: Filter, reveal, and export handling
//! - `poll_handlers`: Feed poll timer and snapshot application
//! - `rendering`: View rendering methods for terminal output

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::feed::{
    DashboardSnapshot, EmotionCount, GeoRecord, LocationCount, Post, SentimentAlert,
    SentimentInsights, SentimentSample, TrendPoint,
};

use super::components::{
    AnomalyTableComponent, BarChartComponent, RecentPostsComponent, TrendPanelComponent,
};
use super::input::map_key_to_message;
use super::messages::AppMsg;
use super::state::AnomalyState;

mod anomaly_handlers;
mod poll_handlers;
mod rendering;

/// Main application model for the sentiment dashboard TUI.
#[derive(Debug)]
pub struct DashboardApp {
    /// Anomaly viewer state (filter, reveal window, expansion).
    pub(crate) anomaly: AnomalyState,
    /// Latest analysed posts.
    pub(crate) recent: Vec<Post>,
    /// Emotion label counts.
    pub(crate) emotions: Vec<EmotionCount>,
    /// Top locations by post count.
    pub(crate) locations: Vec<LocationCount>,
    /// Geo-tagged sentiment records.
    pub(crate) geo: Vec<GeoRecord>,
    /// Raw recent sentiment series.
    pub(crate) series: Vec<SentimentSample>,
    /// Sentiment trend forecast points.
    pub(crate) trends: Vec<TrendPoint>,
    /// Aggregate sentiment shares.
    pub(crate) insights: Option<SentimentInsights>,
    /// Current alert flag.
    pub(crate) alert: Option<SentimentAlert>,
    /// Whether a poll round is in flight.
    pub(crate) loading: bool,
    /// Transient status message for the status bar.
    pub(crate) status: Option<String>,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    anomaly_table: AnomalyTableComponent,
    emotion_chart: BarChartComponent,
    location_chart: BarChartComponent,
    trend_panel: TrendPanelComponent,
    recent_posts: RecentPostsComponent,
}

impl DashboardApp {
    /// Creates a new application seeded with the given snapshot.
    #[must_use]
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        let mut anomaly = AnomalyState::new();
        // The anomaly panel opens expanded.
        anomaly.toggle_expanded();

        let mut app = Self {
            anomaly,
            recent: Vec::new(),
            emotions: Vec::new(),
            locations: Vec::new(),
            geo: Vec::new(),
            series: Vec::new(),
            trends: Vec::new(),
            insights: None,
            alert: None,
            loading: false,
            status: None,
            error: None,
            width: 80,
            height: 24,
            show_help: false,
            anomaly_table: AnomalyTableComponent::new(),
            emotion_chart: BarChartComponent::new("Emotion Distribution"),
            location_chart: BarChartComponent::new("Top Locations"),
            trend_panel: TrendPanelComponent::new(),
            recent_posts: RecentPostsComponent::new(),
        };
        app.apply_snapshot(snapshot);
        app
    }

    /// Creates an empty application (for initial loading state).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(DashboardSnapshot::default())
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to
    /// specialised handlers for each message category to keep cyclomatic
    /// complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SetFilter(_)
            | AppMsg::ClearFilter
            | AppMsg::CycleFilter
            | AppMsg::RevealAll
            | AppMsg::ToggleAnomalies
            | AppMsg::ExportRequested => self.handle_anomaly_msg(msg),
            AppMsg::PollTick | AppMsg::PollComplete { .. } | AppMsg::PollFailed(_) => {
                self.handle_poll_msg(msg)
            }
            AppMsg::Quit | AppMsg::ToggleHelp | AppMsg::WindowResized { .. } => {
                self.handle_lifecycle_msg(msg)
            }
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    // Window event handlers

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        let text_width = usize::from(width).saturating_sub(16);
        self.anomaly_table.set_text_width(text_width);
        self.recent_posts.set_text_width(text_width);
        let bar_width = usize::from(width).saturating_sub(56).clamp(12, 48);
        self.emotion_chart.set_bar_width(bar_width);
        self.location_chart.set_bar_width(bar_width);
        None
    }
}

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve initial data from module-level storage
        let snapshot = super::get_initial_snapshot();
        let model = Self::new(snapshot);

        // Start the feed poll timer
        let cmd = Self::arm_poll_timer();

        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        // If help is shown, render overlay instead
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&self.render_alert_line());
        output.push_str(&self.render_insights_line());
        output.push('\n');

        output.push_str(&self.anomaly_table.view(&self.anomaly.projection()));
        output.push('\n');

        output.push_str(&self.emotion_chart.view(&Self::emotion_data(&self.emotions)));
        output.push('\n');
        output.push_str(&self.location_chart.view(&Self::location_data(&self.locations)));
        output.push('\n');

        output.push_str(&self.trend_panel.view(&self.trends));
        output.push('\n');

        output.push_str(&self.recent_posts.view(&self.series));
        output.push('\n');

        output.push_str(&self.render_analysed_posts());
        output.push_str(&self.render_geo_panel());

        output.push('\n');
        output.push_str(&self.render_status_bar());

        output
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
