//! Tests for the dashboard TUI application model.

use bubbletea_rs::Model;
use rstest::{fixture, rstest};

use super::*;
use crate::feed::test_support::{PostBuilder, mixed_emotion_posts};
use crate::tui::state::EmotionFilter;

#[fixture]
fn seeded_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        anomalies: Some(mixed_emotion_posts()),
        emotions: Some(vec![EmotionCount {
            emotion: "anger".to_owned(),
            count: 4,
        }]),
        insights: Some(SentimentInsights {
            positive: 40.0,
            negative: 35.0,
            neutral: 25.0,
            total_posts: 120,
        }),
        alert: Some(SentimentAlert {
            alert: true,
            message: "Negative sentiment spike".to_owned(),
        }),
        ..DashboardSnapshot::default()
    }
}

#[rstest]
fn new_app_seeds_panels_from_the_snapshot(seeded_snapshot: DashboardSnapshot) {
    let app = DashboardApp::new(seeded_snapshot);

    assert_eq!(app.anomaly.posts().len(), 3);
    assert_eq!(app.emotions.len(), 1);
    assert!(app.insights.is_some());
}

#[test]
fn empty_app_renders_placeholders() {
    let app = DashboardApp::empty();
    let view = app.view();

    assert!(view.contains("Pulseboard"));
    assert!(view.contains("No anomalies detected at the moment."));
    assert!(view.contains("(no data)"));
}

#[rstest]
fn alert_and_insights_appear_in_the_view(seeded_snapshot: DashboardSnapshot) {
    let app = DashboardApp::new(seeded_snapshot);
    let view = app.view();

    assert!(view.contains("!! ALERT: Negative sentiment spike"));
    assert!(view.contains("Sentiment: 40.0% positive / 35.0% negative / 25.0% neutral (120 posts)"));
}

#[rstest]
fn filter_messages_drive_the_anomaly_state(seeded_snapshot: DashboardSnapshot) {
    let mut app = DashboardApp::new(seeded_snapshot);

    app.handle_message(&AppMsg::SetFilter(EmotionFilter::Emotion(
        "Anger".to_owned(),
    )));
    assert_eq!(app.anomaly.filtered_posts().len(), 1);

    app.handle_message(&AppMsg::ClearFilter);
    assert_eq!(app.anomaly.filtered_posts().len(), 2);
}

#[rstest]
fn reveal_all_uncaps_the_visible_window(seeded_snapshot: DashboardSnapshot) {
    let mut app = DashboardApp::new(seeded_snapshot);
    let posts = (0..6)
        .map(|i| PostBuilder::new(&format!("p{i}"), "fear").build())
        .collect();
    app.anomaly.set_posts(posts);

    assert_eq!(app.anomaly.visible_posts().len(), 3);
    app.handle_message(&AppMsg::RevealAll);
    assert_eq!(app.anomaly.visible_posts().len(), 6);
}

#[rstest]
fn toggle_collapses_the_anomaly_panel(seeded_snapshot: DashboardSnapshot) {
    let mut app = DashboardApp::new(seeded_snapshot);
    assert!(app.anomaly.is_expanded());

    app.handle_message(&AppMsg::ToggleAnomalies);
    assert!(!app.anomaly.is_expanded());

    let view = app.view();
    assert!(view.contains("► Anomalous Posts (2)"));
}

#[test]
fn export_with_no_anomalies_sets_a_status_and_writes_nothing() {
    let mut app = DashboardApp::empty();
    app.handle_message(&AppMsg::ExportRequested);

    assert_eq!(app.status.as_deref(), Some("No anomalous posts to export"));
    assert!(app.error.is_none());
}

#[rstest]
fn poll_complete_applies_data_and_rearms_the_timer(seeded_snapshot: DashboardSnapshot) {
    let mut app = DashboardApp::empty();
    app.loading = true;

    let cmd = app.handle_message(&AppMsg::PollComplete {
        snapshot: Box::new(seeded_snapshot),
        latency_ms: 17,
    });

    assert!(cmd.is_some());
    assert!(!app.loading);
    assert_eq!(app.anomaly.posts().len(), 3);
    assert_eq!(app.status.as_deref(), Some("Updated in 17 ms"));
}

#[test]
fn degraded_snapshot_keeps_previous_panel_data() {
    let mut app = DashboardApp::empty();
    app.apply_snapshot(DashboardSnapshot {
        anomalies: Some(mixed_emotion_posts()),
        ..DashboardSnapshot::default()
    });
    assert_eq!(app.anomaly.posts().len(), 3);

    // A round where the anomaly endpoint failed leaves the posts alone.
    app.apply_snapshot(DashboardSnapshot::default());
    assert_eq!(app.anomaly.posts().len(), 3);
}

#[test]
fn poll_failure_surfaces_in_the_status_bar() {
    let mut app = DashboardApp::empty();
    app.loading = true;

    let cmd = app.handle_message(&AppMsg::PollFailed("connection refused".to_owned()));

    assert!(cmd.is_some());
    assert!(!app.loading);
    let view = app.view();
    assert!(view.contains("Error: connection refused"));
}

#[test]
fn help_overlay_replaces_the_dashboard() {
    let mut app = DashboardApp::empty();
    app.handle_message(&AppMsg::ToggleHelp);

    let view = app.view();
    assert!(view.contains("Keyboard Shortcuts"));
    assert!(!view.contains("Anomalous Posts ("));
    // Only ? is bound while the overlay is up, so the hint names it.
    assert!(view.contains("Press ? to close this help."));
}

#[rstest]
fn resize_rescales_the_chart_bars(seeded_snapshot: DashboardSnapshot) {
    let mut app = DashboardApp::new(seeded_snapshot);

    app.handle_message(&AppMsg::WindowResized {
        width: 120,
        height: 40,
    });
    assert!(app.view().contains(&"█".repeat(48)));

    app.handle_message(&AppMsg::WindowResized {
        width: 60,
        height: 20,
    });
    let view = app.view();
    assert!(view.contains(&"█".repeat(12)));
    assert!(!view.contains(&"█".repeat(13)));
}

#[test]
fn resize_updates_the_status_hints() {
    let mut app = DashboardApp::empty();

    app.handle_message(&AppMsg::WindowResized {
        width: 120,
        height: 40,
    });
    assert!(app.view().contains("a:toggle panel"));

    app.handle_message(&AppMsg::WindowResized {
        width: 60,
        height: 20,
    });
    assert!(app.view().contains("q:quit  ?:help"));
}
