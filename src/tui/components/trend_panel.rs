//! Sentiment trend forecast panel.
//!
//! Renders the forecast series as a one-line sparkline with the first and
//! last timestamp labels and the latest predicted value.

use crate::feed::TrendPoint;

/// Unicode block ramp used for the sparkline, lowest to highest.
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Component rendering the sentiment trend forecast.
#[derive(Debug, Clone, Default)]
pub struct TrendPanelComponent;

impl TrendPanelComponent {
    /// Creates the panel.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the panel. Points keep their served order.
    #[must_use]
    pub fn view(&self, points: &[TrendPoint]) -> String {
        let mut output = String::from("Sentiment Trend\n");
        let Some(last) = points.last() else {
            output.push_str("  (no forecast)\n");
            return output;
        };

        let spark: String = sparkline(points);
        output.push_str(&format!("  {spark}\n"));

        let first_label = points.first().map_or("", |p| p.ds.as_str());
        output.push_str(&format!(
            "  {first_label} .. {last_label}  latest {latest:.2}\n",
            last_label = last.ds,
            latest = last.yhat,
        ));
        output
    }
}

/// Maps each forecast value onto the block ramp, scaled to the series range.
fn sparkline(points: &[TrendPoint]) -> String {
    let min = points.iter().map(|p| p.yhat).fold(f64::INFINITY, f64::min);
    let max = points
        .iter()
        .map(|p| p.yhat)
        .fold(f64::NEG_INFINITY, f64::max);

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "Forecast values are scaled onto a fixed ramp; the ratio is clamped to [0, 1] before indexing"
    )]
    let spark: String = points
        .iter()
        .map(|p| {
            let span = max - min;
            let ratio = if span > 0.0 { (p.yhat - min) / span } else { 0.5 };
            let last = SPARK_LEVELS.len().saturating_sub(1);
            let level = (ratio.clamp(0.0, 1.0) * last as f64).round() as usize;
            SPARK_LEVELS.get(level).copied().unwrap_or('▁')
        })
        .collect();
    spark
}
