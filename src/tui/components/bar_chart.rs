//! Horizontal bar chart component for labelled counts.
//!
//! Used for both the emotion distribution and the top-locations panels:
//! each row shows a right-padded label, a bar scaled to the largest count,
//! and the raw count.

/// One labelled value in the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarDatum {
    /// Row label.
    pub label: String,
    /// Row value.
    pub count: u64,
}

/// Default bar width in terminal columns.
const DEFAULT_BAR_WIDTH: usize = 24;

/// Component rendering labelled counts as horizontal bars.
#[derive(Debug, Clone)]
pub struct BarChartComponent {
    title: &'static str,
    bar_width: usize,
}

impl BarChartComponent {
    /// Creates a chart with the given panel title.
    #[must_use]
    pub const fn new(title: &'static str) -> Self {
        Self {
            title,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Updates the bar width after a terminal resize.
    pub const fn set_bar_width(&mut self, width: usize) {
        self.bar_width = width;
    }

    /// Renders the chart. Rows keep the order the data arrived in.
    #[must_use]
    pub fn view(&self, data: &[BarDatum]) -> String {
        let mut output = format!("{title}\n", title = self.title);
        if data.is_empty() {
            output.push_str("  (no data)\n");
            return output;
        }

        let max_count = data.iter().map(|d| d.count).max().unwrap_or(0);
        let label_width = data.iter().map(|d| d.label.chars().count()).max().unwrap_or(0);

        for datum in data {
            let bar_len = scaled_length(datum.count, max_count, self.bar_width);
            let bar = "█".repeat(bar_len);
            output.push_str(&format!(
                "  {label:<label_width$} {bar} {count}\n",
                label = datum.label,
                count = datum.count,
            ));
        }
        output
    }
}

/// Scales a count into a bar length, guaranteeing at least one cell for any
/// non-zero count so small categories stay visible.
fn scaled_length(count: u64, max_count: u64, bar_width: usize) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let width = u64::try_from(bar_width).unwrap_or(u64::MAX);
    #[expect(
        clippy::integer_division,
        reason = "Bar lengths are intentionally rounded down to whole cells"
    )]
    let scaled = count.saturating_mul(width) / max_count;
    usize::try_from(scaled.max(1)).unwrap_or(bar_width)
}
