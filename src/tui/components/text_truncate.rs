//! Text truncation helpers for fixed-width terminal panels.
//!
//! Panels render into a column budget, so post text is clipped to its first
//! line and measured in terminal columns rather than Unicode scalars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the first line of `text`, trimmed and clipped to `max_width`
/// terminal columns with a trailing ellipsis when it does not fit.
pub(crate) fn preview_line(text: &str, max_width: usize) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    truncate_to_display_width(first_line, max_width)
}

/// Truncates text to the provided display width, appending an ellipsis.
///
/// Width is measured in terminal columns. Budgets of three columns or fewer
/// degrade to dots since an ellipsis would not fit alongside any content.
pub(crate) fn truncate_to_display_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width: usize = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width.saturating_add(ch_width) > target_width {
            break;
        }
        truncated.push(ch);
        current_width = current_width.saturating_add(ch_width);
    }
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("short", 10, "short")]
    #[case("exactly ten", 11, "exactly ten")]
    #[case("a longer line of text", 10, "a longe...")]
    #[case("anything", 0, "")]
    #[case("anything", 2, "..")]
    fn truncation_respects_column_budget(
        #[case] text: &str,
        #[case] width: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(truncate_to_display_width(text, width), expected);
    }

    #[test]
    fn wide_characters_count_by_display_width() {
        // Each CJK character occupies two columns.
        assert_eq!(truncate_to_display_width("你好世界你好", 7), "你好...");
    }

    #[test]
    fn preview_uses_only_the_first_line() {
        assert_eq!(preview_line("  first line  \nsecond line", 20), "first line");
    }
}
