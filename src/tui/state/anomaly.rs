//! Filter, reveal, and expansion state for the anomalous-post viewer.
//!
//! This module is the decision core of the dashboard: given the raw list of
//! flagged posts, it decides which qualify (the closed negative-emotion
//! set), which the user has narrowed to, and how many are revealed. The
//! presentation layer renders its [`AnomalyProjection`] and triggers the
//! state transitions on user input.

use crate::feed::Post;

/// Number of posts revealed after a filter change.
pub const DEFAULT_REVEAL_COUNT: usize = 3;

/// Display colour for emotions outside the negative set.
pub const NEUTRAL_COLOR: &str = "#9e9e9e";

/// Sentinel filter label offering the whole negative-classified set.
pub const ALL_FILTER_LABEL: &str = "All";

/// Display style for one negative emotion category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionStyle {
    /// Canonical display label.
    pub label: &'static str,
    /// Hex colour used by the presentation layer.
    pub color: &'static str,
}

/// The closed set of emotions that qualify a post as anomalous, with their
/// display styles. Lookup is case-insensitive; the table never grows at
/// runtime.
const NEGATIVE_EMOTIONS: [(&str, EmotionStyle); 4] = [
    ("anger", EmotionStyle { label: "Anger", color: "#ff5252" }),
    ("fear", EmotionStyle { label: "Fear", color: "#ff9800" }),
    ("disgust", EmotionStyle { label: "Disgust", color: "#4caf50" }),
    ("sadness", EmotionStyle { label: "Sadness", color: "#2196f3" }),
];

/// Looks up the display style for a negative emotion, case-insensitively.
#[must_use]
pub fn negative_emotion_style(emotion: &str) -> Option<&'static EmotionStyle> {
    NEGATIVE_EMOTIONS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(emotion))
        .map(|(_, style)| style)
}

/// Resolved display label and colour for one post's emotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionBadge {
    /// Label to display.
    pub label: String,
    /// Hex colour for the badge.
    pub color: &'static str,
}

/// Derives the badge for an emotion label: the fixed table when the emotion
/// is negative, otherwise the raw label ("Unknown" when empty) in neutral
/// gray.
#[must_use]
pub fn emotion_badge(emotion: &str) -> EmotionBadge {
    negative_emotion_style(emotion).map_or_else(
        || EmotionBadge {
            label: if emotion.is_empty() {
                "Unknown".to_owned()
            } else {
                emotion.to_owned()
            },
            color: NEUTRAL_COLOR,
        },
        |style| EmotionBadge {
            label: style.label.to_owned(),
            color: style.color,
        },
    )
}

/// Filter criteria for the anomaly table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmotionFilter {
    /// Show every negative-classified post.
    #[default]
    All,
    /// Show only posts whose emotion equals this literal label.
    ///
    /// Matching is case-sensitive on the raw value: the options offered to
    /// the user are the literal labels seen in the data, so "Anger" and
    /// "anger" are distinct filters when both appear.
    Emotion(String),
}

impl EmotionFilter {
    /// Returns the label shown in the filter bar.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_FILTER_LABEL,
            Self::Emotion(label) => label,
        }
    }

    /// Returns true when the post passes this filter.
    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Emotion(label) => post.emotion == *label,
        }
    }
}

/// Read-only projection of the anomaly view for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyProjection<'a> {
    /// Filter options: the sentinel first, then distinct qualifying labels
    /// in first-seen order.
    pub category_options: Vec<String>,
    /// Posts currently revealed, original order preserved.
    pub visible: Vec<&'a Post>,
    /// Size of the filtered set before the reveal cutoff.
    pub filtered_len: usize,
    /// Label of the active filter.
    pub active_label: String,
    /// Whether the view is expanded past its header.
    pub expanded: bool,
    /// Whether more filtered posts exist beyond the reveal cutoff.
    pub has_more: bool,
}

/// State of the anomalous-post viewer.
///
/// Created fresh per dashboard session, replaced wholesale whenever the
/// anomaly endpoint supplies a new list, never persisted.
#[derive(Debug, Clone)]
pub struct AnomalyState {
    posts: Vec<Post>,
    /// Currently active filter.
    pub active_filter: EmotionFilter,
    reveal_count: usize,
    expanded: bool,
}

impl Default for AnomalyState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnomalyState {
    /// Creates an empty viewer showing the default reveal window.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            posts: Vec::new(),
            active_filter: EmotionFilter::All,
            reveal_count: DEFAULT_REVEAL_COUNT,
            expanded: false,
        }
    }

    /// Replaces the full post list. Filter and reveal state persist across
    /// replacements; a narrowed filter over a shrunken list simply yields a
    /// smaller (possibly empty) view.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Returns every loaded post, qualifying or not.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Returns the filter options: the sentinel "All" first, then the
    /// distinct emotion labels of negative-classified posts in first-seen
    /// order. Labels are deduplicated by literal value, and categories with
    /// no qualifying post are never offered.
    #[must_use]
    pub fn category_options(&self) -> Vec<String> {
        let mut options = vec![ALL_FILTER_LABEL.to_owned()];
        for post in &self.posts {
            if negative_emotion_style(&post.emotion).is_none() {
                continue;
            }
            if !options.contains(&post.emotion) {
                options.push(post.emotion.clone());
            }
        }
        options
    }

    /// Returns the negative-classified posts passing the active filter, in
    /// original order, without the reveal cutoff.
    #[must_use]
    pub fn filtered_posts(&self) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| negative_emotion_style(&post.emotion).is_some())
            .filter(|post| self.active_filter.matches(post))
            .collect()
    }

    /// Returns the first `reveal_count` filtered posts. A reveal count left
    /// over-large by a narrowing filter change is tolerated: the cutoff
    /// never indexes past the filtered set.
    #[must_use]
    pub fn visible_posts(&self) -> Vec<&Post> {
        self.filtered_posts()
            .into_iter()
            .take(self.reveal_count)
            .collect()
    }

    /// Applies a filter and resets the reveal window, regardless of whether
    /// the filter actually changed.
    pub fn set_filter(&mut self, filter: EmotionFilter) {
        self.active_filter = filter;
        self.reveal_count = DEFAULT_REVEAL_COUNT;
    }

    /// Cycles through the available filter options in presentation order.
    pub fn cycle_filter(&mut self) {
        let options = self.category_options();
        let current = options
            .iter()
            .position(|label| label == self.active_filter.label())
            .unwrap_or(0);
        let next = options.get(current.saturating_add(1)).or_else(|| options.first());
        let filter = match next.map(String::as_str) {
            None | Some(ALL_FILTER_LABEL) => EmotionFilter::All,
            Some(label) => EmotionFilter::Emotion(label.to_owned()),
        };
        self.set_filter(filter);
    }

    /// Reveals the entire filtered set. All-or-nothing: there is no
    /// incremental paging step.
    pub fn reveal_all(&mut self) {
        self.reveal_count = self.filtered_posts().len();
    }

    /// Current reveal window size.
    #[must_use]
    pub const fn reveal_count(&self) -> usize {
        self.reveal_count
    }

    /// Flips the expanded/collapsed presentation gate.
    pub const fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Whether the view is expanded past its header.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether filtered posts exist beyond the reveal cutoff.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.reveal_count < self.filtered_posts().len()
    }

    /// Builds the read-only projection for the presentation layer.
    #[must_use]
    pub fn projection(&self) -> AnomalyProjection<'_> {
        AnomalyProjection {
            category_options: self.category_options(),
            visible: self.visible_posts(),
            filtered_len: self.filtered_posts().len(),
            active_label: self.active_filter.label().to_owned(),
            expanded: self.expanded,
            has_more: self.has_more(),
        }
    }
}
