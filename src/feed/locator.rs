//! Endpoint resolution for the sentiment pipeline services.
//!
//! The pipeline historically runs as several small HTTP services, one per
//! concern, so each base URL is resolved independently. Defaults follow the
//! original deployment's port layout.

use url::Url;

use super::error::FeedError;

/// Default base URL for the main API service (emotions, locations, recent
/// posts, anomalies, alerts).
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8005";
/// Default base URL for the raw sentiment data service.
pub const DEFAULT_DATA_BASE: &str = "http://127.0.0.1:8001";
/// Default base URL for the geo sentiment service.
pub const DEFAULT_GEO_BASE: &str = "http://127.0.0.1:8002";
/// Default base URL for the trend forecast service.
pub const DEFAULT_TRENDS_BASE: &str = "http://127.0.0.1:8003";
/// Default base URL for the aggregate insights service.
pub const DEFAULT_INSIGHTS_BASE: &str = "http://127.0.0.1:8004";

/// Resolved base URLs for every pipeline service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLocator {
    api_base: Url,
    data_base: Url,
    geo_base: Url,
    trends_base: Url,
    insights_base: Url,
}

impl FeedLocator {
    /// Resolves the locator from optional per-service overrides, falling
    /// back to the default port layout.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] when any configured base URL fails
    /// to parse.
    pub fn resolve(
        api: Option<&str>,
        data: Option<&str>,
        geo: Option<&str>,
        trends: Option<&str>,
        insights: Option<&str>,
    ) -> Result<Self, FeedError> {
        Ok(Self {
            api_base: parse_base(api.unwrap_or(DEFAULT_API_BASE))?,
            data_base: parse_base(data.unwrap_or(DEFAULT_DATA_BASE))?,
            geo_base: parse_base(geo.unwrap_or(DEFAULT_GEO_BASE))?,
            trends_base: parse_base(trends.unwrap_or(DEFAULT_TRENDS_BASE))?,
            insights_base: parse_base(insights.unwrap_or(DEFAULT_INSIGHTS_BASE))?,
        })
    }

    /// Builds a locator with every service rooted at one base URL.
    ///
    /// Useful for tests and single-host deployments.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] when the base URL fails to parse.
    pub fn single_host(base: &str) -> Result<Self, FeedError> {
        let parsed = parse_base(base)?;
        Ok(Self {
            api_base: parsed.clone(),
            data_base: parsed.clone(),
            geo_base: parsed.clone(),
            trends_base: parsed.clone(),
            insights_base: parsed,
        })
    }

    /// URL of the anomalous posts endpoint.
    #[must_use]
    pub fn anomalous_posts(&self) -> Url {
        join(&self.api_base, "get_anomalous_posts")
    }

    /// URL of the recent posts endpoint.
    #[must_use]
    pub fn recent_posts(&self) -> Url {
        join(&self.api_base, "get_recent_posts")
    }

    /// URL of the emotion distribution endpoint.
    #[must_use]
    pub fn emotion_distribution(&self) -> Url {
        join(&self.api_base, "get_emotion_distribution")
    }

    /// URL of the top locations endpoint.
    #[must_use]
    pub fn top_locations(&self) -> Url {
        join(&self.api_base, "get_top_locations")
    }

    /// URL of the alert flag endpoint.
    #[must_use]
    pub fn sentiment_alert(&self) -> Url {
        join(&self.api_base, "get_sentiment_alert")
    }

    /// URL of the geo records endpoint.
    #[must_use]
    pub fn geo_data(&self) -> Url {
        join(&self.geo_base, "get_geo_data")
    }

    /// URL of the trend forecast endpoint.
    #[must_use]
    pub fn sentiment_trends(&self) -> Url {
        join(&self.trends_base, "get_sentiment_trends")
    }

    /// URL of the aggregate insights endpoint.
    #[must_use]
    pub fn sentiment_insights(&self) -> Url {
        join(&self.insights_base, "get_sentiment_insights")
    }

    /// URL of the raw sentiment data endpoint.
    #[must_use]
    pub fn sentiment_data(&self) -> Url {
        join(&self.data_base, "get_sentiment_data")
    }
}

/// Parses a base URL, normalising the path to end with a slash so endpoint
/// joins append rather than replace the final segment.
fn parse_base(base: &str) -> Result<Url, FeedError> {
    let trimmed = base.trim_end_matches('/');
    let normalised = format!("{trimmed}/");
    Url::parse(&normalised).map_err(|error| FeedError::InvalidUrl(error.to_string()))
}

/// Joins an endpoint path onto a normalised base.
fn join(base: &Url, endpoint: &str) -> Url {
    // parse_base guarantees a trailing slash, so a relative join cannot fail
    // for the fixed endpoint names used here.
    base.join(endpoint).unwrap_or_else(|_| base.clone())
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "Tests panic on failure")]

    use rstest::rstest;

    use super::*;

    #[test]
    fn resolve_uses_default_port_layout() {
        let locator =
            FeedLocator::resolve(None, None, None, None, None).expect("defaults should parse");

        assert_eq!(
            locator.anomalous_posts().as_str(),
            "http://127.0.0.1:8005/get_anomalous_posts"
        );
        assert_eq!(
            locator.sentiment_trends().as_str(),
            "http://127.0.0.1:8003/get_sentiment_trends"
        );
        assert_eq!(
            locator.sentiment_insights().as_str(),
            "http://127.0.0.1:8004/get_sentiment_insights"
        );
        assert_eq!(
            locator.geo_data().as_str(),
            "http://127.0.0.1:8002/get_geo_data"
        );
        assert_eq!(
            locator.sentiment_data().as_str(),
            "http://127.0.0.1:8001/get_sentiment_data"
        );
    }

    #[rstest]
    #[case("http://feed.example.com")]
    #[case("http://feed.example.com/")]
    fn trailing_slash_is_normalised(#[case] base: &str) {
        let locator = FeedLocator::single_host(base).expect("base should parse");
        assert_eq!(
            locator.recent_posts().as_str(),
            "http://feed.example.com/get_recent_posts"
        );
    }

    #[test]
    fn base_with_path_keeps_the_path() {
        let locator =
            FeedLocator::single_host("http://gateway.example.com/sentiment").expect("should parse");
        assert_eq!(
            locator.emotion_distribution().as_str(),
            "http://gateway.example.com/sentiment/get_emotion_distribution"
        );
    }

    #[test]
    fn invalid_base_is_rejected() {
        let result = FeedLocator::single_host("not a url");
        assert!(matches!(result, Err(FeedError::InvalidUrl(_))));
    }
}
