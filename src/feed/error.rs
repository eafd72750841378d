//! Error types exposed by the sentiment feed layer.

use thiserror::Error;

/// Errors surfaced while resolving endpoints or talking to the sentiment
/// pipeline services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    /// A configured base URL could not be parsed.
    #[error("feed URL is invalid: {0}")]
    InvalidUrl(String),

    /// Networking failed while calling a feed service.
    #[error("network error talking to the sentiment feed: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A feed service reported an error in its payload.
    ///
    /// The pipeline services answer `200 OK` with an `{"error": "..."}` body
    /// when they cannot produce data, so this is distinct from [`Network`].
    ///
    /// [`Network`]: FeedError::Network
    #[error("sentiment feed error: {message}")]
    Api {
        /// Error message returned by the service.
        message: String,
    },

    /// A payload decoded, but did not carry the expected records.
    #[error("malformed feed payload: {message}")]
    Malformed {
        /// Description of the payload defect.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
