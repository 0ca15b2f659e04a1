use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Only network, URL and input problems are errors. Unknown filter codes,
/// missing metrics and unparseable values degrade to an `NA` verdict instead.
#[derive(Debug, Error)]
pub enum ScreenerError {
    /// A required input (ticker or screener URL) was empty.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// Every configured relay failed for one target URL.
    #[error("all relays failed for {url}: {last}")]
    AllRelaysFailed {
        /// The target URL that could not be fetched.
        url: String,
        /// The failure reported by the last relay tried.
        last: Box<ScreenerError>,
    },

    /// The data received was in an unexpected format.
    #[error("Data format unexpected: {0}")]
    Data(String),

    /// Serializing a report to JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
