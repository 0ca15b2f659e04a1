//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Finviz company snapshot page (`?t=<TICKER>` is appended).
pub(crate) const DEFAULT_BASE_QUOTE: &str = "https://finviz.com/quote.ashx";

/// corsproxy.io: the whole target URL, encoded, is the query string.
pub(crate) const DEFAULT_RELAY_CORSPROXY: &str = "https://corsproxy.io/";

/// allorigins: the target URL goes in the `url` parameter.
pub(crate) const DEFAULT_RELAY_ALLORIGINS: &str = "https://api.allorigins.win/raw";
