//! Public client surface + builder.
//! Internals are split into `relay` (proxy routing) and `constants` (UA + defaults).

mod constants;
mod relay;

pub use relay::Relay;

use crate::core::{ScreenerError, net};
use constants::{DEFAULT_BASE_QUOTE, DEFAULT_RELAY_ALLORIGINS, DEFAULT_RELAY_CORSPROXY, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client, the quote page base and
/// the relay fallback list.
#[derive(Debug, Clone)]
pub struct ScreenerClient {
    http: Client,
    base_quote: Url,
    relays: Vec<Relay>,
}

impl ScreenerClient {
    /// Create a new builder.
    pub fn builder() -> ScreenerClientBuilder {
        ScreenerClientBuilder::default()
    }

    /// Create a client with the default endpoints and relays.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self, ScreenerError> {
        Self::builder().build()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// The relays tried, in order, for every fetch.
    pub fn relays(&self) -> &[Relay] {
        &self.relays
    }

    /// Snapshot page URL for `ticker` (`<base>?t=<ticker>`).
    #[must_use]
    pub fn quote_url(&self, ticker: &str) -> Url {
        let mut url = self.base_quote.clone();
        url.query_pairs_mut().append_pair("t", ticker);
        url
    }

    /// Fetches `target` and returns its body text.
    ///
    /// Each relay is tried once, in order, until one answers with a 2xx
    /// status. There are no retries.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenerError::AllRelaysFailed`] carrying the last relay's
    /// failure when no relay succeeds.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, target), err, fields(target = %target)))]
    pub async fn fetch_text(&self, target: &Url) -> Result<String, ScreenerError> {
        let mut last = None;
        for relay in &self.relays {
            match net::fetch_body(self, &relay.route(target)).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(relay = %relay.name(), error = %e, "relay failed");
                    last = Some(e);
                }
            }
        }
        Err(ScreenerError::AllRelaysFailed {
            url: target.to_string(),
            last: Box::new(last.unwrap_or_else(|| ScreenerError::Data("no relay configured".into()))),
        })
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ScreenerClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    relays: Option<Vec<Relay>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ScreenerClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the snapshot page base (e.g., `https://finviz.com/quote.ashx`).
    #[must_use]
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Replace the relay fallback list.
    /// Default: corsproxy.io, then allorigins.
    #[must_use]
    pub fn relays(mut self, relays: Vec<Relay>) -> Self {
        self.relays = Some(relays);
        self
    }

    /// Fetch pages directly, without any relay.
    #[must_use]
    pub fn direct(self) -> Self {
        self.relays(vec![Relay::Direct])
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse, the relay list is
    /// empty, or the HTTP client cannot be built.
    pub fn build(self) -> Result<ScreenerClient, ScreenerError> {
        let base_quote = match self.base_quote {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE)?,
        };
        let relays = match self.relays {
            Some(r) => r,
            None => default_relays()?,
        };
        if relays.is_empty() {
            return Err(ScreenerError::Data("relay list is empty".into()));
        }

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(ScreenerClient {
            http: httpb.build()?,
            base_quote,
            relays,
        })
    }
}

fn default_relays() -> Result<Vec<Relay>, ScreenerError> {
    Ok(vec![
        Relay::RawQuery(Url::parse(DEFAULT_RELAY_CORSPROXY)?),
        Relay::param(Url::parse(DEFAULT_RELAY_ALLORIGINS)?, "url"),
    ])
}
