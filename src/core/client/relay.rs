//! Relay (CORS proxy) routing for page fetches.

use url::{Url, form_urlencoded};

/// One entry of the client's relay fallback list.
///
/// A relay rewrites the target URL into a request against a third-party proxy
/// that fetches the target on the caller's behalf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Relay {
    /// Request the target URL itself.
    Direct,
    /// `base?<percent-encoded target>` (corsproxy.io style).
    RawQuery(Url),
    /// `base?<param>=<percent-encoded target>` (allorigins style).
    Param {
        /// The relay endpoint.
        base: Url,
        /// The query parameter that carries the target URL.
        param: String,
    },
}

impl Relay {
    /// Shorthand for a [`Relay::Param`] relay.
    pub fn param(base: Url, param: impl Into<String>) -> Self {
        Self::Param {
            base,
            param: param.into(),
        }
    }

    /// Builds the URL actually requested for `target`.
    #[must_use]
    pub fn route(&self, target: &Url) -> Url {
        match self {
            Self::Direct => target.clone(),
            Self::RawQuery(base) => {
                let encoded: String =
                    form_urlencoded::byte_serialize(target.as_str().as_bytes()).collect();
                let mut url = base.clone();
                url.set_query(Some(&encoded));
                url
            }
            Self::Param { base, param } => {
                let mut url = base.clone();
                url.query_pairs_mut().append_pair(param, target.as_str());
                url
            }
        }
    }

    /// Short human-readable name (the relay host, or `direct`).
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Direct => "direct".to_string(),
            Self::RawQuery(base) | Self::Param { base, .. } => {
                base.host_str().unwrap_or("relay").to_string()
            }
        }
    }
}
