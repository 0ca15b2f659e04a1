//! Pipe-delimited lists that feed the UI: named screener presets
//! (`name|url`) and filter descriptions (`label|description`).
//!
//! Both files start with a header row, which is skipped. Blank lines and
//! lines without a `|` are ignored; fields are trimmed.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::compare::Descriptions;
use crate::{ScreenerClient, ScreenerError};

/// A named screener URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub url: String,
}

/// Parses a `name|url` list. The first line is a header.
#[must_use]
pub fn parse_presets(text: &str) -> Vec<Preset> {
    pairs(text)
        .map(|(name, url)| Preset {
            name: name.to_string(),
            url: url.to_string(),
        })
        .collect()
}

/// Parses a `label|description` list. The first line is a header.
#[must_use]
pub fn parse_descriptions(text: &str) -> Descriptions {
    pairs(text).collect()
}

/// Fetches and parses a preset list.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched through any relay.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn load_presets(client: &ScreenerClient, url: &Url) -> Result<Vec<Preset>, ScreenerError> {
    let text = client.fetch_text(url).await?;
    Ok(parse_presets(&text))
}

/// Fetches and parses a description list.
///
/// # Errors
///
/// Returns an error if the list cannot be fetched through any relay.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn load_descriptions(client: &ScreenerClient, url: &Url) -> Result<Descriptions, ScreenerError> {
    let text = client.fetch_text(url).await?;
    Ok(parse_descriptions(&text))
}

fn pairs(text: &str) -> impl Iterator<Item = (&str, &str)> {
    text.lines().skip(1).filter_map(|line| {
        let (left, right) = line.split_once('|')?;
        let (left, right) = (left.trim(), right.trim());
        (!left.is_empty() && !right.is_empty()).then_some((left, right))
    })
}
