use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Result of one filter check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The company passes the filter.
    #[serde(rename = "OK")]
    Ok,
    /// The company fails the filter.
    #[serde(rename = "NOK")]
    Nok,
    /// Not evaluable: missing data or a value that is not a number.
    #[serde(rename = "NA")]
    Na,
}

impl Verdict {
    #[must_use]
    pub const fn from_pass(pass: bool) -> Self {
        if pass { Self::Ok } else { Self::Nok }
    }

    /// Display text: `OK`, `NOK` or `NA`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Nok => "NOK",
            Self::Na => "NA",
        }
    }

    /// CSS class used by the HTML renderer.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Nok => "nok",
            Self::Na => "na",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the comparison report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Filter label.
    pub label: String,
    /// `"≤ 30"`-style condition; empty for unknown filter codes.
    pub condition: String,
    /// The company's value as scraped, or `N/A`.
    pub actual: String,
    pub verdict: Verdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Scraped snapshot values keyed by metric label (e.g. `"P/E"` → `"25.4"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyMetrics(HashMap<String, String>);

impl CompanyMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value; a repeated label takes the later value.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.0.insert(label.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CompanyMetrics {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut m = Self::new();
        for (k, v) in iter {
            m.insert(k, v);
        }
        m
    }
}

/// Filter descriptions keyed by label, shown as an extra report column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Descriptions(HashMap<String, String>);

impl Descriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the description for `label`.
    pub fn insert(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.0.insert(label.into(), text.into());
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Descriptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut d = Self::new();
        for (k, v) in iter {
            d.insert(k, v);
        }
        d
    }
}

/// Everything one comparison run produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonOutcome {
    /// Normalized (trimmed, uppercase) ticker.
    pub ticker: String,
    pub screener_url: String,
    pub rows: Vec<ComparisonRow>,
    /// Whether the ticker appears in the screener's result page.
    pub listed_in_screener: bool,
}
