//! Company-vs-screener comparison.
//!
//! Internals are split into:
//! - `normalize`: scraped text → decimal
//! - `engine`:    one condition → verdict
//! - `alias`:     descriptor labels ↔ snapshot keys
//! - `report`:    descriptors + metrics → rows
//!
//! [`CompareBuilder`] ties them to the network: it fetches both pages,
//! scrapes them and builds the report.

mod alias;
mod engine;
mod model;
mod normalize;
mod report;

pub use alias::{ALIASES, alias_of};
pub use engine::evaluate;
pub use model::{CompanyMetrics, ComparisonOutcome, ComparisonRow, Descriptions, Verdict};
pub use normalize::{MagnitudePolicy, ValueNormalizer};
pub use report::{ComparisonReport, MISSING_VALUE};

use url::Url;

use crate::filters::{DEFAULT_UNKNOWN_CODE_POLICY, FilterCodeTable, FilterCodec, UnknownCodePolicy};
use crate::scrape::{parse_screener_tickers, parse_snapshot};
use crate::{ScreenerClient, ScreenerError};

/// Compares one ticker against one screener URL.
///
/// # Example
///
/// ```no_run
/// # use screener_check::{CompareBuilder, ScreenerClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ScreenerClient::new()?;
/// let outcome = CompareBuilder::new(
///     &client,
///     "msft",
///     "https://finviz.com/screener.ashx?v=111&f=fa_pe_u30,fa_curratio_o1",
/// )
/// .run()
/// .await?;
/// for row in &outcome.rows {
///     println!("{:<20} {:<8} {:<10} {}", row.label, row.condition, row.actual, row.verdict);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CompareBuilder {
    client: ScreenerClient,
    ticker: String,
    screener_url: String,
    table: Option<FilterCodeTable>,
    descriptions: Option<Descriptions>,
    normalizer: ValueNormalizer,
    unknown: UnknownCodePolicy,
}

impl CompareBuilder {
    /// Starts a comparison of `ticker` against `screener_url` using the
    /// standard code table and a default normalizer. Inputs are validated in
    /// [`run`](Self::run).
    pub fn new(client: &ScreenerClient, ticker: impl Into<String>, screener_url: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            ticker: ticker.into(),
            screener_url: screener_url.into(),
            table: None,
            descriptions: None,
            normalizer: ValueNormalizer::default(),
            unknown: DEFAULT_UNKNOWN_CODE_POLICY,
        }
    }

    /// Uses a caller-authored code table instead of [`FilterCodeTable::standard`].
    #[must_use]
    pub fn table(mut self, table: FilterCodeTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Adds a description column.
    #[must_use]
    pub fn descriptions(mut self, descriptions: Descriptions) -> Self {
        self.descriptions = Some(descriptions);
        self
    }

    #[must_use]
    pub fn normalizer(mut self, normalizer: ValueNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    #[must_use]
    pub const fn unknown_codes(mut self, policy: UnknownCodePolicy) -> Self {
        self.unknown = policy;
        self
    }

    /// Fetches the screener page and the company page concurrently, then
    /// builds the report.
    ///
    /// # Errors
    ///
    /// [`ScreenerError::MissingInput`] for an empty ticker or URL, before any
    /// request is made. Any fetch failure aborts the whole comparison; no
    /// partial rows are returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(ticker = %self.ticker)))]
    pub async fn run(self) -> Result<ComparisonOutcome, ScreenerError> {
        let ticker = self.ticker.trim().to_uppercase();
        let screener_url = self.screener_url.trim().to_string();
        if ticker.is_empty() {
            return Err(ScreenerError::MissingInput("ticker"));
        }
        if screener_url.is_empty() {
            return Err(ScreenerError::MissingInput("screener URL"));
        }

        let screener_target = Url::parse(&screener_url)?;
        let quote_target = self.client.quote_url(&ticker);

        let (screener_html, quote_html) = tokio::try_join!(
            self.client.fetch_text(&screener_target),
            self.client.fetch_text(&quote_target),
        )?;

        let metrics = parse_snapshot(&quote_html)?;
        let listed = parse_screener_tickers(&screener_html)?;

        let table = self.table.unwrap_or_else(FilterCodeTable::standard);
        let descriptors = FilterCodec::new(&table)
            .unknown_codes(self.unknown)
            .decode(&screener_url);
        let rows = ComparisonReport::new(self.normalizer).build(
            &descriptors,
            &metrics,
            self.descriptions.as_ref(),
        );

        Ok(ComparisonOutcome {
            listed_in_screener: listed.contains(&ticker),
            ticker,
            screener_url,
            rows,
        })
    }
}
