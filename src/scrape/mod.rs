//! HTML extraction for the two pages a comparison reads.
//!
//! - `snapshot`: the company page's key/value table → [`CompanyMetrics`](crate::compare::CompanyMetrics)
//! - `screener`: the screener result page → listed tickers

mod screener;
mod snapshot;

pub use screener::parse_screener_tickers;
pub use snapshot::parse_snapshot;

use crate::ScreenerError;
use scraper::Selector;

pub(crate) fn selector(css: &str) -> Result<Selector, ScreenerError> {
    Selector::parse(css).map_err(|e| ScreenerError::Data(format!("selector `{css}`: {e}")))
}
