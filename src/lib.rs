//! screener-check: compare a company's snapshot fundamentals against the
//! filters encoded in a Finviz-style screener URL.
//!
//! The pure pieces work without any network:
//!
//! ```
//! use screener_check::compare::{CompanyMetrics, ComparisonReport, Verdict};
//! use screener_check::filters::{FilterCodeTable, FilterCodec};
//!
//! let table = FilterCodeTable::standard();
//! let filters = FilterCodec::new(&table)
//!     .decode("https://finviz.com/screener.ashx?v=111&f=fa_pe_u30,fa_curratio_o1");
//! let metrics: CompanyMetrics = [("P/E", "25.4"), ("Current Ratio", "1.8")].into_iter().collect();
//!
//! let rows = ComparisonReport::default().build(&filters, &metrics, None);
//! assert_eq!(rows[0].condition, "≤ 30");
//! assert!(rows.iter().all(|r| r.verdict == Verdict::Ok));
//! ```
//!
//! [`CompareBuilder`] adds the network side: it fetches the company page and
//! the screener page through the client's relays and scrapes both.

pub mod compare;
pub mod core;
pub mod filters;
pub mod presets;
pub mod render;
pub mod scrape;

pub use compare::{
    CompanyMetrics, CompareBuilder, ComparisonOutcome, ComparisonReport, ComparisonRow,
    Descriptions, MagnitudePolicy, ValueNormalizer, Verdict,
};
pub use crate::core::{Relay, ScreenerClient, ScreenerClientBuilder, ScreenerError};
pub use filters::{FilterCodeTable, FilterCodec, FilterDescriptor, Operator, UnknownCodePolicy};
pub use presets::Preset;
