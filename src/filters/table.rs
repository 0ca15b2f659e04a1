//! Authored code → (label, operator, threshold) table.
//!
//! Entries are written per code, never derived from the code string: the
//! screener's operator letters are not consistent across metric families
//! (`o` is "over", `a5h` is "5% or more above the low", `nos40` is
//! "not oversold"), so a generic decoder would misclassify silently.

use std::collections::HashMap;

use super::model::{FilterTemplate, Operator};

use Operator::{Ge, Gt, Le};

const STANDARD_FILTERS: &[(&str, &str, Operator, &str)] = &[
    // valuation
    ("fa_pe_u30", "P/E", Le, "30"),
    ("fa_fpe_u20", "Forward P/E", Le, "20"),
    // profitability
    ("fa_grossmargin_o10", "Gross Margin", Ge, "10%"),
    ("fa_opermargin_o5", "Operating Margin", Ge, "5%"),
    // leverage / liquidity
    ("fa_debteq_u1", "Debt/Equity", Le, "1"),
    ("fa_ltdebteq_u1", "LT Debt/Equity", Le, "1"),
    ("fa_curratio_o1", "Current Ratio", Ge, "1"),
    // ownership / trading
    ("sh_instown_o30", "Institutional Ownership", Ge, "30%"),
    ("sh_relvol_o0.5", "Relative Volume", Ge, "0.5"),
    ("sh_short_u10", "Short Float", Le, "10%"),
    // multiples
    ("fa_evsales_u6", "EV/Sales", Le, "6"),
    ("fa_ps_u2", "P/S", Le, "2"),
    ("fa_ps_o2", "P/S", Ge, "2"),
    // technical
    ("ta_averagetruerange_o1", "Average True Range", Ge, "1"),
    ("ta_highlow52w_a5h", "52W High/Low", Ge, "5%"),
    ("ta_perf_3yup", "Perf 3Y", Gt, "0%"),
    ("ta_perf2_26wup", "Perf 26W", Gt, "0%"),
    ("ta_perf2_1wup", "Perf Week", Gt, "0%"),
    ("ta_rsi_nos40", "RSI (14)", Gt, "40"),
    ("ta_sma20_pa", "SMA20", Gt, "0%"),
    // size
    ("sh_float_o1", "Float", Ge, "1M"),
    ("cap_largeunder", "Market Cap", Le, "200B"),
];

/// Immutable lookup from filter code to its meaning.
///
/// Build it once ([`FilterCodeTable::standard`] or [`FilterCodeTable::from_entries`])
/// and hand it to a [`FilterCodec`](super::FilterCodec) by reference.
#[derive(Clone, Debug, Default)]
pub struct FilterCodeTable {
    entries: HashMap<String, FilterTemplate>,
}

impl FilterCodeTable {
    /// The Finviz filters this crate knows about.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries(
            STANDARD_FILTERS
                .iter()
                .map(|&(code, label, op, threshold)| (code, FilterTemplate::new(label, op, threshold))),
        )
    }

    /// A caller-authored table. Later entries win over earlier ones with the same code.
    pub fn from_entries<I, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, FilterTemplate)>,
        C: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(c, t)| (c.into(), t)).collect(),
        }
    }

    /// Looks up a filter code. `None` means the code is unknown.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&FilterTemplate> {
        self.entries.get(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All known codes, sorted.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
