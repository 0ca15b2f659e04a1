use url::{Url, form_urlencoded};

use super::model::FilterDescriptor;
use super::table::FilterCodeTable;

/// What the codec does with a filter code the table does not know.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnknownCodePolicy {
    /// Keep the code as a fallback descriptor: raw code as label, no
    /// condition. It ends up as an `NA` row.
    #[default]
    Fallback,
    /// Skip the code.
    Drop,
}

/// Policy applied when none is configured. Unknown codes stay visible in the
/// report so that a screener using filters this crate cannot evaluate does
/// not look like a pass.
pub const DEFAULT_UNKNOWN_CODE_POLICY: UnknownCodePolicy = UnknownCodePolicy::Fallback;

/// Display order by economic category: valuation, profitability, leverage,
/// ownership and trading, multiples, technicals, size.
pub const CANONICAL_ORDER: &[&str] = &[
    "fa_pe_u30",
    "fa_fpe_u20",
    "fa_grossmargin_o10",
    "fa_opermargin_o5",
    "fa_debteq_u1",
    "fa_ltdebteq_u1",
    "fa_curratio_o1",
    "sh_instown_o30",
    "sh_relvol_o0.5",
    "sh_short_u10",
    "fa_evsales_u6",
    "fa_ps_u2",
    "fa_ps_o2",
    "ta_averagetruerange_o1",
    "ta_highlow52w_a5h",
    "ta_perf_3yup",
    "ta_perf2_26wup",
    "ta_perf2_1wup",
    "ta_rsi_nos40",
    "ta_sma20_pa",
    "sh_float_o1",
];

/// Decodes the `f=` parameter of a screener URL into ordered descriptors.
///
/// # Example
///
/// ```
/// use screener_check::filters::{FilterCodeTable, FilterCodec};
///
/// let table = FilterCodeTable::standard();
/// let codec = FilterCodec::new(&table);
/// let filters = codec.decode("https://finviz.com/screener.ashx?v=111&f=fa_curratio_o1,fa_pe_u30");
/// assert_eq!(filters[0].label, "P/E");
/// assert_eq!(filters[1].label, "Current Ratio");
/// ```
#[derive(Clone, Debug)]
pub struct FilterCodec<'t> {
    table: &'t FilterCodeTable,
    unknown: UnknownCodePolicy,
    order: Vec<String>,
}

impl<'t> FilterCodec<'t> {
    /// Codec over `table` with the default unknown-code policy and the
    /// canonical order.
    pub fn new(table: &'t FilterCodeTable) -> Self {
        Self {
            table,
            unknown: DEFAULT_UNKNOWN_CODE_POLICY,
            order: CANONICAL_ORDER.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Sets the unknown-code policy.
    #[must_use]
    pub const fn unknown_codes(mut self, policy: UnknownCodePolicy) -> Self {
        self.unknown = policy;
        self
    }

    /// Replaces the canonical display order.
    #[must_use]
    pub fn order<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Decodes `screener_url`.
    ///
    /// A URL without an `f` parameter yields no descriptors; that is not an
    /// error. The output order is the canonical order, with codes missing
    /// from it appended in the order the URL lists them.
    #[must_use]
    pub fn decode(&self, screener_url: &str) -> Vec<FilterDescriptor> {
        let Some(param) = filter_param(screener_url) else {
            return Vec::new();
        };

        let mut resolved: Vec<(usize, FilterDescriptor)> = Vec::new();
        for code in param.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            let descriptor = match self.table.lookup(code) {
                Some(t) => FilterDescriptor::from_template(code, t),
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(code, policy = ?self.unknown, "unknown filter code");
                    match self.unknown {
                        UnknownCodePolicy::Fallback => FilterDescriptor::fallback(code),
                        UnknownCodePolicy::Drop => continue,
                    }
                }
            };
            resolved.push((self.rank(code), descriptor));
        }

        // stable: equal ranks keep URL order
        resolved.sort_by_key(|(rank, _)| *rank);
        resolved.into_iter().map(|(_, d)| d).collect()
    }

    fn rank(&self, code: &str) -> usize {
        self.order
            .iter()
            .position(|c| c == code)
            .unwrap_or(self.order.len())
    }
}

/// First `f` query parameter, if any.
fn filter_param(screener_url: &str) -> Option<String> {
    let raw = screener_url.trim();
    if let Ok(url) = Url::parse(raw) {
        return url
            .query_pairs()
            .find(|(k, _)| k == "f")
            .map(|(_, v)| v.into_owned());
    }

    // relative link or bare query string
    let query = raw.split_once('?').map_or(raw, |(_, q)| q);
    let query = query.split_once('#').map_or(query, |(q, _)| q);
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "f")
        .map(|(_, v)| v.into_owned())
}
