//! Descriptor labels ↔ snapshot page keys.

/// `(descriptor label, snapshot key)`. Each label appears in at most one pair.
pub const ALIASES: &[(&str, &str)] = &[
    ("Operating Margin", "Oper. Margin"),
    ("Float", "Shs Float"),
    ("Perf 26W", "Perf Half Y"),
    ("Debt/Equity", "Debt/Eq"),
    ("LT Debt/Equity", "LT Debt/Eq"),
    ("Institutional Ownership", "Inst Own"),
    ("Relative Volume", "Rel Volume"),
    ("Average True Range", "ATR (14)"),
    ("52W High/Low", "52W Low"),
];

/// The other name of `label`, looked up in both directions.
#[must_use]
pub fn alias_of(label: &str) -> Option<&'static str> {
    ALIASES.iter().find_map(|&(a, b)| {
        if a == label {
            Some(b)
        } else if b == label {
            Some(a)
        } else {
            None
        }
    })
}
