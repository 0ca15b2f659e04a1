use std::collections::HashSet;

use screener_check::compare::{ALIASES, alias_of};

#[test]
fn aliases_resolve_both_ways() {
    let pairs = [
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
    assert_eq!(ALIASES.len(), pairs.len());
    for (label, key) in pairs {
        assert_eq!(alias_of(label), Some(key), "{label}");
        assert_eq!(alias_of(key), Some(label), "{key}");
    }
}

#[test]
fn every_table_entry_round_trips() {
    for &(label, key) in ALIASES {
        assert_eq!(alias_of(alias_of(label).unwrap()), Some(label));
        assert_eq!(alias_of(alias_of(key).unwrap()), Some(key));
    }
}

#[test]
fn no_name_appears_twice() {
    let mut seen = HashSet::new();
    for &(label, key) in ALIASES {
        assert_ne!(label, key);
        assert!(seen.insert(label), "duplicate alias name {label}");
        assert!(seen.insert(key), "duplicate alias name {key}");
    }
}

#[test]
fn labels_without_alias() {
    assert_eq!(alias_of("P/E"), None);
    assert_eq!(alias_of("Current Ratio"), None);
    assert_eq!(alias_of(""), None);
}
