use screener_check::filters::{
    DEFAULT_UNKNOWN_CODE_POLICY, FilterCodeTable, FilterCodec, UnknownCodePolicy,
};

const URL: &str = "https://finviz.com/screener.ashx?v=111&f=xx_unknown_o5,fa_pe_u30";

#[test]
fn default_policy_keeps_unknown_codes_as_fallback_rows() {
    assert_eq!(DEFAULT_UNKNOWN_CODE_POLICY, UnknownCodePolicy::Fallback);

    let table = FilterCodeTable::standard();
    let out = FilterCodec::new(&table).decode(URL);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].label, "P/E");
    let unknown = &out[1];
    assert!(unknown.is_fallback());
    assert_eq!(unknown.code, "xx_unknown_o5");
    assert_eq!(unknown.label, "xx_unknown_o5");
    assert_eq!(unknown.operator, None);
    assert_eq!(unknown.threshold, "");
    assert_eq!(unknown.condition_text(), "");
}

#[test]
fn drop_policy_skips_unknown_codes() {
    let table = FilterCodeTable::standard();
    let out = FilterCodec::new(&table)
        .unknown_codes(UnknownCodePolicy::Drop)
        .decode(URL);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, "fa_pe_u30");
}
