use screener_check::filters::{FilterCodeTable, FilterCodec, UnknownCodePolicy};
use screener_check::scrape::parse_snapshot;
use screener_check::{
    CompanyMetrics, ComparisonReport, MagnitudePolicy, ValueNormalizer, Verdict,
};

use crate::common::read_fixture;

fn rows_for(url: &str, metrics: &CompanyMetrics) -> Vec<(String, String, String, Verdict)> {
    let table = FilterCodeTable::standard();
    let descriptors = FilterCodec::new(&table).decode(url);
    ComparisonReport::default()
        .build(&descriptors, metrics, None)
        .into_iter()
        .map(|r| (r.label, r.condition, r.actual, r.verdict))
        .collect()
}

fn row(label: &str, cond: &str, actual: &str, v: Verdict) -> (String, String, String, Verdict) {
    (label.into(), cond.into(), actual.into(), v)
}

#[test]
fn pe_and_current_ratio_both_pass() {
    let metrics: CompanyMetrics = [("P/E", "25.4"), ("Current Ratio", "1.8")].into_iter().collect();
    let rows = rows_for("https://finviz.com/screener.ashx?v=111&f=fa_pe_u30,fa_curratio_o1", &metrics);
    assert_eq!(
        rows,
        [
            row("P/E", "≤ 30", "25.4", Verdict::Ok),
            row("Current Ratio", "≥ 1", "1.8", Verdict::Ok),
        ]
    );
}

#[test]
fn missing_current_ratio_is_na() {
    let metrics: CompanyMetrics = [("P/E", "25.4")].into_iter().collect();
    let rows = rows_for("https://finviz.com/screener.ashx?v=111&f=fa_pe_u30,fa_curratio_o1", &metrics);
    assert_eq!(rows[1], row("Current Ratio", "≥ 1", "N/A", Verdict::Na));
}

#[test]
fn short_float_over_threshold_fails() {
    let metrics: CompanyMetrics = [("Short Float", "12.3%")].into_iter().collect();
    let rows = rows_for("https://finviz.com/screener.ashx?v=111&f=sh_short_u10", &metrics);
    assert_eq!(rows, [row("Short Float", "≤ 10%", "12.3%", Verdict::Nok)]);
}

#[test]
fn unknown_code_surfaces_as_fallback_row() {
    let metrics: CompanyMetrics = [("P/E", "25.4")].into_iter().collect();
    let rows = rows_for("https://finviz.com/screener.ashx?v=111&f=xx_unknown_o5,fa_pe_u30", &metrics);
    assert_eq!(
        rows,
        [
            row("P/E", "≤ 30", "25.4", Verdict::Ok),
            row("xx_unknown_o5", "", "N/A", Verdict::Na),
        ]
    );
}

#[test]
fn unknown_code_dropped_under_drop_policy() {
    let table = FilterCodeTable::standard();
    let descriptors = FilterCodec::new(&table)
        .unknown_codes(UnknownCodePolicy::Drop)
        .decode("https://finviz.com/screener.ashx?v=111&f=xx_unknown_o5");
    let rows = ComparisonReport::default().build(&descriptors, &CompanyMetrics::new(), None);
    assert!(rows.is_empty());
}

#[test]
fn full_snapshot_against_a_wide_screener() {
    let metrics = parse_snapshot(&read_fixture("snapshot_demo.html")).unwrap();
    let url = "https://finviz.com/screener.ashx?v=111&f=cap_largeunder,sh_float_o1,ta_sma20_pa,ta_rsi_nos40,\
               ta_perf2_26wup,ta_highlow52w_a5h,fa_opermargin_o5,fa_debteq_u1,sh_instown_o30,fa_ps_u2";
    let table = FilterCodeTable::standard();
    let descriptors = FilterCodec::new(&table).decode(url);

    let rows = ComparisonReport::default().build(&descriptors, &metrics, None);
    let got: Vec<(&str, Verdict)> = rows.iter().map(|r| (r.label.as_str(), r.verdict)).collect();
    assert_eq!(
        got,
        [
            ("Operating Margin", Verdict::Ok),
            ("Debt/Equity", Verdict::Ok),
            ("Institutional Ownership", Verdict::Ok),
            ("P/S", Verdict::Nok),
            ("52W High/Low", Verdict::Ok),
            ("Perf 26W", Verdict::Nok),
            ("RSI (14)", Verdict::Nok),
            ("SMA20", Verdict::Na),
            ("Float", Verdict::Ok),
            ("Market Cap", Verdict::Nok),
        ]
    );

    // with magnitudes scaled the float check compares 7.43e9 against 1e6
    let scaled = ComparisonReport::new(ValueNormalizer::new().magnitude(MagnitudePolicy::Scale))
        .build(&descriptors, &metrics, None);
    let float = scaled.iter().find(|r| r.label == "Float").unwrap();
    assert_eq!(float.verdict, Verdict::Ok);
    assert_eq!(float.actual, "7.43B");
}
