use httpmock::{Method::GET, MockServer};
use screener_check::{CompareBuilder, Descriptions, ScreenerError, Verdict};

use crate::common::{direct_client, read_fixture, screener_url};

#[tokio::test]
async fn compare_fetches_both_pages_and_builds_rows() {
    let server = MockServer::start();

    let screener = server.mock(|when, then| {
        when.method(GET)
            .path("/screener.ashx")
            .query_param("f", "sh_short_u10,fa_pe_u30,xx_unknown_o5");
        then.status(200)
            .header("content-type", "text/html")
            .body(read_fixture("screener_demo.html"));
    });
    let quote = server.mock(|when, then| {
        when.method(GET).path("/quote.ashx").query_param("t", "DEMO");
        then.status(200)
            .header("content-type", "text/html")
            .body(read_fixture("snapshot_demo.html"));
    });

    let client = direct_client(&server);
    let url = screener_url(&server, "sh_short_u10,fa_pe_u30,xx_unknown_o5");
    let outcome = CompareBuilder::new(&client, "  demo ", &url).run().await.unwrap();

    screener.assert();
    quote.assert();

    assert_eq!(outcome.ticker, "DEMO");
    assert!(outcome.listed_in_screener);
    let got: Vec<(&str, &str, &str, Verdict)> = outcome
        .rows
        .iter()
        .map(|r| (r.label.as_str(), r.condition.as_str(), r.actual.as_str(), r.verdict))
        .collect();
    assert_eq!(
        got,
        [
            ("P/E", "≤ 30", "25.40", Verdict::Ok),
            ("Short Float", "≤ 10%", "0.61%", Verdict::Ok),
            ("xx_unknown_o5", "", "N/A", Verdict::Na),
        ]
    );
}

#[tokio::test]
async fn ticker_missing_from_result_page_is_not_listed() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/screener.ashx");
        then.status(200).body(read_fixture("screener_demo.html"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/quote.ashx").query_param("t", "MSFT");
        then.status(200).body(read_fixture("snapshot_demo.html"));
    });

    let descriptions: Descriptions = [("P/E", "Price over trailing earnings")].into_iter().collect();
    let client = direct_client(&server);
    let outcome = CompareBuilder::new(&client, "MSFT", screener_url(&server, "fa_pe_u30"))
        .descriptions(descriptions)
        .run()
        .await
        .unwrap();

    assert!(!outcome.listed_in_screener);
    assert_eq!(outcome.rows.len(), 1);
    assert_eq!(
        outcome.rows[0].description.as_deref(),
        Some("Price over trailing earnings")
    );
}

#[tokio::test]
async fn failed_page_fetch_aborts_the_comparison() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/screener.ashx");
        then.status(200).body(read_fixture("screener_demo.html"));
    });
    let quote = server.mock(|when, then| {
        when.method(GET).path("/quote.ashx");
        then.status(404).body("not found");
    });

    let client = direct_client(&server);
    let err = CompareBuilder::new(&client, "NOPE", screener_url(&server, "fa_pe_u30"))
        .run()
        .await
        .unwrap_err();
    quote.assert();

    match err {
        ScreenerError::AllRelaysFailed { url, last } => {
            assert!(url.contains("/quote.ashx?t=NOPE"));
            match *last {
                ScreenerError::Status { status, .. } => assert_eq!(status, 404),
                other => panic!("expected Status error, got {other:?}"),
            }
        }
        other => panic!("expected AllRelaysFailed, got {other:?}"),
    }
}
