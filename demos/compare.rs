use screener_check::{CompareBuilder, MagnitudePolicy, ScreenerClient, ValueNormalizer, render};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let ticker = args.next().unwrap_or_else(|| "MSFT".to_string());
    let screener = args.next().unwrap_or_else(|| {
        "https://finviz.com/screener.ashx?v=111&f=fa_curratio_o1,fa_pe_u30,sh_short_u10,cap_largeunder"
            .to_string()
    });

    // 1. A client with a 10-second timeout and the default relay list.
    let client = ScreenerClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. Compare with the screener's convention (B/M/K suffixes are not scaled).
    let outcome = CompareBuilder::new(&client, &ticker, &screener).run().await?;
    println!("--- {} vs screener (listed: {}) ---", outcome.ticker, outcome.listed_in_screener);
    for row in &outcome.rows {
        println!(
            "  {:<24} {:<8} {:<12} {}",
            row.label, row.condition, row.actual, row.verdict
        );
    }
    println!();

    // 3. Same comparison with magnitudes scaled, rendered as HTML.
    let scaled = CompareBuilder::new(&client, &ticker, &screener)
        .normalizer(ValueNormalizer::new().magnitude(MagnitudePolicy::Scale))
        .run()
        .await?;
    println!("{}", render::html_table(&scaled.rows));

    Ok(())
}
