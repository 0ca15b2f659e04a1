use scraper::Html;
use url::form_urlencoded;

use super::selector;
use crate::ScreenerError;

/// Tickers linked from a screener result page, uppercase, first occurrence
/// order, without duplicates.
///
/// # Errors
///
/// Only if a built-in selector fails to parse.
pub fn parse_screener_tickers(html: &str) -> Result<Vec<String>, ScreenerError> {
    let doc = Html::parse_document(html);
    let link_sel = selector(r#"a[href*="quote.ashx?t="]"#)?;

    let mut tickers: Vec<String> = Vec::new();
    for href in doc.select(&link_sel).filter_map(|a| a.value().attr("href")) {
        let Some((_, query)) = href.split_once('?') else {
            continue;
        };
        let ticker = form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == "t")
            .map(|(_, v)| v.trim().to_uppercase());
        if let Some(t) = ticker
            && !t.is_empty()
            && !tickers.contains(&t)
        {
            tickers.push(t);
        }
    }
    Ok(tickers)
}
