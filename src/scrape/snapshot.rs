use scraper::{ElementRef, Html};

use super::selector;
use crate::ScreenerError;
use crate::compare::CompanyMetrics;

/// Reads the snapshot table (`table.snapshot-table2`) of a company page.
///
/// Cells alternate label, value along each row. Labels and values are
/// trimmed; an unpaired last cell is ignored. A page without the table gives
/// empty metrics, so every filter comes out `NA`.
///
/// # Errors
///
/// Only if a built-in selector fails to parse.
pub fn parse_snapshot(html: &str) -> Result<CompanyMetrics, ScreenerError> {
    let doc = Html::parse_document(html);
    let table_sel = selector("table.snapshot-table2")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;

    let mut metrics = CompanyMetrics::new();
    let Some(table) = doc.select(&table_sel).next() else {
        #[cfg(feature = "tracing")]
        tracing::debug!(len = html.len(), "snapshot table not found");
        return Ok(metrics);
    };

    for row in table.select(&row_sel) {
        let cells: Vec<String> = row.select(&cell_sel).map(cell_text).collect();
        for pair in cells.chunks_exact(2) {
            if !pair[0].is_empty() {
                metrics.insert(pair[0].as_str(), pair[1].as_str());
            }
        }
    }
    Ok(metrics)
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
