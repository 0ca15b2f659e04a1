//! Output formats for a row list.

use html_escape::encode_text;

use crate::ScreenerError;
use crate::compare::ComparisonRow;

/// Renders rows as an HTML `<table>`.
///
/// Columns: Filter, Condition, Company, Result, plus Description when any
/// row carries one. The result cell gets the verdict's CSS class
/// (`ok`/`nok`/`na`). All text is escaped.
#[must_use]
pub fn html_table(rows: &[ComparisonRow]) -> String {
    let with_description = rows.iter().any(|r| r.description.is_some());

    let mut out = String::from("<table class=\"comparison\">\n<thead><tr>");
    out.push_str("<th>Filter</th><th>Condition</th><th>Company</th><th>Result</th>");
    if with_description {
        out.push_str("<th>Description</th>");
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for row in rows {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}</td>",
            encode_text(&row.label),
            encode_text(&row.condition),
            encode_text(&row.actual),
            row.verdict.css_class(),
            row.verdict.as_str(),
        ));
        if with_description {
            let text = row.description.as_deref().unwrap_or("");
            out.push_str(&format!("<td>{}</td>", encode_text(text)));
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

/// Serializes rows as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ScreenerError::Json`] if serialization fails.
pub fn to_json(rows: &[ComparisonRow]) -> Result<String, ScreenerError> {
    Ok(serde_json::to_string_pretty(rows)?)
}
