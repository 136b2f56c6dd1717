//! HTML data table of the loaded records.

use super::svg::escape;
use crate::model::types::Record;

pub const TABLE_CONTAINER_ID: &str = "table";

/// Column headers, in display order.
pub const TABLE_HEADER: [&str; 5] = [
    "Bacteria",
    "Penicilin",
    "Streptomycin",
    "Neomycin",
    "Gram Staining",
];

/// Shortest decimal form; non-numeric cells show as `NaN`.
fn cell_number(v: f64) -> String {
    if v.is_nan() { "NaN".to_string() } else { v.to_string() }
}

/// Render records as a `<table>` inside the table container.
pub fn render_table(records: &[Record]) -> String {
    let mut parts = vec![
        format!(r#"<div id="{TABLE_CONTAINER_ID}">"#),
        "<table>".to_string(),
        "<thead>".to_string(),
    ];
    parts.extend(TABLE_HEADER.iter().map(|h| format!("<th>{}</th>", escape(h))));
    parts.push("</thead>".to_string());
    parts.push("<tbody>".to_string());
    for r in records {
        let cells = [
            escape(&r.bacteria),
            cell_number(r.penicilin),
            cell_number(r.streptomycin),
            cell_number(r.neomycin),
            escape(&r.gram_staining_text),
        ];
        let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
        parts.push(format!("<tr>{tds}</tr>"));
    }
    parts.push("</tbody>".to_string());
    parts.push("</table>".to_string());
    parts.push("</div>".to_string());
    parts.join("\n")
}
