//! ChartPage — the container panels are appended to, and its HTML/SVG output.

use super::svg::{escape, num};
use crate::config::DEFAULT_CONTAINER_ID;
use crate::layout::types::PanelLayout;

const STYLE: &str = "body { font-family: sans-serif; }\n\
.viz-entry { display: block; margin-bottom: 8px; }\n\
#table td, #table th { padding: 2px 8px; text-align: left; }";

/// One rendered panel and the size it occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelEntry {
    pub bacteria: String,
    pub width: f64,
    pub height: f64,
    pub markup: String,
}

/// An append-only container of chart panels.
///
/// Appending is not idempotent: rendering the same records twice leaves two
/// full sets of panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPage {
    pub container_id: String,
    panels: Vec<PanelEntry>,
    table: Option<String>,
}

impl Default for ChartPage {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID)
    }
}

impl ChartPage {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            panels: Vec::new(),
            table: None,
        }
    }

    /// Append a rendered panel.
    pub fn append(&mut self, layout: &PanelLayout, markup: String) {
        self.panels.push(PanelEntry {
            bacteria: layout.bacteria.clone(),
            width: layout.geometry.width,
            height: layout.geometry.height,
            markup,
        });
    }

    pub fn panels(&self) -> &[PanelEntry] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Attach the data table shown above the panels.
    pub fn set_table(&mut self, table: String) {
        self.table = Some(table);
    }

    /// The panel container element alone.
    pub fn container_html(&self) -> String {
        let mut parts = vec![format!(r#"<div id="{}">"#, escape(&self.container_id))];
        parts.extend(self.panels.iter().map(|p| p.markup.clone()));
        parts.push("</div>".to_string());
        parts.join("\n")
    }

    /// A complete HTML document: optional table, then the panel container.
    pub fn to_html(&self, title: &str) -> String {
        let mut parts = vec![
            "<!DOCTYPE html>".to_string(),
            r#"<html lang="en">"#.to_string(),
            "<head>".to_string(),
            r#"<meta charset="utf-8">"#.to_string(),
            format!("<title>{}</title>", escape(title)),
            format!("<style>\n{STYLE}\n</style>"),
            "</head>".to_string(),
            "<body>".to_string(),
        ];
        if let Some(table) = &self.table {
            parts.push(table.clone());
        }
        parts.push(self.container_html());
        parts.push("</body>".to_string());
        parts.push("</html>".to_string());
        parts.join("\n") + "\n"
    }

    /// One standalone SVG document with the panels stacked top to bottom.
    pub fn to_svg(&self) -> String {
        let width = self.panels.iter().map(|p| p.width).fold(0.0, f64::max);
        let height: f64 = self.panels.iter().map(|p| p.height).sum();
        let mut parts = vec![format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            escape(&self.container_id),
            w = num(width),
            h = num(height),
        )];
        parts.push(format!(
            r#"<rect width="{}" height="{}" fill="white"/>"#,
            num(width),
            num(height)
        ));
        let mut y = 0.0;
        for panel in &self.panels {
            parts.push(format!(r#"<g transform="translate(0,{})">"#, num(y)));
            parts.push(panel.markup.clone());
            parts.push("</g>".to_string());
            y += panel.height;
        }
        parts.push("</svg>".to_string());
        parts.join("\n") + "\n"
    }
}
