//! Renderer trait and the SVG/HTML output backends.

pub mod page;
pub mod svg;
pub mod table;

pub use page::{ChartPage, PanelEntry};
pub use svg::SvgRenderer;
pub use table::render_table;

use crate::layout::types::PanelLayout;

/// Trait for panel renderers.
pub trait Renderer {
    /// Render one laid-out panel to markup.
    fn render(&self, panel: &PanelLayout) -> String;
}
