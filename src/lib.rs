//! mic-chart — antibiotic MIC table to small-multiple dot-plot panels.
//!
//! Pipeline: CSV → normalized rows → Records → PanelLayout → SVG markup,
//! appended to a [`ChartPage`] container.
//!
//! Public API: [`render_csv`], [`render_document`], [`render_records`].

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod parsers;
pub mod renderers;

#[cfg(feature = "wasm")]
pub mod wasm;

use log::{debug, info, warn};

pub use config::{InvalidAmountPolicy, LayoutConfig, OutputFormat, RenderConfig};
pub use error::{ChartError, Result};
pub use model::types::Record;
pub use renderers::{ChartPage, Renderer, SvgRenderer};

use layout::build_panel;
use parsers::{CsvParser, TableParser};

/// Title of the generated HTML page.
pub const PAGE_TITLE: &str = "Antibiotic MIC by bacterium";

/// Render one panel per record and append each to `page`, in order.
///
/// A record whose panel cannot be built is logged and skipped; the loop
/// always continues. Returns the number of panels appended.
pub fn render_records<R: Renderer>(
    page: &mut ChartPage,
    records: &[Record],
    config: &RenderConfig,
    renderer: &R,
) -> usize {
    let mut drawn = 0;
    for record in records {
        debug!("{}", record.bacteria);
        match build_panel(
            record,
            &config.layout,
            &config.palette,
            &config.glyphs,
            config.invalid_amounts,
        ) {
            Ok(panel) => {
                page.append(&panel, renderer.render(&panel));
                drawn += 1;
            }
            Err(e) => warn!("skipping panel: {}", e),
        }
    }
    info!("rendered {} of {} panels", drawn, records.len());
    drawn
}

/// Parse a CSV table and render every record into a fresh page.
pub fn render_csv(src: &str, config: &RenderConfig) -> Result<ChartPage> {
    let records = CsvParser::new(config.text_headers.clone()).parse(src)?;
    let mut page = ChartPage::new(config.container_id.clone());
    if config.table {
        page.set_table(renderers::render_table(&records));
    }
    render_records(&mut page, &records, config, &SvgRenderer);
    Ok(page)
}

/// Parse a CSV table and produce the output document in `config.format`.
pub fn render_document(src: &str, config: &RenderConfig) -> Result<String> {
    let page = render_csv(src, config)?;
    Ok(match config.format {
        OutputFormat::Html => page.to_html(PAGE_TITLE),
        OutputFormat::Svg => page.to_svg(),
    })
}
