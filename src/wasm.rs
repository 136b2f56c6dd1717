//! WASM bindings for mic-chart.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::{LayoutConfig, OutputFormat, RenderConfig};

/// Render a CSV table to the panel container `<div>` with default settings.
#[wasm_bindgen]
pub fn render(csv: &str) -> Result<String, JsError> {
    let page = crate::render_csv(csv, &RenderConfig::default())
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(page.container_html())
}

/// Render a CSV table with full control over options.
///
/// - `layout_json`: layout overrides as JSON, or empty string for defaults
/// - `format`: "svg" for a standalone SVG document, anything else for the
///   container `<div>`
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(csv: &str, layout_json: &str, format: &str) -> Result<String, JsError> {
    let layout = if layout_json.is_empty() {
        LayoutConfig::default()
    } else {
        LayoutConfig::from_json(layout_json).map_err(|e| JsError::new(&e.to_string()))?
    };
    let config = RenderConfig {
        layout,
        format: if format == "svg" {
            OutputFormat::Svg
        } else {
            OutputFormat::Html
        },
        ..RenderConfig::default()
    };
    let page = crate::render_csv(csv, &config).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(match config.format {
        OutputFormat::Svg => page.to_svg(),
        OutputFormat::Html => page.container_html(),
    })
}
