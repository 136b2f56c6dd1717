//! Configuration for the rendering pipeline.
//!
//! `LayoutConfig` holds every pixel constant of a panel. It deserializes
//! from JSON with per-field defaults, so an override file only lists what
//! it changes.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::types::{Margin, Point};
use crate::model::types::{Palette, StainGlyphs};
use crate::parsers::normalize::default_text_headers;

/// Container element every panel is appended to.
pub const DEFAULT_CONTAINER_ID: &str = "attempt1";

/// Class marker set on every panel `<svg>`.
pub const PANEL_CLASS: &str = "viz-entry";

// ─── LayoutConfig ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,

    pub tick_count: usize,
    /// Significant digits of tick labels.
    pub tick_precision: usize,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub axis_font_size: f64,

    pub dot_radius: f64,

    pub name_anchor: Point,
    pub name_font_size: f64,

    pub glyph_anchor: Point,
    /// Vertical distance between stacked Gram-stain glyphs.
    pub glyph_line_height: f64,
    pub glyph_font_size: f64,

    pub legend_anchor: Point,
    pub legend_spacing: f64,
    pub legend_dot_y: f64,
    pub legend_radius: f64,
    pub legend_label_offset: Point,
    pub legend_font_size: f64,

    pub caption: String,
    /// Distance from the axis baseline down to the caption.
    pub caption_offset: f64,
    pub caption_font_size: f64,
    pub caption_color: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 120.0,
            margin: Margin::default(),
            tick_count: 5,
            tick_precision: 1,
            tick_size: 6.0,
            tick_padding: 3.0,
            axis_font_size: 10.0,
            dot_radius: 6.0,
            name_anchor: Point::new(30.0, 5.0),
            name_font_size: 20.0,
            glyph_anchor: Point::new(0.0, 5.0),
            glyph_line_height: 20.0,
            glyph_font_size: 20.0,
            legend_anchor: Point::new(30.0, 20.0),
            legend_spacing: 110.0,
            legend_dot_y: -2.0,
            legend_radius: 6.0,
            legend_label_offset: Point::new(7.0, 2.0),
            legend_font_size: 12.0,
            caption: "MIC".to_string(),
            caption_offset: 30.0,
            caption_font_size: 12.0,
            caption_color: "black".to_string(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a JSON override; missing fields keep their defaults.
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }
}

// ─── Policies ────────────────────────────────────────────────────────────────

/// What to do with an amount that cannot sit on a log axis (NaN, ≤ 0, ∞).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidAmountPolicy {
    /// Drop the dot, keep the rest of the panel.
    #[default]
    Skip,
    /// Fail the panel; the render loop moves on to the next record.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// HTML page with the panel container.
    #[default]
    Html,
    /// One standalone SVG document with panels stacked vertically.
    Svg,
}

// ─── RenderConfig ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub container_id: String,
    /// Header labels (as written in the file) whose values stay text.
    pub text_headers: Vec<String>,
    pub invalid_amounts: InvalidAmountPolicy,
    /// Also emit the data table.
    pub table: bool,
    pub format: OutputFormat,
    pub layout: LayoutConfig,
    pub palette: Palette,
    pub glyphs: StainGlyphs,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            text_headers: default_text_headers(),
            invalid_amounts: InvalidAmountPolicy::default(),
            table: false,
            format: OutputFormat::default(),
            layout: LayoutConfig::default(),
            palette: Palette::default(),
            glyphs: StainGlyphs::default(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
