//! Layout types: Point, Margin, Geometry, and the marks of one PanelLayout.
//!
//! Every coordinate is relative to the origin of the group the mark is drawn
//! in; group origins are themselves relative to the panel's inner area
//! (after the top/left margins).

use serde::{Deserialize, Serialize};

use crate::model::types::Antibiotic;

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── Margin / Geometry ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 20.0,
            bottom: 50.0,
            left: 20.0,
        }
    }
}

/// Outer panel size and the drawable area inside the margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Geometry {
    pub fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

// ─── Marks ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct TextMark {
    pub text: String,
    pub at: Point,
    pub font_size: f64,
    pub color: Option<String>,
    /// Center the text on `at.x`.
    pub centered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub x: f64,
    /// Empty for unlabeled minor ticks.
    pub label: String,
}

/// A bottom axis: domain line from `range.0` to `range.1` with ticks below.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub origin: Point,
    pub range: (f64, f64),
    pub domain: (f64, f64),
    pub ticks: Vec<AxisTick>,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub font_size: f64,
}

/// One measurement dot on the axis baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct DotMark {
    pub antibiotic: Antibiotic,
    pub amount: f64,
    pub center: Point,
    pub radius: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub antibiotic: Antibiotic,
    pub color: String,
    pub dot: Point,
    pub radius: f64,
    pub label: TextMark,
}

/// Every mark of one bacterium's chart panel, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub bacteria: String,
    pub geometry: Geometry,
    pub axis: Axis,
    pub dots_origin: Point,
    pub dots: Vec<DotMark>,
    pub name_origin: Point,
    pub name: TextMark,
    pub glyph_origin: Point,
    pub glyphs: Vec<TextMark>,
    pub legend_origin: Point,
    pub legend: Vec<LegendEntry>,
    pub caption: TextMark,
}
