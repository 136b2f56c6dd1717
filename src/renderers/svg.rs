//! SVG renderer — converts one PanelLayout to an `<svg>` element string.
//!
//! Markup mirrors what a bound-data drawing library emits: an outer panel
//! `<svg>` tagged with the panel class, an inner group translated by the
//! margins, and one group per layer (axis, dots, name, glyphs, legend).

use super::Renderer;
use crate::config::PANEL_CLASS;
use crate::layout::types::{Axis, PanelLayout, Point, TextMark};

// ── Constants ────────────────────────────────────────────────────────────────

const AXIS_FONT_FAMILY: &str = "sans-serif";
const AXIS_STROKE: &str = "currentColor";
/// Baseline shift that puts tick labels just under the tick line.
const TICK_LABEL_DY: &str = "0.71em";

// ── Helpers ──────────────────────────────────────────────────────────────────

pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a coordinate with at most three decimals and no trailing zeros.
pub(crate) fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

fn translate(p: Point) -> String {
    format!("translate({},{})", num(p.x), num(p.y))
}

fn font(size: f64) -> String {
    format!(r#"font-size="{}px""#, num(size))
}

fn paint(color: Option<&str>) -> String {
    match color {
        Some(c) => {
            let c = escape(c);
            format!(r#" stroke="{c}" fill="{c}""#)
        }
        None => String::new(),
    }
}

fn text(mark: &TextMark) -> String {
    let anchor = if mark.centered {
        r#" text-anchor="middle""#
    } else {
        ""
    };
    format!(
        r#"<text x="{}" y="{}"{anchor}{} {}>{}</text>"#,
        num(mark.at.x),
        num(mark.at.y),
        paint(mark.color.as_deref()),
        font(mark.font_size),
        escape(&mark.text)
    )
}

// ── Axis ─────────────────────────────────────────────────────────────────────

fn render_axis(axis: &Axis) -> String {
    let (r0, r1) = axis.range;
    let outer = axis.tick_size;
    let mut parts = vec![
        format!(
            r#"<g class="x axis" transform="{}" fill="none" font-size="{}" font-family="{AXIS_FONT_FAMILY}" text-anchor="middle">"#,
            translate(axis.origin),
            num(axis.font_size)
        ),
        format!(
            r#"<path class="domain" stroke="{AXIS_STROKE}" d="M{},{}V0H{}V{}"/>"#,
            num(r0),
            num(outer),
            num(r1),
            num(outer)
        ),
    ];
    for tick in &axis.ticks {
        parts.push(format!(
            r#"<g class="tick" opacity="1" transform="translate({},0)"><line stroke="{AXIS_STROKE}" y2="{}"/><text fill="{AXIS_STROKE}" y="{}" dy="{TICK_LABEL_DY}">{}</text></g>"#,
            num(tick.x),
            num(axis.tick_size),
            num(axis.tick_size + axis.tick_padding),
            escape(&tick.label)
        ));
    }
    parts.push("</g>".to_string());
    parts.join("\n")
}

// ── Panel ────────────────────────────────────────────────────────────────────

/// Render a panel layout to a standalone `<svg class="viz-entry">` element.
pub fn render_panel(panel: &PanelLayout) -> String {
    let g = &panel.geometry;
    let mut parts = vec![
        format!(
            r#"<svg class="{PANEL_CLASS}" width="{}" height="{}">"#,
            num(g.width),
            num(g.height)
        ),
        format!(
            r#"<g transform="{}">"#,
            translate(Point::new(g.margin.left, g.margin.top))
        ),
        render_axis(&panel.axis),
    ];

    // Dots on the axis baseline, drawn in ascending amount order.
    parts.push(format!(r#"<g transform="{}">"#, translate(panel.dots_origin)));
    for dot in &panel.dots {
        parts.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" style="fill: {};"/>"#,
            num(dot.center.x),
            num(dot.center.y),
            num(dot.radius),
            escape(&dot.color)
        ));
    }
    parts.push("</g>".to_string());

    parts.push(format!(r#"<g transform="{}">"#, translate(panel.name_origin)));
    parts.push(text(&panel.name));
    parts.push("</g>".to_string());

    parts.push(format!(r#"<g transform="{}">"#, translate(panel.glyph_origin)));
    parts.extend(panel.glyphs.iter().map(text));
    parts.push("</g>".to_string());

    parts.push(format!(r#"<g transform="{}">"#, translate(panel.legend_origin)));
    for entry in &panel.legend {
        let color = escape(&entry.color);
        parts.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" style="fill: {color}; stroke: {color};"/>"#,
            num(entry.dot.x),
            num(entry.dot.y),
            num(entry.radius)
        ));
    }
    parts.extend(panel.legend.iter().map(|e| text(&e.label)));
    parts.push("</g>".to_string());

    parts.push(text(&panel.caption));

    parts.push("</g>".to_string());
    parts.push("</svg>".to_string());
    parts.join("\n")
}

/// Renders panels as SVG markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    fn render(&self, panel: &PanelLayout) -> String {
        render_panel(panel)
    }
}
