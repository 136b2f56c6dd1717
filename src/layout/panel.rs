//! Panel layout: one Record → every positioned mark of its chart panel.

use log::warn;

use super::scale::LogScale;
use super::types::{Axis, AxisTick, DotMark, Geometry, LegendEntry, PanelLayout, Point, TextMark};
use crate::config::{InvalidAmountPolicy, LayoutConfig};
use crate::error::{ChartError, Result};
use crate::model::types::{Antibiotic, Palette, Record, StainGlyphs, is_plottable};

/// Domain used when a record has no amount that fits on a log axis.
const FALLBACK_DOMAIN: (f64, f64) = (1.0, 10.0);

/// Log-scale domain over a record's plottable raw amounts.
///
/// Returns `None` when no amount is plottable.
pub fn amount_domain(record: &Record) -> Option<(f64, f64)> {
    record
        .amounts()
        .into_iter()
        .filter(|&a| is_plottable(a))
        .fold(None, |acc, a| match acc {
            None => Some((a, a)),
            Some((lo, hi)) => Some((lo.min(a), hi.max(a))),
        })
}

/// Build the scale mapping a record's amounts onto the drawable width.
pub fn record_scale(record: &Record, layout: &LayoutConfig) -> LogScale {
    let geometry = Geometry::new(layout.width, layout.height, layout.margin);
    let domain = amount_domain(record).unwrap_or(FALLBACK_DOMAIN);
    LogScale::new(domain, (0.0, geometry.inner_width()))
}

/// Compute the complete layout of one record's panel.
pub fn build_panel(
    record: &Record,
    layout: &LayoutConfig,
    palette: &Palette,
    glyphs: &StainGlyphs,
    policy: InvalidAmountPolicy,
) -> Result<PanelLayout> {
    let geometry = Geometry::new(layout.width, layout.height, layout.margin);
    let inner_width = geometry.inner_width();
    let inner_height = geometry.inner_height();

    for antibiotic in Antibiotic::ALL {
        let amount = record.amount(antibiotic);
        if is_plottable(amount) {
            continue;
        }
        match policy {
            InvalidAmountPolicy::Reject => {
                return Err(ChartError::InvalidAmount {
                    bacteria: record.bacteria.clone(),
                    antibiotic,
                    amount,
                });
            }
            InvalidAmountPolicy::Skip => {
                warn!(
                    "{}: skipping {} dot, amount {} is not positive and finite",
                    record.bacteria, antibiotic, amount
                );
            }
        }
    }

    let readings = record.readings();
    let scale = record_scale(record, layout);

    let format = scale.tick_format(layout.tick_count, layout.tick_precision);
    let ticks = scale
        .ticks(layout.tick_count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            x: scale.apply(value),
            label: format.label(value),
        })
        .collect();
    let axis = Axis {
        origin: Point::new(0.0, inner_height),
        range: scale.range,
        domain: scale.domain,
        ticks,
        tick_size: layout.tick_size,
        tick_padding: layout.tick_padding,
        font_size: layout.axis_font_size,
    };

    let dots = readings
        .iter()
        .filter(|r| r.is_plottable())
        .map(|r| DotMark {
            antibiotic: r.antibiotic,
            amount: r.amount,
            center: Point::new(scale.apply(r.amount), 0.0),
            radius: layout.dot_radius,
            color: palette.color(r.antibiotic).to_string(),
        })
        .collect();

    let name = TextMark {
        text: record.bacteria.clone(),
        at: Point::default(),
        font_size: layout.name_font_size,
        color: None,
        centered: false,
    };

    let glyph_marks = readings
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let glyph = glyphs.glyph(&r.stain);
            TextMark {
                text: glyph.symbol.clone(),
                at: Point::new(0.0, i as f64 * layout.glyph_line_height),
                font_size: layout.glyph_font_size,
                color: Some(glyph.color.clone()),
                centered: false,
            }
        })
        .collect();

    let legend = readings
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let x = layout.legend_spacing * i as f64;
            let color = palette.color(r.antibiotic).to_string();
            LegendEntry {
                antibiotic: r.antibiotic,
                color: color.clone(),
                dot: Point::new(x, layout.legend_dot_y),
                radius: layout.legend_radius,
                label: TextMark {
                    text: r.antibiotic.display_name().to_string(),
                    at: Point::new(x + layout.legend_label_offset.x, layout.legend_label_offset.y),
                    font_size: layout.legend_font_size,
                    color: Some(color),
                    centered: false,
                },
            }
        })
        .collect();

    let caption = TextMark {
        text: layout.caption.clone(),
        at: Point::new(inner_width / 2.0, inner_height + layout.caption_offset),
        font_size: layout.caption_font_size,
        color: Some(layout.caption_color.clone()),
        centered: true,
    };

    Ok(PanelLayout {
        bacteria: record.bacteria.clone(),
        geometry,
        axis,
        dots_origin: Point::new(0.0, inner_height),
        dots,
        name_origin: layout.name_anchor,
        name,
        glyph_origin: layout.glyph_anchor,
        glyphs: glyph_marks,
        legend_origin: layout.legend_anchor,
        legend,
        caption,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(record: &Record) -> PanelLayout {
        build_panel(
            record,
            &LayoutConfig::default(),
            &Palette::default(),
            &StainGlyphs::default(),
            InvalidAmountPolicy::Skip,
        )
        .unwrap()
    }

    fn dot_x(p: &PanelLayout, a: Antibiotic) -> f64 {
        p.dots.iter().find(|d| d.antibiotic == a).unwrap().center.x
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_three_decade_scenario() {
        let p = panel(&Record::new("B1", "positive", 1.0, 10.0, 100.0));
        assert_eq!(p.axis.domain, (1.0, 100.0));
        assert!(close(dot_x(&p, Antibiotic::Penicilin), 0.0));
        assert!(close(dot_x(&p, Antibiotic::Streptomycin), 180.0));
        assert!(close(dot_x(&p, Antibiotic::Neomycin), 360.0));
        assert!(p.dots.iter().all(|d| d.center.y == 0.0 && d.radius == 6.0));
        assert_eq!(p.dots_origin, Point::new(0.0, 60.0));
    }

    #[test]
    fn test_dots_monotonic_and_in_range() {
        let records = [
            Record::new("Aerobacter aerogenes", "negative", 870.0, 1.0, 1.6),
            Record::new("Bacillus anthracis", "positive", 0.001, 0.01, 0.007),
            Record::new("Streptococcus viridans", "positive", 0.005, 10.0, 40.0),
        ];
        for record in &records {
            let p = panel(record);
            assert_eq!(p.dots.len(), 3);
            for w in p.dots.windows(2) {
                assert!(w[0].amount <= w[1].amount);
                assert!(w[0].center.x <= w[1].center.x);
            }
            for d in &p.dots {
                assert!(d.center.x >= -1e-9 && d.center.x <= 360.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_equal_amounts_land_at_midpoint() {
        let p = panel(&Record::new("B5", "negative", 5.0, 5.0, 5.0));
        assert_eq!(p.dots.len(), 3);
        assert!(p.dots.iter().all(|d| d.center.x == 180.0));
        assert_eq!(p.axis.ticks.len(), 1);
        assert_eq!(p.axis.ticks[0].label, "5");
    }

    #[test]
    fn test_nan_amount_skips_dot() {
        let p = panel(&Record::new("B2", "negative", f64::NAN, 2.0, 20.0));
        assert_eq!(p.dots.len(), 2);
        assert_eq!(p.axis.domain, (2.0, 20.0));
        assert!(p.dots.iter().all(|d| d.center.x.is_finite()));
        // Glyphs and legend still cover all three antibiotics.
        assert_eq!(p.glyphs.len(), 3);
        assert_eq!(p.legend.len(), 3);
    }

    #[test]
    fn test_no_plottable_amount_uses_fallback_domain() {
        let p = panel(&Record::new("B0", "positive", 0.0, -1.0, f64::NAN));
        assert!(p.dots.is_empty());
        assert_eq!(p.axis.domain, FALLBACK_DOMAIN);
    }

    #[test]
    fn test_reject_policy() {
        let err = build_panel(
            &Record::new("B3", "positive", 1.0, 0.0, 3.0),
            &LayoutConfig::default(),
            &Palette::default(),
            &StainGlyphs::default(),
            InvalidAmountPolicy::Reject,
        )
        .unwrap_err();
        match err {
            ChartError::InvalidAmount {
                bacteria,
                antibiotic,
                amount,
            } => {
                assert_eq!(bacteria, "B3");
                assert_eq!(antibiotic, Antibiotic::Streptomycin);
                assert_eq!(amount, 0.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_glyphs_stacked_vertically() {
        let p = panel(&Record::new("B1", "negative", 1.0, 10.0, 100.0));
        assert_eq!(p.glyph_origin, Point::new(0.0, 5.0));
        let ys: Vec<f64> = p.glyphs.iter().map(|g| g.at.y).collect();
        assert_eq!(ys, vec![0.0, 20.0, 40.0]);
        assert!(p.glyphs.iter().all(|g| g.text == "(-)" && g.at.x == 0.0));
        assert!(p.glyphs.iter().all(|g| g.color.as_deref() == Some("black")));
    }

    #[test]
    fn test_legend_follows_sorted_order() {
        let p = panel(&Record::new("B1", "positive", 100.0, 1.0, 10.0));
        assert_eq!(p.legend_origin, Point::new(30.0, 20.0));
        let order: Vec<Antibiotic> = p.legend.iter().map(|e| e.antibiotic).collect();
        assert_eq!(
            order,
            vec![
                Antibiotic::Streptomycin,
                Antibiotic::Neomycin,
                Antibiotic::Penicilin
            ]
        );
        assert_eq!(p.legend[1].dot, Point::new(110.0, -2.0));
        assert_eq!(p.legend[2].label.at, Point::new(227.0, 2.0));
        assert_eq!(p.legend[2].label.text, "Penicillin");
        assert_eq!(p.legend[0].color, "#ff7f0e");
        assert_eq!(p.legend[0].label.font_size, 12.0);
    }

    #[test]
    fn test_name_and_caption() {
        let p = panel(&Record::new("Brucella abortus", "negative", 1.0, 2.0, 0.02));
        assert_eq!(p.name_origin, Point::new(30.0, 5.0));
        assert_eq!(p.name.text, "Brucella abortus");
        assert_eq!(p.name.font_size, 20.0);
        assert_eq!(p.caption.text, "MIC");
        assert_eq!(p.caption.at, Point::new(180.0, 90.0));
        assert!(p.caption.centered);
    }

    #[test]
    fn test_custom_layout_resizes_range() {
        let layout = LayoutConfig {
            width: 640.0,
            ..LayoutConfig::default()
        };
        let p = build_panel(
            &Record::new("B1", "positive", 1.0, 10.0, 100.0),
            &layout,
            &Palette::default(),
            &StainGlyphs::default(),
            InvalidAmountPolicy::Skip,
        )
        .unwrap();
        assert_eq!(p.axis.range, (0.0, 600.0));
        assert!(close(dot_x(&p, Antibiotic::Neomycin), 600.0));
    }
}
