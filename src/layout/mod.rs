//! Layout engine: log scale, tick labels, and per-record panel layout.

pub mod format;
pub mod panel;
pub mod scale;
pub mod types;

pub use panel::{amount_domain, build_panel, record_scale};
pub use scale::{LogScale, TickFormat};
pub use types::{Axis, AxisTick, DotMark, Geometry, LegendEntry, Margin, PanelLayout, Point, TextMark};
