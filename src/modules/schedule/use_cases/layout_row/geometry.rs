// Pixel geometry of a bar on the track.
//
// Notes
// - The minimum width only changes the rendered footprint, never the interval.
// - Geometry stays floating point; nothing is rounded here.

use serde::Serialize;

use crate::modules::schedule::core::size_class::{BarKind, SizeClass, classify, min_bar_width};
use crate::modules::schedule::use_cases::timeline_grid::handler::GridMetrics;
use crate::shared::config::LayoutConfig;
use crate::shared::core::primitives::{Interval, Millis};

/// Maps milliseconds onto track pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackScale {
    pub from_ms: Millis,
    pub px_per_ms: f64,
    pub is_mobile: bool,
}

impl TrackScale {
    pub fn from_grid(grid: &GridMetrics, from_ms: Millis, is_mobile: bool) -> Self {
        Self {
            from_ms,
            px_per_ms: grid.px_per_ms,
            is_mobile,
        }
    }

    pub fn x_of(&self, ms: Millis) -> f64 {
        ms.saturating_sub(self.from_ms) as f64 * self.px_per_ms
    }

    pub fn span_px(&self, duration_ms: Millis) -> f64 {
        duration_ms as f64 * self.px_per_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarGeometry {
    pub left: f64,
    pub width: f64,
    pub size_class: SizeClass,
}

pub fn bar_geometry(
    interval: &Interval,
    kind: BarKind,
    scale: &TrackScale,
    config: &LayoutConfig,
) -> BarGeometry {
    let left = scale.x_of(interval.s);
    let width = scale
        .span_px(interval.duration_ms())
        .max(min_bar_width(kind, scale.is_mobile, config));
    BarGeometry {
        left,
        width,
        size_class: classify(width, &config.size_breakpoints),
    }
}
