// Width tiers for bars and the per-layer minimum bar width.
//
// The tier decides label density and, for Tiny, suppresses late/early caps
// regardless of filter state.

use serde::{Deserialize, Serialize};

use crate::shared::config::{LayoutConfig, SizeBreakpoints};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Tiny,
    Ultra,
    Compact,
    Default,
}

impl SizeClass {
    pub fn allows_caps(&self) -> bool {
        *self != SizeClass::Tiny
    }

    /// Class name appended to the bar element; empty for the default tier.
    pub fn css_class(&self) -> &'static str {
        match self {
            SizeClass::Tiny => "tiny",
            SizeClass::Ultra => "ultra",
            SizeClass::Compact => "compact",
            SizeClass::Default => "",
        }
    }
}

pub fn classify(width_px: f64, breakpoints: &SizeBreakpoints) -> SizeClass {
    if width_px < breakpoints.tiny {
        SizeClass::Tiny
    } else if width_px < breakpoints.ultra {
        SizeClass::Ultra
    } else if width_px < breakpoints.compact {
        SizeClass::Compact
    } else {
        SizeClass::Default
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarKind {
    Plan,
    Fact,
}

pub fn min_bar_width(kind: BarKind, is_mobile: bool, config: &LayoutConfig) -> f64 {
    let by_layout = match kind {
        BarKind::Plan => config.bar_min_width.plan,
        BarKind::Fact => config.bar_min_width.fact,
    };
    by_layout.pick(is_mobile)
}
