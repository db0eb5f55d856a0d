// Layout tunables.
//
// Purpose
// - Collect every pixel threshold and time granularity the layout engine reads.
// - Defaults reproduce the production timeline; a JSON file may override any subset.
//
// Boundaries
// - Loading from disk is the only input or output here, and only the shell calls it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::shared::core::primitives::{HOUR_MS, Millis};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read layout config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid layout config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A pixel value that differs between the mobile and desktop layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ByLayout {
    pub mobile: f64,
    pub desktop: f64,
}

impl ByLayout {
    pub const fn new(mobile: f64, desktop: f64) -> Self {
        Self { mobile, desktop }
    }

    pub fn pick(&self, is_mobile: bool) -> f64 {
        if is_mobile { self.mobile } else { self.desktop }
    }
}

/// Minimum rendered width per bar layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarMinWidth {
    pub plan: ByLayout,
    pub fact: ByLayout,
}

impl Default for BarMinWidth {
    fn default() -> Self {
        Self {
            plan: ByLayout::new(10.0, 6.0),
            fact: ByLayout::new(8.0, 4.0),
        }
    }
}

/// Upper bounds (exclusive) of the tiny, ultra and compact size classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeBreakpoints {
    pub tiny: f64,
    pub ultra: f64,
    pub compact: f64,
}

impl Default for SizeBreakpoints {
    fn default() -> Self {
        Self {
            tiny: 44.0,
            ultra: 72.0,
            compact: 112.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Hours covered by one grid column.
    pub col_hours: u32,
    pub min_col_px: ByLayout,
    pub max_col_px: f64,
    /// Column width used when the window yields no columns.
    pub fallback_col_px: f64,
    pub bar_min_width: BarMinWidth,
    pub size_breakpoints: SizeBreakpoints,
    /// Fact bars narrower than this never carry late/early caps.
    pub caps_threshold_px: f64,
    /// Plan bars at least this wide get the absence ring, narrower ones a dot.
    pub absence_wide_px: f64,
    pub marker_min_px: f64,
    pub absence_chip_half_px: f64,
    pub absence_dot_inset_px: f64,
    pub left_col_px: f64,
    /// Viewports narrower than this use the mobile layout.
    pub mobile_breakpoint_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            col_hours: 2,
            min_col_px: ByLayout::new(56.0, 72.0),
            max_col_px: 140.0,
            fallback_col_px: 100.0,
            bar_min_width: BarMinWidth::default(),
            size_breakpoints: SizeBreakpoints::default(),
            caps_threshold_px: 8.0,
            absence_wide_px: 64.0,
            marker_min_px: 2.0,
            absence_chip_half_px: 28.0,
            absence_dot_inset_px: 8.0,
            left_col_px: 280.0,
            mobile_breakpoint_px: 640.0,
        }
    }
}

impl LayoutConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), "layout config loaded");
        Ok(config)
    }

    /// Milliseconds covered by one grid column. Never below one hour.
    pub fn col_ms(&self) -> Millis {
        Millis::from(self.col_hours.max(1)) * HOUR_MS
    }

    pub fn is_mobile_width(&self, viewport_width: f64) -> bool {
        viewport_width < self.mobile_breakpoint_px
    }
}
