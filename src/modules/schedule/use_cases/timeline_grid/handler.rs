// Timeline grid metrics.
//
// Purpose
// - Turn a visible window and the available pixel width into columns, a px/ms
//   scale, track widths and day boundaries.
// - Position column ticks and day labels on that grid.
//
// Responsibilities
// - Never divide by zero: the window length is floored to 1 ms and a window
//   without columns falls back to a fixed column width.
//
// Boundaries
// - Pure function of its inputs. Day boundaries follow the given time zone.

use chrono::{Local, TimeZone};
use serde::Serialize;
use std::fmt::Display;

use crate::shared::config::LayoutConfig;
use crate::shared::core::clock::{format_day_in, format_tick_in, next_midnight_in};
use crate::shared::core::primitives::Millis;

/// Inputs of the grid computation; also the memoization key for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    pub from_ms: Millis,
    pub to_ms: Millis,
    pub container_width: f64,
    pub left_col_width: f64,
    pub is_mobile: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridMetrics {
    pub cols: u32,
    pub col_width: f64,
    pub px_per_ms: f64,
    pub track_px: f64,
    pub full_grid_px: f64,
    pub day_splits: Vec<Millis>,
}

impl GridMetrics {
    /// Horizontal offset of `ms` on the track.
    pub fn x_of(&self, ms: Millis, from_ms: Millis) -> f64 {
        ms.saturating_sub(from_ms) as f64 * self.px_per_ms
    }

    /// Column width as shown by the grid background, rounded to whole pixels.
    pub fn display_col_width(&self) -> f64 {
        (self.track_px / f64::from(self.cols.max(1))).round()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tick {
    pub ms: Millis,
    pub left: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLabel {
    pub ms: Millis,
    pub left: f64,
    pub label: String,
}

pub fn compute_grid(params: &GridParams, config: &LayoutConfig) -> GridMetrics {
    compute_grid_in(params, config, &Local)
}

pub fn compute_grid_in<Tz: TimeZone>(
    params: &GridParams,
    config: &LayoutConfig,
    tz: &Tz,
) -> GridMetrics {
    let col_ms = config.col_ms();
    let total_ms = params.to_ms.saturating_sub(params.from_ms).max(1);
    let cols = u32::try_from(total_ms / col_ms + Millis::from(total_ms % col_ms != 0))
        .unwrap_or(u32::MAX);
    let available = (params.container_width - params.left_col_width).max(0.0);

    let raw_width = if cols > 0 {
        (available / f64::from(cols)).floor()
    } else {
        config.fallback_col_px
    };
    let min_col = config.min_col_px.pick(params.is_mobile);
    let col_width = raw_width.min(config.max_col_px).max(min_col);
    let px_per_ms = col_width / col_ms as f64;

    let track_px = f64::from(cols) * col_width;
    let full_grid_px = params.left_col_width + track_px;

    GridMetrics {
        cols,
        col_width,
        px_per_ms,
        track_px,
        full_grid_px,
        day_splits: day_splits_in(params.from_ms, params.to_ms, tz),
    }
}

/// Local midnights strictly after `from_ms` and strictly before `to_ms`.
pub fn day_splits_in<Tz: TimeZone>(from_ms: Millis, to_ms: Millis, tz: &Tz) -> Vec<Millis> {
    let mut splits = Vec::new();
    let mut cursor = next_midnight_in(from_ms, tz);
    while let Some(day) = cursor {
        if day >= to_ms {
            break;
        }
        splits.push(day);
        cursor = next_midnight_in(day, tz);
    }
    splits
}

/// One tick per column edge, `cols + 1` in total.
pub fn ticks_in<Tz>(grid: &GridMetrics, from_ms: Millis, config: &LayoutConfig, tz: &Tz) -> Vec<Tick>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let col_ms = config.col_ms();
    (0..=grid.cols)
        .map(|i| {
            let ms = from_ms.saturating_add(Millis::from(i).saturating_mul(col_ms));
            Tick {
                ms,
                left: f64::from(i) * grid.col_width,
                label: format_tick_in(ms, tz),
            }
        })
        .collect()
}

pub fn day_labels_in<Tz>(grid: &GridMetrics, from_ms: Millis, tz: &Tz) -> Vec<DayLabel>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    grid.day_splits
        .iter()
        .map(|&ms| DayLabel {
            ms,
            left: grid.x_of(ms, from_ms),
            label: format_day_in(ms, tz),
        })
        .collect()
}
