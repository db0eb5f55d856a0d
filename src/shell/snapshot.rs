// Snapshot input for the shell: datasets, an optional window and viewport hints.
//
// Purpose
// - Deserialize one JSON document into everything a render needs.
//
// Responsibilities
// - Window precedence: explicit fromMs/toMs, then a picker day range, then the
//   default initial range around `now`.
// - Missing viewport fields fall back to LayoutConfig values.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Deserialize;
use thiserror::Error;

use crate::modules::schedule::core::filters::FiltersState;
use crate::modules::schedule::core::shift::{ShiftFact, ShiftPlan};
use crate::modules::schedule::use_cases::render_schedule::handler::Viewport;
use crate::shared::config::LayoutConfig;
use crate::shared::core::clock::{DateRange, initial_range};
use crate::shared::core::primitives::Millis;

pub const DEFAULT_CONTAINER_WIDTH: f64 = 1280.0;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not resolve a visible window")]
    UnresolvedWindow,
}

/// Inclusive picker selection, in calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DayRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportInput {
    pub from_ms: Option<Millis>,
    pub to_ms: Option<Millis>,
    pub container_width: Option<f64>,
    pub left_col_width: Option<f64>,
    pub is_mobile: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub plan: Vec<ShiftPlan>,
    pub fact: Vec<ShiftFact>,
    pub range: Option<DayRange>,
    pub viewport: ViewportInput,
    pub filters: FiltersState,
}

impl Snapshot {
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn window_in<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateRange> {
        if let (Some(from_ms), Some(to_ms)) = (self.viewport.from_ms, self.viewport.to_ms) {
            return Some(DateRange { from_ms, to_ms });
        }
        match self.range {
            Some(days) => DateRange::from_days(days.from, days.to, &now.timezone()),
            None => initial_range(now),
        }
    }

    pub fn viewport_in<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        config: &LayoutConfig,
    ) -> Result<Viewport, SnapshotError> {
        let window = self.window_in(now).ok_or(SnapshotError::UnresolvedWindow)?;
        let container_width = self
            .viewport
            .container_width
            .unwrap_or(DEFAULT_CONTAINER_WIDTH);
        Ok(Viewport {
            from_ms: window.from_ms,
            to_ms: window.to_ms,
            container_width,
            left_col_width: self.viewport.left_col_width.unwrap_or(config.left_col_px),
            is_mobile: self
                .viewport
                .is_mobile
                .unwrap_or_else(|| config.is_mobile_width(container_width)),
        })
    }
}
