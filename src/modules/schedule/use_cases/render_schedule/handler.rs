// Schedule renderer: composes the layout passes with explicit memoization.
//
// Purpose
// - Own the plan and fact datasets and produce a complete ScheduleLayout for a
//   viewport and filter state.
//
// Responsibilities
// - Rebuild the fact index only when the fact dataset changes.
// - Regroup rows only when the plan dataset or the window changes.
// - Recompute grid metrics only when one of their inputs changes.
// - Allocate a fresh ScheduleLayout on every render.
//
// Boundaries
// - No shared state between renderers; each caller owns its own instance.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::modules::schedule::core::filters::FiltersState;
use crate::modules::schedule::core::shift::{ShiftFact, ShiftPlan};
use crate::modules::schedule::use_cases::build_fact_index::handler::{FactIndex, build_fact_index};
use crate::modules::schedule::use_cases::group_rows::handler::{RowViewModel, group_rows};
use crate::modules::schedule::use_cases::layout_row::geometry::TrackScale;
use crate::modules::schedule::use_cases::layout_row::handler::{LayoutContext, RowLayout, layout_rows};
use crate::modules::schedule::use_cases::render_schedule::memo::Memo;
use crate::modules::schedule::use_cases::timeline_grid::handler::{
    DayLabel, GridMetrics, GridParams, Tick, compute_grid_in, day_labels_in, ticks_in,
};
use crate::shared::config::LayoutConfig;
use crate::shared::core::primitives::Millis;

/// What the presentation layer currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub from_ms: Millis,
    pub to_ms: Millis,
    pub container_width: f64,
    pub left_col_width: f64,
    pub is_mobile: bool,
}

impl Viewport {
    pub fn grid_params(&self) -> GridParams {
        GridParams {
            from_ms: self.from_ms,
            to_ms: self.to_ms,
            container_width: self.container_width,
            left_col_width: self.left_col_width,
            is_mobile: self.is_mobile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleLayout {
    pub grid: GridMetrics,
    pub display_col_width: f64,
    pub ticks: Vec<Tick>,
    pub day_labels: Vec<DayLabel>,
    pub rows: Vec<RowLayout>,
}

pub struct ScheduleRenderer<Tz: TimeZone = Local> {
    config: LayoutConfig,
    tz: Tz,
    plan: Vec<ShiftPlan>,
    fact: Vec<ShiftFact>,
    plan_revision: u64,
    fact_revision: u64,
    fact_index: Memo<u64, FactIndex>,
    rows: Memo<(u64, Millis, Millis), Vec<RowViewModel>>,
    grid: Memo<GridParams, GridMetrics>,
}

impl ScheduleRenderer<Local> {
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_timezone(config, Local)
    }
}

impl<Tz> ScheduleRenderer<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn with_timezone(config: LayoutConfig, tz: Tz) -> Self {
        Self {
            config,
            tz,
            plan: Vec::new(),
            fact: Vec::new(),
            plan_revision: 0,
            fact_revision: 0,
            fact_index: Memo::new(),
            rows: Memo::new(),
            grid: Memo::new(),
        }
    }

    pub fn set_plan(&mut self, plan: Vec<ShiftPlan>) {
        self.plan = plan;
        self.plan_revision += 1;
    }

    pub fn set_fact(&mut self, fact: Vec<ShiftFact>) {
        self.fact = fact;
        self.fact_revision += 1;
    }

    pub fn render(&mut self, viewport: &Viewport, filters: &FiltersState) -> ScheduleLayout {
        let Self {
            config,
            tz,
            plan,
            fact,
            plan_revision,
            fact_revision,
            fact_index,
            rows,
            grid,
        } = self;

        let index = fact_index.get_or_compute(*fact_revision, |_| build_fact_index(fact));
        let row_models = rows.get_or_compute(
            (*plan_revision, viewport.from_ms, viewport.to_ms),
            |&(_, from, to)| group_rows(plan, from, to),
        );
        let grid = grid
            .get_or_compute(viewport.grid_params(), |p| compute_grid_in(p, config, tz))
            .clone();

        let ctx = LayoutContext {
            scale: TrackScale::from_grid(&grid, viewport.from_ms, viewport.is_mobile),
            filters,
            config,
            tz,
        };
        let rows = layout_rows(row_models, index, &ctx);

        tracing::debug!(
            rows = rows.len(),
            cols = grid.cols,
            facts_indexed = index.len(),
            "schedule rendered"
        );

        ScheduleLayout {
            display_col_width: grid.display_col_width(),
            ticks: ticks_in(&grid, viewport.from_ms, config, tz),
            day_labels: day_labels_in(&grid, viewport.from_ms, tz),
            rows,
            grid,
        }
    }

    /// Recomputations so far of the fact index, the rows and the grid.
    pub fn cache_misses(&self) -> (u64, u64, u64) {
        (
            self.fact_index.misses(),
            self.rows.misses(),
            self.grid.misses(),
        )
    }
}
