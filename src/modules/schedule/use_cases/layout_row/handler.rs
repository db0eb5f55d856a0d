// Row layout: plan bars, fact bars and deviation markers for one timeline row.
//
// Purpose
// - For every clipped plan segment, find the row's overlapping facts, classify
//   late/early/absence and compute the pixel geometry the presentation layer draws.
//
// Responsibilities
// - Only facts indexed under the row's own key are considered.
// - lateMs/earlyMs are computed for every overlap; filters gate what is emitted.
// - Late/early caps need a non-tiny plan bar and a fact bar at least as wide as
//   the caps threshold.
// - Absence means the segment has no overlapping fact at all.
// - Plan and fact bars carry an `HH:mm—HH:mm` caption and their length in hours.
//
// Boundaries
// - Pure. Degenerate or inverted segments still get a bar thanks to the width floor.

use chrono::{Local, TimeZone};
use serde::Serialize;
use std::fmt::Display;

use crate::modules::schedule::core::deviation::DeviationType;
use crate::modules::schedule::core::filters::FiltersState;
use crate::modules::schedule::core::size_class::BarKind;
use crate::modules::schedule::use_cases::build_fact_index::handler::FactIndex;
use crate::modules::schedule::use_cases::group_rows::handler::RowViewModel;
use crate::modules::schedule::use_cases::layout_row::geometry::{BarGeometry, TrackScale, bar_geometry};
use crate::modules::schedule::use_cases::layout_row::overlap::{early_ms, find_overlaps, late_ms};
use crate::shared::config::LayoutConfig;
use crate::shared::core::clock::{clock_range_label_in, duration_hours};
use crate::shared::core::primitives::{Interval, MINUTE_MS, Millis};

/// Everything a row layout depends on besides the row and its facts.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a, Tz: TimeZone = Local> {
    pub scale: TrackScale,
    pub filters: &'a FiltersState,
    pub config: &'a LayoutConfig,
    /// Zone the captions are written in.
    pub tz: &'a Tz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactOverlap {
    pub interval: Interval,
    pub late_ms: Millis,
    pub early_ms: Millis,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviationMarker {
    pub kind: DeviationType,
    pub left: f64,
    pub width: f64,
    /// Gap length rounded to whole minutes, for the marker tooltip.
    pub minutes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AbsenceMarker {
    /// Outline over the whole plan bar with a centered chip.
    #[serde(rename_all = "camelCase")]
    Ring { left: f64, width: f64, chip_left: f64 },
    /// Small dot near the right end of a narrow plan bar.
    Dot { left: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactBar {
    pub interval: Interval,
    pub geometry: BarGeometry,
    pub caption: String,
    pub hours: f64,
    pub late: Option<DeviationMarker>,
    pub early: Option<DeviationMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentLayout {
    pub seg: Interval,
    pub plan_bar: BarGeometry,
    pub caption: String,
    pub hours: f64,
    pub overlaps: Vec<FactOverlap>,
    /// One bar per overlap, in the same order; empty while the fact layer is hidden.
    pub fact_bars: Vec<FactBar>,
    pub absence: Option<AbsenceMarker>,
}

impl SegmentLayout {
    pub fn has_overlap(&self) -> bool {
        !self.overlaps.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowLayout {
    pub key: String,
    pub employee: String,
    pub store: String,
    pub role: String,
    pub segments: Vec<SegmentLayout>,
}

fn minutes_of(ms: Millis) -> i64 {
    (ms as f64 / MINUTE_MS as f64).round() as i64
}

fn marker<Tz: TimeZone>(
    kind: DeviationType,
    left: f64,
    gap_ms: Millis,
    ctx: &LayoutContext<'_, Tz>,
) -> DeviationMarker {
    DeviationMarker {
        kind,
        left,
        width: ctx.scale.span_px(gap_ms).max(ctx.config.marker_min_px),
        minutes: minutes_of(gap_ms),
    }
}

fn absence_marker(plan_bar: &BarGeometry, config: &LayoutConfig) -> AbsenceMarker {
    if plan_bar.width >= config.absence_wide_px {
        AbsenceMarker::Ring {
            left: plan_bar.left,
            width: plan_bar.width,
            chip_left: plan_bar.left + plan_bar.width / 2.0 - config.absence_chip_half_px,
        }
    } else {
        AbsenceMarker::Dot {
            left: plan_bar.left + plan_bar.width - config.absence_dot_inset_px,
        }
    }
}

fn fact_bar<Tz>(
    seg: &Interval,
    plan_bar: &BarGeometry,
    overlap: &FactOverlap,
    ctx: &LayoutContext<'_, Tz>,
) -> FactBar
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let geometry = bar_geometry(&overlap.interval, BarKind::Fact, &ctx.scale, ctx.config);
    let caps_visible =
        plan_bar.size_class.allows_caps() && geometry.width >= ctx.config.caps_threshold_px;

    let late = (caps_visible && overlap.late_ms > 0 && ctx.filters.shows(DeviationType::Late))
        .then(|| marker(DeviationType::Late, plan_bar.left, overlap.late_ms, ctx));
    let early = (caps_visible && overlap.early_ms > 0 && ctx.filters.shows(DeviationType::Early))
        .then(|| {
            let left = ctx.scale.x_of(seg.e - overlap.early_ms);
            marker(DeviationType::Early, left, overlap.early_ms, ctx)
        });

    FactBar {
        interval: overlap.interval,
        geometry,
        caption: clock_range_label_in(&overlap.interval, ctx.tz),
        hours: duration_hours(&overlap.interval),
        late,
        early,
    }
}

pub fn layout_segment<Tz>(seg: &Interval, facts: &[Interval], ctx: &LayoutContext<'_, Tz>) -> SegmentLayout
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let plan_bar = bar_geometry(seg, BarKind::Plan, &ctx.scale, ctx.config);

    let overlaps: Vec<FactOverlap> = find_overlaps(seg, facts)
        .into_iter()
        .map(|interval| FactOverlap {
            interval,
            late_ms: late_ms(seg, &interval),
            early_ms: early_ms(seg, &interval),
        })
        .collect();

    let fact_bars = if ctx.filters.show_fact {
        overlaps
            .iter()
            .map(|overlap| fact_bar(seg, &plan_bar, overlap, ctx))
            .collect()
    } else {
        Vec::new()
    };

    let absence = (overlaps.is_empty()
        && ctx.filters.show_fact
        && ctx.filters.shows(DeviationType::Absence))
    .then(|| absence_marker(&plan_bar, ctx.config));

    SegmentLayout {
        seg: *seg,
        plan_bar,
        caption: clock_range_label_in(seg, ctx.tz),
        hours: duration_hours(seg),
        overlaps,
        fact_bars,
        absence,
    }
}

pub fn layout_row<Tz>(row: &RowViewModel, index: &FactIndex, ctx: &LayoutContext<'_, Tz>) -> RowLayout
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let key = row.key();
    let facts = index.get(&key);
    RowLayout {
        key: key.to_string(),
        employee: row.employee.clone(),
        store: row.store.clone(),
        role: row.role.clone(),
        segments: row
            .plan_segs
            .iter()
            .map(|seg| layout_segment(seg, facts, ctx))
            .collect(),
    }
}

pub fn layout_rows<Tz>(
    rows: &[RowViewModel],
    index: &FactIndex,
    ctx: &LayoutContext<'_, Tz>,
) -> Vec<RowLayout>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    rows.iter().map(|row| layout_row(row, index, ctx)).collect()
}
