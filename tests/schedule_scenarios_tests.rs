// End-to-end layout scenarios through the public API.
//
// Responsibilities when you add code
// - Feed raw plan/fact records, never pre-built intervals.
// - Pin the time zone with a fixed offset so labels and midnights are stable.

use chrono::FixedOffset;
use rstest::{fixture, rstest};

use shift_timeline::modules::schedule::core::deviation::{DeviationFlags, DeviationType};
use shift_timeline::modules::schedule::core::filters::{FiltersPatch, FiltersState};
use shift_timeline::modules::schedule::core::shift::{ShiftFact, ShiftPlan};
use shift_timeline::modules::schedule::use_cases::layout_row::handler::{AbsenceMarker, SegmentLayout};
use shift_timeline::modules::schedule::use_cases::render_schedule::handler::{
    ScheduleLayout, ScheduleRenderer, Viewport,
};
use shift_timeline::modules::schedule::use_cases::timeline_grid::handler::{GridParams, compute_grid_in};
use shift_timeline::shared::config::LayoutConfig;
use shift_timeline::shared::core::primitives::{MINUTE_MS, Millis, Timestamp, to_millis};

fn ms(iso: &str) -> Millis {
    to_millis(&Timestamp::from(iso)).unwrap()
}

fn plan(employee: &str, start: &str, end: &str) -> ShiftPlan {
    ShiftPlan {
        employee: employee.to_string(),
        store: "Store A".to_string(),
        role: "Cashier".to_string(),
        start_planned: Timestamp::from(start),
        end_planned: Timestamp::from(end),
    }
}

fn fact(employee: &str, start: &str, end: &str) -> ShiftFact {
    ShiftFact {
        employee: employee.to_string(),
        store: "Store A".to_string(),
        role: "Cashier".to_string(),
        start_actual: Timestamp::from(start),
        end_actual: Timestamp::from(end),
    }
}

#[fixture]
fn day() -> Viewport {
    Viewport {
        from_ms: ms("2025-08-18T00:00:00+02:00"),
        to_ms: ms("2025-08-18T23:59:59.999+02:00"),
        container_width: 1280.0,
        left_col_width: 280.0,
        is_mobile: false,
    }
}

fn render(plans: Vec<ShiftPlan>, facts: Vec<ShiftFact>, viewport: &Viewport, filters: &FiltersState) -> ScheduleLayout {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let mut renderer = ScheduleRenderer::with_timezone(LayoutConfig::default(), tz);
    renderer.set_plan(plans);
    renderer.set_fact(facts);
    renderer.render(viewport, filters)
}

fn only_segment(layout: &ScheduleLayout) -> &SegmentLayout {
    assert_eq!(layout.rows.len(), 1);
    assert_eq!(layout.rows[0].segments.len(), 1);
    &layout.rows[0].segments[0]
}

#[rstest]
fn it_should_mark_a_late_start_and_an_early_finish(day: Viewport) {
    let layout = render(
        vec![plan("Ivan Petrov", "2025-08-18T09:00:00+02:00", "2025-08-18T17:30:00+02:00")],
        vec![fact("Ivan Petrov", "2025-08-18T09:12:00+02:00", "2025-08-18T17:05:00+02:00")],
        &day,
        &FiltersState::default(),
    );
    let seg = only_segment(&layout);

    assert_eq!(seg.overlaps.len(), 1);
    let overlap = seg.overlaps[0];
    assert_eq!(overlap.interval.s, ms("2025-08-18T09:12:00+02:00"));
    assert_eq!(overlap.interval.e, ms("2025-08-18T17:05:00+02:00"));
    assert_eq!(overlap.late_ms, 12 * MINUTE_MS);
    assert_eq!(overlap.early_ms, 25 * MINUTE_MS);

    let bar = &seg.fact_bars[0];
    assert_eq!(bar.late.map(|m| m.kind), Some(DeviationType::Late));
    assert_eq!(bar.early.map(|m| m.kind), Some(DeviationType::Early));
    assert!(seg.absence.is_none());
}

#[rstest]
fn it_should_mark_an_absence_without_any_fact(day: Viewport) {
    let layout = render(
        vec![plan("Ivan Petrov", "2025-08-18T09:00:00+02:00", "2025-08-18T17:00:00+02:00")],
        vec![fact("Olga Smirnova", "2025-08-18T09:00:00+02:00", "2025-08-18T17:00:00+02:00")],
        &day,
        &FiltersState::default(),
    );
    let seg = only_segment(&layout);

    assert!(!seg.has_overlap());
    assert!(matches!(seg.absence, Some(AbsenceMarker::Ring { .. })));
}

#[rstest]
fn it_should_switch_to_an_absence_dot_on_a_narrow_bar(day: Viewport) {
    let layout = render(
        vec![plan("Ivan Petrov", "2025-08-18T09:00:00+02:00", "2025-08-18T10:00:00+02:00")],
        Vec::new(),
        &day,
        &FiltersState::default(),
    );
    assert!(matches!(only_segment(&layout).absence, Some(AbsenceMarker::Dot { .. })));
}

#[rstest]
fn it_should_clip_an_overnight_plan_to_the_window(day: Viewport) {
    let layout = render(
        vec![plan("Ivan Petrov", "2025-08-18T22:00:00+02:00", "2025-08-19T06:00:00+02:00")],
        Vec::new(),
        &day,
        &FiltersState::default(),
    );
    let seg = only_segment(&layout);
    assert_eq!(seg.seg.s, ms("2025-08-18T22:00:00+02:00"));
    assert_eq!(seg.seg.e, ms("2025-08-18T23:59:59.999+02:00"));
}

#[rstest]
fn it_should_measure_each_half_of_a_split_shift_against_the_same_plan(day: Viewport) {
    let layout = render(
        vec![plan("Ivan Petrov", "2025-08-18T08:00:00+02:00", "2025-08-18T16:00:00+02:00")],
        vec![
            fact("Ivan Petrov", "2025-08-18T12:30:00+02:00", "2025-08-18T15:40:00+02:00"),
            fact("Ivan Petrov", "2025-08-18T08:00:00+02:00", "2025-08-18T11:30:00+02:00"),
        ],
        &day,
        &FiltersState::default(),
    );
    let seg = only_segment(&layout);

    assert_eq!(seg.overlaps.len(), 2);
    let gaps: Vec<(Millis, Millis)> = seg.overlaps.iter().map(|o| (o.late_ms, o.early_ms)).collect();
    assert_eq!(
        gaps,
        vec![
            (270 * MINUTE_MS, 20 * MINUTE_MS),
            (0, 270 * MINUTE_MS),
        ]
    );
}

#[rstest]
fn it_should_keep_a_positive_column_width_for_a_zero_container(day: Viewport) {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let grid = compute_grid_in(
        &GridParams {
            container_width: 0.0,
            ..day.grid_params()
        },
        &LayoutConfig::default(),
        &tz,
    );
    assert_eq!(grid.cols, 12);
    assert_eq!(grid.col_width, 72.0);
    assert!(grid.px_per_ms > 0.0);
}

#[rstest]
fn it_should_count_a_fact_touching_the_plan_start_as_an_overlap(day: Viewport) {
    let layout = render(
        vec![plan("Ivan Petrov", "2025-08-18T09:00:00+02:00", "2025-08-18T17:00:00+02:00")],
        vec![fact("Ivan Petrov", "2025-08-18T07:00:00+02:00", "2025-08-18T09:00:00+02:00")],
        &day,
        &FiltersState::default(),
    );
    let seg = only_segment(&layout);

    assert_eq!(seg.overlaps.len(), 1);
    assert_eq!(seg.overlaps[0].interval.duration_ms(), 0);
    assert!(seg.absence.is_none());
}

#[rstest]
fn it_should_ignore_a_fact_ending_a_millisecond_before_the_plan(day: Viewport) {
    let layout = render(
        vec![plan("Ivan Petrov", "2025-08-18T09:00:00+02:00", "2025-08-18T17:00:00+02:00")],
        vec![fact("Ivan Petrov", "2025-08-18T07:00:00+02:00", "2025-08-18T08:59:59.999+02:00")],
        &day,
        &FiltersState::default(),
    );
    let seg = only_segment(&layout);
    assert!(!seg.has_overlap());
    assert!(seg.absence.is_some());
}

#[rstest]
fn it_should_drop_plans_outside_the_window(day: Viewport) {
    let layout = render(
        vec![
            plan("Ivan Petrov", "2025-08-17T09:00:00+02:00", "2025-08-17T17:00:00+02:00"),
            plan("Olga Smirnova", "2025-08-19T09:00:00+02:00", "2025-08-19T17:00:00+02:00"),
        ],
        Vec::new(),
        &day,
        &FiltersState::default(),
    );
    assert!(layout.rows.is_empty());
}

#[rstest]
fn it_should_follow_filter_toggles_without_changing_overlaps(day: Viewport) {
    let plans = vec![plan("Ivan Petrov", "2025-08-18T09:00:00+02:00", "2025-08-18T17:30:00+02:00")];
    let facts = vec![fact("Ivan Petrov", "2025-08-18T09:12:00+02:00", "2025-08-18T17:05:00+02:00")];
    let late_off = FiltersState::default().apply(&FiltersPatch::deviation(DeviationType::Late, false));

    let layout = render(plans.clone(), facts.clone(), &day, &late_off);
    let bar = &only_segment(&layout).fact_bars[0];
    assert!(bar.late.is_none());
    assert!(bar.early.is_some());

    let quiet = FiltersState {
        show_fact: true,
        deviations: DeviationFlags::none(),
    };
    let layout = render(plans, facts, &day, &quiet);
    let seg = only_segment(&layout);
    assert_eq!(seg.overlaps[0].late_ms, 12 * MINUTE_MS);
    assert!(seg.fact_bars[0].late.is_none() && seg.fact_bars[0].early.is_none());
}

#[rstest]
fn it_should_serialize_the_layout_in_camel_case(day: Viewport) {
    let layout = render(
        vec![plan("Ivan Petrov", "2025-08-18T09:00:00+02:00", "2025-08-18T17:00:00+02:00")],
        Vec::new(),
        &day,
        &FiltersState::default(),
    );
    let json = serde_json::to_value(&layout).unwrap();

    assert_eq!(json["grid"]["cols"], 12);
    assert_eq!(json["rows"][0]["key"], "Ivan Petrov__Store A");
    assert_eq!(json["rows"][0]["segments"][0]["planBar"]["sizeClass"], "default");
    assert_eq!(json["rows"][0]["segments"][0]["absence"]["kind"], "ring");
    assert_eq!(json["rows"][0]["segments"][0]["caption"], "09:00—17:00");
    assert_eq!(json["rows"][0]["segments"][0]["hours"], 8.0);
}
