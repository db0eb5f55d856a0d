// Calendar helpers: label formatting, day boundaries and date ranges.
//
// Purpose
// - Keep every time-zone dependent computation in one place.
//
// Notes
// - Functions without a zone argument use the local zone, the way the presentation
//   layer shows times. The `_in` variants take an explicit zone and are what tests use.

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::shared::core::primitives::{HOUR_MS, Interval, Millis};

fn in_zone<Tz: TimeZone>(ms: Millis, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(ms).earliest()
}

fn format_in<Tz>(ms: Millis, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    in_zone(ms, tz)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_default()
}

/// `HH:mm` in the local zone.
pub fn format_clock(ms: Millis) -> String {
    format_clock_in(ms, &Local)
}

pub fn format_clock_in<Tz>(ms: Millis, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(ms, tz, "%H:%M")
}

/// `DD.MM`, used for day separator labels.
pub fn format_day_in<Tz>(ms: Millis, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(ms, tz, "%d.%m")
}

/// `DD.MM HH:mm`, used for column ticks.
pub fn format_tick_in<Tz>(ms: Millis, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(ms, tz, "%d.%m %H:%M")
}

/// `HH:mm—HH:mm` for a bar caption.
pub fn clock_range_label_in<Tz>(interval: &Interval, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}—{}",
        format_clock_in(interval.s, tz),
        format_clock_in(interval.e, tz)
    )
}

/// Interval length in hours, rounded to one decimal.
pub fn duration_hours(interval: &Interval) -> f64 {
    (interval.duration_ms() as f64 / HOUR_MS as f64 * 10.0).round() / 10.0
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<Millis> {
    // A wall-clock time inside a DST gap does not exist; walk forward to the
    // first hour that does.
    (0..=3).find_map(|shift| {
        let candidate = naive + chrono::Duration::hours(shift);
        tz.from_local_datetime(&candidate)
            .earliest()
            .map(|dt| dt.timestamp_millis())
    })
}

/// First instant of `date` in `tz`.
pub fn start_of_day_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<Millis> {
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

/// Last millisecond of `date` in `tz`.
pub fn end_of_day_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<Millis> {
    let next = date.checked_add_days(Days::new(1))?;
    start_of_day_in(next, tz).map(|ms| ms - 1)
}

/// The first local midnight strictly after `ms`.
pub fn next_midnight_in<Tz: TimeZone>(ms: Millis, tz: &Tz) -> Option<Millis> {
    let day = in_zone(ms, tz)?.date_naive();
    let next = day.checked_add_days(Days::new(1))?;
    start_of_day_in(next, tz)
}

/// A visible window in epoch milliseconds, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub from_ms: Millis,
    pub to_ms: Millis,
}

impl DateRange {
    /// Start of `start` to the end of `end`, the way the range picker reports a selection.
    pub fn from_days<Tz: TimeZone>(start: NaiveDate, end: NaiveDate, tz: &Tz) -> Option<Self> {
        Some(Self {
            from_ms: start_of_day_in(start, tz)?,
            to_ms: end_of_day_in(end, tz)?,
        })
    }
}

/// Default window: from the start of the day three days ago to the end of today.
pub fn initial_range<Tz: TimeZone>(now: &DateTime<Tz>) -> Option<DateRange> {
    let today = now.date_naive();
    let first = today.checked_sub_days(Days::new(3))?;
    DateRange::from_days(first, today, &now.timezone())
}
