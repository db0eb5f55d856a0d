// Time primitives shared by every layout pass.
//
// Purpose
// - Normalize raw timestamps into epoch milliseconds.
// - Provide the interval value object and the clamp used for clipping.
//
// Boundaries
// - No input or output. Unparsable input becomes None, never an error.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
pub type Millis = i64;

pub const MINUTE_MS: Millis = 60_000;
pub const HOUR_MS: Millis = 60 * MINUTE_MS;
pub const DAY_MS: Millis = 24 * HOUR_MS;

/// A raw timestamp as it arrives from the data source.
///
/// Records coming from JSON always carry `Iso`; `Instant` is for callers that
/// already hold a parsed date-time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Iso(String),
    Instant(DateTime<Utc>),
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Iso(value.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Timestamp::Iso(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Timestamp::Instant(value.with_timezone(&Utc))
    }
}

/// Converts a timestamp into epoch milliseconds.
///
/// ISO strings with an offset are read as RFC 3339, or as ISO 8601 with minute
/// precision or a basic `+hhmm` offset. Strings without an offset
/// (`2025-08-18T09:00:00`, `2025-08-18`) are read in the local time zone.
/// Anything else yields `None`; the string is not validated further.
pub fn to_millis(value: &Timestamp) -> Option<Millis> {
    match value {
        Timestamp::Instant(instant) => Some(instant.timestamp_millis()),
        Timestamp::Iso(raw) => parse_iso_millis(raw.trim(), &Local),
    }
}

pub(crate) fn parse_iso_millis<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<Millis> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.timestamp_millis());
    }
    // `%z` takes the offset with or without a colon.
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(parsed) = DateTime::parse_from_str(raw, pattern) {
            return Some(parsed.timestamp_millis());
        }
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.and_time(chrono::NaiveTime::MIN))
        })
        .ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

/// Bounds `n` into `[lo, hi]`. Assumes `lo <= hi`.
pub fn clamp(n: Millis, lo: Millis, hi: Millis) -> Millis {
    lo.max(hi.min(n))
}

/// A time interval in epoch milliseconds. `s <= e` is not guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub s: Millis,
    pub e: Millis,
}

impl Interval {
    pub fn new(s: Millis, e: Millis) -> Self {
        Self { s, e }
    }

    /// Parses both ends; `None` if either end is unparsable.
    pub fn from_timestamps(start: &Timestamp, end: &Timestamp) -> Option<Self> {
        Some(Self::new(to_millis(start)?, to_millis(end)?))
    }

    /// Length in milliseconds. Negative for inverted intervals.
    pub fn duration_ms(&self) -> Millis {
        self.e - self.s
    }

    /// Both ends clamped into `[lo, hi]`.
    pub fn clamp_to(&self, lo: Millis, hi: Millis) -> Self {
        Self::new(clamp(self.s, lo, hi), clamp(self.e, lo, hi))
    }

    /// Inclusive intersection test: touching ends count as intersecting.
    pub fn intersects(&self, other: &Interval) -> bool {
        !(self.e < other.s || self.s > other.e)
    }
}
