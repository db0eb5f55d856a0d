// Builders for plan and fact records.
//
// Defaults describe one shift of "Ivan Petrov" at "Store A" on 2025-08-18,
// 09:00 to 17:00 at +02:00. Setters override single fields.

use chrono::{TimeZone, Utc};
use serde::Deserialize;

use crate::modules::schedule::core::shift::{ShiftFact, ShiftPlan};
use crate::shared::core::primitives::{Millis, Timestamp, to_millis};

/// Epoch milliseconds of an RFC 3339 string. Panics on bad input; tests only.
pub fn at(iso: &str) -> Millis {
    to_millis(&Timestamp::from(iso)).unwrap_or_else(|| panic!("bad fixture timestamp {iso}"))
}

fn instant(ms: Millis) -> Timestamp {
    Timestamp::from(Utc.timestamp_millis_opt(ms).unwrap())
}

// JSON -> records (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDto {
    pub plan: Vec<ShiftPlan>,
    pub fact: Vec<ShiftFact>,
}

/// Two employees over two days: a late and early shift, an absence, a split shift
/// and an overnight shift.
pub fn sample_schedule() -> ScheduleDto {
    serde_json::from_str(include_str!("json/schedule.json")).unwrap()
}

pub struct ShiftPlanBuilder {
    inner: ShiftPlan,
}

impl Default for ShiftPlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ShiftPlanBuilder {
    pub fn new() -> Self {
        Self {
            inner: ShiftPlan {
                employee: "Ivan Petrov".to_string(),
                store: "Store A".to_string(),
                role: "Cashier".to_string(),
                start_planned: Timestamp::from("2025-08-18T09:00:00+02:00"),
                end_planned: Timestamp::from("2025-08-18T17:00:00+02:00"),
            },
        }
    }

    pub fn employee(mut self, v: impl Into<String>) -> Self {
        self.inner.employee = v.into();
        self
    }

    pub fn store(mut self, v: impl Into<String>) -> Self {
        self.inner.store = v.into();
        self
    }

    pub fn role(mut self, v: impl Into<String>) -> Self {
        self.inner.role = v.into();
        self
    }

    pub fn start(mut self, v: &str) -> Self {
        self.inner.start_planned = Timestamp::from(v);
        self
    }

    pub fn end(mut self, v: &str) -> Self {
        self.inner.end_planned = Timestamp::from(v);
        self
    }

    pub fn start_ms(mut self, v: Millis) -> Self {
        self.inner.start_planned = instant(v);
        self
    }

    pub fn end_ms(mut self, v: Millis) -> Self {
        self.inner.end_planned = instant(v);
        self
    }

    pub fn build(self) -> ShiftPlan {
        self.inner
    }
}

pub struct ShiftFactBuilder {
    inner: ShiftFact,
}

impl Default for ShiftFactBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ShiftFactBuilder {
    pub fn new() -> Self {
        Self {
            inner: ShiftFact {
                employee: "Ivan Petrov".to_string(),
                store: "Store A".to_string(),
                role: "Cashier".to_string(),
                start_actual: Timestamp::from("2025-08-18T09:00:00+02:00"),
                end_actual: Timestamp::from("2025-08-18T17:00:00+02:00"),
            },
        }
    }

    pub fn employee(mut self, v: impl Into<String>) -> Self {
        self.inner.employee = v.into();
        self
    }

    pub fn store(mut self, v: impl Into<String>) -> Self {
        self.inner.store = v.into();
        self
    }

    pub fn role(mut self, v: impl Into<String>) -> Self {
        self.inner.role = v.into();
        self
    }

    pub fn start(mut self, v: &str) -> Self {
        self.inner.start_actual = Timestamp::from(v);
        self
    }

    pub fn end(mut self, v: &str) -> Self {
        self.inner.end_actual = Timestamp::from(v);
        self
    }

    pub fn start_ms(mut self, v: Millis) -> Self {
        self.inner.start_actual = instant(v);
        self
    }

    pub fn end_ms(mut self, v: Millis) -> Self {
        self.inner.end_actual = instant(v);
        self
    }

    pub fn build(self) -> ShiftFact {
        self.inner
    }
}

#[cfg(test)]
mod schedule_shift_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_builds_a_parsable_eight_hour_shift() {
        let plan = ShiftPlanBuilder::default().build();
        let interval = plan.interval().unwrap();
        assert_eq!(interval.s, at("2025-08-18T09:00:00+02:00"));
        assert_eq!(interval.duration_ms(), 8 * 3_600_000);
    }

    #[rstest]
    fn setters_override_fields() {
        let fact = ShiftFactBuilder::new()
            .employee("Olga")
            .store("Store B")
            .role("Manager")
            .start_ms(1_000)
            .end_ms(2_000)
            .build();
        assert_eq!(fact.employee, "Olga");
        assert_eq!(fact.store, "Store B");
        assert_eq!(fact.role, "Manager");
        assert_eq!(fact.interval().unwrap().s, 1_000);
        assert_eq!(fact.interval().unwrap().e, 2_000);
    }

    #[rstest]
    fn sample_schedule_parses() {
        let schedule = sample_schedule();
        assert!(!schedule.plan.is_empty());
        assert!(!schedule.fact.is_empty());
        assert!(schedule.plan.iter().all(|p| p.interval().is_some()));
    }
}
