// Raw shift records and the row identity they are grouped by.
//
// Purpose
// - Mirror the transport shape of planned and actual shifts.
// - Define RowKey, the (employee, store) pair that identifies one timeline row.
//
// Boundaries
// - Records are immutable input. Nothing here validates timestamps.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::core::primitives::{Interval, Timestamp};

/// One scheduled shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPlan {
    pub employee: String,
    pub store: String,
    pub role: String,
    pub start_planned: Timestamp,
    pub end_planned: Timestamp,
}

impl ShiftPlan {
    pub fn key(&self) -> RowKey {
        RowKey::new(&self.employee, &self.store)
    }

    pub fn interval(&self) -> Option<Interval> {
        Interval::from_timestamps(&self.start_planned, &self.end_planned)
    }
}

/// One recorded attendance interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftFact {
    pub employee: String,
    pub store: String,
    pub role: String,
    pub start_actual: Timestamp,
    pub end_actual: Timestamp,
}

impl ShiftFact {
    pub fn key(&self) -> RowKey {
        RowKey::new(&self.employee, &self.store)
    }

    pub fn interval(&self) -> Option<Interval> {
        Interval::from_timestamps(&self.start_actual, &self.end_actual)
    }
}

/// Identity of a timeline row. Role is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowKey {
    pub employee: String,
    pub store: String,
}

impl RowKey {
    pub fn new(employee: impl Into<String>, store: impl Into<String>) -> Self {
        Self {
            employee: employee.into(),
            store: store.into(),
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}__{}", self.employee, self.store)
    }
}
