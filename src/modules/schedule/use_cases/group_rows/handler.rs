// Plan row grouping: the gate that decides which rows exist for a window.
//
// Purpose
// - Group planned shifts by RowKey, clipped to the visible window and sorted by start.
//
// Responsibilities
// - Drop plans that do not intersect [from_ms, until_ms].
// - Clamp both ends of the rest into the window.
// - The first record seen for a row fixes the row's role.
// - Emit rows in first-seen order, each with segments ascending by start.

use serde::Serialize;
use std::collections::HashMap;

use crate::modules::schedule::core::shift::{RowKey, ShiftPlan};
use crate::shared::core::primitives::{Interval, Millis};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowViewModel {
    pub employee: String,
    pub store: String,
    pub role: String,
    pub plan_segs: Vec<Interval>,
}

impl RowViewModel {
    pub fn key(&self) -> RowKey {
        RowKey::new(&self.employee, &self.store)
    }
}

pub fn group_rows(plans: &[ShiftPlan], from_ms: Millis, until_ms: Millis) -> Vec<RowViewModel> {
    let mut rows: Vec<RowViewModel> = Vec::new();
    let mut position: HashMap<RowKey, usize> = HashMap::new();

    for plan in plans {
        let Some(interval) = plan.interval() else {
            tracing::warn!(
                employee = %plan.employee,
                store = %plan.store,
                "skipping plan record with unparsable timestamps"
            );
            continue;
        };
        if interval.e < from_ms || interval.s > until_ms {
            continue;
        }

        let slot = *position.entry(plan.key()).or_insert_with(|| {
            rows.push(RowViewModel {
                employee: plan.employee.clone(),
                store: plan.store.clone(),
                role: plan.role.clone(),
                plan_segs: Vec::new(),
            });
            rows.len() - 1
        });
        rows[slot]
            .plan_segs
            .push(interval.clamp_to(from_ms, until_ms));
    }

    for row in &mut rows {
        row.plan_segs.sort_by_key(|seg| seg.s);
    }

    tracing::debug!(
        records = plans.len(),
        rows = rows.len(),
        from_ms,
        until_ms,
        "plan rows grouped"
    );
    rows
}
