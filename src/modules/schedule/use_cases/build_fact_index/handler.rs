// Fact index: actual shift intervals grouped by row.
//
// Purpose
// - Build, in one pass over the fact list, a lookup from RowKey to its intervals.
//
// Responsibilities
// - Keep intervals as recorded. No merging of overlaps, no clipping to a window.
// - Skip records whose timestamps do not parse; they can never overlap a plan.
//
// Boundaries
// - Depends only on the fact dataset, so callers rebuild it when facts change,
//   not when the visible window moves.

use std::collections::HashMap;

use crate::modules::schedule::core::shift::{RowKey, ShiftFact};
use crate::shared::core::primitives::Interval;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactIndex {
    by_row: HashMap<RowKey, Vec<Interval>>,
}

impl FactIndex {
    /// Intervals recorded for `key`, empty when the row has no facts.
    pub fn get(&self, key: &RowKey) -> &[Interval] {
        self.by_row.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_row.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_row.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &RowKey> {
        self.by_row.keys()
    }
}

pub fn build_fact_index(facts: &[ShiftFact]) -> FactIndex {
    let mut by_row: HashMap<RowKey, Vec<Interval>> = HashMap::new();
    let mut skipped = 0usize;

    for fact in facts {
        let Some(interval) = fact.interval() else {
            skipped += 1;
            tracing::warn!(
                employee = %fact.employee,
                store = %fact.store,
                "skipping fact record with unparsable timestamps"
            );
            continue;
        };
        by_row.entry(fact.key()).or_default().push(interval);
    }

    tracing::debug!(
        records = facts.len(),
        rows = by_row.len(),
        skipped,
        "fact index built"
    );
    FactIndex { by_row }
}
