// Filter state read by the deviation engine.
//
// Purpose
// - Two orthogonal axes: fact-layer visibility and per-deviation flags.
//
// Boundaries
// - Pure data. Persisting it is the persist_filters use case's job.

use serde::{Deserialize, Serialize};

use crate::modules::schedule::core::deviation::{DeviationFlags, DeviationType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersState {
    pub show_fact: bool,
    pub deviations: DeviationFlags,
}

impl Default for FiltersState {
    fn default() -> Self {
        Self {
            show_fact: true,
            deviations: DeviationFlags::default(),
        }
    }
}

impl FiltersState {
    pub fn shows(&self, kind: DeviationType) -> bool {
        self.deviations.is_enabled(kind)
    }

    /// Returns the state with `patch` applied; fields absent from the patch are kept.
    pub fn apply(&self, patch: &FiltersPatch) -> Self {
        let mut next = self.clone();
        if let Some(show_fact) = patch.show_fact {
            next.show_fact = show_fact;
        }
        for (kind, enabled) in &patch.deviations {
            next.deviations.set(*kind, *enabled);
        }
        next
    }
}

/// A partial filter update, as emitted by a single checkbox or switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FiltersPatch {
    pub show_fact: Option<bool>,
    pub deviations: Vec<(DeviationType, bool)>,
}

impl FiltersPatch {
    pub fn show_fact(enabled: bool) -> Self {
        Self {
            show_fact: Some(enabled),
            ..Self::default()
        }
    }

    pub fn deviation(kind: DeviationType, enabled: bool) -> Self {
        Self {
            deviations: vec![(kind, enabled)],
            ..Self::default()
        }
    }
}
