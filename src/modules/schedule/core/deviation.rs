// Deviation kinds of an actual shift relative to its plan, and their on/off flags.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviationType {
    /// Fact starts after the plan starts.
    Late,
    /// Fact ends before the plan ends.
    Early,
    /// No fact inside the planned interval.
    Absence,
}

pub const ALL_DEVIATIONS: [DeviationType; 3] = [
    DeviationType::Late,
    DeviationType::Early,
    DeviationType::Absence,
];

impl DeviationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviationType::Late => "late",
            DeviationType::Early => "early",
            DeviationType::Absence => "absence",
        }
    }
}

/// Keyed visibility flags. A kind missing from the map counts as disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviationFlags(BTreeMap<DeviationType, bool>);

impl Default for DeviationFlags {
    fn default() -> Self {
        Self(ALL_DEVIATIONS.iter().map(|kind| (*kind, true)).collect())
    }
}

impl DeviationFlags {
    pub fn none() -> Self {
        Self(ALL_DEVIATIONS.iter().map(|kind| (*kind, false)).collect())
    }

    pub fn is_enabled(&self, kind: DeviationType) -> bool {
        self.0.get(&kind).copied().unwrap_or(false)
    }

    pub fn set(&mut self, kind: DeviationType, enabled: bool) {
        self.0.insert(kind, enabled);
    }

    pub fn with(mut self, kind: DeviationType, enabled: bool) -> Self {
        self.set(kind, enabled);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeviationType, bool)> + '_ {
        ALL_DEVIATIONS
            .iter()
            .map(|kind| (*kind, self.is_enabled(*kind)))
    }
}
