// Filter persistence: read at init, write on change.
//
// Purpose
// - Restore the filter toggles from a preference store and keep it in sync.
//
// Responsibilities
// - Values are "1" for on and "0" for off.
// - A missing, unreadable or malformed key falls back to the default (on).
// - Only keys whose value changed are written back.
//
// Boundaries
// - Store failures never fail the caller; they are logged and the in-memory
//   state stays authoritative.

use crate::modules::schedule::core::deviation::{ALL_DEVIATIONS, DeviationType};
use crate::modules::schedule::core::filters::{FiltersPatch, FiltersState};
use crate::modules::schedule::core::ports::PreferenceStore;

pub const SHOW_FACT_KEY: &str = "timeline.showFact";

pub fn deviation_key(kind: DeviationType) -> String {
    format!("timeline.deviation.{}", kind.as_str())
}

fn encode(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0" }
}

fn decode(raw: &str) -> Option<bool> {
    match raw {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

fn read_flag(store: &dyn PreferenceStore, key: &str, default: bool) -> bool {
    match store.get(key) {
        Ok(Some(raw)) => decode(&raw).unwrap_or_else(|| {
            tracing::warn!(key, raw = %raw, "ignoring malformed preference value");
            default
        }),
        Ok(None) => default,
        Err(err) => {
            tracing::warn!(key, error = %err, "preference read failed, using default");
            default
        }
    }
}

fn write_flag(store: &dyn PreferenceStore, key: &str, enabled: bool) {
    if let Err(err) = store.set(key, encode(enabled)) {
        tracing::warn!(key, error = %err, "preference write failed");
    }
}

pub fn load_filters(store: &dyn PreferenceStore) -> FiltersState {
    let defaults = FiltersState::default();
    let mut state = FiltersState {
        show_fact: read_flag(store, SHOW_FACT_KEY, defaults.show_fact),
        deviations: defaults.deviations.clone(),
    };
    for kind in ALL_DEVIATIONS {
        let enabled = read_flag(store, &deviation_key(kind), defaults.shows(kind));
        state.deviations.set(kind, enabled);
    }
    tracing::debug!(show_fact = state.show_fact, "filters loaded");
    state
}

/// Writes every key of `state`, changed or not.
pub fn save_filters(store: &dyn PreferenceStore, state: &FiltersState) {
    write_flag(store, SHOW_FACT_KEY, state.show_fact);
    for (kind, enabled) in state.deviations.iter() {
        write_flag(store, &deviation_key(kind), enabled);
    }
}

/// Filter state bound to a preference store.
pub struct PersistedFilters<'a> {
    store: &'a dyn PreferenceStore,
    state: FiltersState,
}

impl<'a> PersistedFilters<'a> {
    pub fn load(store: &'a dyn PreferenceStore) -> Self {
        Self {
            store,
            state: load_filters(store),
        }
    }

    pub fn state(&self) -> &FiltersState {
        &self.state
    }

    pub fn update(&mut self, patch: &FiltersPatch) -> &FiltersState {
        let next = self.state.apply(patch);
        if next.show_fact != self.state.show_fact {
            write_flag(self.store, SHOW_FACT_KEY, next.show_fact);
        }
        for kind in ALL_DEVIATIONS {
            if next.shows(kind) != self.state.shows(kind) {
                write_flag(self.store, &deviation_key(kind), next.shows(kind));
            }
        }
        self.state = next;
        &self.state
    }
}
