// In memory preference store.
//
// Purpose
// - Remember filter toggles without a browser or a database.
//
// Responsibilities
// - Keep string values in a map keyed by preference name.
// - Fail every call while offline so callers can exercise their fallbacks.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::modules::schedule::core::ports::{PreferenceError, PreferenceStore};

#[derive(Default)]
pub struct InMemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), PreferenceError> {
        if self.is_offline {
            return Err(PreferenceError::Backend(
                "Preference store offline".to_string(),
            ));
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> PreferenceError {
    PreferenceError::Backend("Preference store lock poisoned".to_string())
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.ensure_online()?;
        Ok(self.values.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.ensure_online()?;
        self.values
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod preferences_in_memory_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryPreferenceStore {
        InMemoryPreferenceStore::new()
    }

    #[rstest]
    fn it_should_return_none_for_an_unknown_key(store: InMemoryPreferenceStore) {
        assert_eq!(store.get("timeline.showFact"), Ok(None));
    }

    #[rstest]
    fn it_should_overwrite_a_stored_value(store: InMemoryPreferenceStore) {
        store.set("timeline.showFact", "1").unwrap();
        store.set("timeline.showFact", "0").unwrap();
        assert_eq!(store.get("timeline.showFact"), Ok(Some("0".to_string())));
    }

    #[rstest]
    fn it_should_seed_initial_values() {
        let store = InMemoryPreferenceStore::with_values([("timeline.deviation.late", "0")]);
        assert_eq!(
            store.get("timeline.deviation.late"),
            Ok(Some("0".to_string()))
        );
    }

    #[rstest]
    fn it_should_fail_while_offline(mut store: InMemoryPreferenceStore) {
        store.set("timeline.showFact", "1").unwrap();
        store.toggle_offline();

        let offline = PreferenceError::Backend("Preference store offline".to_string());
        assert_eq!(store.get("timeline.showFact"), Err(offline.clone()));
        assert_eq!(store.set("timeline.showFact", "0"), Err(offline));

        store.toggle_offline();
        assert_eq!(store.get("timeline.showFact"), Ok(Some("1".to_string())));
    }
}
