// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the key-value preference store used to remember filter toggles.
//
// Boundaries
// - No concrete storage here. Adapters implement the trait in the adapters layer.
//
// Testing guidance
// - Use the in memory adapter for tests and local runs.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("backend error: {0}")]
    Backend(String),
}

pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
