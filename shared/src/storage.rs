//! Client-side persistence interface
//!
//! The browser keeps everything in local storage. Components take a
//! [`KeyValueStore`] instead of reaching for a global, so plan and streak
//! logic can run against [`MemoryStore`] in tests.

use crate::errors::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;

/// Key holding the serialized `FitnessPlan`
pub const FITNESS_PLAN_KEY: &str = "fitnessPlan";
/// Key holding the serialized `UserProfile`
pub const USER_PROFILE_KEY: &str = "userProfile";
/// Key holding the JSON array of completed workout dates
pub const WORKOUT_DAYS_KEY: &str = "workoutDays";

/// String key-value storage with local-storage semantics
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn delete(&mut self, key: &str);
}

/// Read and deserialize a JSON value
///
/// Returns `None` when the key is absent or the stored text does not parse.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    store
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Serialize and write a JSON value
pub fn save_json<T: Serialize + ?Sized>(
    store: &mut impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) {
        (**self).delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_delete() {
        let mut store = MemoryStore::new();
        assert!(store.get("a").is_none());

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));

        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.delete("a");
        assert!(store.get("a").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_json_ignores_garbage() {
        let mut store = MemoryStore::new();
        store.set(WORKOUT_DAYS_KEY, "not json").unwrap();
        let parsed: Option<Vec<String>> = load_json(&store, WORKOUT_DAYS_KEY);
        assert!(parsed.is_none());
    }

    #[test]
    fn test_save_then_load_json() {
        let mut store = MemoryStore::new();
        save_json(&mut store, WORKOUT_DAYS_KEY, &["2024-01-01"]).unwrap();
        assert_eq!(store.get(WORKOUT_DAYS_KEY).as_deref(), Some(r#"["2024-01-01"]"#));
        let loaded: Vec<String> = load_json(&store, WORKOUT_DAYS_KEY).unwrap();
        assert_eq!(loaded, vec!["2024-01-01".to_string()]);
    }
}
