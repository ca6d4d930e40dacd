//! In-memory key-value storage adapter.
//!
//! Stores values as serialized JSON strings, matching the key -> JSON string
//! contract of the storage port.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;

use data::cache::{GetStorage, SetStorage, StorageError};

/// Process-local storage backing the `SetStorage`/`GetStorage` ports.
#[derive(Default)]
pub struct MemoryStorageAdapter {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorageAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SetStorage for MemoryStorageAdapter {
    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        let serialized =
            serde_json::to_string(value).map_err(|e| StorageError::Backend(e.to_string()))?;
        self.entries.write().insert(key.to_string(), serialized);
        Ok(())
    }
}

impl GetStorage for MemoryStorageAdapter {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        self.entries
            .read()
            .get(key)
            .map(|raw| serde_json::from_str(raw).map_err(|e| StorageError::Backend(e.to_string())))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_then_get_round_trips_the_value() {
        let sut = MemoryStorageAdapter::new();
        let value = json!({"accessToken": "any_token", "name": "Any Name"});

        sut.set("account", &value).unwrap();

        assert_eq!(sut.get("account").unwrap(), Some(value));
    }

    #[test]
    fn get_returns_none_for_a_missing_key() {
        let sut = MemoryStorageAdapter::new();

        assert_eq!(sut.get("missing").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_values() {
        let sut = MemoryStorageAdapter::new();

        sut.set("account", &json!({"v": 1})).unwrap();
        sut.set("account", &json!({"v": 2})).unwrap();

        assert_eq!(sut.get("account").unwrap(), Some(json!({"v": 2})));
    }
}
