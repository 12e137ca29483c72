//! In-process Order Source used by tests and demos.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::OrderSource;

/// A `Mutex<HashMap>`-backed stand-in for the real key-value store.
///
/// The order-placement side of a demo writes through [`MemoryStore::put`];
/// the engine reads through the [`OrderSource`] impl.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous payload.
    pub fn put(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.into(), value.into());
    }

    /// Removes the payload stored under `key`.
    pub fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[async_trait]
impl OrderSource for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}
