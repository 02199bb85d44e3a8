use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::CacheStore;

/// In-memory cache store.
///
/// Values are stored JSON-encoded, mirroring what a string-valued external
/// backend would hold; a payload that fails to decode surfaces as a
/// serialization error on `retrieve`.
#[derive(Debug, Clone, Default)]
pub struct MemoryCacheStore {
    // Arc<Mutex> so clones share one backing map
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCacheStore {
    fn is_stored(&self, key: &str) -> bool {
        let entries = self.entries.lock().unwrap();
        entries.contains_key(key)
    }

    fn retrieve(&self, key: &str) -> Result<Vec<String>, AppError> {
        let entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Err(AppError::cache(format!("no value stored under '{key}'"))),
        }
    }

    fn store(&self, key: &str, value: &[String]) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)?;
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), raw);
        Ok(())
    }
}
