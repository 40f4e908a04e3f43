use std::collections::HashMap;
use std::sync::Mutex;

use dailyboard_cache::SqliteStore;
use tracing::debug;

/// Key-value seam in front of the persisted cache.
///
/// The contract mirrors what the browser original got from localStorage:
/// reads that fail for any reason look like a miss, writes that fail are
/// silently dropped. Nothing on the board is worth failing a page for.
pub trait DailyStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl DailyStore for SqliteStore {
    fn get(&self, key: &str) -> Option<String> {
        match SqliteStore::get(self, key) {
            Ok(value) => value,
            Err(e) => {
                debug!("cache read failed for {}: {}", key, e);
                None
            }
        }
    }

    fn put(&self, key: &str, value: &str) {
        if let Err(e) = SqliteStore::set(self, key, value) {
            debug!("cache write failed for {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = SqliteStore::delete(self, key) {
            debug!("cache delete failed for {}: {}", key, e);
        }
    }
}

/// In-memory store for tests and cache-less runs.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DailyStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.put("k", "v1");
        assert_eq!(store.get("k").as_deref(), Some("v1"));
        store.put("k", "v2");
        assert_eq!(store.get("k").as_deref(), Some("v2"));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn sqlite_store_satisfies_the_trait() {
        let store = SqliteStore::open_in_memory().unwrap();
        let store: &dyn DailyStore = &store;
        store.put("daily-artwork", "{}");
        assert_eq!(store.get("daily-artwork").as_deref(), Some("{}"));
        store.remove("daily-artwork");
        assert_eq!(store.get("daily-artwork"), None);
    }
}
