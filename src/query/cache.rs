use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use sha2::{Digest, Sha256};

const HASH_PREFIX_LEN: usize = 16;

/// Cache key for a query. Only theme and context take part, so queries that
/// differ in mood, vibe, energy, motion or color share an entry.
pub fn query_hash(theme: Option<&str>, context: Option<&str>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(theme.unwrap_or("generic").as_bytes());
    hasher.update(b"|");
    hasher.update(context.unwrap_or("neutral").as_bytes());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(HASH_PREFIX_LEN);
    hex
}

struct Entries<T> {
    epoch: u64,
    map: HashMap<String, Arc<T>>,
}

/// Unbounded map from query hash to a produced result. Entries live until
/// `clear` is called, and every `clear` starts a new epoch.
pub struct QueryCache<T> {
    entries: RwLock<Entries<T>>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(Entries {
                epoch: 0,
                map: HashMap::new(),
            }),
        }
    }
}

impl<T> QueryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.map.get(key).cloned()
    }

    /// Number of `clear` calls so far
    pub fn epoch(&self) -> u64 {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).epoch
    }

    /// Store `value` only if no `clear` happened since `epoch` was read.
    /// The value is returned either way.
    pub fn put_since(&self, epoch: u64, key: impl Into<String>, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.epoch == epoch {
            entries.map.insert(key.into(), Arc::clone(&value));
        } else {
            log::debug!("[query-cache] skipped result computed before a clear");
        }
        value
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.epoch += 1;
        let dropped = entries.map.len();
        entries.map.clear();
        if dropped > 0 {
            log::debug!("[query-cache] cleared {} entries", dropped);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
