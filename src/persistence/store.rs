//! Key/value storage the engine persists through.

use rustc_hash::FxHashMap;

/// Key/value store holding serialized snapshots.
///
/// The engine calls only these three methods. Implementations decide where
/// the values live (browser storage, a file, memory).
pub trait PersistenceAdapter {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Remove `key`. Removing a missing key is a no-op.
    fn delete(&mut self, key: &str);
}

impl<P: PersistenceAdapter + ?Sized> PersistenceAdapter for &mut P {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value);
    }

    fn delete(&mut self, key: &str) {
        (**self).delete(key);
    }
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PersistenceAdapter for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.values.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_delete() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("game"), None);

        store.set("game", "one".to_string());
        store.set("game", "two".to_string());
        assert_eq!(store.get("game").as_deref(), Some("two"));
        assert_eq!(store.len(), 1);

        store.delete("game");
        assert_eq!(store.get("game"), None);

        // Deleting again is fine
        store.delete("game");
        assert!(store.is_empty());
    }

    #[test]
    fn test_mut_ref_adapter() {
        fn write<P: PersistenceAdapter>(mut store: P) {
            store.set("k", "v".to_string());
        }

        let mut store = MemoryStore::new();
        write(&mut store);
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
