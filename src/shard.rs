use std::borrow::Borrow;

use parking_lot::Mutex;

use crate::entry::Entry;

/// One bucket of the table: an unordered list of entries behind its own lock.
///
/// Every operation takes the lock for its whole scan, so no caller ever sees
/// an entry list mid-update. Lookups are linear in the shard's length.
pub(crate) struct Shard<K, V> {
    entries: Mutex<Vec<Entry<K, V>>>,
}

impl<K, V> Shard<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub(crate) fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl<K: Eq, V> Shard<K, V> {
    /// Replaces the value of an existing entry, or appends a new one.
    pub(crate) fn put(&self, key: K, value: V) {
        let mut entries = self.entries.lock();
        match entries.iter_mut().find(|entry| entry.matches(&key)) {
            Some(entry) => entry.value = value,
            None => entries.push(Entry::new(key, value)),
        }
    }

    pub(crate) fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
        F: FnOnce(&V) -> R,
    {
        let entries = self.entries.lock();
        entries
            .iter()
            .find(|entry| entry.matches(key))
            .map(|entry| f(&entry.value))
    }

    /// Drops the entry for `key`, returning whether one was there.
    pub(crate) fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut entries = self.entries.lock();
        match entries.iter().position(|entry| entry.matches(key)) {
            Some(pos) => {
                // order inside a shard carries no meaning
                entries.swap_remove(pos);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
impl<K: Eq + Clone, V> Shard<K, V> {
    pub(crate) fn keys(&self) -> Vec<K> {
        self.entries
            .lock()
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }
}
