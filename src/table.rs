use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState;

use crate::config::DEFAULT_CAPACITY;
use crate::error::TableError;
use crate::shard::Shard;

/// A fixed set of independently locked shards.
///
/// The shard count is chosen at construction and never changes, so a key is
/// always routed to the same shard. Each operation locks exactly one shard;
/// operations on different shards run in parallel with no ordering between
/// them.
///
/// Aggregate reads such as [`len`](Table::len) visit shards one at a time
/// and are not a consistent snapshot while other threads are writing.
pub struct Table<K, V, S = RandomState> {
    shards: Box<[Shard<K, V>]>,
    hash_builder: S,
}

impl<K: Hash + Eq, V> Table<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(Self::with_capacity(capacity))
    }
}

impl<K: Hash + Eq, V> Default for Table<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Table<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        assert!(capacity > 0, "table capacity must be at least 1");

        let shards = vec_no_clone![Shard::new(); capacity].into_boxed_slice();
        tracing::debug!(capacity, "created bucket table");

        Self {
            shards,
            hash_builder,
        }
    }

    pub fn capacity(&self) -> usize {
        self.shards.len()
    }

    /// Index of the shard that owns `key`.
    ///
    /// The hash is reduced in unsigned space, so every hash value maps into
    /// `0..capacity` with no sign handling.
    #[inline]
    pub fn shard_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash,
    {
        let mut hasher = self.hash_builder.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() % self.shards.len() as u64) as usize
    }

    #[inline]
    fn shard<Q>(&self, key: &Q) -> &Shard<K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash,
    {
        &self.shards[self.shard_index(key)]
    }

    /// Inserts `value` under `key`, replacing any previous value.
    pub fn put(&self, key: K, value: V) {
        self.shard(&key).put(key, value);
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        self.get_with(key, V::clone)
    }

    /// Runs `f` on the value for `key` while its shard is locked.
    ///
    /// `f` must not call back into the same table, since the shard lock is
    /// not reentrant.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.shard(key).get_with(key, f)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_with(key, |_| ()).is_some()
    }

    /// Removes `key`, returning whether it was present.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.shard(key).remove(key)
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.len() == 0)
    }

    /// Entry count of every shard, in shard order.
    pub fn shard_lens(&self) -> Vec<usize> {
        self.shards.iter().map(Shard::len).collect()
    }

    pub fn clear(&self) {
        for shard in self.shards.iter() {
            shard.clear();
        }
        tracing::debug!(capacity = self.shards.len(), "cleared bucket table");
    }
}

impl<K, V, S> fmt::Debug for Table<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("capacity", &self.shards.len())
            .finish()
    }
}
