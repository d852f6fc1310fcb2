/// A key and its current value, as stored inside a shard.
///
/// The key is fixed once the entry exists; only the value is replaced on
/// a repeated `put`.
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    #[cfg(test)]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn matches<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: ?Sized + Eq,
    {
        <K as std::borrow::Borrow<Q>>::borrow(&self.key) == key
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;

    #[test]
    fn matches_by_borrowed_key() {
        let entry = Entry::new(String::from("one"), 1);
        assert!(entry.matches("one"));
        assert!(!entry.matches("two"));
        assert_eq!(entry.key(), "one");
    }

    #[test]
    fn value_is_replaced_in_place() {
        let mut entry = Entry::new(7u32, "a");
        entry.value = "b";
        assert_eq!(entry.value, "b");
        assert_eq!(*entry.key(), 7);
    }
}
