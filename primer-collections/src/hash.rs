//! Hash table with separate chaining over integer keys.
//!
//! The bucket count is fixed at construction. Every bucket heads a chain of
//! `(key, value)` nodes; all chains share one [`SlotStorage`], so the table
//! owns every node and dropping it releases them together.
//!
//! ```text
//! buckets            storage
//! ┌───┐
//! │ 0 │──▶ (20, b) ──▶ (10, a) ──▶ NONE
//! │ 1 │──▶ NONE
//! │ 2 │──▶ (12, c) ──▶ NONE
//! └───┘
//! ```

use core::fmt;

use crate::list::{Node, capacity_error};
use crate::{Error, Key, Result, SlotStorage, Storage};

/// Bucket count used by [`ChainedHashTable::default`].
pub const DEFAULT_BUCKETS: usize = 10;

/// Chained hash table keyed by `i64`.
///
/// The bucket for `key` is `key mod bucket_count` (Euclidean, so negative keys
/// land in range). Inserting always prepends to the chain, even when the key
/// is already present; lookups scan from the head, so the most recent value
/// for a duplicated key wins.
///
/// # Example
///
/// ```
/// use primer_collections::{ChainedHashTable, Error};
///
/// let mut table = ChainedHashTable::new(10);
/// table.insert(1, "one").unwrap();
/// table.insert(11, "eleven").unwrap(); // same bucket as 1
///
/// assert_eq!(table.search(1), Ok(&"one"));
/// assert_eq!(table.search(11), Ok(&"eleven"));
/// assert_eq!(table.search(2), Err(Error::NotFound));
/// ```
pub struct ChainedHashTable<V> {
    buckets: Box<[u32]>,
    nodes: SlotStorage<Node<(i64, V)>>,
}

impl<V> ChainedHashTable<V> {
    /// Creates an empty table with `bucket_count` buckets and no entry limit.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    pub fn new(bucket_count: usize) -> Self {
        Self::with_nodes(bucket_count, SlotStorage::new())
    }

    /// Creates an empty table holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero, or if `capacity` is not below
    /// `u32::MAX`.
    pub fn with_capacity(bucket_count: usize, capacity: usize) -> Self {
        Self::with_nodes(bucket_count, SlotStorage::with_capacity(capacity))
    }

    fn with_nodes(bucket_count: usize, nodes: SlotStorage<Node<(i64, V)>>) -> Self {
        assert!(bucket_count > 0, "hash table needs at least one bucket");
        Self {
            buckets: vec![u32::NONE; bucket_count].into_boxed_slice(),
            nodes,
        }
    }

    /// Returns the number of entries, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the fixed number of buckets.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the bucket `key` hashes to.
    #[inline]
    pub fn bucket_of(&self, key: i64) -> usize {
        key.rem_euclid(self.buckets.len() as i64) as usize
    }

    /// Prepends `(key, value)` to its bucket's chain.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the table was built with a capacity and
    /// is full.
    pub fn insert(&mut self, key: i64, value: V) -> Result<()> {
        let bucket = self.bucket_of(key);
        let node = Node::new((key, value), self.buckets[bucket]);
        let slot = self
            .nodes
            .try_insert(node)
            .map_err(|_| capacity_error(&self.nodes))?;
        self.buckets[bucket] = slot;
        Ok(())
    }

    /// Returns the most recently inserted value for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `key` was never inserted.
    pub fn search(&self, key: i64) -> Result<&V> {
        self.chain(self.bucket_of(key))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .ok_or(Error::NotFound)
    }

    /// Returns `true` if `key` has at least one entry.
    #[inline]
    pub fn contains_key(&self, key: i64) -> bool {
        self.search(key).is_ok()
    }

    /// Iterates over one bucket's chain, head first.
    ///
    /// Yields nothing for a bucket index past [`bucket_count`](Self::bucket_count).
    pub fn chain(&self, bucket: usize) -> Chain<'_, V> {
        Chain {
            nodes: &self.nodes,
            cur: self.buckets.get(bucket).copied().unwrap_or(u32::NONE),
        }
    }

    /// Drops every entry, keeping the bucket count.
    pub fn clear(&mut self) {
        self.buckets.fill(u32::NONE);
        self.nodes.clear();
    }
}

impl<V> Default for ChainedHashTable<V> {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainedHashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for bucket in 0..self.buckets.len() {
            map.entries(self.chain(bucket));
        }
        map.finish()
    }
}

/// Renders one line per bucket: `Index i: (k, v) -> ... -> NULL`.
impl<V: fmt::Display> fmt::Display for ChainedHashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in 0..self.buckets.len() {
            if bucket > 0 {
                f.write_str("\n")?;
            }
            write!(f, "Index {bucket}: ")?;
            for (key, value) in self.chain(bucket) {
                write!(f, "({key}, {value}) -> ")?;
            }
            f.write_str("NULL")?;
        }
        Ok(())
    }
}

/// Iterator over one bucket's `(key, value)` entries, newest first.
pub struct Chain<'a, V> {
    nodes: &'a SlotStorage<Node<(i64, V)>>,
    cur: u32,
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cur)?;
        self.cur = node.next;
        let (key, value) = &node.value;
        Some((*key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_search() {
        let mut table = ChainedHashTable::default();
        table.insert(1, 10).unwrap();
        table.insert(2, 20).unwrap();
        table.insert(42, 80).unwrap();

        assert_eq!(table.bucket_count(), 10);
        assert_eq!(table.len(), 3);
        assert_eq!(table.search(42), Ok(&80));
        assert_eq!(table.search(2), Ok(&20));
        assert_eq!(table.search(7), Err(Error::NotFound));
    }

    #[test]
    fn collisions_keep_both() {
        let mut table = ChainedHashTable::new(10);
        table.insert(3, "a").unwrap();
        table.insert(13, "b").unwrap();
        table.insert(23, "c").unwrap();

        assert_eq!(table.bucket_of(13), 3);
        assert_eq!(table.search(3), Ok(&"a"));
        assert_eq!(table.search(13), Ok(&"b"));
        assert_eq!(table.search(23), Ok(&"c"));
        assert_eq!(
            table.chain(3).map(|(k, _)| k).collect::<Vec<_>>(),
            [23, 13, 3]
        );
    }

    #[test]
    fn duplicate_key_returns_latest() {
        let mut table = ChainedHashTable::new(4);
        table.insert(5, "old").unwrap();
        table.insert(5, "new").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.search(5), Ok(&"new"));
        assert_eq!(table.chain(1).count(), 2);
    }

    #[test]
    fn negative_keys_wrap_into_range() {
        let mut table = ChainedHashTable::new(10);
        assert_eq!(table.bucket_of(-1), 9);
        assert_eq!(table.bucket_of(-10), 0);

        table.insert(-1, 'x').unwrap();
        table.insert(9, 'y').unwrap();
        assert_eq!(table.search(-1), Ok(&'x'));
        assert_eq!(table.search(9), Ok(&'y'));
    }

    #[test]
    fn bounded_table_rejects_overflow() {
        let mut table = ChainedHashTable::<i32>::with_capacity(4, 2);
        table.insert(0, 0).unwrap();
        table.insert(1, 1).unwrap();
        assert_eq!(
            table.insert(2, 2),
            Err(Error::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(table.search(2), Err(Error::NotFound));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn chain_out_of_range_is_empty() {
        let table = ChainedHashTable::<i32>::new(3);
        assert_eq!(table.chain(3).count(), 0);
    }

    #[test]
    fn clear_forgets_entries() {
        let mut table = ChainedHashTable::new(3);
        table.insert(1, 1).unwrap();
        table.clear();
        assert!(table.is_empty());
        assert!(!table.contains_key(1));
        table.insert(1, 2).unwrap();
        assert_eq!(table.search(1), Ok(&2));
    }

    #[test]
    #[should_panic(expected = "at least one bucket")]
    fn zero_buckets_panics() {
        let _ = ChainedHashTable::<i32>::new(0);
    }

    #[test]
    fn display_lists_every_bucket() {
        let mut table = ChainedHashTable::new(3);
        table.insert(0, 5).unwrap();
        table.insert(3, 6).unwrap();
        table.insert(2, 7).unwrap();
        assert_eq!(
            table.to_string(),
            "Index 0: (3, 6) -> (0, 5) -> NULL\n\
             Index 1: NULL\n\
             Index 2: (2, 7) -> NULL"
        );
    }
}
