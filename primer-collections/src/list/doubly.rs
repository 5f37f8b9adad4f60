//! Doubly-linked list with forward and backward traversal.
//!
//! Every insert and removal keeps the back-link invariant: for each node `x`
//! whose `next` is `y`, `y.prev` is `x`.

use core::fmt;
use core::marker::PhantomData;

use super::capacity_error;
use crate::{Error, Key, Result, SlotStorage, Storage};

/// A node with `prev` and `next` links.
#[derive(Debug)]
pub struct DoublyNode<T, K: Key = u32> {
    pub(crate) value: T,
    pub(crate) prev: K,
    pub(crate) next: K,
}

impl<T, K: Key> DoublyNode<T, K> {
    #[inline]
    fn new(value: T, prev: K, next: K) -> Self {
        Self { value, prev, next }
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// A doubly-linked list that owns its node storage.
///
/// # Example
///
/// ```
/// use primer_collections::DoublyList;
///
/// let mut list: DoublyList<i32> = DoublyList::new();
/// list.push_back(10).unwrap();
/// list.push_back(20).unwrap();
/// list.push_back(30).unwrap();
/// list.push_front(5).unwrap();
///
/// assert_eq!(list.to_string(), "5 <-> 10 <-> 20 <-> 30 <-> NULL");
/// let backward: Vec<_> = list.iter().rev().copied().collect();
/// assert_eq!(backward, [30, 20, 10, 5]);
/// ```
pub struct DoublyList<T, K: Key = u32, S = SlotStorage<DoublyNode<T, K>, K>>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    nodes: S,
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T, K: Key> DoublyList<T, K> {
    /// Creates an empty list whose storage grows on demand.
    pub const fn new() -> Self {
        Self::with_storage(SlotStorage::new())
    }

    /// Creates an empty list holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not below the key type's `NONE` sentinel.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_storage(SlotStorage::with_capacity(capacity))
    }
}

impl<T, K: Key> Default for DoublyList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key, S> DoublyList<T, K, S>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    /// Creates an empty list over caller-supplied storage.
    pub const fn with_storage(nodes: S) -> Self {
        Self {
            nodes,
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn front_key(&self) -> Option<K> {
        self.head.is_some().then_some(self.head)
    }

    /// Returns the tail node's key, or `None` if empty.
    #[inline]
    pub fn back_key(&self) -> Option<K> {
        self.tail.is_some().then_some(self.tail)
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.head)
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.tail)
    }

    /// Returns the element stored under `key`, or `None` if its slot is vacant.
    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.value)
    }

    /// Returns the key after `key`, or `None` at the tail.
    pub fn next_key(&self, key: K) -> Option<K> {
        self.nodes
            .get(key)
            .map(|node| node.next)
            .filter(|next| next.is_some())
    }

    /// Returns the key before `key`, or `None` at the head.
    pub fn prev_key(&self, key: K) -> Option<K> {
        self.nodes
            .get(key)
            .map(|node| node.prev)
            .filter(|prev| prev.is_some())
    }

    /// Inserts a value at the front. Returns the new node's key.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the storage is full.
    pub fn push_front(&mut self, value: T) -> Result<K> {
        let key = self
            .nodes
            .try_insert(DoublyNode::new(value, K::NONE, self.head))
            .map_err(|_| capacity_error(&self.nodes))?;

        if self.head.is_some() {
            self.set_prev(self.head, key);
        } else {
            self.tail = key;
        }
        self.head = key;
        self.len += 1;
        Ok(key)
    }

    /// Inserts a value at the back. Returns the new node's key.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the storage is full.
    pub fn push_back(&mut self, value: T) -> Result<K> {
        let key = self
            .nodes
            .try_insert(DoublyNode::new(value, self.tail, K::NONE))
            .map_err(|_| capacity_error(&self.nodes))?;

        if self.tail.is_some() {
            self.set_next(self.tail, key);
        } else {
            self.head = key;
        }
        self.tail = key;
        self.len += 1;
        Ok(key)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list has no elements.
    pub fn pop_front(&mut self) -> Result<T> {
        self.remove_key(self.head).ok_or(Error::Empty)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list has no elements.
    pub fn pop_back(&mut self) -> Result<T> {
        self.remove_key(self.tail).ok_or(Error::Empty)
    }

    /// Removes the first node (from the front) whose value equals `value`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element matches; the list is unchanged.
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        while let Some(node) = self.nodes.get(cur) {
            if node.value == *value {
                break;
            }
            cur = node.next;
        }
        self.remove_key(cur).ok_or(Error::NotFound)
    }

    /// Removes the node stored under `key`. Returns `None` if the slot is
    /// vacant.
    ///
    /// A key whose node was removed may name a newer node once its slot is
    /// reused; removing through it then removes that node.
    pub fn remove_key(&mut self, key: K) -> Option<T> {
        let node = self.nodes.remove(key)?;

        if node.prev.is_some() {
            self.set_next(node.prev, node.next);
        } else {
            self.head = node.next;
        }

        if node.next.is_some() {
            self.set_prev(node.next, node.prev);
        } else {
            self.tail = node.prev;
        }

        self.len -= 1;
        Some(node.value)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Returns an iterator over the elements.
    ///
    /// Front to back; call `.rev()` to walk from the tail via `prev` links.
    pub fn iter(&self) -> DoublyIter<'_, T, K, S> {
        DoublyIter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    #[inline]
    fn set_next(&mut self, key: K, next: K) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.next = next;
        }
    }

    #[inline]
    fn set_prev(&mut self, key: K, prev: K) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.prev = prev;
        }
    }
}

impl<T: fmt::Debug, K: Key, S> fmt::Debug for DoublyList<T, K, S>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `a <-> b <-> NULL`, front to back.
impl<T: fmt::Display, K: Key, S> fmt::Display for DoublyList<T, K, S>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} <-> ")?;
        }
        f.write_str("NULL")
    }
}

impl<'a, T, K: Key, S> IntoIterator for &'a DoublyList<T, K, S>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    type Item = &'a T;
    type IntoIter = DoublyIter<'a, T, K, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Double-ended iterator over a [`DoublyList`].
pub struct DoublyIter<'a, T, K: Key, S> {
    nodes: &'a S,
    front: K,
    back: K,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, K: Key + 'a, S> Iterator for DoublyIter<'a, T, K, S>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, K: Key + 'a, S> DoubleEndedIterator for DoublyIter<'a, T, K, S>
where
    S: Storage<DoublyNode<T, K>, Key = K>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T: 'a, K: Key + 'a, S> ExactSizeIterator for DoublyIter<'a, T, K, S> where
    S: Storage<DoublyNode<T, K>, Key = K>
{
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks forward checking that every `next` has a matching `prev`.
    fn assert_links(list: &DoublyList<i32>) {
        let mut prev = u32::NONE;
        let mut cur = list.head;
        let mut count = 0;
        while cur.is_some() {
            let node = list.nodes.get(cur).unwrap();
            assert_eq!(node.prev, prev, "broken back-link");
            prev = cur;
            cur = node.next;
            count += 1;
        }
        assert_eq!(list.tail, prev);
        assert_eq!(list.len(), count);
    }

    fn forward(list: &DoublyList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    fn backward(list: &DoublyList<i32>) -> Vec<i32> {
        list.iter().rev().copied().collect()
    }

    #[test]
    fn new_is_empty() {
        let list: DoublyList<i32> = DoublyList::new();
        assert!(list.is_empty());
        assert_eq!(list.iter().rev().next(), None);
        assert_eq!(list.to_string(), "NULL");
    }

    #[test]
    fn inserts_keep_back_links() {
        let mut list: DoublyList<i32> = DoublyList::new();
        list.push_back(10).unwrap();
        assert_links(&list);
        list.push_back(20).unwrap();
        list.push_back(30).unwrap();
        list.push_front(5).unwrap();
        assert_links(&list);

        assert_eq!(forward(&list), [5, 10, 20, 30]);
        assert_eq!(backward(&list), [30, 20, 10, 5]);
    }

    #[test]
    fn remove_keeps_back_links() {
        let mut list: DoublyList<i32> = DoublyList::new();
        for v in 1..=5 {
            list.push_back(v).unwrap();
        }

        assert_eq!(list.remove(&3), Ok(3));
        assert_links(&list);
        assert_eq!(list.remove(&1), Ok(1));
        assert_links(&list);
        assert_eq!(list.remove(&5), Ok(5));
        assert_links(&list);

        assert_eq!(forward(&list), [2, 4]);
        assert_eq!(backward(&list), [4, 2]);
        assert_eq!(list.remove(&9), Err(Error::NotFound));
    }

    #[test]
    fn pop_both_ends() {
        let mut list: DoublyList<i32> = DoublyList::new();
        for v in 1..=3 {
            list.push_back(v).unwrap();
        }

        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Ok(2));
        assert_eq!(list.pop_back(), Err(Error::Empty));
        assert_eq!(list.pop_front(), Err(Error::Empty));
        assert_links(&list);
    }

    #[test]
    fn neighbour_keys() {
        let mut list: DoublyList<i32> = DoublyList::new();
        let a = list.push_back(1).unwrap();
        let b = list.push_back(2).unwrap();

        assert_eq!(list.next_key(a), Some(b));
        assert_eq!(list.prev_key(b), Some(a));
        assert_eq!(list.prev_key(a), None);
        assert_eq!(list.next_key(b), None);
    }

    #[test]
    fn remove_by_stale_key() {
        let mut list: DoublyList<i32> = DoublyList::new();
        let a = list.push_back(1).unwrap();
        assert_eq!(list.remove_key(a), Some(1));
        assert_eq!(list.remove_key(a), None);
    }

    #[test]
    fn removed_key_follows_slot_reuse() {
        let mut list: DoublyList<i32> = DoublyList::new();
        let a = list.push_back(1).unwrap();
        list.remove_key(a);
        let b = list.push_back(2).unwrap();

        assert_eq!(b, a);
        assert_eq!(list.get(a), Some(&2));
        assert_eq!(list.remove_key(a), Some(2));
        assert!(list.is_empty());
        assert_links(&list);
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let mut list: DoublyList<i32> = DoublyList::new();
        for v in 1..=4 {
            list.push_back(v).unwrap();
        }

        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn bounded_rejects_without_mutation() {
        let mut list: DoublyList<i32> = DoublyList::with_capacity(1);
        list.push_back(1).unwrap();
        assert_eq!(
            list.push_front(0),
            Err(Error::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(forward(&list), [1]);
        assert_links(&list);
    }

    #[test]
    fn display_forward() {
        let mut list: DoublyList<i32> = DoublyList::new();
        list.push_back(10).unwrap();
        list.push_back(20).unwrap();
        assert_eq!(list.to_string(), "10 <-> 20 <-> NULL");
    }
}
