//! Circular singly-linked list.
//!
//! The last node links back to the head, so following `next` from any node
//! eventually returns to it. The list is empty only when it has no head.
//! Walks stop when they come back to their starting node, never on a null
//! link, which lets a traversal begin at any node.

use core::fmt;
use core::marker::PhantomData;

use super::{Node, capacity_error};
use crate::{Error, Key, Result, SlotStorage, Storage};

/// A circular list that owns its node storage.
///
/// Only the head is tracked. Appending walks the ring to find the node whose
/// `next` is the head, so `push_back` is O(n).
///
/// # Example
///
/// ```
/// use primer_collections::CircularList;
///
/// let mut ring: CircularList<i32> = CircularList::new();
/// for v in [10, 20, 30, 40] {
///     ring.push_back(v).unwrap();
/// }
/// assert_eq!(ring.to_string(), "10 -> 20 -> 30 -> 40 -> (back to 10)");
/// ```
pub struct CircularList<T, K: Key = u32, S = SlotStorage<Node<T, K>, K>>
where
    S: Storage<Node<T, K>, Key = K>,
{
    nodes: S,
    head: K,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T, K: Key> CircularList<T, K> {
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

impl<T, K: Key> Default for CircularList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key, S> CircularList<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    /// Creates an empty list over caller-supplied storage.
    pub const fn with_storage(nodes: S) -> Self {
        Self {
            nodes,
            head: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the ring has no head.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn head_key(&self) -> Option<K> {
        self.head.is_some().then_some(self.head)
    }

    /// Returns the head element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.head)
    }

    /// Returns the element stored under `key`, or `None` if its slot is vacant.
    #[inline]
    pub fn get(&self, key: K) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.value)
    }

    /// Returns the key following `key` around the ring.
    pub fn next_key(&self, key: K) -> Option<K> {
        self.nodes.get(key).map(|node| node.next)
    }

    /// Appends a value just before the head. Returns the new node's key.
    ///
    /// On an empty ring the node links to itself and becomes the head.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the storage is full.
    pub fn push_back(&mut self, value: T) -> Result<K> {
        let key = self
            .nodes
            .try_insert(Node::new(value, K::NONE))
            .map_err(|_| capacity_error(&self.nodes))?;

        if self.head.is_none() {
            self.set_next(key, key);
            self.head = key;
        } else {
            let last = self.last_key();
            self.set_next(last, key);
            self.set_next(key, self.head);
        }
        self.len += 1;
        Ok(key)
    }

    /// Inserts a value as the new head. Returns the new node's key.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the storage is full.
    pub fn push_front(&mut self, value: T) -> Result<K> {
        // Splicing after the last node and moving the head onto the new node
        // is the same ring as inserting before the old head.
        let key = self.push_back(value)?;
        self.head = key;
        Ok(key)
    }

    /// Removes and returns the head element; its successor becomes the head.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the ring has no elements.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.head.is_none() {
            return Err(Error::Empty);
        }
        let last = self.last_key();
        self.unlink(last, self.head).ok_or(Error::Empty)
    }

    /// Removes the first node, starting at the head, whose value equals
    /// `value`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element matches; the ring is unchanged.
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        if self.head.is_none() {
            return Err(Error::NotFound);
        }

        let mut prev = self.last_key();
        let mut cur = self.head;
        for _ in 0..self.len {
            let Some(node) = self.nodes.get(cur) else {
                break;
            };
            if node.value == *value {
                return self.unlink(prev, cur).ok_or(Error::NotFound);
            }
            prev = cur;
            cur = node.next;
        }
        Err(Error::NotFound)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Makes the head's successor the new head. Returns the new head key.
    pub fn rotate(&mut self) -> Option<K> {
        let next = self.next_key(self.head)?;
        self.head = next;
        Some(next)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Walks the ring once, starting at the head.
    pub fn iter(&self) -> CircularIter<'_, T, K, S> {
        CircularIter::new(&self.nodes, self.head)
    }

    /// Walks the ring once, starting at `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `key` addresses a vacant slot.
    pub fn iter_from(&self, key: K) -> Result<CircularIter<'_, T, K, S>> {
        if self.nodes.get(key).is_none() {
            return Err(Error::NotFound);
        }
        Ok(CircularIter::new(&self.nodes, key))
    }

    /// Finds the node whose `next` is the head.
    fn last_key(&self) -> K {
        let mut cur = self.head;
        while let Some(node) = self.nodes.get(cur) {
            if node.next == self.head {
                return cur;
            }
            cur = node.next;
        }
        K::NONE
    }

    /// Detaches `key`, whose predecessor is `prev`, and releases its slot.
    fn unlink(&mut self, prev: K, key: K) -> Option<T> {
        let node = self.nodes.remove(key)?;
        if self.len == 1 {
            self.head = K::NONE;
        } else {
            self.set_next(prev, node.next);
            if self.head == key {
                self.head = node.next;
            }
        }
        self.len -= 1;
        Some(node.value)
    }

    #[inline]
    fn set_next(&mut self, key: K, next: K) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.next = next;
        }
    }
}

impl<T: fmt::Debug, K: Key, S> fmt::Debug for CircularList<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `a -> b -> (back to a)`.
impl<T: fmt::Display, K: Key, S> fmt::Display for CircularList<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(head) = self.front() else {
            return f.write_str("(empty)");
        };
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "(back to {head})")
    }
}

impl<'a, T, K: Key, S> IntoIterator for &'a CircularList<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = &'a T;
    type IntoIter = CircularIter<'a, T, K, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One lap around a [`CircularList`].
///
/// Finishes when the walk returns to the node it started from.
pub struct CircularIter<'a, T, K: Key, S> {
    nodes: &'a S,
    start: K,
    cur: K,
    done: bool,
    _marker: PhantomData<&'a T>,
}

impl<'a, T, K: Key, S> CircularIter<'a, T, K, S> {
    fn new(nodes: &'a S, start: K) -> Self {
        Self {
            nodes,
            start,
            cur: start,
            done: start.is_none(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a, K: Key + 'a, S> Iterator for CircularIter<'a, T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let node = self.nodes.get(self.cur)?;
        self.cur = node.next;
        self.done = self.cur == self.start;
        Some(&node.value)
    }
}
