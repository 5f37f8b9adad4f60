//! Singly-linked list with in-place reversal.

use core::fmt;
use core::marker::PhantomData;

use super::{Node, capacity_error};
use crate::{Error, Key, Result, SlotStorage, Storage};

/// A singly-linked list that owns its node storage.
///
/// Tracks head, tail and length. Nodes carry only a `next` link, so removal by
/// value walks from the head to find the predecessor.
///
/// # Type Parameters
///
/// - `T`: element type
/// - `K`: key type linking nodes (default `u32`)
/// - `S`: node storage (default [`SlotStorage`])
///
/// # Example
///
/// ```
/// use primer_collections::SinglyList;
///
/// let mut list: SinglyList<i32> = SinglyList::with_capacity(4);
/// list.push_back(10).unwrap();
/// list.push_back(20).unwrap();
/// list.push_front(5).unwrap();
///
/// assert_eq!(list.remove(&10), Ok(10));
/// assert_eq!(list.to_string(), "5 -> 20 -> NULL");
/// ```
pub struct SinglyList<T, K: Key = u32, S = SlotStorage<Node<T, K>, K>>
where
    S: Storage<Node<T, K>, Key = K>,
{
    nodes: S,
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T, K: Key> SinglyList<T, K> {
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

impl<T, K: Key> Default for SinglyList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key, S> SinglyList<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    /// Creates an empty list over caller-supplied storage.
    ///
    /// The storage should be empty; the list takes ownership of it.
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

    /// Inserts a value at the front. Returns the new node's key.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the storage is full.
    pub fn push_front(&mut self, value: T) -> Result<K> {
        let key = self
            .nodes
            .try_insert(Node::new(value, self.head))
            .map_err(|_| capacity_error(&self.nodes))?;

        if self.tail.is_none() {
            self.tail = key;
        }
        self.head = key;
        self.len += 1;
        Ok(key)
    }

    /// Inserts a value at the back. Returns the new node's key.
    ///
    /// On an empty list the new node becomes both head and tail.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the storage is full.
    pub fn push_back(&mut self, value: T) -> Result<K> {
        let key = self
            .nodes
            .try_insert(Node::new(value, K::NONE))
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
        let node = self.nodes.remove(self.head).ok_or(Error::Empty)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = K::NONE;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes the first node whose value equals `value` and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element matches; the list is unchanged.
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let mut prev = K::NONE;
        let mut cur = self.head;
        while let Some(node) = self.nodes.get(cur) {
            if node.value == *value {
                break;
            }
            prev = cur;
            cur = node.next;
        }

        let node = self.nodes.remove(cur).ok_or(Error::NotFound)?;
        if prev.is_none() {
            self.head = node.next;
        } else {
            self.set_next(prev, node.next);
        }
        if self.tail == cur {
            self.tail = prev;
        }
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Reverses the list in one pass by pointing every node at its predecessor.
    ///
    /// Nodes are relinked, not copied: keys stay attached to their values and
    /// the old head becomes the tail. Returns the new head's key.
    pub fn reverse(&mut self) -> Option<K> {
        let mut prev = K::NONE;
        let mut cur = self.head;
        while let Some(node) = self.nodes.get_mut(cur) {
            let next = core::mem::replace(&mut node.next, prev);
            prev = cur;
            cur = next;
        }

        self.tail = self.head;
        self.head = prev;
        self.front_key()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> SinglyIter<'_, T, K, S> {
        SinglyIter {
            nodes: &self.nodes,
            cur: self.head,
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
}

impl<T: fmt::Debug, K: Key, S> fmt::Debug for SinglyList<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `a -> b -> NULL`.
impl<T: fmt::Display, K: Key, S> fmt::Display for SinglyList<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        f.write_str("NULL")
    }
}

impl<'a, T, K: Key, S> IntoIterator for &'a SinglyList<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = &'a T;
    type IntoIter = SinglyIter<'a, T, K, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`SinglyList`], front to back.
pub struct SinglyIter<'a, T, K: Key, S> {
    nodes: &'a S,
    cur: K,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, K: Key + 'a, S> Iterator for SinglyIter<'a, T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cur)?;
        self.cur = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, K: Key + 'a, S> ExactSizeIterator for SinglyIter<'a, T, K, S> where
    S: Storage<Node<T, K>, Key = K>
{
}
