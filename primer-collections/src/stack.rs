//! LIFO stacks over a bounded buffer or a linked chain.
//!
//! Both variants implement [`Stack`], so code written against the trait runs
//! on either. Each stack is an ordinary value: any number of independent
//! stacks can coexist.

use core::fmt;

use crate::list::{Node, SinglyIter, SinglyList};
use crate::{Error, Key, Result, SlotStorage, Storage};

/// Last-in, first-out container.
pub trait Stack<T> {
    /// Places `value` on top.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if the stack has no room left.
    fn push(&mut self, value: T) -> Result<()>;

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the stack is empty.
    fn pop(&mut self) -> Result<T>;

    /// Returns the top value without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the stack is empty.
    fn peek(&self) -> Result<&T>;

    /// Returns the number of values on the stack.
    fn len(&self) -> usize;

    /// Returns `true` if the stack holds nothing.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Array-backed
// ============================================================================

/// Stack over a buffer of fixed capacity.
///
/// Values live in `[0, top]`; pushing past `capacity` fails with
/// [`Error::Overflow`].
///
/// # Example
///
/// ```
/// use primer_collections::{ArrayStack, Error, Stack};
///
/// let mut stack = ArrayStack::with_capacity(2);
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert_eq!(stack.push(3), Err(Error::Overflow { capacity: 2 }));
///
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.peek(), Ok(&1));
/// ```
#[derive(Debug, Clone)]
pub struct ArrayStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack that holds at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the maximum number of values.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if another push would overflow.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::Overflow {
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::Underflow)
    }

    fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::Empty)
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Renders bottom to top, space separated.
impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

// ============================================================================
// List-backed
// ============================================================================

/// Stack over a singly-linked chain; the list head is the top.
///
/// Unbounded by default. Built over bounded storage it reports
/// [`Error::Overflow`] once the storage is full.
///
/// # Example
///
/// ```
/// use primer_collections::{LinkedStack, Stack};
///
/// let mut a: LinkedStack<i32> = LinkedStack::new();
/// let mut b: LinkedStack<i32> = LinkedStack::new();
/// a.push(1).unwrap();
/// b.push(2).unwrap();
///
/// assert_eq!(a.pop(), Ok(1));
/// assert_eq!(b.peek(), Ok(&2));
/// ```
pub struct LinkedStack<T, K: Key = u32, S = SlotStorage<Node<T, K>, K>>
where
    S: Storage<Node<T, K>, Key = K>,
{
    list: SinglyList<T, K, S>,
}

impl<T, K: Key> LinkedStack<T, K> {
    /// Creates an empty, unbounded stack.
    pub const fn new() -> Self {
        Self {
            list: SinglyList::new(),
        }
    }

    /// Creates an empty stack holding at most `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not below the key type's `NONE` sentinel.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: SinglyList::with_capacity(capacity),
        }
    }
}

impl<T, K: Key> Default for LinkedStack<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key, S> LinkedStack<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    /// Creates an empty stack over caller-supplied node storage.
    pub const fn with_storage(nodes: S) -> Self {
        Self {
            list: SinglyList::with_storage(nodes),
        }
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> SinglyIter<'_, T, K, S> {
        self.list.iter()
    }
}

impl<T, K: Key, S> Stack<T> for LinkedStack<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn push(&mut self, value: T) -> Result<()> {
        match self.list.push_front(value) {
            Ok(_) => Ok(()),
            Err(Error::CapacityExceeded { capacity }) => Err(Error::Overflow { capacity }),
            Err(e) => Err(e),
        }
    }

    fn pop(&mut self) -> Result<T> {
        self.list.pop_front().map_err(|_| Error::Underflow)
    }

    fn peek(&self) -> Result<&T> {
        self.list.front().ok_or(Error::Empty)
    }

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T: fmt::Debug, K: Key, S> fmt::Debug for LinkedStack<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders top to bottom, space separated.
impl<T: fmt::Display, K: Key, S> fmt::Display for LinkedStack<T, K, S>
where
    S: Storage<Node<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
