//! Fixed-capacity array buffer with positional insert, delete and rotation.
//!
//! Positions `[0, len)` hold live elements. Inserting shifts the tail one slot
//! right, deleting shifts it one slot left; both are O(len - pos).

use core::fmt;

use crate::{Error, Result};

/// A contiguous buffer that never grows past the capacity it was built with.
///
/// # Example
///
/// ```
/// use primer_collections::BoundedArray;
///
/// let mut arr = BoundedArray::from_slice(100, &[10, 20, 30, 40, 50]).unwrap();
/// arr.insert_at(2, 25).unwrap();
/// assert_eq!(arr.as_slice(), [10, 20, 25, 30, 40, 50]);
///
/// arr.delete_at(0).unwrap();
/// assert_eq!(arr.as_slice(), [20, 25, 30, 40, 50]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedArray<T> {
    /// Creates an empty buffer that holds at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a buffer of `capacity` slots pre-filled from `values`.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if `values` does not fit.
    pub fn from_slice(capacity: usize, values: &[T]) -> Result<Self>
    where
        T: Clone,
    {
        if values.len() > capacity {
            return Err(Error::CapacityExceeded { capacity });
        }
        let mut items = Vec::with_capacity(capacity);
        items.extend_from_slice(values);
        Ok(Self { items, capacity })
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no elements are live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if every slot is in use.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Returns the element at `pos`.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.items.get(pos)
    }

    /// Returns the live elements in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the live elements in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Inserts `value` at `pos`, shifting `[pos, len)` one slot right.
    ///
    /// `pos == len` appends.
    ///
    /// # Errors
    ///
    /// - [`Error::CapacityExceeded`] if the buffer is full
    /// - [`Error::InvalidIndex`] if `pos > len`
    pub fn insert_at(&mut self, pos: usize, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let len = self.items.len();
        if pos > len {
            return Err(Error::InvalidIndex {
                index: pos,
                len: len + 1,
            });
        }
        // Vec::insert moves the tail right-to-left, so nothing is overwritten.
        self.items.insert(pos, value);
        Ok(())
    }

    /// Removes and returns the element at `pos`, shifting `[pos + 1, len)`
    /// one slot left.
    ///
    /// # Errors
    ///
    /// - [`Error::Empty`] if the buffer has no elements
    /// - [`Error::InvalidIndex`] if `pos >= len`
    pub fn delete_at(&mut self, pos: usize) -> Result<T> {
        let len = self.items.len();
        if len == 0 {
            return Err(Error::Empty);
        }
        if pos >= len {
            return Err(Error::InvalidIndex { index: pos, len });
        }
        Ok(self.items.remove(pos))
    }

    /// Moves the first `d mod len` elements to the end, preserving order.
    ///
    /// O(len) time with O(d) scratch space. No-op on an empty buffer.
    pub fn rotate_left(&mut self, d: usize) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let d = d % len;
        if d == 0 {
            return;
        }
        let front: Vec<T> = self.items.drain(..d).collect();
        self.items.extend(front);
    }

    /// Moves the last `d mod len` elements to the front, preserving order.
    ///
    /// Inverse of [`rotate_left`](Self::rotate_left) for the same `d`.
    pub fn rotate_right(&mut self, d: usize) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.rotate_left(len - d % len);
    }

    /// Reverses the live elements by swapping from both ends inward.
    pub fn reverse(&mut self) {
        let len = self.items.len();
        if len < 2 {
            return;
        }
        let (mut start, mut end) = (0, len - 1);
        while start < end {
            self.items.swap(start, end);
            start += 1;
            end -= 1;
        }
    }

    /// Drops every live element.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> core::ops::Index<usize> for BoundedArray<T> {
    type Output = T;

    fn index(&self, pos: usize) -> &T {
        &self.items[pos]
    }
}

impl<'a, T> IntoIterator for &'a BoundedArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Renders the live elements separated by spaces.
impl<T: fmt::Display> fmt::Display for BoundedArray<T> {
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
