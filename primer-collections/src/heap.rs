//! Array-backed binary max-heap.
//!
//! The live region `[0, len)` is a complete binary tree stored level by level:
//! the children of `i` sit at `2i + 1` and `2i + 2`, its parent at
//! `(i - 1) / 2`. Every parent compares greater than or equal to its children.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert` | O(log n) |
//! | `extract_max` | O(log n) |
//! | `peek` | O(1) |

use core::fmt;

use crate::{Error, Result};

/// Fixed-capacity max-heap.
///
/// # Example
///
/// ```
/// use primer_collections::MaxHeap;
///
/// let mut heap = MaxHeap::with_capacity(10);
/// for v in [10, 20, 15, 40, 50, 100, 25] {
///     heap.insert(v).unwrap();
/// }
///
/// assert_eq!(heap.extract_max(), Ok(100));
/// assert_eq!(heap.peek(), Some(&50));
/// ```
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Ord> MaxHeap<T> {
    /// Creates an empty heap holding at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the heap holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of values.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the largest value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the live region in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Adds `value` at the next free leaf and sifts it up.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the heap is full.
    pub fn insert(&mut self, value: T) -> Result<()> {
        if self.items.len() == self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
        Ok(())
    }

    /// Removes and returns the largest value.
    ///
    /// The last leaf moves to the root and sifts down.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the heap holds nothing.
    pub fn extract_max(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::Empty);
        }
        let max = self.items.swap_remove(0);
        let len = self.items.len();
        self.sift_down(0, len);
        Ok(max)
    }

    /// Consumes the heap, returning its values in ascending order.
    ///
    /// Sorts in place: the root is swapped behind a shrinking live region.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.items.len();
        while end > 1 {
            end -= 1;
            self.items.swap(0, end);
            self.sift_down(0, end);
        }
        self.items
    }

    fn sift_up(&mut self, pos: usize) {
        let mut hole = pos;
        while hole > 0 {
            let parent = (hole - 1) / 2;
            if self.items[hole] > self.items[parent] {
                self.items.swap(hole, parent);
                hole = parent;
            } else {
                break;
            }
        }
    }

    /// Restores the heap below `pos`, treating `[0, len)` as the live region.
    fn sift_down(&mut self, pos: usize, len: usize) {
        let mut hole = pos;
        loop {
            let left = 2 * hole + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            // Ties go left: right only wins when strictly larger.
            let larger = if right < len && self.items[right] > self.items[left] {
                right
            } else {
                left
            };

            if self.items[larger] > self.items[hole] {
                self.items.swap(hole, larger);
                hole = larger;
            } else {
                break;
            }
        }
    }
}

/// Renders the live region in storage order, space separated.
impl<T: fmt::Display> fmt::Display for MaxHeap<T> {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap(heap: &MaxHeap<i32>) {
        let items = heap.as_slice();
        for i in 1..items.len() {
            let parent = (i - 1) / 2;
            assert!(
                items[parent] >= items[i],
                "parent {} < child {} at {i}",
                items[parent],
                items[i]
            );
        }
    }

    #[test]
    fn insert_sequence_roots_at_max() {
        let mut heap = MaxHeap::with_capacity(10);
        for v in [10, 20, 15, 40, 50, 100, 25] {
            heap.insert(v).unwrap();
            assert_heap(&heap);
        }
        assert_eq!(heap.as_slice(), [100, 40, 50, 10, 20, 15, 25]);

        assert_eq!(heap.extract_max(), Ok(100));
        assert_heap(&heap);
        assert_eq!(heap.peek(), Some(&50));
        assert_eq!(heap.len(), 6);
    }

    #[test]
    fn extract_drains_descending() {
        let mut heap = MaxHeap::with_capacity(8);
        for v in [3, 1, 4, 1, 5, 9, 2, 6] {
            heap.insert(v).unwrap();
        }
        let mut out = Vec::new();
        while let Ok(v) = heap.extract_max() {
            assert_heap(&heap);
            out.push(v);
        }
        assert_eq!(out, [9, 6, 5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn full_and_empty() {
        let mut heap = MaxHeap::with_capacity(1);
        assert_eq!(heap.extract_max(), Err(Error::Empty));
        heap.insert(1).unwrap();
        assert_eq!(heap.insert(2), Err(Error::CapacityExceeded { capacity: 1 }));
        assert_eq!(heap.as_slice(), [1]);
    }

    #[test]
    fn sift_down_prefers_left_on_tie() {
        let mut heap = MaxHeap::with_capacity(4);
        for v in [9, 5, 5, 1] {
            heap.insert(v).unwrap();
        }
        assert_eq!(heap.as_slice(), [9, 5, 5, 1]);

        // 1 moves to the root and trades places with the left 5.
        assert_eq!(heap.extract_max(), Ok(9));
        assert_eq!(heap.as_slice(), [5, 1, 5]);
    }

    #[test]
    fn into_sorted_vec_ascends() {
        let mut heap = MaxHeap::with_capacity(6);
        for v in [7, 2, 9, 4, 4, 0] {
            heap.insert(v).unwrap();
        }
        assert_eq!(heap.into_sorted_vec(), [0, 2, 4, 4, 7, 9]);
    }

    #[test]
    fn display_storage_order() {
        let mut heap = MaxHeap::with_capacity(3);
        for v in [1, 2, 3] {
            heap.insert(v).unwrap();
        }
        assert_eq!(heap.to_string(), "3 1 2");
    }
}
