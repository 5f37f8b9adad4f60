//! FIFO queues over a fixed slot buffer.
//!
//! | Queue | Wraps | Reuses dequeued slots |
//! |-------|-------|-----------------------|
//! | [`LinearQueue`] | no | no, until [`clear`](LinearQueue::clear) |
//! | [`CircularQueue`] | yes | yes |
//!
//! ```text
//! linear:    [ x | x | a | b | c | _ ]      circular:  [ c | _ | _ | a | b ]
//!                    ▲       ▲                           ▲           ▲
//!                  front    rear                        rear       front
//! ```

use core::fmt;

use crate::{Error, Result};

/// First-in, first-out container.
pub trait Queue<T> {
    /// Appends `value` at the rear.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if no slot is available.
    fn enqueue(&mut self, value: T) -> Result<()>;

    /// Removes and returns the value at the front.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the queue is empty.
    fn dequeue(&mut self) -> Result<T>;

    /// Returns the value at the front without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the queue is empty.
    fn front(&self) -> Result<&T>;

    /// Returns the number of queued values.
    fn len(&self) -> usize;

    /// Returns `true` if the next enqueue would overflow.
    fn is_full(&self) -> bool;

    /// Returns `true` if nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

fn write_spaced<'a, T: fmt::Display + 'a>(
    f: &mut fmt::Formatter<'_>,
    values: impl Iterator<Item = &'a T>,
) -> fmt::Result {
    for (i, value) in values.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

// ============================================================================
// Linear
// ============================================================================

/// Queue whose indices only move forward.
///
/// `front` advances on dequeue and `rear` on enqueue; neither wraps. Slots
/// before `front` are never reused, so a queue that has seen `capacity`
/// enqueues overflows even if it currently holds few values. Call
/// [`clear`](Self::clear) to start over.
///
/// # Example
///
/// ```
/// use primer_collections::{Error, LinearQueue, Queue};
///
/// let mut q = LinearQueue::with_capacity(2);
/// q.enqueue(1).unwrap();
/// q.enqueue(2).unwrap();
/// assert_eq!(q.dequeue(), Ok(1));
///
/// // The dequeued slot is not reclaimed.
/// assert_eq!(q.enqueue(3), Err(Error::Overflow { capacity: 2 }));
/// ```
pub struct LinearQueue<T> {
    slots: Box<[Option<T>]>,
    /// Next slot to dequeue.
    front: usize,
    /// Next slot to fill.
    rear: usize,
}

impl<T> LinearQueue<T> {
    /// Creates an empty queue with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            front: 0,
            rear: 0,
        }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drops every queued value and rewinds both indices to the first slot.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[self.front..self.rear] {
            *slot = None;
        }
        self.front = 0;
        self.rear = 0;
    }

    /// Iterates from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots[self.front..self.rear].iter().flatten()
    }
}

impl<T> Queue<T> for LinearQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::Overflow {
                capacity: self.capacity(),
            });
        }
        self.slots[self.rear] = Some(value);
        self.rear += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        if self.front == self.rear {
            return Err(Error::Underflow);
        }
        let value = self.slots[self.front].take().ok_or(Error::Underflow)?;
        self.front += 1;
        Ok(value)
    }

    fn front(&self) -> Result<&T> {
        if self.front == self.rear {
            return Err(Error::Empty);
        }
        self.slots[self.front].as_ref().ok_or(Error::Empty)
    }

    #[inline]
    fn len(&self) -> usize {
        self.rear - self.front
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.rear == self.slots.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinearQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearQueue")
            .field("front", &self.front)
            .field("rear", &self.rear)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Renders front to rear, space separated.
impl<T: fmt::Display> fmt::Display for LinearQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, self.iter())
    }
}

// ============================================================================
// Circular
// ============================================================================

/// Queue whose indices wrap modulo the capacity.
///
/// Empty is tracked by the absence of a front index; full is
/// `(rear + 1) % capacity == front`. Every slot is usable, so the queue holds
/// up to `capacity` values.
///
/// # Example
///
/// ```
/// use primer_collections::{CircularQueue, Queue};
///
/// let mut q = CircularQueue::with_capacity(2);
/// q.enqueue(1).unwrap();
/// q.enqueue(2).unwrap();
/// assert_eq!(q.dequeue(), Ok(1));
///
/// // The freed slot is reused by wrapping around.
/// q.enqueue(3).unwrap();
/// assert_eq!(q.iter().copied().collect::<Vec<_>>(), [2, 3]);
/// ```
pub struct CircularQueue<T> {
    slots: Box<[Option<T>]>,
    front: Option<usize>,
    rear: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            front: None,
            rear: 0,
        }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drops every queued value.
    pub fn clear(&mut self) {
        while self.dequeue().is_ok() {}
    }

    /// Iterates from front to rear, following the wrap.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let cap = self.slots.len();
        let start = self.front.unwrap_or(0);
        (0..self.len()).filter_map(move |i| self.slots[(start + i) % cap].as_ref())
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }
}

impl<T> Queue<T> for CircularQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::Overflow {
                capacity: self.capacity(),
            });
        }
        let rear = match self.front {
            None => {
                self.front = Some(0);
                0
            }
            Some(_) => self.advance(self.rear),
        };
        self.slots[rear] = Some(value);
        self.rear = rear;
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        let front = self.front.ok_or(Error::Underflow)?;
        let value = self.slots[front].take().ok_or(Error::Underflow)?;
        self.front = if front == self.rear {
            None
        } else {
            Some(self.advance(front))
        };
        Ok(value)
    }

    fn front(&self) -> Result<&T> {
        self.front
            .and_then(|front| self.slots[front].as_ref())
            .ok_or(Error::Empty)
    }

    fn len(&self) -> usize {
        match self.front {
            None => 0,
            Some(front) => {
                let cap = self.slots.len();
                (self.rear + cap - front) % cap + 1
            }
        }
    }

    fn is_full(&self) -> bool {
        match self.front {
            None => self.slots.is_empty(),
            Some(front) => self.advance(self.rear) == front,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("front", &self.front)
            .field("rear", &self.rear)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Renders front to rear, space separated.
impl<T: fmt::Display> fmt::Display for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<Q: Queue<i32>>(q: &mut Q) -> Vec<i32> {
        let mut out = Vec::new();
        while let Ok(v) = q.dequeue() {
            out.push(v);
        }
        out
    }

    #[test]
    fn linear_fifo() {
        let mut q = LinearQueue::with_capacity(5);
        for v in [10, 20, 30] {
            q.enqueue(v).unwrap();
        }
        assert_eq!(q.front(), Ok(&10));
        assert_eq!(q.len(), 3);
        assert_eq!(drain(&mut q), [10, 20, 30]);
    }

    #[test]
    fn linear_empty_errors() {
        let mut q: LinearQueue<i32> = LinearQueue::with_capacity(3);
        assert_eq!(q.dequeue(), Err(Error::Underflow));
        assert_eq!(q.front(), Err(Error::Empty));
    }

    #[test]
    fn linear_never_reclaims() {
        let mut q = LinearQueue::with_capacity(3);
        for round in 0..3 {
            q.enqueue(round).unwrap();
            assert_eq!(q.dequeue(), Ok(round));
        }
        assert!(q.is_empty());
        assert!(q.is_full());
        assert_eq!(q.enqueue(99), Err(Error::Overflow { capacity: 3 }));
    }

    #[test]
    fn linear_drained_then_refilled_after_clear() {
        let mut q = LinearQueue::with_capacity(2);
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();
        q.clear();
        assert!(q.is_empty());
        q.enqueue(3).unwrap();
        assert_eq!(q.to_string(), "3");
    }

    #[test]
    fn linear_zero_capacity() {
        let mut q = LinearQueue::with_capacity(0);
        assert_eq!(q.enqueue(1), Err(Error::Overflow { capacity: 0 }));
    }

    #[test]
    fn circular_fifo() {
        let mut q = CircularQueue::with_capacity(4);
        for v in [1, 2, 3, 4] {
            q.enqueue(v).unwrap();
        }
        assert!(q.is_full());
        assert_eq!(q.enqueue(5), Err(Error::Overflow { capacity: 4 }));
        assert_eq!(drain(&mut q), [1, 2, 3, 4]);
        assert!(q.is_empty());
    }

    #[test]
    fn circular_wraps() {
        let mut q = CircularQueue::with_capacity(3);
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();
        q.enqueue(3).unwrap();
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.dequeue(), Ok(2));
        q.enqueue(4).unwrap();
        q.enqueue(5).unwrap();

        assert_eq!(q.len(), 3);
        assert_eq!(q.to_string(), "3 4 5");
        assert_eq!(q.front(), Ok(&3));
        assert_eq!(drain(&mut q), [3, 4, 5]);
    }

    #[test]
    fn circular_sustains_many_rounds() {
        let mut q = CircularQueue::with_capacity(2);
        for v in 0..100 {
            q.enqueue(v).unwrap();
            assert_eq!(q.dequeue(), Ok(v));
        }
        assert_eq!(q.dequeue(), Err(Error::Underflow));
        assert_eq!(q.front(), Err(Error::Empty));
    }

    #[test]
    fn circular_single_slot() {
        let mut q = CircularQueue::with_capacity(1);
        q.enqueue(7).unwrap();
        assert!(q.is_full());
        assert_eq!(q.enqueue(8), Err(Error::Overflow { capacity: 1 }));
        assert_eq!(q.dequeue(), Ok(7));
        q.enqueue(8).unwrap();
        assert_eq!(q.front(), Ok(&8));
    }

    #[test]
    fn circular_zero_capacity() {
        let mut q = CircularQueue::with_capacity(0);
        assert!(q.is_full());
        assert_eq!(q.enqueue(1), Err(Error::Overflow { capacity: 0 }));
        assert_eq!(q.dequeue(), Err(Error::Underflow));
    }
}
