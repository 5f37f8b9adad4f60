//! Linked lists over keyed node storage.
//!
//! Each list owns a [`Storage`] holding its nodes and links them with
//! [`Key`]s. Dropping a list drops its storage, which releases every node.
//! Removing a node vacates its slot; the old key resolves to nothing until a
//! later insert reuses the slot, so keys are valid only while their node is
//! in the list.
//!
//! | List | Links | Traversal |
//! |------|-------|-----------|
//! | [`SinglyList`] | `next` | front to back, in-place reversal |
//! | [`DoublyList`] | `prev`, `next` | both directions |
//! | [`CircularList`] | `next`, last links to head | from any node, once around |
//!
//! # Example
//!
//! ```
//! use primer_collections::SinglyList;
//!
//! let mut list: SinglyList<i32> = SinglyList::new();
//! list.push_back(10).unwrap();
//! list.push_back(20).unwrap();
//! list.push_back(30).unwrap();
//! list.push_front(5).unwrap();
//! assert_eq!(list.to_string(), "5 -> 10 -> 20 -> 30 -> NULL");
//!
//! list.remove(&20).unwrap();
//! list.reverse();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [30, 10, 5]);
//! ```

mod circular;
mod doubly;
mod singly;

pub use circular::{CircularIter, CircularList};
pub use doubly::{DoublyIter, DoublyList, DoublyNode};
pub use singly::{SinglyIter, SinglyList};

use crate::{Error, Key, Storage};

/// A node with a single forward link.
///
/// Shared by [`SinglyList`], [`CircularList`], the linked stack and the hash
/// table's chains. Users only see `&T`; the link is managed by the container.
#[derive(Debug)]
pub struct Node<T, K: Key = u32> {
    pub(crate) value: T,
    pub(crate) next: K,
}

impl<T, K: Key> Node<T, K> {
    #[inline]
    pub(crate) fn new(value: T, next: K) -> Self {
        Self { value, next }
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Maps a storage refusal to the container-level error.
pub(crate) fn capacity_error<N, S: Storage<N>>(storage: &S) -> Error {
    Error::CapacityExceeded {
        capacity: storage.limit().unwrap_or_else(|| storage.len()),
    }
}
