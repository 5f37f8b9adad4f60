//! Textbook containers with explicit ownership and typed failures.
//!
//! Every structure here is a plain value that owns its elements. Node-based
//! containers keep their nodes in keyed slot storage and link them by key, so
//! releasing a node is the storage's job and a removed node can never be
//! reached again.
//!
//! ```text
//! SlotStorage<Node<T>>   - owns nodes, hands out stable keys
//! SinglyList / Doubly... - link keys into a chain, own the storage
//! ```
//!
//! # Containers
//!
//! | Structure | Backing | Key Operations |
//! |-----------|---------|----------------|
//! | [`BoundedArray`] | fixed buffer | positional insert/delete, rotate, reverse |
//! | [`SinglyList`] | slot storage | push, remove by value, in-place reverse |
//! | [`DoublyList`] | slot storage | push/pop at both ends, backward walk |
//! | [`CircularList`] | slot storage | walk once around from any node |
//! | [`ArrayStack`], [`LinkedStack`] | buffer / list | push, pop, peek |
//! | [`LinearQueue`], [`CircularQueue`] | slot buffer | enqueue, dequeue, front |
//! | [`ChainedHashTable`] | buckets + slot storage | insert, search |
//! | [`MaxHeap`] | fixed buffer | insert, extract_max |
//! | [`BinaryTree`] | owned boxes | height, level-order walks |
//!
//! # Failures
//!
//! Fallible operations return [`Result`] with an [`Error`] naming the
//! condition: a full structure, an empty one, a bad position, or a missing
//! element. Failed calls never modify the container.
//!
//! ```
//! use primer_collections::{ArrayStack, Error, Stack};
//!
//! let mut stack: ArrayStack<i32> = ArrayStack::with_capacity(1);
//! assert_eq!(stack.pop(), Err(Error::Underflow));
//! stack.push(7).unwrap();
//! assert_eq!(stack.push(8), Err(Error::Overflow { capacity: 1 }));
//! ```
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`, usable as node storage
//!   for any list or the linked stack

#![warn(missing_docs)]

pub mod array;
pub mod error;
pub mod hash;
pub mod heap;
pub mod list;
pub mod queue;
pub mod stack;
pub mod storage;
pub mod tree;

pub use array::BoundedArray;
pub use error::{Error, Full, Result};
pub use hash::{Chain, ChainedHashTable};
pub use heap::MaxHeap;
pub use list::{
    CircularIter, CircularList, DoublyIter, DoublyList, DoublyNode, Node, SinglyIter, SinglyList,
};
pub use queue::{CircularQueue, LinearQueue, Queue};
pub use stack::{ArrayStack, LinkedStack, Stack};
pub use storage::{Key, SlotStorage, Storage};
pub use tree::{BinaryTree, Level, LevelOrder, LevelOrderQueue, TreeNode};
