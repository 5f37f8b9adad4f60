//! Adjacency-matrix graphs with breadth-first and depth-first traversal.
//!
//! Vertices are the indices `0..vertex_count`; the matrix holds one boolean
//! per ordered pair. Traversals borrow the graph and yield vertices lazily:
//!
//! ```
//! use primer_graph::AdjacencyMatrix;
//!
//! //   0 ── 1 ── 3
//! //   │    │
//! //   2 ── 4
//! let graph = AdjacencyMatrix::from_edges(5, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 4)]).unwrap();
//!
//! let bfs: Vec<usize> = graph.bfs(0).unwrap().collect();
//! assert_eq!(bfs, [0, 1, 2, 3, 4]);
//!
//! let mut dfs = Vec::new();
//! graph.dfs_recursive(0, |v| dfs.push(v)).unwrap();
//! assert_eq!(dfs, [0, 1, 3, 4, 2]);
//! ```
//!
//! Errors are [`primer_collections::Error`]; a start vertex outside the
//! graph is [`InvalidIndex`](primer_collections::Error::InvalidIndex).

#![warn(missing_docs)]

pub mod matrix;
pub mod traversal;

pub use matrix::AdjacencyMatrix;
pub use traversal::{Bfs, Dfs};
