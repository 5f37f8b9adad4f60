//! Dense adjacency matrix over vertices `0..vertex_count`.

use core::fmt;

use primer_collections::{Error, Result};

/// A `V × V` table of edges, stored row-major.
///
/// Entry `(u, v)` means an edge from `u` to `v`. Undirected graphs keep the
/// table symmetric by inserting both directions ([`add_edge`](Self::add_edge));
/// directed graphs insert one ([`add_arc`](Self::add_arc)).
///
/// # Example
///
/// ```
/// use primer_graph::AdjacencyMatrix;
///
/// let graph = AdjacencyMatrix::from_edges(5, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 4)]).unwrap();
/// assert!(graph.has_edge(4, 2));
/// assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), [0, 3, 4]);
/// assert!(graph.is_symmetric());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            cells: vec![false; vertex_count * vertex_count],
        }
    }

    /// Builds an undirected graph from a list of edges.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`] if an endpoint is not below `vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Builds a graph from a square table; any non-zero entry is an edge.
    ///
    /// The table is taken as given, so an asymmetric table yields a directed
    /// graph.
    pub fn from_rows<const N: usize>(rows: &[[u8; N]; N]) -> Self {
        let mut graph = Self::new(N);
        for (u, row) in rows.iter().enumerate() {
            for (v, &cell) in row.iter().enumerate() {
                graph.cells[u * N + v] = cell != 0;
            }
        }
        graph
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`] if either endpoint is out of range; the graph
    /// is unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check(u)?;
        self.check(v)?;
        self.set(u, v);
        self.set(v, u);
        Ok(())
    }

    /// Adds a directed edge from `u` to `v`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`] if either endpoint is out of range.
    pub fn add_arc(&mut self, u: usize, v: usize) -> Result<()> {
        self.check(u)?;
        self.check(v)?;
        self.set(u, v);
        Ok(())
    }

    /// Returns `true` if there is an edge from `u` to `v`. Out-of-range
    /// vertices have no edges.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.vertex_count && v < self.vertex_count && self.cells[u * self.vertex_count + v]
    }

    /// Iterates over the successors of `u` in increasing index order.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        let row: &[bool] = if u < self.vertex_count {
            &self.cells[u * self.vertex_count..(u + 1) * self.vertex_count]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter_map(|(v, &edge)| edge.then_some(v))
    }

    /// Returns `true` if every edge has its reverse, i.e. the graph is
    /// undirected.
    pub fn is_symmetric(&self) -> bool {
        let n = self.vertex_count;
        (0..n).all(|u| (u + 1..n).all(|v| self.cells[u * n + v] == self.cells[v * n + u]))
    }

    pub(crate) fn check(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(Error::InvalidIndex {
                index: vertex,
                len: self.vertex_count,
            })
        }
    }

    #[inline]
    fn set(&mut self, u: usize, v: usize) {
        self.cells[u * self.vertex_count + v] = true;
    }
}

impl fmt::Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for u in 0..self.vertex_count {
            map.entry(&u, &self.neighbors(u).collect::<Vec<_>>());
        }
        map.finish()
    }
}

/// Renders one row per line as `0`/`1` separated by spaces.
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count;
        for u in 0..n {
            if u > 0 {
                f.write_str("\n")?;
            }
            for v in 0..n {
                if v > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if self.cells[u * n + v] { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}
