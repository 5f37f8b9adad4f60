//! Breadth-first and depth-first traversal.
//!
//! Both traversals are lazy iterators yielding vertex indices. Neighbors are
//! always considered in increasing index order, and each vertex reachable
//! from the start is yielded exactly once.
//!
//! [`AdjacencyMatrix::dfs_recursive`] is the call-stack formulation of DFS;
//! [`AdjacencyMatrix::dfs`] produces the same order with an explicit stack
//! and is the one to use when paths may be long.

use primer_collections::{LinearQueue, Queue, Result};

use crate::AdjacencyMatrix;

impl AdjacencyMatrix {
    /// Breadth-first traversal from `start`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`](primer_collections::Error::InvalidIndex) if
    /// `start` is not a vertex.
    ///
    /// # Example
    ///
    /// ```
    /// use primer_graph::AdjacencyMatrix;
    ///
    /// let graph = AdjacencyMatrix::from_edges(5, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 4)]).unwrap();
    /// assert_eq!(graph.bfs(0).unwrap().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    /// ```
    pub fn bfs(&self, start: usize) -> Result<Bfs<'_>> {
        self.check(start)?;
        Ok(Bfs::new(self, start))
    }

    /// Depth-first traversal from `start`, iterative.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`](primer_collections::Error::InvalidIndex) if
    /// `start` is not a vertex.
    ///
    /// # Example
    ///
    /// ```
    /// use primer_graph::AdjacencyMatrix;
    ///
    /// let graph = AdjacencyMatrix::from_edges(5, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 4)]).unwrap();
    /// assert_eq!(graph.dfs(0).unwrap().collect::<Vec<_>>(), [0, 1, 3, 4, 2]);
    /// ```
    pub fn dfs(&self, start: usize) -> Result<Dfs<'_>> {
        self.check(start)?;
        Ok(Dfs::new(self, start))
    }

    /// Depth-first traversal from `start`, calling `visit` on each vertex in
    /// discovery order.
    ///
    /// Recursion depth equals the longest path explored, at most
    /// `vertex_count`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidIndex`](primer_collections::Error::InvalidIndex) if
    /// `start` is not a vertex; `visit` is never called.
    pub fn dfs_recursive<F>(&self, start: usize, mut visit: F) -> Result<()>
    where
        F: FnMut(usize),
    {
        fn descend<F: FnMut(usize)>(
            graph: &AdjacencyMatrix,
            u: usize,
            visited: &mut [bool],
            visit: &mut F,
        ) {
            visited[u] = true;
            visit(u);
            for v in graph.neighbors(u) {
                if !visited[v] {
                    descend(graph, v, visited, visit);
                }
            }
        }

        self.check(start)?;
        let mut visited = vec![false; self.vertex_count()];
        descend(self, start, &mut visited, &mut visit);
        Ok(())
    }
}

// ============================================================================
// BFS
// ============================================================================

/// Breadth-first iterator. See [`AdjacencyMatrix::bfs`].
///
/// A vertex is marked visited when it is enqueued, so it enters the queue at
/// most once and a queue of `vertex_count` slots never overflows.
pub struct Bfs<'a> {
    graph: &'a AdjacencyMatrix,
    visited: Vec<bool>,
    queue: LinearQueue<usize>,
}

impl<'a> Bfs<'a> {
    fn new(graph: &'a AdjacencyMatrix, start: usize) -> Self {
        let n = graph.vertex_count();
        let mut bfs = Self {
            graph,
            visited: vec![false; n],
            queue: LinearQueue::with_capacity(n),
        };
        bfs.discover(start);
        bfs
    }

    fn discover(&mut self, v: usize) {
        self.visited[v] = true;
        if let Err(err) = self.queue.enqueue(v) {
            unreachable!("vertex {v} enqueued twice: {err}");
        }
    }

    /// Returns `true` if `v` has been reached so far.
    pub fn did_visit(&self, v: usize) -> bool {
        self.visited.get(v).copied().unwrap_or(false)
    }
}

impl Iterator for Bfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let u = self.queue.dequeue().ok()?;
        let graph = self.graph;
        for v in graph.neighbors(u) {
            if !self.visited[v] {
                self.discover(v);
            }
        }
        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let unvisited = self.visited.iter().filter(|&&seen| !seen).count();
        (self.queue.len(), Some(self.queue.len() + unvisited))
    }
}

// ============================================================================
// DFS
// ============================================================================

/// Depth-first iterator. See [`AdjacencyMatrix::dfs`].
///
/// Each stack frame is `(vertex, next neighbor to try)`, mirroring the loop
/// state of one recursive call.
pub struct Dfs<'a> {
    graph: &'a AdjacencyMatrix,
    visited: Vec<bool>,
    stack: Vec<(usize, usize)>,
    start: Option<usize>,
}

impl<'a> Dfs<'a> {
    fn new(graph: &'a AdjacencyMatrix, start: usize) -> Self {
        Self {
            graph,
            visited: vec![false; graph.vertex_count()],
            stack: Vec::new(),
            start: Some(start),
        }
    }

    fn enter(&mut self, v: usize) -> usize {
        self.visited[v] = true;
        self.stack.push((v, 0));
        v
    }

    /// Returns `true` if `v` has been reached so far.
    pub fn did_visit(&self, v: usize) -> bool {
        self.visited.get(v).copied().unwrap_or(false)
    }
}

impl Iterator for Dfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if let Some(start) = self.start.take() {
            return Some(self.enter(start));
        }

        let n = self.graph.vertex_count();
        while let Some(frame) = self.stack.last_mut() {
            let (u, from) = *frame;
            let next = (from..n).find(|&v| self.graph.has_edge(u, v) && !self.visited[v]);
            match next {
                Some(v) => {
                    frame.1 = v + 1;
                    return Some(self.enter(v));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_collections::Error;

    fn sample() -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(5, &[(0, 1), (0, 2), (1, 3), (1, 4), (2, 4)]).unwrap()
    }

    fn recursive_order(graph: &AdjacencyMatrix, start: usize) -> Vec<usize> {
        let mut order = Vec::new();
        graph.dfs_recursive(start, |v| order.push(v)).unwrap();
        order
    }

    #[test]
    fn bfs_visits_by_distance() {
        let graph = sample();
        assert_eq!(graph.bfs(0).unwrap().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
        assert_eq!(graph.bfs(3).unwrap().collect::<Vec<_>>(), [3, 1, 0, 4, 2]);
    }

    #[test]
    fn dfs_iterative_matches_recursive() {
        let graph = sample();
        for start in 0..5 {
            let iterative: Vec<usize> = graph.dfs(start).unwrap().collect();
            assert_eq!(iterative, recursive_order(&graph, start), "start {start}");
        }
        assert_eq!(recursive_order(&graph, 0), [0, 1, 3, 4, 2]);
    }

    #[test]
    fn unreachable_vertices_are_skipped() {
        let graph = AdjacencyMatrix::from_edges(5, &[(0, 1), (3, 4)]).unwrap();
        assert_eq!(graph.bfs(0).unwrap().collect::<Vec<_>>(), [0, 1]);
        assert_eq!(graph.dfs(4).unwrap().collect::<Vec<_>>(), [4, 3]);

        let mut bfs = graph.bfs(2).unwrap();
        assert_eq!(bfs.next(), Some(2));
        assert_eq!(bfs.next(), None);
        assert!(!bfs.did_visit(0));
    }

    #[test]
    fn directed_graph_follows_arcs() {
        let graph = AdjacencyMatrix::from_rows(&[[0, 1, 0], [0, 0, 1], [0, 0, 0]]);
        assert_eq!(graph.bfs(0).unwrap().collect::<Vec<_>>(), [0, 1, 2]);
        assert_eq!(graph.bfs(2).unwrap().collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn invalid_start() {
        let graph = sample();
        assert_eq!(
            graph.bfs(5).err(),
            Some(Error::InvalidIndex { index: 5, len: 5 })
        );
        assert_eq!(
            graph.dfs(7).err(),
            Some(Error::InvalidIndex { index: 7, len: 5 })
        );

        let mut called = false;
        assert!(graph.dfs_recursive(5, |_| called = true).is_err());
        assert!(!called);
    }

    #[test]
    fn complete_graph_uses_every_queue_slot() {
        let n = 6;
        let mut graph = AdjacencyMatrix::new(n);
        for u in 0..n {
            for v in 0..n {
                graph.add_arc(u, v).unwrap();
            }
        }
        // Every vertex is enqueued from the start, filling all `n` slots.
        for start in 0..n {
            let mut order: Vec<usize> = graph.bfs(start).unwrap().collect();
            order.sort_unstable();
            assert_eq!(order, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn self_loop_visited_once() {
        let mut graph = AdjacencyMatrix::new(2);
        graph.add_arc(0, 0).unwrap();
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.bfs(0).unwrap().collect::<Vec<_>>(), [0, 1]);
        assert_eq!(graph.dfs(0).unwrap().collect::<Vec<_>>(), [0, 1]);
    }
}
