use std::collections::HashMap;

use crate::error::Error;
use crate::error::Result;

pub type Vertex = u32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub to: Vertex,
    pub weight: f64,
}

/// Directed weighted graph stored as adjacency lists.
///
/// - Vertex ids are arbitrary `u32` values; each one is assigned a dense slot in first-seen
///   order and all per-vertex storage is indexed by that slot.
/// - Edge targets are registered on first reference.
/// - Parallel edges are kept. `neighbors` yields the most recently added edge first.
#[derive(Clone, Debug, Default)]
pub struct DirectedGraph {
    vertices: Vec<Vertex>,
    slots: HashMap<Vertex, usize>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            slots: HashMap::with_capacity(vertex_count),
            adjacency: Vec::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    pub fn from_edges(edges: &[(Vertex, Vertex, f64)]) -> Result<Self> {
        let mut graph = Self::new();
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Registers `v` with no outgoing edges. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, v: Vertex) -> bool {
        if self.slots.contains_key(&v) {
            return false;
        }
        self.push_vertex(v);
        true
    }

    /// Adds the directed edge `from -> to`, creating either endpoint if needed.
    ///
    /// A negative, NaN or infinite weight is rejected before anything is modified.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidEdgeWeight { from, to, weight });
        }

        let from_slot = self.slot_or_insert(from);
        self.slot_or_insert(to);
        self.adjacency[from_slot].push(Edge { to, weight });
        self.edge_count += 1;
        Ok(())
    }

    #[inline]
    pub fn contains(&self, v: Vertex) -> bool {
        self.slots.contains_key(&v)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All vertices in first-seen order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Dense slot of `v`, in `0..vertex_count()`.
    #[inline]
    pub fn slot(&self, v: Vertex) -> Option<usize> {
        self.slots.get(&v).copied()
    }

    pub fn neighbors(&self, v: Vertex) -> Result<Neighbors<'_>> {
        let slot = self.slot(v).ok_or(Error::UnknownVertex(v))?;
        Ok(self.neighbors_at(slot))
    }

    pub fn out_degree(&self, v: Vertex) -> Result<usize> {
        let slot = self.slot(v).ok_or(Error::UnknownVertex(v))?;
        Ok(self.adjacency[slot].len())
    }

    #[inline]
    pub(crate) fn neighbors_at(&self, slot: usize) -> Neighbors<'_> {
        let edges = &self.adjacency[slot];
        Neighbors {
            edges,
            remain: edges.len(),
        }
    }

    /// Edges of the vertex at `slot` in the order they were added.
    #[inline]
    pub(crate) fn insertion_ordered(&self, slot: usize) -> &[Edge] {
        &self.adjacency[slot]
    }

    fn slot_or_insert(&mut self, v: Vertex) -> usize {
        match self.slots.get(&v) {
            Some(&slot) => slot,
            None => self.push_vertex(v),
        }
    }

    fn push_vertex(&mut self, v: Vertex) -> usize {
        let slot = self.vertices.len();
        self.vertices.push(v);
        self.slots.insert(v, slot);
        self.adjacency.push(Vec::new());
        slot
    }
}

/// Outgoing edges of one vertex, newest first.
pub struct Neighbors<'a> {
    edges: &'a [Edge],
    remain: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remain == 0 {
            return None;
        }
        self.remain -= 1;
        Some(self.edges[self.remain])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remain, Some(self.remain))
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

#[cfg(test)]
mod tests {
    use super::DirectedGraph;
    use super::Edge;
    use crate::error::Error;

    #[test]
    fn add_vertex_reports_presence() {
        let mut g = DirectedGraph::new();
        assert!(g.add_vertex(3));
        assert!(!g.add_vertex(3));
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.neighbors(3).unwrap().count(), 0);
    }

    #[test]
    fn add_edge_creates_both_endpoints() {
        let mut g = DirectedGraph::new();
        g.add_edge(10, 20, 1.5).unwrap();
        assert!(g.contains(10));
        assert!(g.contains(20));
        assert_eq!(g.vertices(), &[10, 20]);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.out_degree(20).unwrap(), 0);
    }

    #[test]
    fn neighbors_yield_newest_edge_first() {
        let mut g = DirectedGraph::new();
        g.add_edge(1, 2, 1.0).unwrap();
        g.add_edge(1, 3, 4.0).unwrap();
        g.add_edge(1, 2, 7.0).unwrap();

        let got: Vec<Edge> = g.neighbors(1).unwrap().collect();
        assert_eq!(
            got,
            vec![
                Edge { to: 2, weight: 7.0 },
                Edge { to: 3, weight: 4.0 },
                Edge { to: 2, weight: 1.0 },
            ]
        );
        assert_eq!(g.neighbors(1).unwrap().len(), 3);
    }

    #[test]
    fn negative_weight_leaves_graph_unchanged() {
        let mut g = DirectedGraph::from_edges(&[(1, 3, 2.0), (3, 1, 1.0), (1, 4, 0.5)]).unwrap();
        let vertices = g.vertices().to_vec();
        let before: Vec<Edge> = g.neighbors(1).unwrap().collect();

        let err = g.add_edge(1, 2, -3.0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEdgeWeight {
                from: 1,
                to: 2,
                ..
            }
        ));
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.vertices(), vertices.as_slice());
        assert!(!g.contains(2));
        assert_eq!(g.neighbors(1).unwrap().collect::<Vec<_>>(), before);

        let mut empty = DirectedGraph::new();
        assert!(empty.add_edge(5, 6, -1.0).is_err());
        assert_eq!(empty.vertex_count(), 0);
    }

    #[test]
    fn non_finite_weights_are_rejected() {
        let mut g = DirectedGraph::new();
        for w in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                g.add_edge(0, 1, w),
                Err(Error::InvalidEdgeWeight { .. })
            ));
        }
        g.add_edge(0, 1, 0.0).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn unknown_vertex_is_an_error() {
        let g = DirectedGraph::from_edges(&[(0, 1, 2.0)]).unwrap();
        assert!(matches!(g.neighbors(9), Err(Error::UnknownVertex(9))));
        assert!(matches!(g.out_degree(9), Err(Error::UnknownVertex(9))));
    }
}
