use tracing::debug;
use tracing::trace;

use crate::Distance;
use crate::INF;
use crate::error::Error;
use crate::error::Result;
use crate::graph::DirectedGraph;
use crate::graph::Vertex;
use crate::heap::HeapEntry;
use crate::heap::IndexedMinHeap;

/// Dijkstra over a borrowed graph, driven by [`IndexedMinHeap`].
///
/// Every run seeds a fresh heap with all vertices, so repeated runs on the same graph are
/// independent. Edge weights are non-negative by construction of [`DirectedGraph`].
#[derive(Clone, Copy, Debug)]
pub struct ShortestPathEngine<'g> {
    graph: &'g DirectedGraph,
}

impl<'g> ShortestPathEngine<'g> {
    pub fn new(graph: &'g DirectedGraph) -> Self {
        Self { graph }
    }

    pub fn run(&self, source: Vertex) -> Result<DistanceMap<'g>> {
        let graph = self.graph;
        let n = graph.vertex_count();
        let source_slot = graph.slot(source).ok_or(Error::UnknownVertex(source))?;
        debug!(
            source,
            vertices = n,
            edges = graph.edge_count(),
            "shortest-path run started"
        );

        let mut heap = IndexedMinHeap::with_capacity(n);
        let mut dist = vec![INF; n];
        for &v in graph.vertices() {
            heap.insert(v, INF)?;
        }
        heap.decrease_key(source, 0.0)?;
        dist[source_slot] = 0.0;

        let mut explored = vec![false; n];
        let mut settled = Vec::with_capacity(n);

        while !heap.is_empty() {
            let HeapEntry { vertex: u, key } = heap.extract_min()?;
            let u_slot = graph.slot(u).ok_or(Error::UnknownVertex(u))?;
            if explored[u_slot] {
                return Err(Error::VertexReextracted(u));
            }
            explored[u_slot] = true;
            settled.push(u);
            debug_assert!(key == dist[u_slot], "heap key diverged from distance");
            trace!(vertex = u, distance = key, "settled");

            let du = dist[u_slot];
            for edge in graph.neighbors_at(u_slot) {
                let v_slot = graph.slot(edge.to).ok_or(Error::UnknownVertex(edge.to))?;
                if explored[v_slot] {
                    continue;
                }
                let cand = du + edge.weight;
                if cand < dist[v_slot] {
                    dist[v_slot] = cand;
                    heap.decrease_key(edge.to, cand)?;
                }
            }
        }

        debug!(
            source,
            reachable = dist.iter().filter(|d| d.is_finite()).count(),
            "shortest-path run finished"
        );
        Ok(DistanceMap {
            graph,
            dist,
            settled,
        })
    }
}

/// Result of one [`ShortestPathEngine::run`].
///
/// Distances are stored per graph slot; unreachable vertices hold [`INF`].
#[derive(Clone, Debug)]
pub struct DistanceMap<'g> {
    graph: &'g DirectedGraph,
    dist: Vec<Distance>,
    settled: Vec<Vertex>,
}

impl DistanceMap<'_> {
    /// Distance to `v`, or `None` if `v` is not a vertex of the graph.
    #[inline]
    pub fn get(&self, v: Vertex) -> Option<Distance> {
        self.graph.slot(v).map(|slot| self.dist[slot])
    }

    #[inline]
    pub fn is_reachable(&self, v: Vertex) -> bool {
        self.get(v).is_some_and(|d| d < INF)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Distances in the graph's vertex order.
    #[inline]
    pub fn as_slice(&self) -> &[Distance] {
        &self.dist
    }

    /// Vertices in the order they were finalized.
    #[inline]
    pub fn settle_order(&self) -> &[Vertex] {
        &self.settled
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Distance)> + '_ {
        self.graph
            .vertices()
            .iter()
            .copied()
            .zip(self.dist.iter().copied())
    }
}

impl PartialEq for DistanceMap<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.graph.vertices() == other.graph.vertices()
            && self.dist == other.dist
            && self.settled == other.settled
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::ShortestPathEngine;
    use crate::INF;
    use crate::error::Error;
    use crate::graph::DirectedGraph;

    fn four_vertex_graph() -> DirectedGraph {
        DirectedGraph::from_edges(&[
            (1, 2, 1.0),
            (1, 3, 4.0),
            (2, 3, 2.0),
            (2, 4, 6.0),
            (3, 4, 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn four_vertex_example() {
        let g = four_vertex_graph();
        let dist = ShortestPathEngine::new(&g).run(1).unwrap();
        assert_eq!(dist.get(1), Some(0.0));
        assert_eq!(dist.get(2), Some(1.0));
        assert_eq!(dist.get(3), Some(3.0));
        assert_eq!(dist.get(4), Some(6.0));
        assert_eq!(dist.settle_order(), &[1, 2, 3, 4]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = four_vertex_graph();
        let engine = ShortestPathEngine::new(&g);
        let first = engine.run(2).unwrap();
        let second = engine.run(2).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.get(1), Some(INF));
    }

    #[test]
    fn unreachable_vertices_keep_infinity() {
        let mut g = DirectedGraph::from_edges(&[(0, 1, 0.0), (1, 2, 0.0), (4, 5, 7.0)]).unwrap();
        g.add_vertex(9);
        let dist = ShortestPathEngine::new(&g).run(0).unwrap();

        assert_eq!(dist.get(2), Some(0.0));
        for v in [4, 5, 9] {
            assert_eq!(dist.get(v), Some(INF), "v={v}");
            assert!(!dist.is_reachable(v));
        }
        assert!(dist.is_reachable(1));
        assert_eq!(dist.get(42), None);
    }

    #[test]
    fn every_vertex_settles_exactly_once() {
        let g = DirectedGraph::from_edges(&[
            (0, 1, 3.0),
            (0, 2, 1.0),
            (2, 1, 1.0),
            (1, 3, 2.0),
            (3, 0, 1.0),
            (5, 3, 1.0),
        ])
        .unwrap();
        let dist = ShortestPathEngine::new(&g).run(0).unwrap();

        let order = dist.settle_order();
        assert_eq!(order.len(), g.vertex_count());
        let unique: HashSet<_> = order.iter().copied().collect();
        assert_eq!(unique.len(), order.len());
        assert_eq!(&order[..4], &[0, 2, 1, 3]);
        assert_eq!(order[4], 5);
    }

    #[test]
    fn parallel_edges_use_the_lighter_one() {
        let g = DirectedGraph::from_edges(&[(0, 1, 9.0), (0, 1, 2.0), (0, 1, 5.0)]).unwrap();
        let dist = ShortestPathEngine::new(&g).run(0).unwrap();
        assert_eq!(dist.get(1), Some(2.0));
    }

    #[test]
    fn self_loops_and_zero_weights() {
        let g = DirectedGraph::from_edges(&[(0, 0, 0.0), (0, 1, 0.0), (1, 1, 3.0), (1, 0, 0.0)])
            .unwrap();
        let dist = ShortestPathEngine::new(&g).run(1).unwrap();
        assert_eq!(dist.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn unknown_source_fails() {
        let g = four_vertex_graph();
        let err = ShortestPathEngine::new(&g).run(99).unwrap_err();
        assert!(matches!(err, Error::UnknownVertex(99)));
    }

    #[test]
    fn single_vertex_graph() {
        let mut g = DirectedGraph::new();
        g.add_vertex(5);
        let dist = ShortestPathEngine::new(&g).run(5).unwrap();
        assert_eq!(dist.iter().collect::<Vec<_>>(), vec![(5, 0.0)]);
        assert_eq!(dist.len(), 1);
    }

    #[test]
    fn fractional_weights() {
        let g = DirectedGraph::from_edges(&[(0, 1, 0.25), (1, 2, 0.5), (0, 2, 1.0)]).unwrap();
        let dist = ShortestPathEngine::new(&g).run(0).unwrap();
        assert_eq!(dist.get(2), Some(0.75));
    }
}
