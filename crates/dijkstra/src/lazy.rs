use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::Distance;
use crate::INF;
use crate::error::Error;
use crate::error::Result;
use crate::graph::DirectedGraph;
use crate::graph::Vertex;

#[derive(Clone, Copy, Debug)]
struct State {
    dist: Distance,
    slot: usize,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so that `BinaryHeap` pops the smallest distance.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

/// Dijkstra over `std::collections::BinaryHeap` without decrease-key: improved distances are
/// pushed again and stale entries are skipped on pop.
///
/// Returns distances in the graph's vertex order.
pub fn dijkstra_lazy_heap(graph: &DirectedGraph, source: Vertex) -> Result<Vec<Distance>> {
    let n = graph.vertex_count();
    let source = graph.slot(source).ok_or(Error::UnknownVertex(source))?;
    let mut dist = vec![INF; n];

    let mut heap = BinaryHeap::new();
    dist[source] = 0.0;
    heap.push(State {
        dist: 0.0,
        slot: source,
    });

    while let Some(State { dist: d, slot: u }) = heap.pop() {
        if d != dist[u] {
            continue;
        }

        for edge in graph.neighbors_at(u) {
            let v = graph.slot(edge.to).ok_or(Error::UnknownVertex(edge.to))?;
            let cand = d + edge.weight;
            if cand < dist[v] {
                dist[v] = cand;
                heap.push(State { dist: cand, slot: v });
            }
        }
    }

    Ok(dist)
}
