pub mod adjacency;
mod engine;
mod error;
pub mod generator;
pub mod graph;
pub mod heap;
mod lazy;

pub use engine::DistanceMap;
pub use engine::ShortestPathEngine;
pub use error::Error;
pub use error::Result;
pub use graph::DirectedGraph;
pub use graph::Edge;
pub use graph::Vertex;
pub use heap::HeapEntry;
pub use heap::IndexedMinHeap;
pub use lazy::dijkstra_lazy_heap;

pub type Distance = f64;

/// Distance of a vertex with no path from the source.
pub const INF: Distance = f64::INFINITY;
