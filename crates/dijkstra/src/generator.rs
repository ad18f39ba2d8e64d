use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::graph::DirectedGraph;
use crate::graph::Vertex;

// Integral weights keep every path sum exact in f64.
const C_MAX: u64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    DenseZero,
    AlmostLine,
    GridRandom,
    WrongDijkstraKiller,
}

impl GraphCase {
    pub const ALL: [GraphCase; 6] = [
        Self::SparseRandom,
        Self::DenseRandom,
        Self::DenseZero,
        Self::AlmostLine,
        Self::GridRandom,
        Self::WrongDijkstraKiller,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::DenseZero => "dense_zero",
            Self::AlmostLine => "almost_line",
            Self::GridRandom => "grid_random",
            Self::WrongDijkstraKiller => "wrong_dijkstra_killer",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: DirectedGraph,
    pub source: Vertex,
}

type EdgeList = Vec<(Vertex, Vertex, f64)>;

/// Builds a seeded graph of roughly `size` vertices from the given family.
///
/// Vertices are `0..n` and all of them are registered, including isolated ones.
pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (n, edges, source) = match case {
        GraphCase::SparseRandom => sparse_random(&mut rng, size.max(32), 4),
        GraphCase::DenseRandom => dense(&mut rng, floor_sqrt(size).max(8), false),
        GraphCase::DenseZero => dense(&mut rng, floor_sqrt(size).max(8), true),
        GraphCase::AlmostLine => almost_line(&mut rng, size.max(64)),
        GraphCase::GridRandom => grid_random(&mut rng, size.max(64)),
        GraphCase::WrongDijkstraKiller => wrong_dijkstra_killer(size.max(64)),
    };

    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v as Vertex);
    }
    for (from, to, weight) in edges {
        graph.add_edge(from, to, weight)?;
    }

    Ok(GeneratedGraph {
        graph,
        source: source as Vertex,
    })
}

fn sparse_random(rng: &mut StdRng, n: usize, edge_factor: usize) -> (usize, EdgeList, usize) {
    let m_target = n.saturating_mul(edge_factor).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        let w = random_weight(rng, C_MAX);
        push_unique_edge(&mut edges, &mut used, u, v, w);
    }

    (n, edges, rng.random_range(0..n))
}

fn dense(rng: &mut StdRng, n: usize, zero: bool) -> (usize, EdgeList, usize) {
    let mut edges = Vec::with_capacity(complete_edges(n));
    for u in 0..n {
        for v in 0..n {
            if u == v {
                continue;
            }
            let w = if zero { 0.0 } else { random_weight(rng, C_MAX) };
            edges.push((u as Vertex, v as Vertex, w));
        }
    }
    edges.shuffle(rng);

    (n, edges, rng.random_range(0..n))
}

/// A shuffled path with short forward and backward chords.
fn almost_line(rng: &mut StdRng, n: usize) -> (usize, EdgeList, usize) {
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        let w = random_weight(rng, C_MAX);
        push_unique_edge(&mut edges, &mut used, i, i + 1, w);
    }

    while edges.len() < 2 * n {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        let (u, v) = if rng.random_bool(0.5) { (b, a) } else { (a, b) };
        let w = random_weight(rng, C_MAX);
        push_unique_edge(&mut edges, &mut used, u, v, w);
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0 as usize] as Vertex;
        edge.1 = perm[edge.1 as usize] as Vertex;
    }
    edges.shuffle(rng);

    (n, edges, perm[0])
}

/// Four-neighbour grid with independent weights in each direction.
fn grid_random(rng: &mut StdRng, size: usize) -> (usize, EdgeList, usize) {
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let index = |i: usize, j: usize| (i * len + j) as Vertex;

    let mut edges = Vec::with_capacity(n * 4);
    for i in 0..len {
        for j in 0..len {
            let mut neighbours = Vec::with_capacity(4);
            if j + 1 < len {
                neighbours.push((i, j + 1));
            }
            if i + 1 < len {
                neighbours.push((i + 1, j));
            }
            if j > 0 {
                neighbours.push((i, j - 1));
            }
            if i > 0 {
                neighbours.push((i - 1, j));
            }
            for (ni, nj) in neighbours {
                edges.push((index(i, j), index(ni, nj), random_weight(rng, C_MAX)));
            }
        }
    }
    edges.shuffle(rng);

    (n, edges, rng.random_range(0..n))
}

/// Two fans joined at a hub: the cheapest first hop never lies on the cheapest route, so a
/// solver that finalizes vertices too early (e.g. on first relaxation) goes wrong.
fn wrong_dijkstra_killer(size: usize) -> (usize, EdgeList, usize) {
    let one = (size / 4).max(8);
    let n = one * 2 + 3;
    let hub = one + 1;
    let sink = n - 1;

    let mut edges = Vec::with_capacity(one * 4);
    for i in 0..one {
        edges.push((0, (i + 1) as Vertex, i as f64));
        edges.push(((i + 1) as Vertex, hub as Vertex, ((one - i - 1) * 2) as f64));
        edges.push((hub as Vertex, (one + 2 + i) as Vertex, (2 * i) as f64));
        edges.push(((one + 2 + i) as Vertex, sink as Vertex, (one - i - 1) as f64));
    }

    (n, edges, 0)
}

#[inline]
fn random_weight(rng: &mut StdRng, max: u64) -> f64 {
    rng.random_range(0..=max) as f64
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

fn push_unique_edge(
    edges: &mut EdgeList,
    used: &mut HashSet<(usize, usize)>,
    u: usize,
    v: usize,
    weight: f64,
) -> bool {
    if u == v || !used.insert((u, v)) {
        return false;
    }
    edges.push((u as Vertex, v as Vertex, weight));
    true
}
