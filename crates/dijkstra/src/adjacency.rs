//! Tab-separated adjacency-list text format.
//!
//! One record per line:
//!
//! ```text
//! 1	2,1	3,4
//! 2	3,2	4,6
//! ```
//!
//! The first field is the source vertex and every following field is `destination,weight`.
//! Empty fields and blank lines are ignored, and `\r\n` line endings are accepted. A record
//! holding only a vertex registers it without edges. Every failure, including a negative or
//! non-finite weight, is reported as [`Error::Parse`] with its 1-based line number.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::graph::DirectedGraph;
use crate::graph::Vertex;

pub fn parse(input: &str) -> Result<DirectedGraph> {
    let mut graph = DirectedGraph::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let mut fields = line.split('\t').map(str::trim).filter(|f| !f.is_empty());
        let Some(head) = fields.next() else {
            continue;
        };

        let from = parse_vertex(head, line_no)?;
        graph.add_vertex(from);

        for field in fields {
            let Some((to, weight)) = field.split_once(',') else {
                return Err(parse_error(
                    line_no,
                    format!("expected `destination,weight`, found `{field}`"),
                ));
            };
            let to = parse_vertex(to.trim(), line_no)?;
            let weight = weight.trim().parse::<f64>().map_err(|_| {
                parse_error(line_no, format!("invalid edge weight `{}`", weight.trim()))
            })?;
            graph
                .add_edge(from, to, weight)
                .map_err(|err| parse_error(line_no, err.to_string()))?;
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed adjacency list"
    );
    Ok(graph)
}

pub fn read_file(path: impl AsRef<Path>) -> Result<DirectedGraph> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

fn parse_vertex(field: &str, line: usize) -> Result<Vertex> {
    field
        .parse::<Vertex>()
        .map_err(|_| parse_error(line, format!("invalid vertex id `{field}`")))
}

fn parse_error(line: usize, message: String) -> Error {
    Error::Parse { line, message }
}

/// Writes the graph back in adjacency-list form, one line per vertex in first-seen order.
///
/// Edges are written in insertion order, so parsing the output rebuilds the same
/// adjacency lists.
impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, v) in self.vertices().iter().enumerate() {
            write!(f, "{v}")?;
            for edge in self.insertion_ordered(slot) {
                write!(f, "\t{},{}", edge.to, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
