use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use dijkstra::DistanceMap;
use dijkstra::INF;
use dijkstra::ShortestPathEngine;
use dijkstra::Vertex;
use dijkstra::adjacency;
use tracing::Level;
use tracing::info;

const DEFAULT_TARGETS: &str = "7,37,59,82,99,115,133,165,188,197";

#[derive(Debug, Parser)]
#[command(name = "dijkstra")]
#[command(about = "Single-source shortest paths over a tab-separated adjacency-list graph")]
struct Args {
    /// Graph file: `vertex<TAB>destination,weight<TAB>...` per line
    graph: PathBuf,

    /// Start vertex
    #[arg(short, long, default_value_t = 1)]
    source: Vertex,

    /// Comma-separated vertices whose distances are printed
    #[arg(short, long, value_delimiter = ',', default_value = DEFAULT_TARGETS)]
    targets: Vec<Vertex>,

    /// Print the parsed graph before solving
    #[arg(long)]
    dump: bool,

    /// Logging level: trace, debug, info, warn or error
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let graph = adjacency::read_file(&args.graph)
        .with_context(|| format!("failed to load graph from {}", args.graph.display()))?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    if args.dump {
        print!("{graph}");
    }

    let start = Instant::now();
    let distances = ShortestPathEngine::new(&graph)
        .run(args.source)
        .with_context(|| format!("shortest-path run from vertex {} failed", args.source))?;
    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
        "shortest paths computed"
    );

    println!("{}", render(&distances, &args.targets)?);
    Ok(())
}

fn render(distances: &DistanceMap<'_>, targets: &[Vertex]) -> Result<String> {
    let fields = targets
        .iter()
        .map(|&t| -> Result<String> {
            let d = distances
                .get(t)
                .with_context(|| format!("target vertex {t} is not in the graph"))?;
            Ok(if d == INF { "inf".to_string() } else { d.to_string() })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(fields.join(","))
}
