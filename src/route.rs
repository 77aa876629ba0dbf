use std::time::Instant;

use log::{debug, info};

use crate::config::RouteConfig;
use crate::graph::fixture::load_weight_table;
use crate::graph::Graph;
use crate::Result;

/// Outcome of one start-to-end route query
#[derive(Debug, Clone)]
pub struct RouteOutcome {
    pub algorithm: &'static str,
    pub start: String,
    pub end: String,
    /// Vertices from start to end, both included
    pub path: Vec<String>,
    /// Sum of edge weights along `path`
    pub distance: f64,
    /// Vertices reachable from the start, the start included
    pub reachable: usize,
    pub vertex_count: usize,
    pub execution_time_ms: f64,
}

/// Loads the configured weight table, runs the configured strategy from
/// `start` and returns the checked path to `end`.
pub fn find_route(config: &RouteConfig) -> Result<RouteOutcome> {
    let mut table = load_weight_table(&config.graph_file)?;
    if let Some(undirected) = config.undirected {
        table.undirected = undirected;
    }
    let graph = table.into_graph();
    debug!(
        "graph has {} vertices and {} edge entries",
        graph.vertex_count(),
        graph.edge_count()
    );

    let algorithm = config.strategy.algorithm();
    let start_time = Instant::now();
    let tree = algorithm.compute_tree(&graph, &config.start)?;
    let execution_time = start_time.elapsed();

    let path = tree.path_to(&config.end)?;
    let distance = graph.path_weight(&path)?.into_inner();
    info!(
        "{}: {} -> {} costs {:.4} over {} vertices",
        algorithm.name(),
        config.start,
        config.end,
        distance,
        path.len()
    );

    Ok(RouteOutcome {
        algorithm: algorithm.name(),
        start: config.start.clone(),
        end: config.end.clone(),
        path,
        distance,
        reachable: tree.reachable_count(),
        vertex_count: graph.vertex_count(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    })
}
