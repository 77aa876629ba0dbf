use std::path::PathBuf;
use std::str::FromStr;

use ordered_float::OrderedFloat;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::linear_scan::LinearScanDijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::WeightedGraph;
use crate::{Error, Result};

/// How the next vertex to finalize is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// Lazily-updated binary heap, O(E log V)
    #[default]
    Heap,
    /// Linear scan over unvisited vertices, O(V²)
    LinearScan,
}

/// The graph type routed over by the `route` binary
pub type RouteGraph = WeightedGraph<String, OrderedFloat<f64>>;

impl SelectionStrategy {
    /// Instantiates the algorithm for this strategy
    pub fn algorithm(self) -> Box<dyn ShortestPathAlgorithm<String, OrderedFloat<f64>, RouteGraph>> {
        match self {
            SelectionStrategy::Heap => Box::new(Dijkstra::new()),
            SelectionStrategy::LinearScan => Box::new(LinearScanDijkstra::new()),
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "heap" => Ok(SelectionStrategy::Heap),
            "scan" | "linear" | "linear-scan" => Ok(SelectionStrategy::LinearScan),
            other => Err(Error::InvalidConfig(format!(
                "unknown selection strategy '{}', expected 'heap' or 'scan'",
                other
            ))),
        }
    }
}

/// Configuration for a single route query
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// JSON weight table to load
    pub graph_file: PathBuf,
    pub start: String,
    pub end: String,
    pub strategy: SelectionStrategy,
    /// Overrides the fixture's own `undirected` flag when set
    pub undirected: Option<bool>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            graph_file: PathBuf::from("data/road_network.json"),
            start: "V1".to_string(),
            end: "V129".to_string(),
            strategy: SelectionStrategy::Heap,
            undirected: None,
        }
    }
}

impl RouteConfig {
    /// Parses positional arguments `[graph_file] [start] [end] [heap|scan]`.
    ///
    /// The first item is taken to be the program name and skipped. Missing
    /// arguments keep their default.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RouteConfig::default();
        let mut args = args.into_iter().skip(1);

        if let Some(path) = args.next() {
            config.graph_file = PathBuf::from(path);
        }
        if let Some(start) = args.next() {
            config.start = start;
        }
        if let Some(end) = args.next() {
            config.end = end;
        }
        if let Some(strategy) = args.next() {
            config.strategy = strategy.parse()?;
        }
        if let Some(extra) = args.next() {
            return Err(Error::InvalidConfig(format!("unexpected argument '{}'", extra)));
        }

        Ok(config)
    }

    pub fn with_graph_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.graph_file = path.into();
        self
    }

    pub fn with_endpoints(mut self, start: &str, end: &str) -> Self {
        self.start = start.to_string();
        self.end = end.to_string();
        self
    }

    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_undirected(mut self, undirected: bool) -> Self {
        self.undirected = Some(undirected);
        self
    }
}
