//! Shortest-path trees over weighted graphs
//!
//! This library computes single-source shortest paths with Dijkstra's
//! relaxation algorithm and reconstructs explicit paths from the resulting
//! predecessor map.
//!
//! All edge weights are assumed to be non-negative. Graphs are immutable once
//! built, so one graph can serve any number of queries, including concurrent
//! ones.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod route;

pub use algorithm::{
    compute_shortest_path_tree, dijkstra::Dijkstra, linear_scan::LinearScanDijkstra,
    path::reconstruct_path, ShortestPathAlgorithm, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::weighted::WeightedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Missing edge weight: from {from} to {to}")]
    MissingEdge { from: String, to: String },

    #[error("No unvisited vertex left to select")]
    EmptySelection,

    #[error("Vertex {end} is unreachable from {start}")]
    Unreachable { start: String, end: String },

    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn unknown_vertex<T: std::fmt::Debug>(vertex: &T) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }

    pub(crate) fn missing_edge<T: std::fmt::Debug>(from: &T, to: &T) -> Self {
        Error::MissingEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
