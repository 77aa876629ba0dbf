//! JSON weight tables.
//!
//! A fixture lists edge entries by vertex name:
//!
//! ```json
//! {
//!   "undirected": true,
//!   "edges": [
//!     { "from": "V1", "to": "V2", "weight": 32.8565 }
//!   ]
//! }
//! ```
//!
//! With `undirected` set (the default) every entry is mirrored when the
//! graph is built.

use crate::graph::weighted::WeightedGraph;
use crate::{Error, Result};
use log::debug;
use ordered_float::OrderedFloat;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One weighted edge entry of a fixture
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// A complete fixture: edge entries plus how to interpret them
#[derive(Debug, Clone, Deserialize)]
pub struct WeightTable {
    #[serde(default = "default_undirected")]
    pub undirected: bool,
    pub edges: Vec<EdgeRecord>,
}

fn default_undirected() -> bool { true }

impl WeightTable {
    /// Builds the graph described by this table.
    pub fn into_graph(self) -> WeightedGraph<String, OrderedFloat<f64>> {
        let undirected = self.undirected;
        let entries = self
            .edges
            .into_iter()
            .map(|edge| ((edge.from, edge.to), OrderedFloat(edge.weight)));

        if undirected {
            WeightedGraph::from_undirected_weights(entries)
        } else {
            WeightedGraph::from_weights(entries)
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(edge) = self
            .edges
            .iter()
            .find(|edge| !edge.weight.is_finite() || edge.weight < 0.0)
        {
            return Err(Error::InvalidFixture(format!(
                "edge {} -> {} has weight {}, expected a finite non-negative number",
                edge.from, edge.to, edge.weight
            )));
        }
        Ok(())
    }
}

/// Parses a fixture from JSON text, rejecting negative or non-finite weights.
pub fn parse_weight_table(json: &str) -> Result<WeightTable> {
    let table: WeightTable = serde_json::from_str(json)?;
    table.validate()?;
    Ok(table)
}

/// Reads and parses a fixture file.
pub fn load_weight_table<P: AsRef<Path>>(path: P) -> Result<WeightTable> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let table = parse_weight_table(&json)?;
    debug!(
        "loaded {} edge entries from {}",
        table.edges.len(),
        path.display()
    );
    Ok(table)
}
