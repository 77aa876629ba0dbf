pub mod traits;
pub mod dijkstra;
pub mod linear_scan;
pub mod path;
mod relaxation;

pub use traits::{ShortestPathAlgorithm, ShortestPathTree};

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::{Graph, Vertex};
use crate::Result;

/// Computes the shortest-path tree rooted at `start` with the heap-based
/// [`Dijkstra`](dijkstra::Dijkstra).
pub fn compute_shortest_path_tree<T, W, G>(graph: &G, start: &T) -> Result<ShortestPathTree<T, W>>
where
    T: Vertex,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<T, W>,
{
    dijkstra::Dijkstra::new().compute_tree(graph, start)
}
