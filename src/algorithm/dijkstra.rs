use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::graph::{Graph, Vertex};
use crate::algorithm::relaxation::Relaxation;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::BinaryHeapWrapper;
use crate::Result;

/// Classic Dijkstra's algorithm driven by a lazily-updated binary heap
///
/// Vertices are finalized in ascending `(distance, vertex)` order, the same
/// order [`LinearScanDijkstra`](crate::algorithm::linear_scan::LinearScanDijkstra)
/// uses, so both yield identical trees.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<T, W, G> ShortestPathAlgorithm<T, W, G> for Dijkstra
where
    T: Vertex,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<T, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_tree(&self, graph: &G, start: &T) -> Result<ShortestPathTree<T, W>> {
        let mut state = Relaxation::new(graph, start)?;
        debug!("Dijkstra from {:?} over {} vertices", start, graph.vertex_count());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(start.clone(), W::zero());

        // Main Dijkstra loop
        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: u was finalized or improved since this push
            if state.is_visited(&u) || state.distance(&u) < dist_u {
                continue;
            }

            for (v, new_dist) in state.finalize(graph, u)? {
                queue.push(v, new_dist);
            }
        }

        // Whatever the heap never reached is unreachable; finalize it in
        // vertex order. Infinite distances cannot relax anything.
        if !state.is_complete() {
            let unreached: Vec<T> = graph
                .vertices()
                .filter(|v| !state.is_visited(v))
                .cloned()
                .collect();
            for v in unreached {
                state.finalize(graph, v)?;
            }
        }

        let tree = state.into_tree();
        debug!("Dijkstra from {:?} reached {} of {} vertices", start, tree.reachable_count(), tree.len());
        Ok(tree)
    }
}
