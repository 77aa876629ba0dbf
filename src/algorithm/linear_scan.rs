use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::graph::{Graph, Vertex};
use crate::algorithm::relaxation::Relaxation;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::{Error, Result};

/// Dijkstra's algorithm with linear-scan selection
///
/// Each round scans every unvisited vertex for the minimum tentative
/// distance, O(V²) overall. Needs no `Ord` on the weight type. Ties go to the
/// smallest vertex.
#[derive(Debug, Default)]
pub struct LinearScanDijkstra;

impl LinearScanDijkstra {
    pub fn new() -> Self {
        LinearScanDijkstra
    }

    /// Picks the unvisited vertex with the smallest `(distance, vertex)`.
    fn select<T, W, G>(graph: &G, state: &Relaxation<T, W>) -> Result<T>
    where
        T: Vertex,
        W: Float + Zero + Debug + Copy,
        G: Graph<T, W>,
    {
        let mut best: Option<(&T, W)> = None;

        // Vertices arrive in ascending order, so a strict comparison keeps
        // the smallest vertex among equal distances.
        for v in graph.vertices().filter(|v| !state.is_visited(v)) {
            let dist = state.distance(v);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((v, dist)),
            }
        }

        best.map(|(v, _)| v.clone()).ok_or(Error::EmptySelection)
    }
}

impl<T, W, G> ShortestPathAlgorithm<T, W, G> for LinearScanDijkstra
where
    T: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<T, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra (linear scan)"
    }

    fn compute_tree(&self, graph: &G, start: &T) -> Result<ShortestPathTree<T, W>> {
        let mut state = Relaxation::new(graph, start)?;
        debug!("linear-scan Dijkstra from {:?} over {} vertices", start, graph.vertex_count());

        while !state.is_complete() {
            let current = Self::select(graph, &state)?;
            state.finalize(graph, current)?;
        }

        let tree = state.into_tree();
        debug!("linear-scan Dijkstra from {:?} reached {} of {} vertices", start, tree.reachable_count(), tree.len());
        Ok(tree)
    }
}
