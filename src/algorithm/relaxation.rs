use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use log::trace;
use num_traits::{Float, Zero};

use crate::algorithm::ShortestPathTree;
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Working state of one query, shared by every selection strategy.
///
/// Strategies only decide which vertex to finalize next; the relaxation
/// itself lives here so all of them produce the same tree.
pub(crate) struct Relaxation<T, W>
where
    T: Vertex,
    W: Float + Zero + Debug + Copy,
{
    start: T,
    distances: HashMap<T, W>,
    predecessors: HashMap<T, Option<T>>,
    visited: HashSet<T>,
}

impl<T, W> Relaxation<T, W>
where
    T: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Fails with `UnknownVertex` if `start` is not in the graph.
    pub(crate) fn new<G: Graph<T, W>>(graph: &G, start: &T) -> Result<Self> {
        if !graph.has_vertex(start) {
            return Err(Error::unknown_vertex(start));
        }

        let mut distances: HashMap<T, W> = graph
            .vertices()
            .map(|v| (v.clone(), W::infinity()))
            .collect();
        distances.insert(start.clone(), W::zero());

        let predecessors = graph.vertices().map(|v| (v.clone(), None)).collect();

        Ok(Relaxation {
            start: start.clone(),
            distances,
            predecessors,
            visited: HashSet::with_capacity(graph.vertex_count()),
        })
    }

    pub(crate) fn distance(&self, vertex: &T) -> W {
        self.distances.get(vertex).copied().unwrap_or_else(W::infinity)
    }

    pub(crate) fn is_visited(&self, vertex: &T) -> bool {
        self.visited.contains(vertex)
    }

    /// True once every vertex has been finalized
    pub(crate) fn is_complete(&self) -> bool {
        self.visited.len() == self.distances.len()
    }

    /// Finalizes `current` and relaxes its unvisited neighbors.
    ///
    /// Returns the neighbors whose distance strictly improved, with their new
    /// distance.
    pub(crate) fn finalize<G: Graph<T, W>>(&mut self, graph: &G, current: T) -> Result<Vec<(T, W)>> {
        let base = self.distance(&current);
        let mut improved = Vec::new();

        for neighbor in graph.neighbors(&current) {
            if self.visited.contains(neighbor) {
                continue;
            }

            let weight = graph
                .weight(&current, neighbor)
                .ok_or_else(|| Error::missing_edge(&current, neighbor))?;
            let candidate = base + weight;

            if candidate < self.distance(neighbor) {
                self.distances.insert(neighbor.clone(), candidate);
                self.predecessors.insert(neighbor.clone(), Some(current.clone()));
                improved.push((neighbor.clone(), candidate));
            }
        }

        trace!("finalized {:?} at {:?}, {} improved", current, base, improved.len());
        self.visited.insert(current);
        Ok(improved)
    }

    pub(crate) fn into_tree(self) -> ShortestPathTree<T, W> {
        ShortestPathTree::new(self.start, self.distances, self.predecessors)
    }
}
