use crate::graph::pairs::{group_by_first, symmetric, unique_endpoints};
use crate::graph::traits::{Graph, Vertex};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;

/// An immutable weighted graph built from a table of directed edge entries
///
/// Undirected graphs are represented by storing both directions of every
/// edge, see [`WeightedGraph::from_undirected_weights`].
#[derive(Debug, Clone)]
pub struct WeightedGraph<T, W>
where
    T: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Every vertex that appears as an endpoint of some entry
    vertices: BTreeSet<T>,

    /// Adjacency: vertex -> neighbors reachable through one entry, never itself
    edges: HashMap<T, BTreeSet<T>>,

    /// Edge entry weights keyed by ordered (from, to) pair
    weights: HashMap<(T, T), W>,
}

impl<T, W> WeightedGraph<T, W>
where
    T: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Builds a graph from ordered `(from, to)` pairs and their weights.
    ///
    /// Later entries for the same pair replace earlier ones. Self-loops keep
    /// their weight entry but never show up as a neighbor.
    pub fn from_weights<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = ((T, T), W)>,
    {
        let weights: HashMap<(T, T), W> = weights.into_iter().collect();
        let vertices = unique_endpoints(weights.keys());
        let edges = group_by_first(weights.keys());

        WeightedGraph {
            vertices,
            edges,
            weights,
        }
    }

    /// Builds an undirected graph: each `(a, b)` entry is also inserted as
    /// `(b, a)` with the same weight.
    pub fn from_undirected_weights<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = ((T, T), W)>,
    {
        Self::from_weights(symmetric(weights))
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.weights.values().all(|weight| *weight >= W::zero())
    }

    /// Sums the edge weights along a sequence of vertices.
    ///
    /// A single-vertex path weighs zero. Fails with `MissingEdge` when two
    /// consecutive vertices are not joined by an entry.
    pub fn path_weight(&self, path: &[T]) -> Result<W> {
        path.windows(2).try_fold(W::zero(), |total, step| {
            self.weight(&step[0], &step[1])
                .map(|weight| total + weight)
                .ok_or_else(|| Error::missing_edge(&step[0], &step[1]))
        })
    }
}

impl<T, W> Graph<T, W> for WeightedGraph<T, W>
where
    T: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.values().map(|neighbors| neighbors.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.vertices.iter())
    }

    fn neighbors(&self, vertex: &T) -> Box<dyn Iterator<Item = &T> + '_> {
        if let Some(neighbors) = self.edges.get(vertex) {
            Box::new(neighbors.iter())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &T) -> bool {
        self.vertices.contains(vertex)
    }

    fn has_edge(&self, from: &T, to: &T) -> bool {
        self.edges
            .get(from)
            .map_or(false, |neighbors| neighbors.contains(to))
    }

    fn weight(&self, from: &T, to: &T) -> Option<W> {
        self.weights.get(&(from.clone(), to.clone())).copied()
    }
}
