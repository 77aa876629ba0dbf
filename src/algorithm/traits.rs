use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::algorithm::path::reconstruct_path;
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Shortest-path tree produced by one `(graph, start)` query
///
/// Every vertex of the queried graph has an entry in both maps. Unreached
/// vertices keep an infinite distance and no predecessor, and so does the
/// start vertex's predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree<T, W>
where
    T: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Source vertex of the query
    start: T,

    /// Final distance from the start to each vertex
    distances: HashMap<T, W>,

    /// Predecessor of each vertex on its shortest path
    predecessors: HashMap<T, Option<T>>,
}

impl<T, W> ShortestPathTree<T, W>
where
    T: Vertex,
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(start: T, distances: HashMap<T, W>, predecessors: HashMap<T, Option<T>>) -> Self {
        ShortestPathTree {
            start,
            distances,
            predecessors,
        }
    }

    /// The vertex this tree was computed from
    pub fn start(&self) -> &T {
        &self.start
    }

    /// Number of vertices covered by the tree
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Distance to `vertex`, infinite when unreachable, `None` when the
    /// vertex was not part of the graph.
    pub fn distance(&self, vertex: &T) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Predecessor of `vertex`, `None` for the start, unreached vertices and
    /// unknown vertices alike.
    pub fn predecessor(&self, vertex: &T) -> Option<&T> {
        self.predecessors.get(vertex).and_then(|pred| pred.as_ref())
    }

    pub fn is_reachable(&self, vertex: &T) -> bool {
        self.distance(vertex).map_or(false, |dist| dist.is_finite())
    }

    /// Number of vertices with a finite distance, the start included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|dist| dist.is_finite()).count()
    }

    pub fn distances(&self) -> &HashMap<T, W> {
        &self.distances
    }

    pub fn predecessors(&self) -> &HashMap<T, Option<T>> {
        &self.predecessors
    }

    /// Path from the start to `end`, checked.
    ///
    /// Unlike [`reconstruct_path`], an unreachable `end` is an error rather
    /// than a one-element path, so a returned path always begins at the start.
    pub fn path_to(&self, end: &T) -> Result<Vec<T>> {
        match self.distance(end) {
            None => Err(Error::unknown_vertex(end)),
            Some(dist) if !dist.is_finite() => Err(Error::Unreachable {
                start: format!("{:?}", self.start),
                end: format!("{:?}", end),
            }),
            Some(_) => Ok(reconstruct_path(self, &self.start, end)),
        }
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<T, W, G>
where
    T: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<T, W>,
{
    /// Compute the shortest-path tree rooted at `start`
    fn compute_tree(&self, graph: &G, start: &T) -> Result<ShortestPathTree<T, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from the tree's start to `target`, if reachable
    fn get_path(&self, tree: &ShortestPathTree<T, W>, target: &T) -> Option<Vec<T>> {
        tree.path_to(target).ok()
    }
}
