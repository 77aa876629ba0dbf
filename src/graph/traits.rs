use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

/// Bounds every vertex identifier must satisfy.
///
/// `Ord` fixes the tie-break when two unvisited vertices share the minimum
/// tentative distance: the smaller vertex is finalized first.
pub trait Vertex: Ord + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Ord + Hash + Clone + Debug {}

/// Trait representing an immutable weighted graph keyed by vertex identifiers
pub trait Graph<T, W>: Debug
where
    T: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed edge entries that link two distinct
    /// vertices. Self-loops keep a weight but are not counted.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all vertices in ascending order
    fn vertices(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Returns an iterator over the neighbors of a vertex in ascending order.
    /// A vertex without outgoing entries yields nothing.
    fn neighbors(&self, vertex: &T) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &T) -> bool;

    /// Returns true if there's an edge entry from `from` to `to`
    fn has_edge(&self, from: &T, to: &T) -> bool;

    /// Gets the weight of an edge entry if it exists
    fn weight(&self, from: &T, to: &T) -> Option<W>;
}
