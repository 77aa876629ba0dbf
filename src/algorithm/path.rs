use std::fmt::Debug;
use log::{debug, warn};
use num_traits::{Float, Zero};

use crate::algorithm::ShortestPathTree;
use crate::graph::Vertex;

/// Walks predecessor links back from `end` and returns the chain in
/// start-to-end order.
///
/// The walk stops at the first vertex without a predecessor. The result is
/// therefore `[end]` when `end` is the start, is unreachable, or is not in
/// the tree at all. Callers that need to tell these apart should check
/// reachability first or use [`ShortestPathTree::path_to`].
///
/// A chain can never hold more vertices than the tree does; a longer walk
/// means the predecessor map contains a cycle, and the walk is cut there.
pub fn reconstruct_path<T, W>(tree: &ShortestPathTree<T, W>, start: &T, end: &T) -> Vec<T>
where
    T: Vertex,
    W: Float + Zero + Debug + Copy,
{
    let limit = tree.len().max(1);
    let mut path = vec![end.clone()];
    let mut current = end.clone();

    while let Some(pred) = tree.predecessor(&current) {
        if path.len() >= limit {
            warn!("predecessor chain from {:?} exceeds {} vertices, cutting it", end, limit);
            break;
        }
        current = pred.clone();
        path.push(current.clone());
    }

    path.reverse();

    if path.first() != Some(start) {
        debug!("path to {:?} begins at {:?}, not at {:?}", end, path[0], start);
    }

    path
}
