//! Set and grouping helpers over lists of vertex pairs.

use std::collections::{BTreeSet, HashMap};

use crate::graph::traits::Vertex;

/// Collects every endpoint of every pair into one deduplicated set.
pub fn unique_endpoints<'a, T, I>(pairs: I) -> BTreeSet<T>
where
    T: Vertex + 'a,
    I: IntoIterator<Item = &'a (T, T)>,
{
    pairs
        .into_iter()
        .flat_map(|(a, b)| [a.clone(), b.clone()])
        .collect()
}

/// Groups pairs by their first endpoint.
///
/// Each group holds the endpoints of its pairs with the key itself filtered
/// out, so a self-loop `(v, v)` contributes nothing to `v`'s group. A key
/// whose only pair is a self-loop still gets an (empty) group.
pub fn group_by_first<'a, T, I>(pairs: I) -> HashMap<T, BTreeSet<T>>
where
    T: Vertex + 'a,
    I: IntoIterator<Item = &'a (T, T)>,
{
    let mut groups: HashMap<T, BTreeSet<T>> = HashMap::new();
    for (from, to) in pairs {
        let group = groups.entry(from.clone()).or_default();
        if to != from {
            group.insert(to.clone());
        }
    }
    groups
}

/// Merges a weight table with its mirror image.
///
/// Every `(a, b)` entry gains a `(b, a)` entry of the same weight. Entries
/// listed explicitly take precedence over mirrored ones.
pub fn symmetric<T, W, I>(weights: I) -> HashMap<(T, T), W>
where
    T: Vertex,
    W: Copy,
    I: IntoIterator<Item = ((T, T), W)>,
{
    let explicit: Vec<((T, T), W)> = weights.into_iter().collect();
    let mut merged: HashMap<(T, T), W> = HashMap::with_capacity(explicit.len() * 2);

    for ((a, b), weight) in &explicit {
        merged.insert((b.clone(), a.clone()), *weight);
    }
    for (pair, weight) in explicit {
        merged.insert(pair, weight);
    }

    merged
}
