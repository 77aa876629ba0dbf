use crate::graph::pairs::symmetric;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// Weight table over integer vertices
pub type IndexWeights = HashMap<(usize, usize), OrderedFloat<f64>>;

/// Generates a connected undirected weight table over `n` vertices.
///
/// A chain `0 - 1 - ... - n-1` keeps every vertex reachable, then roughly
/// `edge_factor * n` extra random edges are added. Weights fall in
/// `1.0..100.0`. The same seed always yields the same table.
pub fn random_weights(n: usize, edge_factor: f64, seed: u64) -> IndexWeights {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut directed = Vec::new();

    for v in 1..n {
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        directed.push(((v - 1, v), weight));
    }

    if n > 1 {
        let extra = (edge_factor * n as f64) as usize;
        for _ in 0..extra {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops and ensure positive weights
            if u != v {
                let weight = OrderedFloat(rng.gen_range(1.0..100.0));
                directed.push(((u, v), weight));
            }
        }
    }

    symmetric(directed)
}

/// Generates an undirected 4-connected grid of `width * height` vertices
/// addressed by `(x, y)`, with unit weights.
pub fn grid_weights(
    width: usize,
    height: usize,
) -> HashMap<((usize, usize), (usize, usize)), OrderedFloat<f64>> {
    let mut weights = HashMap::new();

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                weights.insert(((x, y), (x + 1, y)), OrderedFloat(1.0));
                weights.insert(((x + 1, y), (x, y)), OrderedFloat(1.0));
            }
            if y + 1 < height {
                weights.insert(((x, y), (x, y + 1)), OrderedFloat(1.0));
                weights.insert(((x, y + 1), (x, y)), OrderedFloat(1.0));
            }
        }
    }

    weights
}

/// Generates a random geometric graph in the unit square
/// n: number of vertices
/// r: connection radius (vertices within distance r are connected)
///
/// Edge weights are the Euclidean distances, so ties are rare. The result
/// may be disconnected for small `r`.
pub fn geometric_weights(n: usize, r: f64, seed: u64) -> IndexWeights {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    let mut weights = HashMap::new();
    for i in 0..n {
        for j in 0..n {
            if i != j {
                let (x1, y1) = points[i];
                let (x2, y2) = points[j];
                let dist = f64::sqrt((x1 - x2) * (x1 - x2) + (y1 - y2) * (y1 - y2));

                if dist <= r {
                    weights.insert((i, j), OrderedFloat(dist));
                }
            }
        }
    }

    weights
}
