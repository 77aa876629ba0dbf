use ordered_float::OrderedFloat;
use shortest_path_tree::algorithm::ShortestPathAlgorithm;
use shortest_path_tree::graph::generators::{geometric_weights, grid_weights, random_weights, IndexWeights};
use shortest_path_tree::graph::{Graph, WeightedGraph};
use shortest_path_tree::{compute_shortest_path_tree, reconstruct_path, Dijkstra, LinearScanDijkstra};

type Cell = (usize, usize);
type GridGraph = WeightedGraph<Cell, OrderedFloat<f64>>;
type IndexGraph = WeightedGraph<usize, OrderedFloat<f64>>;

// Reference distances by repeated relaxation of every entry
fn bellman_ford(weights: &IndexWeights, n: usize, source: usize) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; n];
    dist[source] = 0.0;
    for _ in 0..n {
        let mut changed = false;
        for (&(u, v), w) in weights {
            if dist[u] + w.into_inner() < dist[v] {
                dist[v] = dist[u] + w.into_inner();
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph: GridGraph = WeightedGraph::from_weights(grid_weights(10, 10));

    let source = (0, 0);
    let target = (9, 9);

    let tree = compute_shortest_path_tree(&graph, &source).unwrap();
    assert_eq!(tree.distance(&target), Some(OrderedFloat(18.0)));

    let path = tree.path_to(&target).unwrap();
    assert_eq!(path.len(), 19);
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    assert_eq!(graph.path_weight(&path).unwrap(), OrderedFloat(18.0));
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    // A wall in column 5 covering rows 0..8
    let wall = |cell: &Cell| cell.0 == 5 && cell.1 < 8;
    let weights = grid_weights(10, 10)
        .into_iter()
        .filter(|((from, to), _)| !wall(from) && !wall(to));
    let graph: GridGraph = WeightedGraph::from_weights(weights);

    let source = (0, 0);
    let target = (9, 0);

    for tree in [
        <Dijkstra as ShortestPathAlgorithm<Cell, OrderedFloat<f64>, GridGraph>>::compute_tree(&Dijkstra::new(), &graph, &source).unwrap(),
        <LinearScanDijkstra as ShortestPathAlgorithm<Cell, OrderedFloat<f64>, GridGraph>>::compute_tree(&LinearScanDijkstra::new(), &graph, &source).unwrap(),
    ] {
        // Down 8 rows, across 9 columns, back up 8 rows
        assert_eq!(tree.distance(&target), Some(OrderedFloat(25.0)));

        let path = tree.path_to(&target).unwrap();
        assert!(path.iter().all(|cell| !wall(cell)), "Path should avoid the wall");
        for step in path.windows(2) {
            assert!(graph.has_edge(&step[0], &step[1]), "Path should only use existing edges");
        }
    }
}

// Distances match an independent reference and every path realizes its distance
#[test]
fn test_random_graphs_are_optimal() {
    for seed in 0..5 {
        let n = 60;
        let weights = random_weights(n, 2.0, seed);
        let graph: IndexGraph = WeightedGraph::from_weights(weights.clone());
        let reference = bellman_ford(&weights, n, 0);

        let tree = compute_shortest_path_tree(&graph, &0).unwrap();
        assert_eq!(tree.reachable_count(), n, "random graphs are connected");

        for v in 0..n {
            let dist = tree.distance(&v).unwrap().into_inner();
            assert!((dist - reference[v]).abs() < 1e-9, "seed {} vertex {}: {} vs {}", seed, v, dist, reference[v]);

            let path = tree.path_to(&v).unwrap();
            assert_eq!(path[0], 0);
            let cost = graph.path_weight(&path).unwrap().into_inner();
            assert!((cost - dist).abs() < 1e-9);
        }
    }
}

// Heap and linear-scan selection produce the very same tree
#[test]
fn test_strategies_agree() {
    for seed in 0..4 {
        let graph: IndexGraph = WeightedGraph::from_weights(geometric_weights(80, 0.2, seed));
        let start = *graph.vertices().next().unwrap();

        let heap = <Dijkstra as ShortestPathAlgorithm<usize, OrderedFloat<f64>, IndexGraph>>::compute_tree(&Dijkstra::new(), &graph, &start).unwrap();
        let scan = <LinearScanDijkstra as ShortestPathAlgorithm<usize, OrderedFloat<f64>, IndexGraph>>::compute_tree(&LinearScanDijkstra::new(), &graph, &start).unwrap();
        assert_eq!(heap, scan, "seed {}", seed);
    }

    // Unit grid: lots of exact ties
    let graph: GridGraph = WeightedGraph::from_weights(grid_weights(7, 5));
    let heap = <Dijkstra as ShortestPathAlgorithm<Cell, OrderedFloat<f64>, GridGraph>>::compute_tree(&Dijkstra::new(), &graph, &(3, 2)).unwrap();
    let scan = <LinearScanDijkstra as ShortestPathAlgorithm<Cell, OrderedFloat<f64>, GridGraph>>::compute_tree(&LinearScanDijkstra::new(), &graph, &(3, 2)).unwrap();
    assert_eq!(heap, scan);
}

// Undirected, connected graph: cost is the same in both directions
#[test]
fn test_undirected_costs_are_symmetric() {
    let graph: IndexGraph = WeightedGraph::from_weights(random_weights(40, 1.5, 11));

    for (s, e) in [(0, 39), (5, 17), (22, 3)] {
        let forward = compute_shortest_path_tree(&graph, &s).unwrap();
        let backward = compute_shortest_path_tree(&graph, &e).unwrap();

        let there = forward.distance(&e).unwrap().into_inner();
        let back = backward.distance(&s).unwrap().into_inner();
        assert!((there - back).abs() < 1e-9, "{} -> {}: {} vs {}", s, e, there, back);
    }
}

// Test path finding between named locations sharing one graph
#[test]
fn test_city_pathfinding() {
    let graph: GridGraph = WeightedGraph::from_weights(grid_weights(25, 18));

    let locations = [
        ("home", (0, 0)),
        ("work", (20, 15)),
        ("gym", (15, 8)),
        ("park", (8, 12)),
    ];

    for (from_name, from) in &locations {
        let tree = compute_shortest_path_tree(&graph, from).unwrap();

        for (to_name, to) in &locations {
            let path = tree.path_to(to).unwrap_or_else(|e| panic!("{} -> {}: {}", from_name, to_name, e));
            assert_eq!(path[0], *from, "Path should start at source");
            assert_eq!(path[path.len() - 1], *to, "Path should end at target");

            // Manhattan distance on a unit grid
            let manhattan = from.0.abs_diff(to.0) + from.1.abs_diff(to.1);
            assert_eq!(path.len(), manhattan + 1);
            assert_eq!(tree.distance(to), Some(OrderedFloat(manhattan as f64)));

            // Verify path continuity
            for i in 1..path.len() {
                assert!(graph.has_edge(&path[i - 1], &path[i]), "Path should only use existing edges");
            }
        }
    }
}

// Chains as long as the whole vertex set reconstruct in full
#[test]
fn test_long_chain_reconstructs_in_full() {
    let n = 100_000;
    let graph: IndexGraph = WeightedGraph::from_weights((1..n).map(|v| ((v - 1, v), OrderedFloat(1.0))));

    let tree = compute_shortest_path_tree(&graph, &0).unwrap();
    let path = reconstruct_path(&tree, &0, &(n - 1));

    assert_eq!(path.len(), n);
    assert_eq!(path[0], 0);
    assert_eq!(path[n - 1], n - 1);
    assert_eq!(tree.distance(&(n - 1)), Some(OrderedFloat((n - 1) as f64)));
}
