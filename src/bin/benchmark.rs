use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use shortest_path_tree::algorithm::{ShortestPathAlgorithm, ShortestPathTree, dijkstra::Dijkstra, linear_scan::LinearScanDijkstra};
use shortest_path_tree::graph::{generators::random_weights, Graph, WeightedGraph};

type BenchGraph = WeightedGraph<usize, OrderedFloat<f64>>;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &BenchGraph, source: usize) -> (Duration, ShortestPathTree<usize, OrderedFloat<f64>>)
where
    A: ShortestPathAlgorithm<usize, OrderedFloat<f64>, BenchGraph>
{
    println!("Running {} on graph with {} vertices...", algorithm.name(), graph.vertex_count());

    let start = Instant::now();
    let tree = algorithm.compute_tree(graph, &source).expect("source is a graph vertex");
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", tree.reachable_count(), duration);

    (duration, tree)
}

fn main() {
    env_logger::init();

    // Linear scan is quadratic, keep sizes at 10k or below
    let graph_sizes = vec![
        1_000,
        2_500,
        5_000,
        10_000,
    ];

    // Edge factor: average number of extra edges per vertex
    let edge_factor = 2.0;

    println!("=====================================================");
    println!("Benchmark: heap Dijkstra vs linear-scan Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let heap = Dijkstra::new();
    let scan = LinearScanDijkstra::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = WeightedGraph::from_weights(random_weights(size, edge_factor, size as u64));
        let source = 0;

        println!("Graph has {} vertices and {} edge entries", graph.vertex_count(), graph.edge_count());

        let (heap_time, heap_tree) = benchmark_algorithm(&heap, &graph, source);
        let (scan_time, scan_tree) = benchmark_algorithm(&scan, &graph, source);
        assert_eq!(heap_tree, scan_tree, "strategies disagree on {} vertices", size);

        // Independent queries from many sources, sharing the graph read-only
        let sources: Vec<usize> = (0..size).step_by((size / 64).max(1)).collect();
        let parallel_start = Instant::now();
        let reached: usize = sources
            .par_iter()
            .map(|s| {
                <Dijkstra as ShortestPathAlgorithm<usize, OrderedFloat<f64>, BenchGraph>>::compute_tree(&heap, &graph, s)
                    .map(|tree| tree.reachable_count())
                    .unwrap_or(0)
            })
            .sum();
        let parallel_time = parallel_start.elapsed();
        println!("  - {} parallel heap queries reached {} vertices in {:?}", sources.len(), reached, parallel_time);

        let speedup = scan_time.as_secs_f64() / heap_time.as_secs_f64();
        println!("Speedup - heap vs linear scan: {:.2}x", speedup);

        results.push((size, heap_time, scan_time, parallel_time, sources.len()));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<10} | {:<20}",
             "Vertices", "Heap (ms)", "Scan (ms)", "Speedup", "Parallel (ms/queries)");
    println!("-----------------------------------------------------");

    for (size, heap_time, scan_time, parallel_time, queries) in &results {
        let speedup = scan_time.as_secs_f64() / heap_time.as_secs_f64();

        println!("{:<10} | {:<12} | {:<12} | {:<10.2} | {}/{}",
                 size,
                 heap_time.as_millis(),
                 scan_time.as_millis(),
                 speedup,
                 parallel_time.as_millis(),
                 queries);
    }
}
