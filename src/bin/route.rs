use shortest_path_tree::config::RouteConfig;
use shortest_path_tree::route::find_route;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [graph_file] [start] [end] [heap|scan]
    let config = RouteConfig::from_args(env::args())?;

    println!("Configuration:");
    println!("   Graph file: {}", config.graph_file.display());
    println!("   Route: {} -> {}", config.start, config.end);
    println!("   Selection: {:?}", config.strategy);
    println!();

    let outcome = find_route(&config)?;

    println!("{}", outcome.path.join(" -> "));
    println!(
        "Distance: {:.4} ({} of {} vertices reachable, {} in {:.3} ms)",
        outcome.distance,
        outcome.reachable,
        outcome.vertex_count,
        outcome.algorithm,
        outcome.execution_time_ms
    );

    Ok(())
}
