//! Basic generation example for the Jin et al. social network model
//!
//! Run with: cargo run --example basic_generation

use jin_gen::{GraphState, JinConfig, JinGen, SeededSource};
use log::info;
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new().init().unwrap();

    info!("Setting up generator...");

    let config = JinConfig {
        r0: 0.0005,
        r1: 2.0,
        gamma: 0.005,
        z_star: 5,
        barrier_iters: 1,
    };
    let rng = SeededSource::from_entropy();
    let seed = rng.seed();

    let mut generator = JinGen::new(config, rng);

    // Report growth every 5000 iterations
    let mut progress = |i: usize, graph: &GraphState| {
        if i % 5000 == 0 {
            info!(
                "{}: {} edges, mean degree {:.2}",
                i,
                graph.edge_count(),
                graph.mean_degree()
            );
        }
    };

    let graph = generator.run(250, 30_000, &mut progress).unwrap();

    info!("Generation complete!");
    info!("Seed used: {:?}", seed);
    info!(
        "Edges: {}, max degree: {}, clustering: {:.4}",
        graph.edge_count(),
        graph.max_degree(),
        graph.clustering_coefficient()
    );
    for (degree, count) in graph.degree_histogram() {
        info!("  degree {}: {} nodes", degree, count);
    }
}
