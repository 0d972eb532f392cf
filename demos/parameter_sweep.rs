//! Sweep the introduction rate r1 and report the resulting clustering
//!
//! Run with: cargo run --example parameter_sweep

use jin_gen::{JinConfig, JinGen, NoOpObserver, SeededSource};
use log::{warn, LevelFilter};
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new().with_level(LevelFilter::Warn).init().unwrap();

    let seed = [7u8; 32];
    let rates = [0.0, 0.5, 1.0, 2.0, 4.0];

    println!("{:>6} {:>8} {:>10} {:>12}", "r1", "edges", "mean deg", "clustering");
    println!("{}", "-".repeat(40));

    for r1 in rates {
        let config = JinConfig {
            r1,
            ..Default::default()
        };
        let mut generator = JinGen::new(config, SeededSource::from_seed(seed));
        let graph = match generator.run(250, 20_000, &mut NoOpObserver) {
            Ok(graph) => graph,
            Err(e) => {
                warn!("r1={} failed: {}", r1, e);
                continue;
            }
        };

        println!(
            "{:>6.1} {:>8} {:>10.2} {:>12.4}",
            r1,
            graph.edge_count(),
            graph.mean_degree(),
            graph.clustering_coefficient()
        );
    }
}
