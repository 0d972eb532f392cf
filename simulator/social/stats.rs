// Social Network Scenario Statistics

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use jin_gen::{GraphState, Iteration, IterationObserver};
use log::warn;

// ============================================================================
// Iteration Metrics
// ============================================================================

/// Metrics collected at a single iteration
#[derive(Debug, Clone)]
pub struct IterationMetrics {
    /// Iteration number
    pub iteration: Iteration,

    /// Edges present after the iteration
    pub edges: usize,

    /// Mean degree over all nodes
    pub mean_degree: f64,

    /// Largest degree of any node
    pub max_degree: usize,

    /// Global clustering coefficient, when tracked and defined
    pub clustering: Option<f64>,
}

impl IterationMetrics {
    pub fn capture(iteration: Iteration, graph: &GraphState, with_clustering: bool) -> Self {
        let clustering = if with_clustering {
            Some(graph.clustering_coefficient()).filter(|c| c.is_finite())
        } else {
            None
        };

        Self {
            iteration,
            edges: graph.edge_count(),
            mean_degree: graph.mean_degree(),
            max_degree: graph.max_degree(),
            clustering,
        }
    }
}

// ============================================================================
// Stats Observer
// ============================================================================

/// Samples metrics every `sample_interval` iterations while a run progresses
pub struct StatsObserver {
    sample_interval: usize,
    track_clustering: bool,
    check_invariants: bool,
    history: Vec<IterationMetrics>,
    violation: Option<(Iteration, String)>,
}

impl StatsObserver {
    pub fn new(sample_interval: usize, track_clustering: bool, check_invariants: bool) -> Self {
        Self {
            sample_interval,
            track_clustering,
            check_invariants,
            history: Vec::new(),
            violation: None,
        }
    }

    pub fn history(&self) -> &[IterationMetrics] {
        &self.history
    }

    /// First bookkeeping violation seen, if invariant checks are enabled
    pub fn violation(&self) -> Option<&(Iteration, String)> {
        self.violation.as_ref()
    }

    pub fn into_parts(self) -> (Vec<IterationMetrics>, Option<(Iteration, String)>) {
        (self.history, self.violation)
    }
}

impl IterationObserver for StatsObserver {
    fn observe(&mut self, iteration: Iteration, graph: &GraphState) {
        if self.sample_interval == 0 || iteration % self.sample_interval != 0 {
            return;
        }

        if self.check_invariants && self.violation.is_none() {
            if let Err(e) = graph.check_invariants() {
                warn!("{}: bookkeeping violation: {}", iteration, e);
                self.violation = Some((iteration, e));
            }
        }

        self.history
            .push(IterationMetrics::capture(iteration, graph, self.track_clustering));
    }
}

// ============================================================================
// Simulation Result
// ============================================================================

/// Complete scenario result
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Configuration summary
    pub config_summary: String,

    /// Random seed used
    pub seed_used: [u8; 32],

    /// Total iterations executed
    pub total_iterations: usize,

    /// Metrics of the final graph
    pub final_metrics: IterationMetrics,

    /// Historical metrics (sampled at intervals)
    pub metrics_history: Vec<IterationMetrics>,

    /// Node count per degree in the final graph
    pub degree_histogram: BTreeMap<usize, usize>,

    /// First bookkeeping violation, if any was detected
    pub violation: Option<(Iteration, String)>,
}

impl SimulationResult {
    /// Print a summary of the simulation results
    pub fn print_summary(&self) {
        println!("\n╔════════════════════════════════════════════════════════╗");
        println!("║    SOCIAL NETWORK GENERATION RESULTS                   ║");
        println!("╚════════════════════════════════════════════════════════╝\n");

        println!("Configuration: {}", self.config_summary);
        println!("Seed: {}", seed_hex(&self.seed_used));
        println!("Iterations: {}", self.total_iterations);
        println!();

        let metrics = &self.final_metrics;
        println!("═══ Final Graph ═══");
        println!("  Edges: {}", metrics.edges);
        println!("  Degree: mean={:.2}, max={}", metrics.mean_degree, metrics.max_degree);
        match metrics.clustering {
            Some(c) => println!("  Clustering: {:.4}", c),
            None => println!("  Clustering: undefined (no node of degree >= 2)"),
        }
        println!();

        println!("═══ Degree Distribution ═══");
        for (degree, count) in &self.degree_histogram {
            println!("  {:>3}: {:>6}", degree, count);
        }
        println!();

        if !self.metrics_history.is_empty() {
            println!("═══ Growth ({} samples) ═══", self.metrics_history.len());
            println!("  {:>8} {:>8} {:>8} {:>6} {:>10}", "iter", "edges", "mean", "max", "clustering");
            for m in &self.metrics_history {
                let clustering = m
                    .clustering
                    .map(|c| format!("{:.4}", c))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {:>8} {:>8} {:>8.2} {:>6} {:>10}",
                    m.iteration, m.edges, m.mean_degree, m.max_degree, clustering
                );
            }
            println!();
        }

        if let Some((iteration, e)) = &self.violation {
            println!("⚠ Bookkeeping violation at iteration {}: {}", iteration, e);
        }
    }

    /// Write the sampled metrics history as CSV
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_metrics_csv(&mut writer, &self.metrics_history)?;
        writer.flush()
    }
}

/// CSV rows `iteration,edges,mean_degree,max_degree,clustering`; an
/// untracked or undefined clustering value is left empty.
pub fn write_metrics_csv<W: Write>(writer: &mut W, history: &[IterationMetrics]) -> io::Result<()> {
    writeln!(writer, "iteration,edges,mean_degree,max_degree,clustering")?;
    for m in history {
        let clustering = m.clustering.map(|c| c.to_string()).unwrap_or_default();
        writeln!(
            writer,
            "{},{},{},{},{}",
            m.iteration, m.edges, m.mean_degree, m.max_degree, clustering
        )?;
    }
    Ok(())
}

pub fn seed_hex(seed: &[u8; 32]) -> String {
    seed.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jin_gen::Pair;

    fn triangle() -> GraphState {
        let mut g = GraphState::new(4);
        for (x, y) in [(0, 1), (1, 2), (0, 2)] {
            g.add_edge(Pair::new(x, y).unwrap());
        }
        g
    }

    #[test]
    fn test_observer_samples_at_interval() {
        let g = triangle();
        let mut observer = StatsObserver::new(3, true, true);
        for i in 0..7 {
            observer.observe(i, &g);
        }

        let iterations: Vec<_> = observer.history().iter().map(|m| m.iteration).collect();
        assert_eq!(iterations, vec![0, 3, 6]);
        assert_eq!(observer.history()[0].clustering, Some(1.0));
        assert!(observer.violation().is_none());
    }

    #[test]
    fn test_zero_interval_disables_sampling() {
        let mut observer = StatsObserver::new(0, true, true);
        observer.observe(0, &triangle());
        assert!(observer.history().is_empty());
    }

    #[test]
    fn test_undefined_clustering_is_none() {
        let m = IterationMetrics::capture(0, &GraphState::new(3), true);
        assert_eq!(m.clustering, None);
        assert_eq!(m.edges, 0);
    }

    #[test]
    fn test_csv_rows() {
        let history = vec![
            IterationMetrics::capture(0, &GraphState::new(4), true),
            IterationMetrics::capture(5, &triangle(), true),
        ];
        let mut out = Vec::new();
        write_metrics_csv(&mut out, &history).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "iteration,edges,mean_degree,max_degree,clustering\n0,0,0,0,\n5,3,1.5,2,1\n"
        );
    }

    #[test]
    fn test_seed_hex() {
        let mut seed = [0u8; 32];
        seed[0] = 0xab;
        assert!(seed_hex(&seed).starts_with("ab00"));
        assert_eq!(seed_hex(&seed).len(), 64);
    }
}
