// Social Network Scenario Runner

use std::fs::File;
use std::io::{BufWriter, Write};

use jin_gen::jg_render::write_dot;
use jin_gen::{JinGen, JinResult, SeededSource};
use log::{error, info};

use super::config::SocialSimConfig;
use super::stats::{IterationMetrics, SimulationResult, StatsObserver};

/// Runs one scenario: generate, sample metrics along the way, export
pub struct SocialRunner {
    config: SocialSimConfig,
    rng: SeededSource,
}

impl SocialRunner {
    /// Create new runner; draws a seed when the config carries none
    pub fn new(config: SocialSimConfig) -> Self {
        let rng = SeededSource::from_optional_seed(config.seed);
        Self { config, rng }
    }

    /// Run the scenario
    pub fn run(self) -> JinResult<SimulationResult> {
        let seed_used = self.rng.seed();
        let config = self.config;
        let mut observer = StatsObserver::new(
            config.metrics.sample_interval,
            config.metrics.track_clustering,
            config.metrics.check_invariants,
        );

        let mut generator = JinGen::new(config.params.clone(), self.rng);
        let graph = generator.run(config.n, config.iterations, &mut observer)?;

        let last = config.iterations.saturating_sub(1);
        let final_metrics = IterationMetrics::capture(last, &graph, config.metrics.track_clustering);
        let (metrics_history, violation) = observer.into_parts();

        let result = SimulationResult {
            config_summary: config.summary(),
            seed_used,
            total_iterations: config.iterations,
            final_metrics,
            metrics_history,
            degree_histogram: graph.degree_histogram(),
            violation,
        };

        if let Some(ref path) = config.output.csv_path {
            match result.write_csv(path) {
                Ok(()) => info!("metrics written to {}", path),
                Err(e) => error!("failed to write {}: {}", path, e),
            }
        }

        if let Some(ref path) = config.output.dot_path {
            let written = File::create(path).and_then(|file| {
                let mut writer = BufWriter::new(file);
                write_dot(&mut writer, graph.edges())?;
                writer.flush()
            });
            match written {
                Ok(()) => info!("graph written to {}", path),
                Err(e) => error!("failed to write {}: {}", path, e),
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jin_gen::{JinConfig, JinError};

    fn small_config(seed: u8) -> SocialSimConfig {
        let mut config = SocialSimConfig {
            n: 80,
            iterations: 400,
            seed: Some([seed; 32]),
            ..Default::default()
        };
        config.params.r0 = 0.002;
        config.metrics.sample_interval = 100;
        config.metrics.check_invariants = true;
        config
    }

    #[test]
    fn test_run_collects_samples() {
        let result = SocialRunner::new(small_config(1)).run().unwrap();

        assert_eq!(result.seed_used, [1u8; 32]);
        assert_eq!(result.total_iterations, 400);
        assert_eq!(result.metrics_history.len(), 4);
        assert!(result.violation.is_none());
        assert_eq!(result.degree_histogram.values().sum::<usize>(), 80);
        assert!(result.final_metrics.max_degree <= JinConfig::default().z_star);
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = SocialRunner::new(small_config(9)).run().unwrap();
        let b = SocialRunner::new(small_config(9)).run().unwrap();
        assert_eq!(a.final_metrics.edges, b.final_metrics.edges);
        assert_eq!(a.degree_histogram, b.degree_histogram);
    }

    #[test]
    fn test_invalid_config_propagates() {
        let mut config = small_config(2);
        config.params.r0 = 0.0;
        assert!(matches!(
            SocialRunner::new(config).run(),
            Err(JinError::InvalidConfig { .. })
        ));
    }
}
