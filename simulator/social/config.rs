// Social Network Scenario Configuration

use jin_gen::JinConfig;
use serde::Deserialize;

// ============================================================================
// Main Configuration
// ============================================================================

/// Main configuration for a scenario run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SocialSimConfig {
    /// Number of nodes
    pub n: usize,

    /// Total number of iterations
    pub iterations: usize,

    /// Generator parameters
    pub params: JinConfig,

    /// Random seed for reproducibility (from the command line, never the file)
    #[serde(skip)]
    pub seed: Option<[u8; 32]>,

    /// Metrics sampling configuration
    pub metrics: MetricsConfig,

    /// Output configuration
    pub output: OutputConfig,
}

// ============================================================================
// Metrics Configuration
// ============================================================================

/// Configuration for metrics tracking
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// How often to sample metrics (every N iterations)
    pub sample_interval: usize,

    /// Compute the clustering coefficient at each sample (cubic in n)
    pub track_clustering: bool,

    /// Verify graph bookkeeping at each sample
    pub check_invariants: bool,
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV output file path for the sampled metrics
    pub csv_path: Option<String>,

    /// DOT output file path for the final graph
    pub dot_path: Option<String>,
}

// ============================================================================
// Default Implementations
// ============================================================================

impl Default for SocialSimConfig {
    fn default() -> Self {
        Self {
            n: 250,
            iterations: 30_000,
            params: JinConfig::default(),
            seed: None,
            metrics: MetricsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            sample_interval: 1000,
            track_clustering: true,
            check_invariants: false,
        }
    }
}

impl SocialSimConfig {
    /// One-line description used in result summaries
    pub fn summary(&self) -> String {
        format!(
            "n={} iterations={} r0={} r1={} gamma={} z*={} barrier={}",
            self.n,
            self.iterations,
            self.params.r0,
            self.params.r1,
            self.params.gamma,
            self.params.z_star,
            self.params.barrier_iters
        )
    }
}
