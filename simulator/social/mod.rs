// Social Network Scenario Module

pub mod config;
pub mod runner;
pub mod stats;

// Re-export commonly used types
pub use config::{MetricsConfig, OutputConfig, SocialSimConfig};
pub use runner::SocialRunner;
pub use stats::{IterationMetrics, SimulationResult, StatsObserver};
