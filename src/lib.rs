//! # jin_gen - Synthetic Social Network Generator
//!
//! A Rust implementation of Model II from Jin, Girvan and Newman, "The
//! structure of growing social networks" (2001). Undirected graphs grow and
//! decay over discrete iterations under three competing dynamics:
//!
//! - **Random meeting**: uniformly chosen pairs become acquainted
//! - **Introduction**: a node with several friends introduces two of them
//!   (triadic closure)
//! - **Losing touch**: existing friendships decay once a warm-up has passed
//!
//! A hard degree cap `z*` gates every new edge.
//!
//! ## Core Components
//!
//! - **Pair**: canonical undirected edge, smaller node first
//! - **GraphState**: edge set, adjacency, degrees and sampling weights, all
//!   kept consistent through `add_edge` / `remove_edge`
//! - **Sampler**: rejection sampling proportional to a weight array
//! - **JinGen**: the update rules and the `generate` driver
//!
//! ## Usage
//!
//! ```no_run
//! use jin_gen::{JinConfig, JinGen, SeededSource};
//!
//! let mut generator = JinGen::new(JinConfig::default(), SeededSource::from_seed([42u8; 32]));
//! let graph = generator
//!     .run(250, 30_000, &mut |_: usize, _: &jin_gen::GraphState| {})
//!     .unwrap();
//! println!("{} edges, C = {:.3}", graph.edge_count(), graph.clustering_coefficient());
//! ```
//!
//! ## Simulation
//!
//! Scenario files, per-iteration statistics and CSV export live in the
//! `simulator/` directory and the `scenario_runner` binary.

// Core generator modules
pub mod jg_engine;
pub mod jg_graph;
pub mod jg_interface;
pub mod jg_pair;
pub mod jg_sampler;

// Collaborators
pub mod jg_error;
pub mod jg_metrics;
pub mod jg_random;
pub mod jg_render;

// Re-export commonly used types
pub use jg_engine::{JinConfig, JinGen};
pub use jg_error::{JinError, JinResult};
pub use jg_graph::GraphState;
pub use jg_interface::{Iteration, IterationObserver, NoOpObserver, NodeId, RandomSource};
pub use jg_pair::Pair;
pub use jg_random::SeededSource;
