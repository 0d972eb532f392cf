use thiserror::Error;

use crate::jg_interface::NodeId;

/// Errors raised by the generator core.
///
/// `InvalidConfig` is the only condition a caller can trigger through
/// parameters. The remaining variants indicate broken bookkeeping and are
/// reported instead of looping forever inside a sampler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JinError {
    /// Random meeting rounds to zero trials per iteration, so the graph can never bootstrap
    #[error("bad config: zero probability of random friendships forming (r0={r0}, pairs={pair_count})")]
    InvalidConfig { r0: f64, pair_count: usize },

    /// Weighted selection requested while every weight is zero
    #[error("weighted selection requested with max weight {max_weight}")]
    DegenerateSelection { max_weight: usize },

    /// Two distinct indices requested from a population that cannot supply them
    #[error("cannot draw two distinct indices from a population of {size}")]
    PopulationTooSmall { size: usize },

    /// Both endpoints of a candidate edge are the same node
    #[error("self loop on node {node}")]
    SelfLoop { node: NodeId },
}

pub type JinResult<T> = Result<T, JinError>;
