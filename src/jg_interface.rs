// Shared types and the seams between the generator core and its collaborators.

use crate::jg_graph::GraphState;

/// Node identifier. Nodes of an `n`-node simulation are `0..n`.
pub type NodeId = usize;

/// Iteration counter of a simulation run
pub type Iteration = usize;

// ============================================================================
// Random Source
// ============================================================================

/// Capability producing the uniform draws the update rules consume.
///
/// The engine never reaches for a process-wide generator; every draw goes
/// through the source handed to it, so a fixed sequence of draws replays a
/// run exactly.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` is always positive.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Uniform real in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

// ============================================================================
// Iteration Observer
// ============================================================================

/// Hook fired once per completed iteration, after all three update rules.
///
/// Observers only ever see the graph through a shared reference.
pub trait IterationObserver {
    fn observe(&mut self, iteration: Iteration, graph: &GraphState);
}

/// Observer that ignores every iteration
pub struct NoOpObserver;

impl IterationObserver for NoOpObserver {
    #[inline(always)]
    fn observe(&mut self, _iteration: Iteration, _graph: &GraphState) {}
}

impl<F> IterationObserver for F
where
    F: FnMut(Iteration, &GraphState),
{
    fn observe(&mut self, iteration: Iteration, graph: &GraphState) {
        self(iteration, graph)
    }
}
