use std::collections::BTreeSet;

use log::{debug, info};
use serde::Deserialize;

use crate::jg_error::{JinError, JinResult};
use crate::jg_graph::GraphState;
use crate::jg_interface::{Iteration, IterationObserver, NoOpObserver, RandomSource};
use crate::jg_pair::Pair;
use crate::jg_sampler::{pair_indices, select};

// ============================================================================
// Configuration
// ============================================================================

/// Parameters of the three competing dynamics
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct JinConfig {
    /// Random meeting probability per possible pair and iteration
    pub r0: f64,

    /// Introduction probability per mutual-friend opportunity
    pub r1: f64,

    /// Attrition probability per existing edge
    pub gamma: f64,

    /// Hard degree cap; no edge is created at a node already holding `z_star`
    pub z_star: usize,

    /// Attrition starts once the iteration index exceeds this count
    pub barrier_iters: usize,
}

impl Default for JinConfig {
    fn default() -> Self {
        Self {
            r0: 0.0005,
            r1: 2.0,
            gamma: 0.005,
            z_star: 5,
            barrier_iters: 1,
        }
    }
}

/// `round(count * p)`, clamped to zero for negative products
fn trials(count: usize, p: f64) -> usize {
    (count as f64 * p).round().max(0.0) as usize
}

impl JinConfig {
    /// Random meetings attempted per iteration for a graph with `pair_count` pairs
    pub fn meeting_trials(&self, pair_count: usize) -> usize {
        trials(pair_count, self.r0)
    }

    /// Random meeting is the only way the first edges appear, so a
    /// configuration that schedules zero meetings can never leave the empty graph.
    pub fn validate(&self, n: usize) -> JinResult<()> {
        let pair_count = n * n.saturating_sub(1) / 2;
        if self.meeting_trials(pair_count) == 0 {
            return Err(JinError::InvalidConfig {
                r0: self.r0,
                pair_count,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Model II social network generator of Jin, Girvan and Newman (2001).
///
/// Each iteration applies, in order: random meetings, introductions through
/// mutual friends, and (after the warm-up) attrition. Every `generate` call
/// starts from an empty graph; only the random source carries over.
pub struct JinGen<R: RandomSource> {
    config: JinConfig,
    rng: R,
}

impl<R: RandomSource> JinGen<R> {
    pub fn new(config: JinConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &JinConfig {
        &self.config
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Run `iterations` steps on `n` fresh nodes and return the final edge set.
    pub fn generate(&mut self, n: usize, iterations: usize) -> JinResult<BTreeSet<Pair>> {
        self.generate_with_observer(n, iterations, &mut NoOpObserver)
    }

    pub fn generate_with_observer<O>(
        &mut self,
        n: usize,
        iterations: usize,
        observer: &mut O,
    ) -> JinResult<BTreeSet<Pair>>
    where
        O: IterationObserver + ?Sized,
    {
        self.run(n, iterations, observer).map(GraphState::into_edges)
    }

    /// Like `generate_with_observer` but hands back the whole final state,
    /// for metrics that need degrees or adjacency.
    pub fn run<O>(&mut self, n: usize, iterations: usize, observer: &mut O) -> JinResult<GraphState>
    where
        O: IterationObserver + ?Sized,
    {
        self.config.validate(n)?;
        let mut graph = GraphState::new(n);

        info!(
            "generating n={} iterations={} r0={} r1={} gamma={} z*={} barrier={}",
            n,
            iterations,
            self.config.r0,
            self.config.r1,
            self.config.gamma,
            self.config.z_star,
            self.config.barrier_iters
        );

        for i in 0..iterations {
            self.step(&mut graph, i)?;
            observer.observe(i, &graph);
        }

        info!(
            "done: {} edges, max degree {}",
            graph.edge_count(),
            graph.max_degree()
        );
        Ok(graph)
    }

    /// One iteration of the three update rules against `graph`.
    pub fn step(&mut self, graph: &mut GraphState, iteration: Iteration) -> JinResult<()> {
        let met = self.meet_randomly(graph)?;
        let introduced = self.introduce_friends(graph)?;
        let lost = if iteration > self.config.barrier_iters {
            self.lose_touch(graph)?
        } else {
            0
        };

        debug!(
            "{}: +{} met +{} introduced -{} lost, {} edges",
            iteration,
            met,
            introduced,
            lost,
            graph.edge_count()
        );
        Ok(())
    }

    // ========================================================================
    // Update Rules
    // ========================================================================

    /// Uniformly random pairs meet; new edges form where the gate allows.
    fn meet_randomly(&mut self, graph: &mut GraphState) -> JinResult<usize> {
        let n_meetings = self.config.meeting_trials(graph.pair_count());
        let mut added = 0;

        for _ in 0..n_meetings {
            let (a, b) = pair_indices(&mut self.rng, graph.node_count())?;
            let pair = Pair::new(a, b).ok_or(JinError::SelfLoop { node: a })?;
            if graph.connection_can_be_made(&pair, self.config.z_star) {
                graph.add_edge(pair);
                added += 1;
            }
        }

        Ok(added)
    }

    /// An ego chosen proportional to `k(k-1)` introduces two of its friends.
    fn introduce_friends(&mut self, graph: &mut GraphState) -> JinResult<usize> {
        // Each node counts ordered alter pairs, so halve for unordered ones
        let num_mutual = graph.total_meet_weight() / 2;
        let n_introductions = trials(num_mutual, self.config.r1);
        let mut added = 0;

        for _ in 0..n_introductions {
            let ego = select(&mut self.rng, graph.meet_weights(), graph.max_meet_weight())?;

            // Positive meet weight implies at least two friends
            let alters = graph.neighbors(ego);
            let (i, j) = pair_indices(&mut self.rng, alters.len())?;
            let (x, y) = (alters[i], alters[j]);

            let pair = Pair::new(x, y).ok_or(JinError::SelfLoop { node: x })?;
            if graph.connection_can_be_made(&pair, self.config.z_star) {
                graph.add_edge(pair);
                added += 1;
            }
        }

        Ok(added)
    }

    /// An ego chosen proportional to degree drops one uniformly chosen friend.
    fn lose_touch(&mut self, graph: &mut GraphState) -> JinResult<usize> {
        let n_lost = trials(graph.edge_count(), self.config.gamma);
        let mut removed = 0;

        for _ in 0..n_lost {
            // gamma > 1 can empty the graph before the trials run out
            if graph.edge_count() == 0 {
                debug!("no edges left, skipping {} attrition trials", n_lost - removed);
                break;
            }

            let ego = select(&mut self.rng, graph.degrees(), graph.max_degree())?;
            let alters = graph.neighbors(ego);
            let alter = alters[self.rng.next_index(alters.len())];

            let pair = Pair::new(ego, alter).ok_or(JinError::SelfLoop { node: ego })?;
            graph.remove_edge(&pair);
            removed += 1;
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jg_random::{ScriptedSource, SeededSource};

    fn pair(x: usize, y: usize) -> Pair {
        Pair::new(x, y).unwrap()
    }

    fn config(r0: f64, r1: f64, gamma: f64, z_star: usize, barrier_iters: usize) -> JinConfig {
        JinConfig {
            r0,
            r1,
            gamma,
            z_star,
            barrier_iters,
        }
    }

    #[test]
    fn test_default_config() {
        let c = JinConfig::default();
        assert_eq!(c, config(0.0005, 2.0, 0.005, 5, 1));
        // 250 nodes: 31125 pairs -> 16 meetings per iteration
        assert_eq!(c.meeting_trials(31125), 16);
    }

    #[test]
    fn test_config_from_yaml_fills_defaults() {
        let c: JinConfig = serde_yaml::from_str("r0: 0.01\nz_star: 9\n").unwrap();
        assert_eq!(c, config(0.01, 2.0, 0.005, 9, 1));
    }

    #[test]
    fn test_forced_first_meeting() {
        // 45 pairs * 0.02 rounds to exactly one meeting
        let rng = ScriptedSource::new(&[2, 5], &[]);
        let mut jin = JinGen::new(config(0.02, 2.0, 0.005, 9, 0), rng);

        let edges = jin.generate(10, 1).unwrap();
        assert_eq!(edges.into_iter().collect::<Vec<_>>(), vec![pair(2, 5)]);
        assert!(jin.into_rng().is_exhausted());
    }

    #[test]
    fn test_zero_meetings_rejected_before_any_iteration() {
        let mut calls = 0;
        let mut jin = JinGen::new(
            config(0.0001, 2.0, 0.005, 5, 1),
            SeededSource::from_seed([0u8; 32]),
        );

        let result = jin.generate_with_observer(10, 5, &mut |_: usize, _: &GraphState| calls += 1);
        assert_eq!(
            result,
            Err(JinError::InvalidConfig {
                r0: 0.0001,
                pair_count: 45
            })
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_single_node_rejected() {
        let mut jin = JinGen::new(JinConfig::default(), SeededSource::from_seed([0u8; 32]));
        assert!(matches!(
            jin.generate(1, 10),
            Err(JinError::InvalidConfig { pair_count: 0, .. })
        ));
    }

    #[test]
    fn test_zero_iterations_yield_empty_graph() {
        let mut jin = JinGen::new(JinConfig::default(), SeededSource::from_seed([0u8; 32]));
        assert!(jin.generate(250, 0).unwrap().is_empty());
    }

    #[test]
    fn test_introduction_closes_triangle() {
        let mut graph = GraphState::new(3);
        graph.add_edge(pair(0, 1));
        graph.add_edge(pair(1, 2));

        // select: node 1 (weight 2/2 accepts u=0.0); then alters [0, 2] by index
        let rng = ScriptedSource::new(&[1, 0, 1], &[0.0]);
        let mut jin = JinGen::new(config(0.5, 1.0, 0.0, 5, 0), rng);

        assert_eq!(jin.introduce_friends(&mut graph), Ok(1));
        assert!(graph.contains(&pair(0, 2)));
        assert!(jin.into_rng().is_exhausted());
    }

    #[test]
    fn test_introduction_respects_degree_cap() {
        let mut graph = GraphState::new(3);
        graph.add_edge(pair(0, 1));
        graph.add_edge(pair(1, 2));

        let rng = ScriptedSource::new(&[1, 0, 1], &[0.0]);
        let mut jin = JinGen::new(config(0.5, 1.0, 0.0, 1, 0), rng);

        assert_eq!(jin.introduce_friends(&mut graph), Ok(0));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_lose_touch_removes_chosen_edge() {
        let mut graph = GraphState::new(4);
        graph.add_edge(pair(0, 1));
        graph.add_edge(pair(2, 3));

        // 2 edges * 0.5 = 1 trial; ego 3 (degree 1/1), its only friend
        let rng = ScriptedSource::new(&[3, 0], &[0.5]);
        let mut jin = JinGen::new(config(0.5, 0.0, 0.5, 5, 0), rng);

        assert_eq!(jin.lose_touch(&mut graph), Ok(1));
        assert_eq!(graph.edges().iter().copied().collect::<Vec<_>>(), vec![pair(0, 1)]);
        assert!(graph.check_invariants().is_ok());
    }

    #[test]
    fn test_lose_touch_stops_on_empty_graph() {
        let mut graph = GraphState::new(4);
        graph.add_edge(pair(0, 1));

        let mut jin = JinGen::new(config(0.5, 0.0, 3.0, 5, 0), SeededSource::from_seed([8u8; 32]));
        assert_eq!(jin.lose_touch(&mut graph), Ok(1));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_attrition_waits_past_barrier() {
        let mut graph = GraphState::new(4);
        graph.add_edge(pair(0, 1));

        // z* = 0 blocks every new edge, leaving attrition as the only change
        let mut jin = JinGen::new(config(0.5, 1.0, 1.0, 0, 2), SeededSource::from_seed([4u8; 32]));

        jin.step(&mut graph, 2).unwrap();
        assert_eq!(graph.edge_count(), 1);

        jin.step(&mut graph, 3).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let c = config(0.005, 2.0, 0.01, 6, 1);
        let mut a = JinGen::new(c.clone(), SeededSource::from_seed([42u8; 32]));
        let mut b = JinGen::new(c, SeededSource::from_seed([42u8; 32]));

        let ea = a.generate(60, 300).unwrap();
        let eb = b.generate(60, 300).unwrap();
        assert!(!ea.is_empty());
        assert_eq!(ea, eb);
    }

    #[test]
    fn test_invariants_hold_every_iteration() {
        let c = JinConfig::default();
        let z_star = c.z_star;
        let mut jin = JinGen::new(c, SeededSource::from_seed([11u8; 32]));

        let mut seen = 0;
        let graph = jin
            .run(100, 600, &mut |i: usize, g: &GraphState| {
                assert_eq!(i, seen);
                seen += 1;
                assert_eq!(g.check_invariants(), Ok(()));
                assert!(g.max_degree() <= z_star);
            })
            .unwrap();

        assert_eq!(seen, 600);
        assert!(graph.edge_count() > 0);
    }

    #[test]
    fn test_each_generate_starts_fresh() {
        let mut jin = JinGen::new(JinConfig::default(), SeededSource::from_seed([2u8; 32]));
        jin.generate(100, 50).unwrap();

        // One iteration: 2 meetings, then at most 2 introductions
        let edges = jin.generate(100, 1).unwrap();
        assert!(edges.len() <= 4);
    }
}
