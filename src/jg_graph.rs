use std::collections::BTreeSet;

use log::trace;

use crate::jg_interface::NodeId;
use crate::jg_pair::Pair;

// ============================================================================
// Graph State
// ============================================================================

/// Incrementally maintained state of one simulation run.
///
/// All four structures (edge set, adjacency, degree, meet weight) and the two
/// running maxima change together, and only through [`GraphState::add_edge`]
/// and [`GraphState::remove_edge`]:
///
/// - `degree[v] == adjacency[v].len()`
/// - `meet_weight[v] == degree[v] * (degree[v] - 1)`
/// - `max_degree == max(degree)` and `max_meet_weight == max(meet_weight)`
#[derive(Debug, Clone, PartialEq)]
pub struct GraphState {
    n: usize,
    pair_count: usize,
    edges: BTreeSet<Pair>,
    adjacency: Vec<Vec<NodeId>>,
    degree: Vec<usize>,
    meet_weight: Vec<usize>,
    max_degree: usize,
    max_meet_weight: usize,
}

/// `k * (k - 1)`: ordered alter pairs a node of degree `k` could introduce
#[inline]
pub fn meet_factor(k: usize) -> usize {
    k * k.saturating_sub(1)
}

impl GraphState {
    /// Empty graph over nodes `0..n`
    pub fn new(n: usize) -> Self {
        Self {
            n,
            pair_count: n * n.saturating_sub(1) / 2,
            edges: BTreeSet::new(),
            adjacency: vec![Vec::new(); n],
            degree: vec![0; n],
            meet_weight: vec![0; n],
            max_degree: 0,
            max_meet_weight: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Number of possible undirected pairs, `n * (n - 1) / 2`
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn edges(&self) -> &BTreeSet<Pair> {
        &self.edges
    }

    pub fn into_edges(self) -> BTreeSet<Pair> {
        self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, pair: &Pair) -> bool {
        self.edges.contains(pair)
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node]
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.degree[node]
    }

    pub fn degrees(&self) -> &[usize] {
        &self.degree
    }

    pub fn meet_weights(&self) -> &[usize] {
        &self.meet_weight
    }

    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    pub fn max_meet_weight(&self) -> usize {
        self.max_meet_weight
    }

    pub fn total_meet_weight(&self) -> usize {
        self.meet_weight.iter().sum()
    }

    /// True iff the edge is absent and both endpoints are below `z_star`.
    ///
    /// The degree cap gates creation only; removal never consults it.
    pub fn connection_can_be_made(&self, pair: &Pair, z_star: usize) -> bool {
        if self.edges.contains(pair) {
            return false;
        }

        self.degree[pair.a()] < z_star && self.degree[pair.b()] < z_star
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert an edge. Returns `false` and changes nothing if it already exists.
    pub fn add_edge(&mut self, pair: Pair) -> bool {
        if !self.edges.insert(pair) {
            return false;
        }

        trace!("add {}", pair);
        let (a, b) = pair.endpoints();
        self.attach(a, b);
        self.attach(b, a);
        true
    }

    /// Remove an edge. Returns `false` and changes nothing if it is absent.
    pub fn remove_edge(&mut self, pair: &Pair) -> bool {
        if !self.edges.remove(pair) {
            return false;
        }

        trace!("remove {}", pair);
        let (a, b) = pair.endpoints();
        self.detach(a, b);
        let (a, b) = pair.transpose();
        self.detach(a, b);
        true
    }

    fn attach(&mut self, node: NodeId, neighbor: NodeId) {
        self.adjacency[node].push(neighbor);

        let k = self.degree[node] + 1;
        let j = meet_factor(k);
        self.degree[node] = k;
        self.meet_weight[node] = j;

        // Growth can only raise the maximum, and only by this node
        if k > self.max_degree {
            self.max_degree = k;
            self.max_meet_weight = j;
        }
    }

    fn detach(&mut self, node: NodeId, neighbor: NodeId) {
        let friends = &mut self.adjacency[node];
        if let Some(pos) = friends.iter().position(|&x| x == neighbor) {
            friends.remove(pos);
        }

        let k = self.degree[node].saturating_sub(1);
        self.degree[node] = k;
        self.meet_weight[node] = meet_factor(k);

        // This node may have held the unique maximum
        if k + 1 == self.max_degree {
            self.max_degree = self.scan_max_degree();
            self.max_meet_weight = meet_factor(self.max_degree);
        }
    }

    fn scan_max_degree(&self) -> usize {
        self.degree.iter().copied().max().unwrap_or(0)
    }

    // ========================================================================
    // Consistency
    // ========================================================================

    /// Recompute every derived quantity from the edge set and compare.
    ///
    /// O(n + |E|); meant for tests and debugging observers, not the hot loop.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut counted = vec![0usize; self.n];
        for pair in &self.edges {
            let (a, b) = pair.endpoints();
            if a >= b {
                return Err(format!("non-canonical edge {:?}", pair.endpoints()));
            }
            counted[a] += 1;
            counted[b] += 1;
        }

        for node in 0..self.n {
            let friends = &self.adjacency[node];
            if friends.len() != self.degree[node] || counted[node] != self.degree[node] {
                return Err(format!(
                    "node {}: degree {} adjacency {} edges {}",
                    node,
                    self.degree[node],
                    friends.len(),
                    counted[node]
                ));
            }
            if self.meet_weight[node] != meet_factor(self.degree[node]) {
                return Err(format!(
                    "node {}: meet weight {} for degree {}",
                    node, self.meet_weight[node], self.degree[node]
                ));
            }
            for &friend in friends {
                let listed = Pair::new(node, friend)
                    .map(|p| self.edges.contains(&p))
                    .unwrap_or(false);
                if !listed {
                    return Err(format!("node {}: adjacency lists {} without an edge", node, friend));
                }
            }
        }

        let max_degree = self.scan_max_degree();
        let max_meet = self.meet_weight.iter().copied().max().unwrap_or(0);
        if self.max_degree != max_degree || self.max_meet_weight != max_meet {
            return Err(format!(
                "maxima ({}, {}) expected ({}, {})",
                self.max_degree, self.max_meet_weight, max_degree, max_meet
            ));
        }

        Ok(())
    }
}
