//! Read-only statistics over a [`GraphState`].

use std::collections::BTreeMap;

use crate::jg_graph::GraphState;
use crate::jg_pair::Pair;

impl GraphState {
    /// Global clustering coefficient: `3 * triangles / connected triples`.
    ///
    /// Every triple `i < j < k` is checked for closure, so this is O(n³) in
    /// the worst case. With no node of degree two or more the denominator is
    /// zero and the result is NaN; callers needing a finite value must check.
    pub fn clustering_coefficient(&self) -> f64 {
        let n = self.node_count();
        let linked = |x: usize, y: usize| Pair::new(x, y).is_some_and(|p| self.contains(&p));

        let mut triads = 0usize;
        let mut link_sum = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                if !linked(i, j) {
                    continue;
                }
                for k in (j + 1)..n {
                    if linked(i, k) && linked(j, k) {
                        triads += 1;
                    }
                }
            }
            let d = self.degree(i);
            link_sum += d * d.saturating_sub(1) / 2;
        }

        (triads as f64 * 3.0) / link_sum as f64
    }

    /// Mean degree, `2|E| / n`. Zero for an empty node set.
    pub fn mean_degree(&self) -> f64 {
        if self.node_count() == 0 {
            return 0.0;
        }
        (2 * self.edge_count()) as f64 / self.node_count() as f64
    }

    /// Number of nodes at each degree, in ascending degree order
    pub fn degree_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for &d in self.degrees() {
            *histogram.entry(d).or_insert(0) += 1;
        }
        histogram
    }
}
