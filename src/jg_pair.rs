use std::fmt;

use crate::jg_interface::NodeId;

/// Canonical undirected edge: the smaller node id always comes first.
///
/// The only way to build a `Pair` is through [`Pair::new`], which normalises
/// the order and refuses self loops, so every value in circulation satisfies
/// `a < b`. Ordering is lexicographic on `(a, b)`, which is also the order in
/// which edge sets enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair {
    a: NodeId,
    b: NodeId,
}

impl Pair {
    /// Normalise two node ids into a pair. `None` if they are the same node.
    pub fn new(x: NodeId, y: NodeId) -> Option<Self> {
        match x.cmp(&y) {
            std::cmp::Ordering::Less => Some(Self { a: x, b: y }),
            std::cmp::Ordering::Greater => Some(Self { a: y, b: x }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn a(&self) -> NodeId {
        self.a
    }

    pub fn b(&self) -> NodeId {
        self.b
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// The endpoints swapped. Only used for symmetric bookkeeping, so it is
    /// returned as a plain tuple and never as a `Pair`.
    pub fn transpose(&self) -> (NodeId, NodeId) {
        (self.b, self.a)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_new_normalises_order() {
        let p = Pair::new(7, 3).unwrap();
        assert_eq!(p.endpoints(), (3, 7));
        assert_eq!(Pair::new(3, 7), Some(p));
    }

    #[test]
    fn test_self_loop_rejected() {
        assert_eq!(Pair::new(4, 4), None);
    }

    #[test]
    fn test_transpose_swaps() {
        let p = Pair::new(1, 9).unwrap();
        assert_eq!(p.transpose(), (9, 1));
    }

    #[test]
    fn test_lexicographic_order_drives_set_iteration() {
        let set: BTreeSet<Pair> = [(2, 5), (0, 9), (2, 3), (1, 0)]
            .iter()
            .filter_map(|&(x, y)| Pair::new(x, y))
            .collect();

        let order: Vec<_> = set.iter().map(|p| p.endpoints()).collect();
        assert_eq!(order, vec![(0, 1), (0, 9), (2, 3), (2, 5)]);
    }

    #[test]
    fn test_display_matches_dot_edge() {
        assert_eq!(Pair::new(5, 2).unwrap().to_string(), "2 -- 5");
    }
}
