//! Per-customer service demands.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Insertion-ordered mapping from customer node to its demand.
///
/// The depot never has an entry. Iteration yields entries in the order they
/// were inserted, which for generated demands is ascending node order.
///
/// # Examples
///
/// ```
/// use u_routing_gen::models::Demand;
///
/// let demand: Demand = vec![(1, 4), (2, 7)].into_iter().collect();
/// assert_eq!(demand.len(), 2);
/// assert_eq!(demand.get(2), Some(7));
/// assert_eq!(demand.get(0), None);
/// assert_eq!(demand.total(), 11);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<(NodeId, u32)>", into = "Vec<(NodeId, u32)>")]
pub struct Demand {
    entries: Vec<(NodeId, u32)>,
    index: HashMap<NodeId, usize>,
}

impl Demand {
    /// Creates an empty demand mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mapping with room for `capacity` customers.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Sets the demand of `node`, returning the previous value.
    ///
    /// Replacing an existing entry keeps its original position.
    pub(crate) fn insert(&mut self, node: NodeId, demand: u32) -> Option<u32> {
        match self.index.get(&node) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, demand)),
            None => {
                self.index.insert(node, self.entries.len());
                self.entries.push((node, demand));
                None
            }
        }
    }

    /// Demand of `node`, if it has an entry.
    pub fn get(&self, node: NodeId) -> Option<u32> {
        self.index.get(&node).map(|&pos| self.entries[pos].1)
    }

    /// Returns `true` if `node` has a demand entry.
    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(node, demand)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterates the nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.iter().map(|&(node, _)| node)
    }

    /// Sum of all demands.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, d)| u64::from(d)).sum()
    }
}

impl FromIterator<(NodeId, u32)> for Demand {
    fn from_iter<I: IntoIterator<Item = (NodeId, u32)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut demand = Self::with_capacity(iter.size_hint().0);
        for (node, d) in iter {
            demand.insert(node, d);
        }
        demand
    }
}

impl From<Vec<(NodeId, u32)>> for Demand {
    fn from(entries: Vec<(NodeId, u32)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Demand> for Vec<(NodeId, u32)> {
    fn from(demand: Demand) -> Self {
        demand.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut d = Demand::new();
        d.insert(3, 1);
        d.insert(1, 2);
        d.insert(2, 3);
        assert_eq!(d.nodes().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut d = Demand::new();
        assert_eq!(d.insert(1, 5), None);
        d.insert(2, 6);
        assert_eq!(d.insert(1, 9), Some(5));
        assert_eq!(d.len(), 2);
        assert_eq!(d.iter().collect::<Vec<_>>(), vec![(1, 9), (2, 6)]);
    }

    #[test]
    fn test_get_missing() {
        let d: Demand = vec![(1, 3)].into();
        assert_eq!(d.get(1), Some(3));
        assert_eq!(d.get(2), None);
        assert!(!d.contains(0));
    }

    #[test]
    fn test_total_empty() {
        let d = Demand::new();
        assert!(d.is_empty());
        assert_eq!(d.total(), 0);
    }

    #[test]
    fn test_serde_as_pairs() {
        let d: Demand = vec![(1, 3), (2, 10)].into();
        let json = serde_json::to_string(&d).expect("serialize");
        assert_eq!(json, "[[1,3],[2,10]]");
        let back: Demand = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, d);
    }
}
