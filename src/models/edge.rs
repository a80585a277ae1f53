//! Weighted edge type.

use serde::{Deserialize, Serialize};

use super::{is_depot, NodeId};

/// A weighted connection from `from` to `to`.
///
/// # Examples
///
/// ```
/// use u_routing_gen::models::Edge;
///
/// let e = Edge::new(0, 3, 42);
/// assert!(e.touches_depot());
/// assert_eq!(e.key(), (0, 3));
/// assert_eq!(e.reversed(), Edge::new(3, 0, 42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Origin node.
    pub from: NodeId,
    /// Destination node.
    pub to: NodeId,
    /// Travel cost.
    pub weight: u32,
}

impl Edge {
    /// Creates an edge.
    pub fn new(from: NodeId, to: NodeId, weight: u32) -> Self {
        Self { from, to, weight }
    }

    /// The ordered `(from, to)` pair under which the edge is stored.
    pub fn key(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }

    /// The same edge in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.weight)
    }

    /// Returns `true` if either endpoint is the depot.
    pub fn touches_depot(&self) -> bool {
        is_depot(self.from) || is_depot(self.to)
    }

    /// Returns `true` if both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_edge() {
        let e = Edge::new(2, 5, 7);
        assert!(!e.touches_depot());
        assert!(!e.is_self_loop());
    }

    #[test]
    fn test_inbound_depot_edge() {
        assert!(Edge::new(4, 0, 1).touches_depot());
    }

    #[test]
    fn test_self_loop() {
        assert!(Edge::new(3, 3, 1).is_self_loop());
    }
}
