//! Node identifiers.

/// Identifier of a location in an instance.
///
/// Node `0` is the depot; nodes `1..=N` are customers.
pub type NodeId = usize;

/// The reserved depot node.
pub const DEPOT: NodeId = 0;

/// Returns `true` if `node` is the depot.
///
/// # Examples
///
/// ```
/// use u_routing_gen::models::{is_depot, DEPOT};
///
/// assert!(is_depot(DEPOT));
/// assert!(!is_depot(3));
/// ```
pub fn is_depot(node: NodeId) -> bool {
    node == DEPOT
}

/// Iterates the customer nodes `1..=num_nodes` in ascending order.
pub fn customers(num_nodes: usize) -> impl Iterator<Item = NodeId> {
    1..=num_nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customers_range() {
        assert_eq!(customers(3).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(customers(0).count(), 0);
    }

    #[test]
    fn test_customers_exclude_depot() {
        assert!(customers(10).all(|n| !is_depot(n)));
    }
}
