//! Random depot-rooted weighted graphs.
//!
//! Generation runs in two phases:
//!
//! 1. **Depot connectivity**: every customer gets a weight to and from the
//!    depot, stored under both `(0, i)` and `(i, 0)` with the same value.
//! 2. **Customer pairs**: each pair `i < j` is connected independently with
//!    the configured probability and stored under `(i, j)` only.
//!
//! # Complexity
//!
//! O(n²) random draws where n = number of customers.

use rand::Rng;
use tracing::debug;

use crate::models::{customers, Edge, Graph, DEPOT};

use super::GraphConfig;

/// Generates a weighted graph over the depot and `num_nodes` customers.
///
/// Entries are inserted as all `(0, i)` ascending, then all `(i, 0)`
/// ascending, then customer pairs `(i, j)` in ascending `(i, j)` order.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_routing_gen::generation::{generate_graph, GraphConfig};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let graph = generate_graph(5, &GraphConfig::default(), &mut rng);
///
/// assert_eq!(graph.depot_edge_count(), 10);
/// assert!(graph.customer_edge_count() <= 10);
/// for i in 1..=5 {
///     assert_eq!(graph.weight(0, i), graph.weight(i, 0));
/// }
/// ```
pub fn generate_graph<R: Rng>(num_nodes: usize, config: &GraphConfig, rng: &mut R) -> Graph {
    let pairs = num_nodes * num_nodes.saturating_sub(1) / 2;
    let expected = (pairs as f64 * config.probability().clamp(0.0, 1.0)).ceil() as usize;
    let mut graph = Graph::with_capacity(2 * num_nodes + expected);

    let depot_weights: Vec<u32> = customers(num_nodes)
        .map(|_| config.draw_weight(rng))
        .collect();
    for (node, &weight) in customers(num_nodes).zip(&depot_weights) {
        graph.insert(Edge::new(DEPOT, node, weight));
    }
    for (node, &weight) in customers(num_nodes).zip(&depot_weights) {
        graph.insert(Edge::new(node, DEPOT, weight));
    }

    for i in customers(num_nodes) {
        for j in (i + 1)..=num_nodes {
            if config.draw_connected(rng) {
                graph.insert(Edge::new(i, j, config.draw_weight(rng)));
            }
        }
    }

    debug!(
        num_nodes,
        edges = graph.len(),
        customer_edges = graph.customer_edge_count(),
        pairs,
        "generated graph"
    );
    graph
}
