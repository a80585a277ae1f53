//! Whole-instance generation.

use rand::Rng;
use tracing::debug;

use crate::models::Instance;

use super::{generate_demands_with, generate_graph, InstanceConfig};

/// Generates demands and then the graph from one random source.
///
/// The two parts are independent; drawing demands first fixes the order in
/// which the source is consumed, so a seeded source yields the same instance.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_routing_gen::generation::{generate_instance, InstanceConfig};
///
/// let cfg = InstanceConfig::new(5);
/// let a = generate_instance(&cfg, &mut StdRng::seed_from_u64(7));
/// let b = generate_instance(&cfg, &mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// assert_eq!(a.demand().len(), 5);
/// ```
pub fn generate_instance<R: Rng>(config: &InstanceConfig, rng: &mut R) -> Instance {
    let num_nodes = config.num_nodes();
    let demand = generate_demands_with(num_nodes, config.demand(), rng);
    let graph = generate_graph(num_nodes, config.graph(), rng);
    debug!(
        num_nodes,
        edges = graph.len(),
        total_demand = demand.total(),
        "generated instance"
    );
    Instance::new(num_nodes, demand, graph)
}
