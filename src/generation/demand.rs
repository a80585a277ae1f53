//! Random customer demands.

use rand::Rng;
use tracing::debug;

use crate::models::{customers, Demand};

use super::DemandConfig;

/// Draws a demand in `[1, 10]` for every customer `1..=num_nodes`.
///
/// Entries are inserted in ascending node order. The depot gets no entry.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_routing_gen::generation::generate_demands;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let demand = generate_demands(5, &mut rng);
/// assert_eq!(demand.nodes().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// assert!(demand.iter().all(|(_, d)| (1..=10).contains(&d)));
/// ```
pub fn generate_demands<R: Rng>(num_nodes: usize, rng: &mut R) -> Demand {
    generate_demands_with(num_nodes, &DemandConfig::default(), rng)
}

/// Draws a demand from `config`'s range for every customer `1..=num_nodes`.
pub fn generate_demands_with<R: Rng>(
    num_nodes: usize,
    config: &DemandConfig,
    rng: &mut R,
) -> Demand {
    let mut demand = Demand::with_capacity(num_nodes);
    for node in customers(num_nodes) {
        demand.insert(node, config.draw(rng));
    }
    debug!(num_nodes, total = demand.total(), "generated demands");
    demand
}
