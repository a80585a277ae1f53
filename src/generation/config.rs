//! Generation parameters.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest demand drawn by default.
pub const DEFAULT_MIN_DEMAND: u32 = 1;
/// Largest demand drawn by default.
pub const DEFAULT_MAX_DEMAND: u32 = 10;
/// Largest edge weight drawn by default.
pub const DEFAULT_MAX_WEIGHT: u32 = 100;
/// Default probability that a customer pair is connected.
pub const DEFAULT_PROBABILITY: f64 = 0.25;
/// Default number of customers.
pub const DEFAULT_NUM_NODES: usize = 5;

/// Inclusive range customer demands are drawn from.
///
/// # Examples
///
/// ```
/// use u_routing_gen::generation::DemandConfig;
///
/// let cfg = DemandConfig::default();
/// assert_eq!((cfg.min(), cfg.max()), (1, 10));
/// assert!(DemandConfig::new(0, 5).is_none());
/// assert!(DemandConfig::new(6, 5).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandConfig {
    min: u32,
    max: u32,
}

impl DemandConfig {
    /// Creates a demand range `[min, max]`.
    ///
    /// Returns `None` if `min` is zero or `min > max`.
    pub fn new(min: u32, max: u32) -> Option<Self> {
        if min == 0 || min > max {
            return None;
        }
        Some(Self { min, max })
    }

    /// Smallest possible demand.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Largest possible demand.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns `true` if the range satisfies the [`DemandConfig::new`] rules.
    pub fn is_valid(&self) -> bool {
        Self::new(self.min, self.max).is_some()
    }

    pub(crate) fn draw<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min..=self.max)
    }
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_DEMAND,
            max: DEFAULT_MAX_DEMAND,
        }
    }
}

/// Weight bound and connection probability for graph generation.
///
/// # Examples
///
/// ```
/// use u_routing_gen::generation::GraphConfig;
///
/// let cfg = GraphConfig::default();
/// assert_eq!(cfg.max_weight(), 100);
/// assert_eq!(cfg.probability(), 0.25);
///
/// let dense = GraphConfig::default().with_probability(1.0).unwrap();
/// assert_eq!(dense.probability(), 1.0);
/// assert!(GraphConfig::new(0, 0.5).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    max_weight: u32,
    probability: f64,
}

impl GraphConfig {
    /// Creates a graph configuration.
    ///
    /// Returns `None` if `max_weight` is zero or `probability` is NaN.
    /// Probabilities below 0 behave as 0 and above 1 behave as 1.
    pub fn new(max_weight: u32, probability: f64) -> Option<Self> {
        if max_weight == 0 || probability.is_nan() {
            return None;
        }
        Some(Self {
            max_weight,
            probability,
        })
    }

    /// Replaces the maximum edge weight.
    pub fn with_max_weight(self, max_weight: u32) -> Option<Self> {
        Self::new(max_weight, self.probability)
    }

    /// Replaces the connection probability.
    pub fn with_probability(self, probability: f64) -> Option<Self> {
        Self::new(self.max_weight, probability)
    }

    /// Largest possible edge weight.
    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    /// Probability that a customer pair receives an edge.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Returns `true` if the values satisfy the [`GraphConfig::new`] rules.
    pub fn is_valid(&self) -> bool {
        Self::new(self.max_weight, self.probability).is_some()
    }

    pub(crate) fn draw_weight<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.max_weight)
    }

    /// One Bernoulli trial: `u < probability` with `u` uniform in `[0, 1)`.
    pub(crate) fn draw_connected<R: Rng>(&self, rng: &mut R) -> bool {
        rng.random::<f64>() < self.probability
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_weight: DEFAULT_MAX_WEIGHT,
            probability: DEFAULT_PROBABILITY,
        }
    }
}

/// Everything needed to generate one [`Instance`](crate::models::Instance).
///
/// Serializable so a run can be described by a JSON file.
///
/// # Examples
///
/// ```
/// use u_routing_gen::generation::InstanceConfig;
///
/// let cfg: InstanceConfig = serde_json::from_str(r#"{ "num_nodes": 12 }"#).unwrap();
/// assert_eq!(cfg.num_nodes(), 12);
/// assert_eq!(cfg.graph().max_weight(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    num_nodes: usize,
    demand: DemandConfig,
    graph: GraphConfig,
}

impl InstanceConfig {
    /// Creates a configuration for `num_nodes` customers with default ranges.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            ..Self::default()
        }
    }

    /// Sets the number of customers.
    pub fn with_num_nodes(mut self, num_nodes: usize) -> Self {
        self.num_nodes = num_nodes;
        self
    }

    /// Sets the demand range.
    pub fn with_demand(mut self, demand: DemandConfig) -> Self {
        self.demand = demand;
        self
    }

    /// Sets the graph parameters.
    pub fn with_graph(mut self, graph: GraphConfig) -> Self {
        self.graph = graph;
        self
    }

    /// Number of customers.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Demand range.
    pub fn demand(&self) -> &DemandConfig {
        &self.demand
    }

    /// Graph parameters.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }

    /// Returns `true` if both nested configurations are valid.
    ///
    /// Deserialized configurations bypass the constructors and should be
    /// checked before generating.
    pub fn is_valid(&self) -> bool {
        self.demand.is_valid() && self.graph.is_valid()
    }
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            num_nodes: DEFAULT_NUM_NODES,
            demand: DemandConfig::default(),
            graph: GraphConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demand_config_bounds() {
        assert!(DemandConfig::new(1, 1).is_some());
        assert!(DemandConfig::new(3, 8).is_some());
        assert!(DemandConfig::new(0, 0).is_none());
        assert!(DemandConfig::new(9, 2).is_none());
    }

    #[test]
    fn test_demand_draw_in_range() {
        let cfg = DemandConfig::new(3, 5).expect("valid");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let d = cfg.draw(&mut rng);
            assert!((3..=5).contains(&d));
        }
    }

    #[test]
    fn test_graph_config_rejects() {
        assert!(GraphConfig::new(0, 0.25).is_none());
        assert!(GraphConfig::new(10, f64::NAN).is_none());
        assert!(GraphConfig::new(1, -3.0).is_some());
        assert!(GraphConfig::new(1, 7.0).is_some());
    }

    #[test]
    fn test_draw_connected_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let never = GraphConfig::new(10, 0.0).expect("valid");
        let below = GraphConfig::new(10, -1.0).expect("valid");
        let always = GraphConfig::new(10, 1.0).expect("valid");
        let above = GraphConfig::new(10, 2.0).expect("valid");
        for _ in 0..500 {
            assert!(!never.draw_connected(&mut rng));
            assert!(!below.draw_connected(&mut rng));
            assert!(always.draw_connected(&mut rng));
            assert!(above.draw_connected(&mut rng));
        }
    }

    #[test]
    fn test_draw_weight_max_one() {
        let cfg = GraphConfig::new(1, 0.5).expect("valid");
        let mut rng = StdRng::seed_from_u64(3);
        assert!((0..50).all(|_| cfg.draw_weight(&mut rng) == 1));
    }

    #[test]
    fn test_instance_config_builders() {
        let cfg = InstanceConfig::new(20)
            .with_demand(DemandConfig::new(2, 4).expect("valid"))
            .with_graph(GraphConfig::new(50, 0.5).expect("valid"));
        assert_eq!(cfg.num_nodes(), 20);
        assert_eq!(cfg.demand().max(), 4);
        assert_eq!(cfg.graph().max_weight(), 50);
        assert!(cfg.is_valid());
    }

    #[test]
    fn test_instance_config_partial_json() {
        let cfg: InstanceConfig =
            serde_json::from_str(r#"{ "graph": { "probability": 0.5 } }"#).expect("parse");
        assert_eq!(cfg.num_nodes(), DEFAULT_NUM_NODES);
        assert_eq!(cfg.graph().max_weight(), DEFAULT_MAX_WEIGHT);
        assert_eq!(cfg.graph().probability(), 0.5);
        assert_eq!(*cfg.demand(), DemandConfig::default());
    }

    #[test]
    fn test_deserialized_invalid_detected() {
        let cfg: InstanceConfig =
            serde_json::from_str(r#"{ "demand": { "min": 0, "max": 3 } }"#).expect("parse");
        assert!(!cfg.is_valid());
    }
}
