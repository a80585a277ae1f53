//! A complete generated problem instance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{is_depot, Demand, Edge, Graph, NodeId};

/// Structural problem found by [`Instance::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    #[error("expected {expected} demand entries, found {found}")]
    DemandCount { expected: usize, found: usize },
    #[error("node {node} is outside 0..={max}")]
    NodeOutOfRange { node: NodeId, max: NodeId },
    #[error("depot cannot have a demand")]
    DepotDemand,
    #[error("demand of node {node} must be positive")]
    ZeroDemand { node: NodeId },
    #[error("duplicate demand for node {node}")]
    DuplicateDemand { node: NodeId },
    #[error("weight of edge ({from}, {to}) must be positive")]
    ZeroWeight { from: NodeId, to: NodeId },
    #[error("self-loop on node {node}")]
    SelfLoop { node: NodeId },
    #[error("duplicate edge ({from}, {to})")]
    DuplicateEdge { from: NodeId, to: NodeId },
}

/// Wire shape of an instance before its entries are checked.
#[derive(Deserialize)]
struct RawInstance {
    num_nodes: usize,
    demand: Vec<(NodeId, u32)>,
    graph: Vec<Edge>,
}

impl TryFrom<RawInstance> for Instance {
    type Error = InstanceError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        let mut demand = Demand::with_capacity(raw.demand.len());
        for (node, value) in raw.demand {
            if demand.insert(node, value).is_some() {
                return Err(InstanceError::DuplicateDemand { node });
            }
        }
        let mut graph = Graph::with_capacity(raw.graph.len());
        for edge in raw.graph {
            if graph.insert(edge).is_some() {
                return Err(InstanceError::DuplicateEdge {
                    from: edge.from,
                    to: edge.to,
                });
            }
        }
        let instance = Self::new(raw.num_nodes, demand, graph);
        instance.validate()?;
        Ok(instance)
    }
}

/// Node count, demands and weighted graph handed to a solver.
///
/// `num_nodes` counts customers only; the depot is implicit.
///
/// # Examples
///
/// ```
/// use u_routing_gen::models::{Demand, Edge, Graph, Instance};
///
/// let demand: Demand = vec![(1, 3), (2, 4)].into();
/// let graph: Graph = vec![
///     Edge::new(0, 1, 5),
///     Edge::new(0, 2, 6),
///     Edge::new(1, 0, 5),
///     Edge::new(2, 0, 6),
/// ]
/// .into();
/// let instance = Instance::new(2, demand, graph);
/// assert_eq!(instance.total_demand(), 7);
/// assert_eq!(instance.customer_edge_density(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    num_nodes: usize,
    demand: Demand,
    graph: Graph,
}

impl Instance {
    /// Bundles generated parts into an instance.
    pub fn new(num_nodes: usize, demand: Demand, graph: Graph) -> Self {
        Self {
            num_nodes,
            demand,
            graph,
        }
    }

    /// Number of customers (excluding the depot).
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Customer demands.
    pub fn demand(&self) -> &Demand {
        &self.demand
    }

    /// Weighted graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Splits the instance into its parts.
    pub fn into_parts(self) -> (usize, Demand, Graph) {
        (self.num_nodes, self.demand, self.graph)
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> u64 {
        self.demand.total()
    }

    /// Number of unordered customer pairs, `C(num_nodes, 2)`.
    pub fn customer_pair_count(&self) -> usize {
        self.num_nodes * self.num_nodes.saturating_sub(1) / 2
    }

    /// Fraction of customer pairs that received an edge.
    ///
    /// Zero when there are fewer than two customers.
    pub fn customer_edge_density(&self) -> f64 {
        let pairs = self.customer_pair_count();
        if pairs == 0 {
            return 0.0;
        }
        self.graph.customer_edge_count() as f64 / pairs as f64
    }

    /// Serializes the instance as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Checks the rules every instance file obeys.
    ///
    /// One demand per customer `1..=num_nodes`, all demands and weights
    /// positive, every edge endpoint in `0..=num_nodes`, no self-loops.
    pub fn validate(&self) -> Result<(), InstanceError> {
        let max = self.num_nodes;
        if self.demand.len() != max {
            return Err(InstanceError::DemandCount {
                expected: max,
                found: self.demand.len(),
            });
        }
        for (node, value) in self.demand.iter() {
            if is_depot(node) {
                return Err(InstanceError::DepotDemand);
            }
            if node > max {
                return Err(InstanceError::NodeOutOfRange { node, max });
            }
            if value == 0 {
                return Err(InstanceError::ZeroDemand { node });
            }
        }
        for edge in &self.graph {
            for node in [edge.from, edge.to] {
                if node > max {
                    return Err(InstanceError::NodeOutOfRange { node, max });
                }
            }
            if edge.is_self_loop() {
                return Err(InstanceError::SelfLoop { node: edge.from });
            }
            if edge.weight == 0 {
                return Err(InstanceError::ZeroWeight {
                    from: edge.from,
                    to: edge.to,
                });
            }
        }
        Ok(())
    }

    /// Deserializes an instance from JSON.
    ///
    /// Input that fails [`Instance::validate`] or repeats a demand or edge
    /// key is rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
