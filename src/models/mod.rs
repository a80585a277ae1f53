//! Domain model types for generated routing instances.
//!
//! Node `0` is the depot and nodes `1..=N` are customers. Demands and graphs
//! are insertion-ordered containers so that serialization reproduces the
//! order in which entries were generated.

mod demand;
mod edge;
mod graph;
mod instance;
mod node;

pub use demand::Demand;
pub use edge::Edge;
pub use graph::Graph;
pub use instance::{Instance, InstanceError};
pub use node::{customers, is_depot, NodeId, DEPOT};
