//! Random instance generators.
//!
//! - [`generate_demands`]: uniform demand per customer
//! - [`generate_graph`]: depot-rooted graph with probabilistic customer edges
//! - [`generate_instance`]: both of the above from one random source
//!
//! Every generator takes the random source explicitly; seed a
//! [`rand::rngs::StdRng`] for reproducible instances.

mod config;
mod demand;
mod graph;
mod instance;

pub use config::{
    DemandConfig, GraphConfig, InstanceConfig, DEFAULT_MAX_DEMAND, DEFAULT_MAX_WEIGHT,
    DEFAULT_MIN_DEMAND, DEFAULT_NUM_NODES, DEFAULT_PROBABILITY,
};
pub use demand::{generate_demands, generate_demands_with};
pub use graph::generate_graph;
pub use instance::generate_instance;
