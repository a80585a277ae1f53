//! # u-routing-gen
//!
//! Random instance generation for capacitated vehicle routing problems.
//!
//! An instance is a depot (node `0`), `N` customers with random demands, and
//! a weighted graph in which every customer is linked to the depot and
//! customer pairs are linked at random.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Demand, Edge, Graph, Instance)
//! - [`generation`]: Demand, graph and instance generators
//! - [`format`]: Plain-text instance file writer and reader
//! - [`distance`]: Dense distance matrix built from a generated graph
//!
//! ## Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use u_routing_gen::generation::{generate_demands, generate_graph, GraphConfig};
//! use u_routing_gen::models::Instance;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let demand = generate_demands(5, &mut rng);
//! let graph = generate_graph(5, &GraphConfig::default(), &mut rng);
//! let instance = Instance::new(5, demand, graph);
//!
//! let text = u_routing_gen::format::to_string(&instance);
//! let parsed = u_routing_gen::format::parse_instance(&text).unwrap();
//! assert_eq!(parsed, instance);
//! ```

pub mod distance;
pub mod format;
pub mod generation;
pub mod models;
