//! Plain-text instance files.
//!
//! The layout is consumed by external solvers and must be reproduced exactly:
//! the node count, one `node demand` line per customer, the edge count, then
//! one `from to weight` line per graph entry.

mod error;
mod reader;
mod writer;

pub use error::FormatError;
pub use reader::{load_instance, parse_instance, read_instance};
pub use writer::{save_instance, to_string, write_instance};
