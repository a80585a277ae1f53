//! Plain-text instance writer.
//!
//! ```text
//! <num_nodes>
//! <node> <demand>        (num_nodes lines)
//! <edge_count>
//! <from> <to> <weight>   (edge_count lines)
//! ```
//!
//! Fields are separated by one space and every record ends with `\n`.
//! Demands and edges are written in their containers' insertion order.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::Instance;

use super::FormatError;

impl fmt::Display for Instance {
    /// Renders the instance in the plain-text file layout.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.num_nodes())?;
        for (node, demand) in self.demand().iter() {
            writeln!(f, "{node} {demand}")?;
        }
        writeln!(f, "{}", self.graph().len())?;
        for edge in self.graph() {
            writeln!(f, "{} {} {}", edge.from, edge.to, edge.weight)?;
        }
        Ok(())
    }
}

/// Renders `instance` in the plain-text file layout.
///
/// # Examples
///
/// ```
/// use u_routing_gen::format;
/// use u_routing_gen::models::{Edge, Instance};
///
/// let instance = Instance::new(
///     1,
///     vec![(1, 3)].into(),
///     vec![Edge::new(0, 1, 8), Edge::new(1, 0, 8)].into(),
/// );
/// assert_eq!(format::to_string(&instance), "1\n1 3\n2\n0 1 8\n1 0 8\n");
/// ```
pub fn to_string(instance: &Instance) -> String {
    instance.to_string()
}

/// Writes `instance` to `writer` in the plain-text file layout.
pub fn write_instance<W: Write>(instance: &Instance, mut writer: W) -> Result<(), FormatError> {
    write!(writer, "{instance}")?;
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `instance` to it.
pub fn save_instance<P: AsRef<Path>>(instance: &Instance, path: P) -> Result<(), FormatError> {
    let file = File::create(path)?;
    write_instance(instance, BufWriter::new(file))
}
