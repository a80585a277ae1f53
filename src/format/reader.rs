//! Plain-text instance reader.
//!
//! Accepts the layout produced by [`write_instance`](super::write_instance).
//! Fields may be separated by any run of whitespace and blank lines after the
//! last edge are ignored; everything else is rejected with the offending
//! line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::{FromStr, Lines};

use tracing::debug;

use crate::models::{is_depot, Demand, Edge, Graph, Instance, NodeId};

use super::FormatError;

/// Line cursor that tracks 1-based line numbers.
struct Cursor<'a> {
    lines: Lines<'a>,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            line: 0,
        }
    }

    /// Next line split into exactly `N` integer fields.
    fn record<T: FromStr<Err = std::num::ParseIntError> + Copy + Default, const N: usize>(
        &mut self,
        expected: &'static str,
    ) -> Result<[T; N], FormatError> {
        self.line += 1;
        let line = self.line;
        let text = self
            .lines
            .next()
            .ok_or(FormatError::UnexpectedEof { line, expected })?;

        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != N {
            return Err(FormatError::FieldCount {
                line,
                expected: N,
                found: fields.len(),
            });
        }

        let mut out = [T::default(); N];
        for (slot, field) in out.iter_mut().zip(fields) {
            *slot = field.parse().map_err(|source| FormatError::InvalidInteger {
                line,
                value: field.to_string(),
                source,
            })?;
        }
        Ok(out)
    }

    fn finish(mut self) -> Result<(), FormatError> {
        for text in self.lines.by_ref() {
            self.line += 1;
            if !text.trim().is_empty() {
                return Err(FormatError::TrailingContent { line: self.line });
            }
        }
        Ok(())
    }
}

fn check_node(line: usize, node: NodeId, max: NodeId) -> Result<(), FormatError> {
    if node > max {
        return Err(FormatError::NodeOutOfRange { line, node, max });
    }
    Ok(())
}

/// Parses an instance from the plain-text layout.
///
/// # Errors
///
/// Returns a [`FormatError`] naming the first malformed line: a missing or
/// extra field, a non-integer, a zero demand or weight, a node outside
/// `0..=num_nodes`, a depot demand, a duplicate demand or edge, a self-loop,
/// or non-blank content after the last edge.
///
/// # Examples
///
/// ```
/// use u_routing_gen::format::parse_instance;
///
/// let instance = parse_instance("1\n1 3\n2\n0 1 8\n1 0 8\n").unwrap();
/// assert_eq!(instance.num_nodes(), 1);
/// assert_eq!(instance.demand().get(1), Some(3));
/// assert_eq!(instance.graph().weight(1, 0), Some(8));
/// ```
pub fn parse_instance(input: &str) -> Result<Instance, FormatError> {
    let mut cursor = Cursor::new(input);

    let [num_nodes] = cursor.record::<usize, 1>("node count")?;

    // Counts are untrusted; every record needs at least one byte of input.
    let mut demand = Demand::with_capacity(num_nodes.min(input.len()));
    for _ in 0..num_nodes {
        let [node, value] = cursor.record::<u64, 2>("node demand")?;
        let line = cursor.line;
        let node = node as NodeId;
        check_node(line, node, num_nodes)?;
        if is_depot(node) {
            return Err(FormatError::DepotDemand { line });
        }
        let value = u32::try_from(value)
            .ok()
            .filter(|&v| v > 0)
            .ok_or(FormatError::NotPositive {
                line,
                what: "demand",
            })?;
        if demand.insert(node, value).is_some() {
            return Err(FormatError::DuplicateDemand { line, node });
        }
    }

    let [edge_count] = cursor.record::<usize, 1>("edge count")?;

    let mut graph = Graph::with_capacity(edge_count.min(input.len()));
    for _ in 0..edge_count {
        let [from, to, weight] = cursor.record::<u64, 3>("edge")?;
        let line = cursor.line;
        let (from, to) = (from as NodeId, to as NodeId);
        check_node(line, from, num_nodes)?;
        check_node(line, to, num_nodes)?;
        if from == to {
            return Err(FormatError::SelfLoop { line, node: from });
        }
        let weight = u32::try_from(weight)
            .ok()
            .filter(|&w| w > 0)
            .ok_or(FormatError::NotPositive {
                line,
                what: "weight",
            })?;
        if graph.insert(Edge::new(from, to, weight)).is_some() {
            return Err(FormatError::DuplicateEdge { line, from, to });
        }
    }

    cursor.finish()?;
    debug!(num_nodes, edges = graph.len(), "parsed instance");
    Ok(Instance::new(num_nodes, demand, graph))
}

/// Reads and parses an instance from `reader`.
pub fn read_instance<R: BufRead>(mut reader: R) -> Result<Instance, FormatError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_instance(&input)
}

/// Opens the file at `path` and parses an instance from it.
pub fn load_instance<P: AsRef<Path>>(path: P) -> Result<Instance, FormatError> {
    let file = File::open(path)?;
    read_instance(BufReader::new(file))
}
