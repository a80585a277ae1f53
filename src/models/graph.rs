//! Insertion-ordered weighted graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Edge, NodeId};

/// Mapping from ordered node pairs to edge weights.
///
/// Entries iterate in insertion order. Generated graphs store depot edges in
/// both directions with equal weight, and customer edges `(i, j)` only for
/// `i < j`; use [`Graph::undirected_weight`] or [`Graph::symmetrized`] when an
/// undirected view is wanted.
///
/// # Examples
///
/// ```
/// use u_routing_gen::models::{Edge, Graph};
///
/// let graph: Graph = vec![
///     Edge::new(0, 1, 10),
///     Edge::new(1, 0, 10),
///     Edge::new(1, 2, 5),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.weight(1, 2), Some(5));
/// assert_eq!(graph.weight(2, 1), None);
/// assert_eq!(graph.undirected_weight(2, 1), Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Edge>", into = "Vec<Edge>")]
pub struct Graph {
    edges: Vec<Edge>,
    index: HashMap<(NodeId, NodeId), usize>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` edges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Records `edge`, returning the weight it replaced.
    ///
    /// Replacing an existing pair keeps its original position.
    pub(crate) fn insert(&mut self, edge: Edge) -> Option<u32> {
        match self.index.get(&edge.key()) {
            Some(&pos) => Some(std::mem::replace(&mut self.edges[pos].weight, edge.weight)),
            None => {
                self.index.insert(edge.key(), self.edges.len());
                self.edges.push(edge);
                None
            }
        }
    }

    /// Weight stored under the ordered pair `(from, to)`.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<u32> {
        self.index.get(&(from, to)).map(|&pos| self.edges[pos].weight)
    }

    /// Weight between `a` and `b` regardless of the stored direction.
    ///
    /// Checks `(a, b)` first, then `(b, a)`.
    pub fn undirected_weight(&self, a: NodeId, b: NodeId) -> Option<u32> {
        self.weight(a, b).or_else(|| self.weight(b, a))
    }

    /// Returns `true` if the ordered pair `(from, to)` is present.
    pub fn contains(&self, from: NodeId, to: NodeId) -> bool {
        self.index.contains_key(&(from, to))
    }

    /// Number of stored entries (both directions counted separately).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// All entries in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of entries with the depot as an endpoint.
    pub fn depot_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.touches_depot()).count()
    }

    /// Number of entries between two customers.
    pub fn customer_edge_count(&self) -> usize {
        self.len() - self.depot_edge_count()
    }

    /// Returns a copy where every entry also exists in reverse.
    ///
    /// Existing entries keep their position and weight; missing reverse
    /// entries are appended after them in the same order.
    pub fn symmetrized(&self) -> Self {
        let mut graph = self.clone();
        for edge in &self.edges {
            if !graph.contains(edge.to, edge.from) {
                graph.insert(edge.reversed());
            }
        }
        graph
    }

    /// Returns `true` if every `(a, b)` has a matching `(b, a)` with the same weight.
    pub fn is_symmetric(&self) -> bool {
        self.edges
            .iter()
            .all(|e| self.weight(e.to, e.from) == Some(e.weight))
    }
}

impl FromIterator<Edge> for Graph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut graph = Self::with_capacity(iter.size_hint().0);
        for edge in iter {
            graph.insert(edge);
        }
        graph
    }
}

impl From<Vec<Edge>> for Graph {
    fn from(edges: Vec<Edge>) -> Self {
        edges.into_iter().collect()
    }
}

impl From<Graph> for Vec<Edge> {
    fn from(graph: Graph) -> Self {
        graph.edges
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
