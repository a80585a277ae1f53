//! Dense distance matrix built from a sparse instance graph.

use crate::models::{Graph, DEPOT};

/// A dense (N+1)×(N+1) distance matrix stored in row-major order.
///
/// Row and column `0` belong to the depot. Pairs without a graph entry hold
/// `f64::INFINITY`; the diagonal is zero.
///
/// # Examples
///
/// ```
/// use u_routing_gen::models::{Edge, Graph};
/// use u_routing_gen::distance::DistanceMatrix;
///
/// let graph: Graph = vec![
///     Edge::new(0, 1, 5),
///     Edge::new(0, 2, 8),
///     Edge::new(1, 0, 5),
///     Edge::new(2, 0, 8),
///     Edge::new(1, 2, 3),
/// ]
/// .into();
/// let dm = DistanceMatrix::from_graph(&graph, 2);
/// assert_eq!(dm.get(1, 2), 3.0);
/// assert!(dm.get(2, 1).is_infinite());
/// assert_eq!(dm.size(), 3);
///
/// let undirected = DistanceMatrix::from_graph_undirected(&graph, 2);
/// assert_eq!(undirected.get(2, 1), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix for the depot plus `num_nodes` customers with every
    /// off-diagonal entry unreachable.
    pub fn new(num_nodes: usize) -> Self {
        let size = num_nodes + 1;
        let mut data = vec![f64::INFINITY; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self { data, size }
    }

    /// Copies every graph entry into its `(from, to)` cell.
    ///
    /// Entries that reference nodes above `num_nodes` are skipped.
    pub fn from_graph(graph: &Graph, num_nodes: usize) -> Self {
        let mut dm = Self::new(num_nodes);
        for edge in graph {
            if edge.from < dm.size && edge.to < dm.size {
                dm.set(edge.from, edge.to, f64::from(edge.weight));
            }
        }
        dm
    }

    /// Like [`DistanceMatrix::from_graph`], but fills both directions.
    ///
    /// When both `(a, b)` and `(b, a)` are present, each cell keeps its own
    /// stored weight.
    pub fn from_graph_undirected(graph: &Graph, num_nodes: usize) -> Self {
        let mut dm = Self::new(num_nodes);
        for edge in graph {
            if edge.from >= dm.size || edge.to >= dm.size {
                continue;
            }
            dm.set(edge.from, edge.to, f64::from(edge.weight));
            if !graph.contains(edge.to, edge.from) {
                dm.set(edge.to, edge.from, f64::from(edge.weight));
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations (customers plus the depot).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the path `from → to` has a finite distance.
    pub fn is_connected(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Returns `true` if every customer has a finite distance to and from the depot.
    pub fn depot_reachable(&self) -> bool {
        (1..self.size).all(|i| self.is_connected(DEPOT, i) && self.is_connected(i, DEPOT))
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two unreachable cells count as equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
