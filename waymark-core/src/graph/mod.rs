//! Weighted adjacency-list graph over contiguous vertex indices.
//!
//! Vertices are `usize` indices in `[0, V)` fixed at construction. Edges are
//! only ever appended; there is no vertex or edge removal. Undirected edges
//! are stored once per direction in the adjacency lists but count as a
//! single logical edge everywhere else.

mod builder;

use std::{iter::FusedIterator, slice};

use tracing::trace;

use crate::{
    error::{GraphError, Result},
    union_find::DisjointSet,
};

pub use self::builder::GraphBuilder;

/// Directedness and weightedness flags of a [`Graph`].
///
/// # Examples
/// ```
/// use waymark_core::GraphKind;
///
/// let kind = GraphKind::undirected_unweighted();
/// assert!(!kind.directed);
/// assert!(!kind.weighted);
/// assert_eq!(GraphKind::default(), GraphKind::undirected_weighted());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GraphKind {
    /// Edges run one way only when `true`.
    pub directed: bool,
    /// Edge weights are honoured when `true`; otherwise every edge weighs 1.
    pub weighted: bool,
}

impl GraphKind {
    /// Undirected graph with explicit weights.
    #[must_use]
    pub const fn undirected_weighted() -> Self {
        Self {
            directed: false,
            weighted: true,
        }
    }

    /// Undirected graph where every edge weighs 1 (hop counting).
    #[must_use]
    pub const fn undirected_unweighted() -> Self {
        Self {
            directed: false,
            weighted: false,
        }
    }

    /// Directed graph with explicit weights.
    #[must_use]
    pub const fn directed_weighted() -> Self {
        Self {
            directed: true,
            weighted: true,
        }
    }

    /// Directed graph where every edge weighs 1.
    #[must_use]
    pub const fn directed_unweighted() -> Self {
        Self {
            directed: true,
            weighted: false,
        }
    }
}

impl Default for GraphKind {
    fn default() -> Self {
        Self::undirected_weighted()
    }
}

/// How [`Graph::insert_edge`] treats a vertex pair that already has an edge.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DuplicatePolicy {
    /// Append every insert, keeping parallel edges.
    #[default]
    Keep,
    /// Drop inserts whose vertex pair is already joined.
    Skip,
}

/// A single adjacency-list slot: the neighbour reached and the edge weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdjacencyEntry {
    neighbour: usize,
    weight: f64,
}

impl AdjacencyEntry {
    /// Returns the neighbouring vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn neighbour(&self) -> usize { self.neighbour }

    /// Returns the weight of the edge to the neighbour.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }
}

/// A logical edge as inserted into the graph.
///
/// Undirected graphs report each edge once, with the endpoints in the order
/// they were passed to [`Graph::insert_edge`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRecord {
    /// First endpoint (the tail for directed graphs).
    pub source: usize,
    /// Second endpoint (the head for directed graphs).
    pub target: usize,
    /// Stored weight; `1.0` for unweighted graphs.
    pub weight: f64,
}

impl EdgeRecord {
    /// Returns `true` when the record joins `left` and `right`, in either
    /// order.
    #[must_use]
    pub fn joins(&self, left: usize, right: usize) -> bool {
        (self.source == left && self.target == right)
            || (self.source == right && self.target == left)
    }
}

/// Weighted adjacency-list graph.
///
/// # Examples
/// ```
/// use waymark_core::{Graph, GraphKind};
///
/// let mut graph = Graph::new(3, GraphKind::undirected_weighted());
/// graph.insert_edge(0, 1, 4.0)?;
/// graph.insert_edge(1, 2, 2.5)?;
/// assert!(graph.has_edge(1, 0));
/// assert_eq!(graph.edge_count(), 2);
/// let neighbours: Vec<_> = graph.neighbours(1)?.collect();
/// assert_eq!(neighbours, [(0, 4.0), (2, 2.5)]);
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<AdjacencyEntry>>,
    edges: Vec<EdgeRecord>,
    kind: GraphKind,
    duplicates: DuplicatePolicy,
}

impl Graph {
    /// Creates a graph with `vertex_count` empty adjacency lists that keeps
    /// duplicate edges.
    #[must_use]
    pub fn new(vertex_count: usize, kind: GraphKind) -> Self {
        Self::with_policy(vertex_count, kind, DuplicatePolicy::Keep)
    }

    pub(crate) fn with_policy(
        vertex_count: usize,
        kind: GraphKind,
        duplicates: DuplicatePolicy,
    ) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
            kind,
            duplicates,
        }
    }

    /// Builds a graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    /// Returns the first error raised by [`Self::insert_edge`].
    ///
    /// # Examples
    /// ```
    /// use waymark_core::{Graph, GraphKind};
    ///
    /// let graph = Graph::from_edges(3, GraphKind::default(), [(0, 1, 1.0), (1, 2, 2.0)])?;
    /// assert_eq!(graph.total_weight(), 3.0);
    /// # Ok::<(), waymark_core::GraphError>(())
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        kind: GraphKind,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertex_count, kind);
        for (source, target, weight) in edges {
            graph.insert_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.adjacency.len() }

    /// Returns the number of logical edges; undirected edges count once.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the directedness and weightedness flags.
    #[must_use]
    #[rustfmt::skip]
    pub fn kind(&self) -> GraphKind { self.kind }

    /// Returns `true` for directed graphs.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_directed(&self) -> bool { self.kind.directed }

    /// Returns `true` when edge weights are honoured.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_weighted(&self) -> bool { self.kind.weighted }

    /// Returns the duplicate-edge policy applied by [`Self::insert_edge`].
    #[must_use]
    #[rustfmt::skip]
    pub fn duplicate_policy(&self) -> DuplicatePolicy { self.duplicates }

    /// Inserts an edge from `source` to `target`.
    ///
    /// Unweighted graphs ignore `weight` and store `1.0`. Undirected graphs
    /// append an entry to both adjacency lists; all validation happens before
    /// either list is touched, so a failed insert leaves the graph unchanged.
    ///
    /// Returns `false` when the graph uses [`DuplicatePolicy::Skip`] and the
    /// pair was already joined, `true` otherwise.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an endpoint outside
    /// `[0, V)`, and [`GraphError::NonFiniteWeight`] or
    /// [`GraphError::NegativeWeight`] when a weighted graph receives an
    /// invalid weight.
    pub fn insert_edge(&mut self, source: usize, target: usize, weight: f64) -> Result<bool> {
        let weight = self.validate_edge(source, target, weight)?;
        if self.duplicates == DuplicatePolicy::Skip && self.has_edge(source, target) {
            trace!(source, target, "skipping duplicate edge");
            return Ok(false);
        }
        self.push_edge(source, target, weight);
        Ok(true)
    }

    /// Inserts an edge only when `source` and `target` are not yet joined,
    /// regardless of the graph's [`DuplicatePolicy`].
    ///
    /// # Errors
    /// Same as [`Self::insert_edge`].
    ///
    /// # Examples
    /// ```
    /// use waymark_core::{Graph, GraphKind};
    ///
    /// let mut graph = Graph::new(2, GraphKind::default());
    /// assert!(graph.insert_edge_if_absent(0, 1, 3.0)?);
    /// assert!(!graph.insert_edge_if_absent(1, 0, 1.0)?);
    /// assert_eq!(graph.edge_count(), 1);
    /// # Ok::<(), waymark_core::GraphError>(())
    /// ```
    pub fn insert_edge_if_absent(&mut self, source: usize, target: usize, weight: f64) -> Result<bool> {
        let weight = self.validate_edge(source, target, weight)?;
        if self.has_edge(source, target) {
            return Ok(false);
        }
        self.push_edge(source, target, weight);
        Ok(true)
    }

    /// Returns `true` when `target` appears in `source`'s adjacency list.
    ///
    /// Out-of-range vertices have no edges.
    #[must_use]
    pub fn has_edge(&self, source: usize, target: usize) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|entries| entries.iter().any(|entry| entry.neighbour == target))
    }

    /// Returns the smallest weight among the `source -> target` entries.
    #[must_use]
    pub fn edge_weight(&self, source: usize, target: usize) -> Option<f64> {
        self.adjacency
            .get(source)?
            .iter()
            .filter(|entry| entry.neighbour == target)
            .map(|entry| entry.weight)
            .min_by(f64::total_cmp)
    }

    /// Returns the `(neighbour, weight)` pairs of `vertex` in insertion
    /// order.
    ///
    /// The iterator borrows the graph, so the graph cannot change while it is
    /// alive; clone it to restart the walk.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex >= V`.
    pub fn neighbours(&self, vertex: usize) -> Result<Neighbours<'_>> {
        self.adjacency
            .get(vertex)
            .map(|entries| Neighbours {
                inner: entries.iter(),
            })
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
    }

    /// Returns every logical edge once, in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = EdgeRecord> + '_ {
        self.edges.iter().copied()
    }

    /// Sums the weights of all logical edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    /// Counts connected components, treating directed edges as undirected.
    #[must_use]
    pub fn component_count(&self) -> usize {
        let mut sets = DisjointSet::new(self.vertex_count());
        for edge in &self.edges {
            // Endpoints were range-checked on insert.
            let _merged = sets.union(edge.source, edge.target);
        }
        sets.component_count()
    }

    pub(crate) fn adjacency(&self, vertex: usize) -> &[AdjacencyEntry] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    fn validate_edge(&self, source: usize, target: usize, weight: f64) -> Result<f64> {
        let vertex_count = self.vertex_count();
        for vertex in [source, target] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }

        if !self.kind.weighted {
            return Ok(1.0);
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                from: source,
                to: target,
            });
        }
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight {
                from: source,
                to: target,
                weight,
            });
        }
        Ok(weight)
    }

    /// Appends an edge whose endpoints and weight were already validated.
    pub(crate) fn push_edge(&mut self, source: usize, target: usize, weight: f64) {
        self.adjacency[source].push(AdjacencyEntry {
            neighbour: target,
            weight,
        });
        if !self.kind.directed && source != target {
            self.adjacency[target].push(AdjacencyEntry {
                neighbour: source,
                weight,
            });
        }
        self.edges.push(EdgeRecord {
            source,
            target,
            weight,
        });
    }
}

/// Restartable iterator over the `(neighbour, weight)` pairs of a vertex.
#[derive(Clone, Debug)]
pub struct Neighbours<'a> {
    inner: slice::Iter<'a, AdjacencyEntry>,
}

impl Iterator for Neighbours<'_> {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|entry| (entry.neighbour, entry.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbours<'_> {}

impl FusedIterator for Neighbours<'_> {}
