//! Fixture types for shortest-path property tests.

use crate::graph::{Graph, GraphKind};

/// Topology and weight strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Topology {
    /// Random spanning path plus a few extra edges.
    Sparse,
    /// Most vertex pairs joined.
    Dense,
    /// Weights drawn from a tiny pool including zero, forcing ties.
    ManyTies,
    /// Several components with no edges between them.
    Disconnected,
    /// Directed edges with random orientation.
    Directed,
    /// Unweighted graph, so distances count hops.
    HopCount,
}

/// Generated input for one property run.
///
/// Weights are small integers stored as `f64`, so sums along different
/// routes of equal length compare exactly.
#[derive(Clone, Debug)]
pub(super) struct PathFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Flags the graph is built with.
    pub kind: GraphKind,
    /// Edges in insertion order.
    pub edges: Vec<(usize, usize, f64)>,
    /// Vertex the search starts from.
    pub source: usize,
    /// Strategy the fixture came from.
    pub topology: Topology,
}

impl PathFixture {
    /// Builds the graph described by the fixture.
    pub(super) fn graph(&self) -> Graph {
        Graph::from_edges(self.vertex_count, self.kind, self.edges.iter().copied())
            .expect("generated edges are valid")
    }
}
