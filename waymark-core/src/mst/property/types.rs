//! Type definitions for MST property-based tests.

use crate::graph::{Graph, GraphKind};

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide integer range, so ties are rare.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Spanning path plus roughly `0.5n` to `n` extra edges, including
    /// parallel edges and self-loops.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Weights are small integers stored as `f64` so totals from different
/// edge selections compare exactly.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges in insertion order.
    pub edges: Vec<(usize, usize, f64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the undirected weighted graph described by the fixture.
    pub(super) fn graph(&self) -> Graph {
        Graph::from_edges(
            self.vertex_count,
            GraphKind::undirected_weighted(),
            self.edges.iter().copied(),
        )
        .expect("generated edges are valid")
    }
}
