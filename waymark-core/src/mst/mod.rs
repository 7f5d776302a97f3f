//! Minimum spanning tree construction with Kruskal's algorithm.
//!
//! Logical edges are collected once, stably sorted by weight and scanned
//! against a fresh [`DisjointSet`]. An edge is accepted when it joins two
//! different components. The scan stops as soon as `V - 1` edges are
//! accepted, so sparse trailing heavy edges are never inspected.
//!
//! Disconnected input produces a minimum spanning forest: one tree per
//! connected component and `V - c` edges overall.

use std::collections::HashMap;

use tracing::{Span, debug, field, instrument};

use crate::{
    error::{GraphError, Result},
    graph::{EdgeRecord, Graph, GraphKind},
    union_find::DisjointSet,
};

/// Accepted edges of a minimum spanning forest.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<EdgeRecord>,
    vertex_count: usize,
    component_count: usize,
    kind: GraphKind,
}

impl SpanningForest {
    /// Returns the accepted edges in acceptance (non-decreasing weight)
    /// order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[EdgeRecord] { &self.edges }

    /// Returns the number of vertices spanned.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of trees in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Sums the weights of the accepted edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    /// Converts the forest into a graph with the input's flags and vertex
    /// count, inserting edges in acceptance order.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        let mut graph = Graph::new(self.vertex_count, self.kind);
        for edge in self.edges {
            graph.push_edge(edge.source, edge.target, edge.weight);
        }
        graph
    }
}

/// Computes a minimum spanning tree (or forest) of an undirected graph.
///
/// The returned graph has the input's vertex count and flags and exactly
/// `V - c` edges, where `c` is the number of connected components.
///
/// # Errors
/// Returns [`GraphError::DirectedGraph`] when `graph` is directed.
///
/// # Examples
/// ```
/// use waymark_core::{Graph, GraphKind, kruskal};
///
/// let graph = Graph::from_edges(
///     3,
///     GraphKind::undirected_weighted(),
///     [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)],
/// )?;
/// let tree = kruskal(&graph)?;
/// assert_eq!(tree.edge_count(), 2);
/// assert_eq!(tree.total_weight(), 3.0);
/// assert!(!tree.has_edge(0, 2));
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
pub fn kruskal(graph: &Graph) -> Result<Graph> {
    minimum_spanning_forest(graph).map(SpanningForest::into_graph)
}

/// Runs Kruskal's algorithm and returns the accepted edges together with
/// the component count.
///
/// Parallel edges are separate candidates and self-loops are never
/// candidates. Equal weights keep insertion order, so the result is
/// deterministic for a fixed insertion sequence.
///
/// # Errors
/// Returns [`GraphError::DirectedGraph`] when `graph` is directed.
#[instrument(
    name = "mst.kruskal",
    err,
    skip(graph),
    fields(
        vertices = graph.vertex_count(),
        candidates = field::Empty,
        accepted = field::Empty,
    ),
)]
pub fn minimum_spanning_forest(graph: &Graph) -> Result<SpanningForest> {
    if graph.is_directed() {
        return Err(GraphError::DirectedGraph {
            operation: "kruskal",
        });
    }

    let vertex_count = graph.vertex_count();
    let mut candidates: Vec<EdgeRecord> = graph
        .edges()
        .filter(|edge| edge.source != edge.target)
        .collect();
    candidates.sort_by(|left, right| left.weight.total_cmp(&right.weight));
    Span::current().record("candidates", candidates.len());

    let target = vertex_count.saturating_sub(1);
    let mut sets = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(target);
    for edge in candidates {
        if accepted.len() == target {
            break;
        }
        if sets.union(edge.source, edge.target)? {
            accepted.push(edge);
        }
    }

    let component_count = sets.component_count();
    Span::current().record("accepted", accepted.len());
    debug!(
        accepted = accepted.len(),
        components = component_count,
        "spanning forest complete"
    );

    Ok(SpanningForest {
        edges: accepted,
        vertex_count,
        component_count,
        kind: graph.kind(),
    })
}

/// Returns the logical edges of `graph` that `tree` does not contain, in
/// `graph`'s insertion order.
///
/// Edges are matched by endpoints (in either order) and exact weight, and
/// each tree edge accounts for one graph edge, so parallel duplicates of a
/// tree edge are reported as redundant.
///
/// # Examples
/// ```
/// use waymark_core::{Graph, GraphKind, kruskal, redundant_edges};
///
/// let graph = Graph::from_edges(
///     3,
///     GraphKind::undirected_weighted(),
///     [(0, 1, 1.0), (1, 2, 2.0), (2, 0, 3.0)],
/// )?;
/// let tree = kruskal(&graph)?;
/// let closed = redundant_edges(&graph, &tree);
/// assert_eq!(closed.len(), 1);
/// assert!(closed[0].joins(0, 2));
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
#[must_use]
pub fn redundant_edges(graph: &Graph, tree: &Graph) -> Vec<EdgeRecord> {
    let mut remaining: HashMap<(usize, usize, u64), usize> = HashMap::new();
    for edge in tree.edges() {
        *remaining.entry(edge_key(&edge)).or_default() += 1;
    }

    graph
        .edges()
        .filter(|edge| match remaining.get_mut(&edge_key(edge)) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .collect()
}

fn edge_key(edge: &EdgeRecord) -> (usize, usize, u64) {
    let (low, high) = if edge.source <= edge.target {
        (edge.source, edge.target)
    } else {
        (edge.target, edge.source)
    };
    (low, high, edge.weight.to_bits())
}

#[cfg(test)]
mod property;
