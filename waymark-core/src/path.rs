//! Route reconstruction from a predecessor table.

use crate::{
    error::{GraphError, Result},
    graph::Graph,
};

/// Walks `predecessors` back from `destination` to `source` and returns the
/// route in travel order, mapped through `label_fn`.
///
/// A route from a vertex to itself is the single-element sequence
/// `[label_fn(source)]`. The walk never takes more steps than the table has
/// entries, so a malformed (cyclic) table yields an error instead of looping.
///
/// # Errors
/// Returns [`GraphError::VertexOutOfRange`] when either endpoint lies outside
/// the table, and [`GraphError::Unreachable`] when the chain from
/// `destination` ends before reaching `source`.
///
/// # Examples
/// ```
/// use waymark_core::reconstruct_path;
///
/// let predecessors = [None, Some(0), Some(1), None];
/// let names = ["A", "B", "C", "D"];
/// let route = reconstruct_path(&predecessors, 0, 2, |v| names[v])?;
/// assert_eq!(route, ["A", "B", "C"]);
/// assert!(reconstruct_path(&predecessors, 0, 3, |v| v).is_err());
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
pub fn reconstruct_path<L>(
    predecessors: &[Option<usize>],
    source: usize,
    destination: usize,
    mut label_fn: impl FnMut(usize) -> L,
) -> Result<Vec<L>> {
    let vertex_count = predecessors.len();
    for vertex in [source, destination] {
        if vertex >= vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
    }

    let unreachable = GraphError::Unreachable {
        origin: source,
        destination,
    };
    let mut route = vec![destination];
    let mut current = destination;
    while current != source {
        if route.len() > vertex_count {
            return Err(unreachable);
        }
        let Some(previous) = predecessors.get(current).copied().flatten() else {
            return Err(unreachable);
        };
        route.push(previous);
        current = previous;
    }

    route.reverse();
    Ok(route.into_iter().map(&mut label_fn).collect())
}

/// Sums the cheapest edge weight of each consecutive hop in `route`.
///
/// An empty or single-vertex route weighs zero.
///
/// # Errors
/// Returns [`GraphError::MissingEdge`] when two consecutive vertices are not
/// joined in `graph`.
///
/// # Examples
/// ```
/// use waymark_core::{Graph, GraphKind, route_weight};
///
/// let graph = Graph::from_edges(3, GraphKind::default(), [(0, 1, 2.0), (1, 2, 5.0)])?;
/// assert_eq!(route_weight(&graph, &[0, 1, 2])?, 7.0);
/// assert_eq!(route_weight(&graph, &[2])?, 0.0);
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
pub fn route_weight(graph: &Graph, route: &[usize]) -> Result<f64> {
    route
        .windows(2)
        .map(|hop| {
            let (from, to) = (hop[0], hop[1]);
            graph
                .edge_weight(from, to)
                .ok_or(GraphError::MissingEdge { from, to })
        })
        .sum()
}
