//! Single-source shortest paths via Dijkstra's algorithm.
//!
//! The engine keeps a binary min-heap of tentative distances with lazy
//! deletion: stale heap entries are skipped when popped rather than being
//! decreased in place. Each vertex is settled at most once, giving
//! `O((V + E) log V)` time.
//!
//! Edge weights are guaranteed non-negative because [`Graph::insert_edge`]
//! rejects negative weights, so no check is repeated during relaxation.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use tracing::{Span, field, instrument, trace};

use crate::{
    error::{GraphError, Result},
    graph::Graph,
    path::reconstruct_path,
};

/// Cumulative weight from the source to a vertex.
///
/// # Examples
/// ```
/// use waymark_core::Distance;
///
/// assert_eq!(Distance::Reached(4.0).value(), Some(4.0));
/// assert!(Distance::Unreachable.value().is_none());
/// assert!(Distance::Reached(1e9) < Distance::Unreachable);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distance {
    /// The vertex is reachable at this total weight.
    Reached(f64),
    /// No path leads from the source to the vertex.
    Unreachable,
}

impl Distance {
    /// Returns the reached distance, or `None` when unreachable.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Reached(value) => Some(value),
            Self::Unreachable => None,
        }
    }

    /// Returns `true` for [`Distance::Reached`].
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Reached(_))
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Reached(left), Self::Reached(right)) => left.partial_cmp(right),
            (Self::Reached(_), Self::Unreachable) => Some(Ordering::Less),
            (Self::Unreachable, Self::Reached(_)) => Some(Ordering::Greater),
            (Self::Unreachable, Self::Unreachable) => Some(Ordering::Equal),
        }
    }
}

/// Distance and predecessor tables produced by [`dijkstra`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Returns the vertex the tables were computed from.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the distance table indexed by vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[Distance] { &self.distances }

    /// Returns the predecessor table indexed by vertex; `None` marks the
    /// source and unreached vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn predecessors(&self) -> &[Option<usize>] { &self.predecessors }

    /// Returns the distance to `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn distance(&self, vertex: usize) -> Option<Distance> {
        self.distances.get(vertex).copied()
    }

    /// Returns the predecessor of `vertex` on the shortest-path tree.
    #[must_use]
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Returns `true` when `vertex` is reachable from the source.
    #[must_use]
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some_and(Distance::is_reachable)
    }

    /// Reconstructs the route from the source to `destination`.
    ///
    /// # Errors
    /// Same as [`reconstruct_path`].
    pub fn path_to<L>(&self, destination: usize, label_fn: impl FnMut(usize) -> L) -> Result<Vec<L>> {
        reconstruct_path(&self.predecessors, self.source, destination, label_fn)
    }
}

/// Heap entry ordered by `(distance, vertex)` so equal distances settle the
/// lower vertex first.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    distance: f64,
    vertex: usize,
}

impl Eq for Frontier {}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes shortest distances and the predecessor tree from `source`.
///
/// Vertices that cannot be reached keep [`Distance::Unreachable`] and no
/// predecessor. A reachable vertex whose total overflows `f64` is reported
/// as `Reached(f64::INFINITY)` with a full predecessor chain. When several routes tie for the shortest length the first
/// one discovered keeps its predecessor; discovery order follows the heap
/// order above and each vertex's insertion-ordered adjacency list.
///
/// # Errors
/// Returns [`GraphError::VertexOutOfRange`] when `source` is not a vertex of
/// `graph`.
///
/// # Examples
/// ```
/// use waymark_core::{Distance, Graph, GraphKind, dijkstra};
///
/// let graph = Graph::from_edges(
///     4,
///     GraphKind::undirected_weighted(),
///     [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0)],
/// )?;
/// let paths = dijkstra(&graph, 0)?;
/// assert_eq!(paths.distance(2), Some(Distance::Reached(3.0)));
/// assert_eq!(paths.distance(3), Some(Distance::Unreachable));
/// assert_eq!(paths.path_to(2, |v| v)?, [0, 1, 2]);
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
#[instrument(
    name = "shortest_path.dijkstra",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), settled = field::Empty),
)]
pub fn dijkstra(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    let vertex_count = graph.vertex_count();
    if source >= vertex_count {
        return Err(GraphError::VertexOutOfRange {
            vertex: source,
            vertex_count,
        });
    }

    // `None` until discovered, so an overflowing `inf` total still counts.
    let mut best: Vec<Option<f64>> = vec![None; vertex_count];
    let mut predecessors = vec![None; vertex_count];
    let mut settled = vec![false; vertex_count];
    let mut settled_count = 0_usize;
    let mut heap = BinaryHeap::new();

    best[source] = Some(0.0);
    heap.push(Reverse(Frontier {
        distance: 0.0,
        vertex: source,
    }));

    while let Some(Reverse(Frontier { distance, vertex })) = heap.pop() {
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;
        settled_count += 1;

        for entry in graph.adjacency(vertex) {
            let neighbour = entry.neighbour();
            if settled[neighbour] {
                continue;
            }
            let candidate = distance + entry.weight();
            if best[neighbour].is_none_or(|current| candidate < current) {
                trace!(vertex, neighbour, candidate, "relaxed edge");
                best[neighbour] = Some(candidate);
                predecessors[neighbour] = Some(vertex);
                heap.push(Reverse(Frontier {
                    distance: candidate,
                    vertex: neighbour,
                }));
            }
        }
    }

    Span::current().record("settled", settled_count);

    let distances = best
        .into_iter()
        .zip(&settled)
        .map(|(value, &reached)| match value {
            Some(value) if reached => Distance::Reached(value),
            _ => Distance::Unreachable,
        })
        .collect();

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}
