//! All-pairs journey analysis built on repeated Dijkstra runs.
//!
//! One shortest-path search is run per source vertex. With the `parallel`
//! feature the sources are spread over the Rayon thread pool; every search
//! only reads the shared graph, and results are gathered back in source
//! order so the output never depends on scheduling.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{Span, field, instrument};

use crate::{
    error::Result,
    graph::Graph,
    shortest_path::{ShortestPaths, dijkstra},
};

/// The longest shortest-path journey in a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Journey {
    route: Vec<usize>,
    total: f64,
}

impl Journey {
    /// Returns the vertices visited, origin first.
    #[must_use]
    #[rustfmt::skip]
    pub fn route(&self) -> &[usize] { &self.route }

    /// Returns the total weight of the journey.
    #[must_use]
    #[rustfmt::skip]
    pub fn total(&self) -> f64 { self.total }

    /// Returns the first vertex of the route.
    #[must_use]
    pub fn origin(&self) -> Option<usize> {
        self.route.first().copied()
    }

    /// Returns the last vertex of the route.
    #[must_use]
    pub fn destination(&self) -> Option<usize> {
        self.route.last().copied()
    }
}

/// Collects the shortest-path weight of every reachable vertex pair.
///
/// Undirected graphs contribute each unordered pair once (`source <
/// target`); directed graphs contribute every ordered pair of distinct
/// vertices. Weights appear in `(source, target)` order.
///
/// # Errors
/// Propagates errors from [`dijkstra`]; none occur for in-range sources.
///
/// # Examples
/// ```
/// use waymark_core::{Graph, GraphKind, journey_weights};
///
/// let graph = Graph::from_edges(4, GraphKind::default(), [(0, 1, 2.0), (1, 2, 3.0)])?;
/// assert_eq!(journey_weights(&graph)?, [2.0, 5.0, 3.0]);
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
#[instrument(
    name = "journeys.weights",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), journeys = field::Empty),
)]
pub fn journey_weights(graph: &Graph) -> Result<Vec<f64>> {
    let per_source = for_each_source(graph, |paths| {
        destinations(graph, paths.source())
            .filter_map(|target| paths.distance(target).and_then(|d| d.value()))
            .collect::<Vec<_>>()
    })?;
    let weights: Vec<f64> = per_source.into_iter().flatten().collect();
    Span::current().record("journeys", weights.len());
    Ok(weights)
}

/// Finds the journey with the largest finite shortest-path weight.
///
/// Every ordered pair of distinct vertices is considered in `(source,
/// target)` order and only a strictly longer journey replaces the current
/// one, so ties keep the first pair found. Returns `None` when no vertex can
/// reach another; a vertex is never paired with itself, so an edgeless
/// graph has no zero-weight journey.
///
/// # Errors
/// Propagates errors from [`dijkstra`] and path reconstruction; none occur
/// for a well-formed graph.
///
/// # Examples
/// ```
/// use waymark_core::{Graph, GraphKind, longest_journey};
///
/// let graph = Graph::from_edges(3, GraphKind::default(), [(0, 1, 2.0), (1, 2, 3.0)])?;
/// let journey = longest_journey(&graph)?.expect("graph has edges");
/// assert_eq!(journey.route(), [0, 1, 2]);
/// assert_eq!(journey.total(), 5.0);
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
#[instrument(
    name = "journeys.longest",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), total = field::Empty),
)]
pub fn longest_journey(graph: &Graph) -> Result<Option<Journey>> {
    let per_source = for_each_source(graph, |paths| farthest_from(graph, paths))?;

    let mut longest: Option<Journey> = None;
    for candidate in per_source {
        let Some(candidate) = candidate? else {
            continue;
        };
        if longest
            .as_ref()
            .is_none_or(|best| candidate.total > best.total)
        {
            longest = Some(candidate);
        }
    }

    if let Some(journey) = &longest {
        Span::current().record("total", journey.total);
    }
    Ok(longest)
}

/// Longest journey starting at the tables' source, ties to the lowest
/// target.
fn farthest_from(graph: &Graph, paths: &ShortestPaths) -> Result<Option<Journey>> {
    let source = paths.source();
    let mut best: Option<(usize, f64)> = None;
    for target in (0..graph.vertex_count()).filter(|&target| target != source) {
        let Some(total) = paths.distance(target).and_then(|d| d.value()) else {
            continue;
        };
        if best.is_none_or(|(_, current)| total > current) {
            best = Some((target, total));
        }
    }

    best.map(|(target, total)| {
        paths
            .path_to(target, |v| v)
            .map(|route| Journey { route, total })
    })
    .transpose()
}

/// Targets paired with `source`: higher indices for undirected graphs,
/// every other vertex for directed ones.
fn destinations(graph: &Graph, source: usize) -> impl Iterator<Item = usize> {
    let directed = graph.is_directed();
    (0..graph.vertex_count())
        .filter(move |&target| if directed { target != source } else { target > source })
}

#[cfg(feature = "parallel")]
fn for_each_source<T, F>(graph: &Graph, visit: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&ShortestPaths) -> T + Sync,
{
    (0..graph.vertex_count())
        .into_par_iter()
        .map(|source| dijkstra(graph, source).map(|paths| visit(&paths)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn for_each_source<T, F>(graph: &Graph, visit: F) -> Result<Vec<T>>
where
    F: Fn(&ShortestPaths) -> T,
{
    (0..graph.vertex_count())
        .map(|source| dijkstra(graph, source).map(|paths| visit(&paths)))
        .collect()
}
