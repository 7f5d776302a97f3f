//! Labelled transport networks built from `(from, to, weight)` connections.
//!
//! A [`Network`] pairs a [`VertexLabels`] table with a [`Graph`] so callers
//! can ask for routes, spanning networks and closable sections by label
//! instead of by vertex index.

use std::{fmt::Display, hash::Hash};

use tracing::{Span, debug, field, instrument};

use crate::{
    error::{GraphError, Result},
    graph::{DuplicatePolicy, EdgeRecord, Graph, GraphKind},
    journeys::{journey_weights, longest_journey},
    labels::VertexLabels,
    mst::{kruskal, redundant_edges},
    shortest_path::dijkstra,
};

/// How vertex indices are assigned to labels.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum LabelOrdering {
    /// Indices follow the first appearance of each label.
    #[default]
    FirstSeen,
    /// Indices follow ascending label order.
    Sorted,
}

/// Construction options for [`Network::from_connections`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NetworkOptions {
    /// Directedness and weightedness of the underlying graph.
    pub kind: GraphKind,
    /// Label to index assignment.
    pub ordering: LabelOrdering,
    /// Treatment of repeated vertex pairs.
    pub duplicates: DuplicatePolicy,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            kind: GraphKind::undirected_weighted(),
            ordering: LabelOrdering::FirstSeen,
            duplicates: DuplicatePolicy::Skip,
        }
    }
}

/// A route between two labelled vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Route<L> {
    stops: Vec<L>,
    total: f64,
}

impl<L> Route<L> {
    /// Returns the labels visited, origin first.
    #[must_use]
    #[rustfmt::skip]
    pub fn stops(&self) -> &[L] { &self.stops }

    /// Returns the total weight of the route.
    #[must_use]
    #[rustfmt::skip]
    pub fn total(&self) -> f64 { self.total }
}

/// A labelled edge of a network.
#[derive(Clone, Debug, PartialEq)]
pub struct Section<L> {
    /// Label of the first endpoint.
    pub from: L,
    /// Label of the second endpoint.
    pub to: L,
    /// Edge weight.
    pub weight: f64,
}

/// Labels plus the graph they index.
///
/// # Examples
/// ```
/// use waymark_core::{Network, NetworkOptions};
///
/// let network = Network::from_connections(
///     [("Bank", "Moorgate", 2.0), ("Moorgate", "Old Street", 2.0), ("Bank", "Old Street", 5.0)],
///     NetworkOptions::default(),
/// )?;
/// let route = network.route(&"Bank", &"Old Street")?;
/// assert_eq!(route.stops(), ["Bank", "Moorgate", "Old Street"]);
/// assert_eq!(route.total(), 4.0);
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Network<L> {
    labels: VertexLabels<L>,
    graph: Graph,
}

impl<L> Network<L>
where
    L: Clone + Display + Eq + Hash + Ord,
{
    /// Builds a network from `(from, to, weight)` connections.
    ///
    /// Labels are indexed according to `options.ordering` before any edge
    /// is inserted, then each connection is inserted in input order under
    /// `options.duplicates`.
    ///
    /// # Errors
    /// Returns the first error raised by [`Graph::insert_edge`], typically a
    /// negative or non-finite weight.
    #[instrument(
        name = "network.build",
        err,
        skip_all,
        fields(
            stations = field::Empty,
            connections = field::Empty,
        ),
    )]
    pub fn from_connections(
        connections: impl IntoIterator<Item = (L, L, f64)>,
        options: NetworkOptions,
    ) -> Result<Self> {
        let connections: Vec<(L, L, f64)> = connections.into_iter().collect();
        let endpoints = connections
            .iter()
            .flat_map(|(from, to, _)| [from.clone(), to.clone()]);
        let labels = match options.ordering {
            LabelOrdering::FirstSeen => VertexLabels::from_first_seen(endpoints),
            LabelOrdering::Sorted => VertexLabels::from_sorted(endpoints),
        };

        let mut graph = Graph::with_policy(labels.len(), options.kind, options.duplicates);
        for (from, to, weight) in &connections {
            let source = labels.resolve(from)?;
            let target = labels.resolve(to)?;
            graph.insert_edge(source, target, *weight)?;
        }

        Span::current().record("stations", labels.len());
        Span::current().record("connections", graph.edge_count());
        debug!(
            skipped = connections.len() - graph.edge_count(),
            "network built"
        );
        Ok(Self { labels, graph })
    }

    /// Returns the label table.
    #[must_use]
    #[rustfmt::skip]
    pub fn labels(&self) -> &VertexLabels<L> { &self.labels }

    /// Returns the underlying graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Finds the shortest route from `from` to `to`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownLabel`] for a label not in the network,
    /// and [`GraphError::Unreachable`] when no route exists.
    pub fn route(&self, from: &L, to: &L) -> Result<Route<L>> {
        let source = self.labels.resolve(from)?;
        let destination = self.labels.resolve(to)?;
        let paths = dijkstra(&self.graph, source)?;
        let total = paths
            .distance(destination)
            .and_then(|distance| distance.value())
            .ok_or(GraphError::Unreachable {
                origin: source,
                destination,
            })?;
        let route = paths.path_to(destination, |v| v)?;
        Ok(Route {
            stops: self.label_all(&route)?,
            total,
        })
    }

    /// Returns the network restricted to its minimum spanning tree (or
    /// forest), keeping every label.
    ///
    /// # Errors
    /// Returns [`GraphError::DirectedGraph`] for directed networks.
    pub fn minimum_spanning_network(&self) -> Result<Self> {
        Ok(Self {
            labels: self.labels.clone(),
            graph: kruskal(&self.graph)?,
        })
    }

    /// Returns the sections that can close while every station stays
    /// reachable: the edges absent from the minimum spanning tree, in
    /// insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::DirectedGraph`] for directed networks.
    pub fn closed_sections(&self) -> Result<Vec<Section<L>>> {
        let tree = kruskal(&self.graph)?;
        redundant_edges(&self.graph, &tree)
            .into_iter()
            .map(|edge| self.section(edge))
            .collect()
    }

    /// Returns every edge of the network as a labelled section, in
    /// insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] only if the label table and
    /// graph disagree, which construction prevents.
    pub fn sections(&self) -> Result<Vec<Section<L>>> {
        self.graph.edges().map(|edge| self.section(edge)).collect()
    }

    /// Returns the shortest-path weight of every reachable station pair.
    ///
    /// # Errors
    /// Propagates errors from [`journey_weights`].
    pub fn journey_weights(&self) -> Result<Vec<f64>> {
        journey_weights(&self.graph)
    }

    /// Finds the longest shortest-path journey in the network.
    ///
    /// # Errors
    /// Propagates errors from [`longest_journey`].
    pub fn longest_route(&self) -> Result<Option<Route<L>>> {
        longest_journey(&self.graph)?
            .map(|journey| {
                Ok(Route {
                    stops: self.label_all(journey.route())?,
                    total: journey.total(),
                })
            })
            .transpose()
    }

    fn section(&self, edge: EdgeRecord) -> Result<Section<L>> {
        Ok(Section {
            from: self.label_of(edge.source)?,
            to: self.label_of(edge.target)?,
            weight: edge.weight,
        })
    }

    fn label_all(&self, vertices: &[usize]) -> Result<Vec<L>> {
        vertices.iter().map(|&v| self.label_of(v)).collect()
    }

    fn label_of(&self, vertex: usize) -> Result<L> {
        self.labels
            .label(vertex)
            .cloned()
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.labels.len(),
            })
    }
}
