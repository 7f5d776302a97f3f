//! Waymark core library.
//!
//! Weighted adjacency-list graphs plus the classic algorithms that run over
//! them: Dijkstra shortest paths, Kruskal minimum spanning trees, union-find
//! and route reconstruction. The [`Network`] facade layers vertex labels on
//! top so transport-style datasets can be queried by station name.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod journeys;
mod labels;
mod mst;
mod network;
mod path;
mod shortest_path;
mod union_find;


pub use crate::{
    error::{GraphError, GraphErrorCode, GraphErrorKind, Result},
    graph::{AdjacencyEntry, DuplicatePolicy, EdgeRecord, Graph, GraphBuilder, GraphKind, Neighbours},
    journeys::{Journey, journey_weights, longest_journey},
    labels::VertexLabels,
    mst::{SpanningForest, kruskal, minimum_spanning_forest, redundant_edges},
    network::{LabelOrdering, Network, NetworkOptions, Route, Section},
    path::{reconstruct_path, route_weight},
    shortest_path::{Distance, ShortestPaths, dijkstra},
    union_find::DisjointSet,
};
