//! Property 2: the predecessor tree backs every distance.
//!
//! - The source has distance zero and no predecessor.
//! - Every other reached vertex has a reached predecessor joined to it by
//!   an edge, and its distance is the predecessor's plus that edge.
//! - Every reached vertex reconstructs to a route from the source whose
//!   weight equals its distance and whose length is at most `V`.
//! - Unreached vertices have no predecessor and fail to reconstruct.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    error::GraphError,
    graph::Graph,
    path::route_weight,
    shortest_path::{Distance, ShortestPaths, dijkstra},
};

use super::types::PathFixture;

/// Runs the predecessor-tree checks for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &PathFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let paths = dijkstra(&graph, fixture.source).map_err(|err| {
        TestCaseError::fail(format!("dijkstra failed: {err} ({:?})", fixture.topology))
    })?;

    validate_source(&paths)?;
    for vertex in 0..graph.vertex_count() {
        match paths.distance(vertex) {
            Some(Distance::Reached(distance)) => {
                validate_predecessor(&graph, &paths, vertex, distance)?;
                validate_route(&graph, &paths, vertex, distance)?;
            }
            _ => validate_unreached(&paths, vertex)?,
        }
    }
    Ok(())
}

fn validate_source(paths: &ShortestPaths) -> TestCaseResult {
    let source = paths.source();
    if paths.distance(source) != Some(Distance::Reached(0.0)) {
        return Err(TestCaseError::fail(format!(
            "source {source} has distance {:?}",
            paths.distance(source),
        )));
    }
    if let Some(predecessor) = paths.predecessor(source) {
        return Err(TestCaseError::fail(format!(
            "source {source} has predecessor {predecessor}",
        )));
    }
    Ok(())
}

fn validate_predecessor(
    graph: &Graph,
    paths: &ShortestPaths,
    vertex: usize,
    distance: f64,
) -> TestCaseResult {
    if vertex == paths.source() {
        return Ok(());
    }
    let Some(predecessor) = paths.predecessor(vertex) else {
        return Err(TestCaseError::fail(format!(
            "reached vertex {vertex} has no predecessor",
        )));
    };
    let Some(base) = paths.distance(predecessor).and_then(Distance::value) else {
        return Err(TestCaseError::fail(format!(
            "predecessor {predecessor} of {vertex} is unreached",
        )));
    };
    let Some(weight) = graph.edge_weight(predecessor, vertex) else {
        return Err(TestCaseError::fail(format!(
            "no edge {predecessor} -> {vertex} behind predecessor link",
        )));
    };
    if base + weight != distance {
        return Err(TestCaseError::fail(format!(
            "vertex {vertex}: distance {distance} != {base} + {weight} via {predecessor}",
        )));
    }
    Ok(())
}

fn validate_route(
    graph: &Graph,
    paths: &ShortestPaths,
    vertex: usize,
    distance: f64,
) -> TestCaseResult {
    let route = paths
        .path_to(vertex, |v| v)
        .map_err(|err| TestCaseError::fail(format!("route to {vertex} failed: {err}")))?;
    if route.first() != Some(&paths.source()) || route.last() != Some(&vertex) {
        return Err(TestCaseError::fail(format!(
            "route {route:?} does not run from {} to {vertex}",
            paths.source(),
        )));
    }
    if route.len() > graph.vertex_count() {
        return Err(TestCaseError::fail(format!(
            "route to {vertex} has {} stops for {} vertices",
            route.len(),
            graph.vertex_count(),
        )));
    }
    let weight = route_weight(graph, &route)
        .map_err(|err| TestCaseError::fail(format!("route {route:?} is not walkable: {err}")))?;
    if weight != distance {
        return Err(TestCaseError::fail(format!(
            "route {route:?} weighs {weight}, distance is {distance}",
        )));
    }
    Ok(())
}

fn validate_unreached(paths: &ShortestPaths, vertex: usize) -> TestCaseResult {
    if paths.predecessor(vertex).is_some() {
        return Err(TestCaseError::fail(format!(
            "unreached vertex {vertex} has a predecessor",
        )));
    }
    match paths.path_to(vertex, |v| v) {
        Err(GraphError::Unreachable { .. }) => Ok(()),
        other => Err(TestCaseError::fail(format!(
            "unreached vertex {vertex} reconstructed to {other:?}",
        ))),
    }
}
