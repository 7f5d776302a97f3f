//! Property 2: Structural invariant verification.
//!
//! For any forest produced by Kruskal, verifies:
//!
//! - **Acyclicity**: no accepted edge closes a cycle.
//! - **Edge count**: `V - c` edges for `c` connected components.
//! - **Spanning**: the forest has exactly the input's components.
//! - **Provenance**: every accepted edge is an input edge, and redundant
//!   edges plus accepted edges reproduce the input.
//! - **Order**: accepted edges appear in non-decreasing weight order.
//! - **Cycle property**: no redundant edge is lighter than the heaviest
//!   forest edge on the path between its endpoints.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::EdgeRecord;
use crate::mst::{SpanningForest, kruskal, minimum_spanning_forest, redundant_edges};

use super::helpers::{count_components, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = minimum_spanning_forest(&graph).map_err(|err| {
        TestCaseError::fail(format!(
            "kruskal failed: {err} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })?;
    let input: Vec<EdgeRecord> = graph.edges().collect();
    let tree = kruskal(&graph).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let redundant = redundant_edges(&graph, &tree);

    validate_acyclicity(fixture.vertex_count, forest.edges())?;
    validate_edge_count(fixture.vertex_count, &forest)?;
    validate_spanning(fixture.vertex_count, &input, &forest)?;
    validate_partition(&input, forest.edges(), &redundant)?;
    validate_order(forest.edges())?;
    validate_cycle_property(fixture.vertex_count, forest.edges(), &redundant)?;
    Ok(())
}

// ── Validation helpers ──────────────────────────────────────────────────

/// Detects cycles in the forest using union-find.
fn validate_acyclicity(vertex_count: usize, edges: &[EdgeRecord]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.source);
        let right = find_root(&mut parent, edge.target);
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source, edge.target,
            )));
        }
        parent[right] = left;
    }
    Ok(())
}

/// Verifies that the forest has exactly `n - c` edges for `c` components.
fn validate_edge_count(vertex_count: usize, forest: &SpanningForest) -> TestCaseResult {
    let expected = vertex_count.saturating_sub(forest.component_count());
    if forest.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {expected} (n={vertex_count}, c={})",
            forest.edges().len(),
            forest.component_count(),
        )));
    }
    Ok(())
}

/// Verifies that the forest connects exactly what the input connects.
fn validate_spanning(
    vertex_count: usize,
    input: &[EdgeRecord],
    forest: &SpanningForest,
) -> TestCaseResult {
    let input_components = count_components(vertex_count, input);
    let forest_components = count_components(vertex_count, forest.edges());
    if input_components != forest_components || forest_components != forest.component_count() {
        return Err(TestCaseError::fail(format!(
            "components: input={input_components}, forest={forest_components}, reported={}",
            forest.component_count(),
        )));
    }
    Ok(())
}

/// Verifies that accepted and redundant edges together are the input, as
/// multisets.
fn validate_partition(
    input: &[EdgeRecord],
    accepted: &[EdgeRecord],
    redundant: &[EdgeRecord],
) -> TestCaseResult {
    let mut expected: Vec<_> = input.iter().map(canonical).collect();
    let mut actual: Vec<_> = accepted.iter().chain(redundant).map(canonical).collect();
    expected.sort_unstable();
    actual.sort_unstable();
    if expected != actual {
        return Err(TestCaseError::fail(format!(
            "accepted + redundant edges differ from input: {actual:?} vs {expected:?}",
        )));
    }
    Ok(())
}

/// Verifies acceptance order is non-decreasing by weight.
fn validate_order(edges: &[EdgeRecord]) -> TestCaseResult {
    for (i, pair) in edges.windows(2).enumerate() {
        if pair[0].weight > pair[1].weight {
            return Err(TestCaseError::fail(format!(
                "edge {i} weighs {} but edge {} weighs {}",
                pair[0].weight,
                i + 1,
                pair[1].weight,
            )));
        }
    }
    Ok(())
}

/// Verifies that every redundant edge is at least as heavy as each forest
/// edge on the path it would short-circuit.
fn validate_cycle_property(
    vertex_count: usize,
    accepted: &[EdgeRecord],
    redundant: &[EdgeRecord],
) -> TestCaseResult {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for edge in accepted {
        adjacency[edge.source].push((edge.target, edge.weight));
        adjacency[edge.target].push((edge.source, edge.weight));
    }

    for edge in redundant {
        if edge.source == edge.target {
            continue;
        }
        let Some(heaviest) = heaviest_on_path(&adjacency, edge.source, edge.target) else {
            return Err(TestCaseError::fail(format!(
                "redundant edge ({}, {}) joins two separate trees",
                edge.source, edge.target,
            )));
        };
        if edge.weight < heaviest {
            return Err(TestCaseError::fail(format!(
                "redundant edge ({}, {}, {}) is lighter than forest path maximum {heaviest}",
                edge.source, edge.target, edge.weight,
            )));
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Returns the largest edge weight on the forest path from `from` to `to`.
fn heaviest_on_path(adjacency: &[Vec<(usize, f64)>], from: usize, to: usize) -> Option<f64> {
    let mut stack = vec![(from, usize::MAX, 0.0_f64)];
    while let Some((vertex, parent, heaviest)) = stack.pop() {
        if vertex == to {
            return Some(heaviest);
        }
        for &(next, weight) in &adjacency[vertex] {
            if next != parent {
                stack.push((next, vertex, heaviest.max(weight)));
            }
        }
    }
    None
}

fn canonical(edge: &EdgeRecord) -> (usize, usize, u64) {
    (
        edge.source.min(edge.target),
        edge.source.max(edge.target),
        edge.weight.to_bits(),
    )
}
