//! Property 1: Equivalence with the brute-force oracle.
//!
//! On graphs small enough to enumerate, Kruskal's forest must have the
//! same total weight, edge count and component count as the best forest
//! found by exhaustive search.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::EdgeRecord;
use crate::mst::minimum_spanning_forest;

use super::oracle::brute_force_forest;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = minimum_spanning_forest(&graph).map_err(|err| {
        TestCaseError::fail(format!(
            "kruskal failed: {err} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })?;
    let edges: Vec<EdgeRecord> = graph.edges().collect();
    let oracle = brute_force_forest(fixture.vertex_count, &edges);

    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, oracle={} \
             (distribution={:?}, vertices={}, edges={:?})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges,
        )));
    }
    if forest.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={} (distribution={:?})",
            forest.edges().len(),
            oracle.edge_count,
            fixture.distribution,
        )));
    }
    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, oracle={} (distribution={:?})",
            forest.component_count(),
            oracle.component_count,
            fixture.distribution,
        )));
    }
    Ok(())
}
