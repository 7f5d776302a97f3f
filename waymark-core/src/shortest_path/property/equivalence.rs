//! Property 1: distances agree with the relaxation oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::shortest_path::dijkstra;

use super::oracle::relaxation_distances;
use super::types::PathFixture;

/// Runs Dijkstra on the fixture and compares every distance with the
/// oracle's.
pub(super) fn run_oracle_equivalence_property(fixture: &PathFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let paths = dijkstra(&graph, fixture.source).map_err(|err| {
        TestCaseError::fail(format!(
            "dijkstra failed: {err} (topology={:?}, vertices={}, source={})",
            fixture.topology, fixture.vertex_count, fixture.source,
        ))
    })?;
    let expected = relaxation_distances(&graph, fixture.source);

    for (vertex, (actual, oracle)) in paths.distances().iter().zip(&expected).enumerate() {
        if actual.value() != *oracle {
            return Err(TestCaseError::fail(format!(
                "vertex {vertex}: dijkstra={actual:?}, oracle={oracle:?} \
                 (topology={:?}, vertices={}, source={})",
                fixture.topology, fixture.vertex_count, fixture.source,
            )));
        }
    }
    Ok(())
}
