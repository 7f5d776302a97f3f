//! Property 3: Shared-graph determinism.
//!
//! Runs Kruskal on one shared graph from several threads at once and
//! asserts every run produces the identical forest. The graph is only
//! borrowed immutably, so this also exercises its `Sync` contract.

use std::thread;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{SpanningForest, minimum_spanning_forest};

use super::types::MstFixture;

/// Number of threads racing on the same graph.
const THREADS: usize = 4;

/// Runs the shared-graph determinism property for the given fixture.
pub(super) fn run_concurrency_safety_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let baseline = minimum_spanning_forest(&graph).map_err(|err| {
        TestCaseError::fail(format!(
            "baseline kruskal failed: {err} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })?;

    let runs: Vec<Result<SpanningForest, String>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| minimum_spanning_forest(&graph).map_err(|err| err.to_string())))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|_| Err("thread panicked".to_owned())))
            .collect()
    });

    for (run, result) in runs.into_iter().enumerate() {
        let forest = result.map_err(|err| TestCaseError::fail(format!("run {run}: {err}")))?;
        if forest != baseline {
            return Err(TestCaseError::fail(format!(
                "run {run}: forest differs from baseline \
                 (distribution={:?}, vertices={}, edges={})",
                fixture.distribution,
                fixture.vertex_count,
                fixture.edges.len(),
            )));
        }
    }
    Ok(())
}
