//! Brute-force spanning-forest oracle for MST property verification.
//!
//! Enumerates every subset of the input's edges, keeps the acyclic ones
//! with `V - c` edges and returns the smallest total. Exponential in the
//! edge count, so fixtures are capped at [`MAX_ORACLE_EDGES`].

use crate::graph::EdgeRecord;

use super::helpers::{count_components, find_root};

/// Largest edge count the oracle accepts.
pub(super) const MAX_ORACLE_EDGES: usize = 14;

/// Minimum spanning forest summary produced by exhaustive search.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct OracleForest {
    /// Smallest total weight of any spanning forest.
    pub total_weight: f64,
    /// Number of edges in that forest.
    pub edge_count: usize,
    /// Number of connected components of the input.
    pub component_count: usize,
}

/// Finds the minimum spanning forest weight by trying every edge subset.
///
/// # Panics
/// Panics when `edges` exceeds [`MAX_ORACLE_EDGES`].
pub(super) fn brute_force_forest(vertex_count: usize, edges: &[EdgeRecord]) -> OracleForest {
    assert!(
        edges.len() <= MAX_ORACLE_EDGES,
        "oracle limited to {MAX_ORACLE_EDGES} edges, got {}",
        edges.len(),
    );
    let component_count = count_components(vertex_count, edges);
    let wanted = vertex_count - component_count;

    let mut best: Option<f64> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != wanted {
            continue;
        }
        let Some(weight) = acyclic_weight(vertex_count, edges, mask) else {
            continue;
        };
        if best.is_none_or(|current| weight < current) {
            best = Some(weight);
        }
    }

    OracleForest {
        total_weight: best.unwrap_or(0.0),
        edge_count: wanted,
        component_count,
    }
}

/// Returns the subset's total weight, or `None` when it contains a cycle.
fn acyclic_weight(vertex_count: usize, edges: &[EdgeRecord], mask: u32) -> Option<f64> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut total = 0.0;
    for (index, edge) in edges.iter().enumerate() {
        if mask & (1 << index) == 0 {
            continue;
        }
        let left = find_root(&mut parent, edge.source);
        let right = find_root(&mut parent, edge.target);
        if left == right {
            return None;
        }
        parent[right] = left;
        total += edge.weight;
    }
    Some(total)
}
