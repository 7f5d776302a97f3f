//! Property-based tests for the Kruskal minimum spanning tree engine.
//!
//! Verifies Kruskal against a brute-force spanning-forest oracle on small
//! graphs, validates structural invariants (acyclicity, `V - c` edges, the
//! cycle property) on larger ones, and checks that shared-graph runs from
//! several threads agree exactly.

mod concurrency;
mod equivalence;
mod oracle;
mod structural;
mod types;
