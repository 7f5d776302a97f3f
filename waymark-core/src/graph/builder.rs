//! Builder for configuring [`Graph`] construction.

use tracing::debug;

use crate::error::{GraphError, Result};

use super::{DuplicatePolicy, Graph, GraphKind};

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use waymark_core::{DuplicatePolicy, GraphBuilder, GraphKind};
///
/// let mut graph = GraphBuilder::new()
///     .with_vertex_count(3)
///     .with_kind(GraphKind::undirected_unweighted())
///     .with_duplicate_policy(DuplicatePolicy::Skip)
///     .build()?;
/// assert!(graph.insert_edge(0, 1, 7.0)?);
/// assert!(!graph.insert_edge(1, 0, 7.0)?);
/// assert_eq!(graph.total_weight(), 1.0);
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    vertex_count: Option<usize>,
    kind: GraphKind,
    duplicates: DuplicatePolicy,
}

impl GraphBuilder {
    /// Creates a builder for an undirected weighted graph that keeps
    /// duplicate edges. A vertex count must be supplied before building.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fixed number of vertices.
    #[must_use]
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = Some(vertex_count);
        self
    }

    /// Returns the configured vertex count, if any.
    #[must_use]
    pub fn vertex_count(&self) -> Option<usize> {
        self.vertex_count
    }

    /// Sets the directedness and weightedness flags.
    #[must_use]
    pub fn with_kind(mut self, kind: GraphKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the configured graph kind.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Sets how repeated vertex pairs are handled on insert.
    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Returns the configured duplicate policy.
    #[must_use]
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Validates the configuration and allocates the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] when no vertex count was
    /// configured.
    pub fn build(self) -> Result<Graph> {
        let vertex_count = self.vertex_count.ok_or(GraphError::InvalidVertexCount)?;
        debug!(
            vertex_count,
            directed = self.kind.directed,
            weighted = self.kind.weighted,
            duplicates = ?self.duplicates,
            "building graph"
        );
        Ok(Graph::with_policy(vertex_count, self.kind, self.duplicates))
    }
}
