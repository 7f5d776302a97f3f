//! Union-find (disjoint set union) used for cycle detection in Kruskal's
//! algorithm and for counting connected components.
//!
//! Representatives are chosen by union-by-rank. When both roots carry the
//! same rank the lower vertex index survives, so the representative of a set
//! depends only on the merge history and never on hash or allocation order.

use std::cmp::Ordering;

use crate::error::{GraphError, Result};

/// Partition of `[0, n)` into disjoint sets.
///
/// # Examples
/// ```
/// use waymark_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert!(sets.same_set(0, 1)?);
/// assert_eq!(sets.component_count(), 3);
/// # Ok::<(), waymark_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets; every element is its own representative.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the number of elements tracked by the structure.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets currently tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every node on the walked path is re-pointed directly at the root.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `node >= len()`.
    pub fn find(&mut self, node: usize) -> Result<usize> {
        self.check(node)?;
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != current {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when
    /// both elements already shared a representative.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either element is out of
    /// range.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.rank[left_root],
            self.rank[right_root],
        );
        self.parent[child] = parent;
        if self.rank[parent] == self.rank[child] {
            self.rank[parent] = self.rank[parent].saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when both elements belong to the same set.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either element is out of
    /// range.
    pub fn same_set(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, node: usize) -> Result<()> {
        if node < self.parent.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: node,
                vertex_count: self.parent.len(),
            })
        }
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u8,
    right_rank: u8,
) -> (usize, usize) {
    match left_rank.cmp(&right_rank) {
        Ordering::Greater => (left_root, right_root),
        Ordering::Less => (right_root, left_root),
        Ordering::Equal if left_root <= right_root => (left_root, right_root),
        Ordering::Equal => (right_root, left_root),
    }
}
