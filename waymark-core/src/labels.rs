//! Bidirectional mapping between caller labels and vertex indices.
//!
//! Graphs work on dense `usize` indices. Datasets name their vertices
//! (station names, for example), so a [`VertexLabels`] table is built once
//! per dataset and then used to translate in both directions.

use std::{collections::HashMap, fmt::Display, hash::Hash};

use crate::error::{GraphError, Result};

/// Label to index lookup with a stable index order.
///
/// # Examples
/// ```
/// use waymark_core::VertexLabels;
///
/// let labels = VertexLabels::from_first_seen(["Oval", "Bank", "Oval", "Angel"]);
/// assert_eq!(labels.len(), 3);
/// assert_eq!(labels.index_of(&"Bank"), Some(1));
/// assert_eq!(labels.label(2), Some(&"Angel"));
/// ```
#[derive(Clone, Debug)]
pub struct VertexLabels<L> {
    labels: Vec<L>,
    index: HashMap<L, usize>,
}

impl<L> VertexLabels<L>
where
    L: Clone + Eq + Hash,
{
    /// Assigns indices in order of first appearance, ignoring repeats.
    pub fn from_first_seen(labels: impl IntoIterator<Item = L>) -> Self {
        let mut table = Self {
            labels: Vec::new(),
            index: HashMap::new(),
        };
        for label in labels {
            if !table.index.contains_key(&label) {
                table.index.insert(label.clone(), table.labels.len());
                table.labels.push(label);
            }
        }
        table
    }

    /// Assigns indices in ascending label order, ignoring repeats.
    ///
    /// # Examples
    /// ```
    /// use waymark_core::VertexLabels;
    ///
    /// let labels = VertexLabels::from_sorted(["Oval", "Bank", "Oval", "Angel"]);
    /// let ordered: Vec<_> = labels.iter().copied().collect();
    /// assert_eq!(ordered, ["Angel", "Bank", "Oval"]);
    /// ```
    pub fn from_sorted(labels: impl IntoIterator<Item = L>) -> Self
    where
        L: Ord,
    {
        let mut sorted: Vec<L> = labels.into_iter().collect();
        sorted.sort();
        sorted.dedup();
        Self::from_first_seen(sorted)
    }

    /// Returns the number of distinct labels.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.labels.len() }

    /// Returns `true` when no labels were supplied.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Returns the index assigned to `label`.
    #[must_use]
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Returns the label at `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&L> {
        self.labels.get(index)
    }

    /// Iterates labels in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, L> {
        self.labels.iter()
    }

    /// Returns the index assigned to `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownLabel`] when the label was never seen.
    pub fn resolve(&self, label: &L) -> Result<usize>
    where
        L: Display,
    {
        self.index_of(label).ok_or_else(|| GraphError::UnknownLabel {
            label: label.to_string(),
        })
    }
}

impl<'a, L> IntoIterator for &'a VertexLabels<L> {
    type Item = &'a L;
    type IntoIter = std::slice::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}
