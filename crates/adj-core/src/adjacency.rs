use serde::{Deserialize, Serialize};

use crate::{Adjacency, Index};

/// Owned adjacency list: one ordered neighbor sequence per node.
///
/// Neighbor values are stored exactly as supplied. Nothing here checks that
/// they address a valid node; the transformations document which inputs they
/// trust and which they verify.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    rows: Vec<Vec<Index>>,
}

impl AdjacencyList {
    /// Creates an empty adjacency list.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates an empty adjacency list with room for `nodes` rows.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            rows: Vec::with_capacity(nodes),
        }
    }

    /// Wraps nested neighbor sequences without copying them.
    pub fn from_nested(rows: Vec<Vec<Index>>) -> Self {
        Self { rows }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the neighbor sequence of `node`, if the node exists.
    pub fn neighbors(&self, node: usize) -> Option<&[Index]> {
        self.rows.get(node).map(Vec::as_slice)
    }

    /// Returns the number of neighbor entries stored for `node`.
    pub fn degree(&self, node: usize) -> Option<usize> {
        self.rows.get(node).map(Vec::len)
    }

    /// Total number of neighbor entries across all nodes.
    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Appends a node with the given neighbor sequence and returns its position.
    pub fn push_node(&mut self, neighbors: Vec<Index>) -> usize {
        self.rows.push(neighbors);
        self.rows.len() - 1
    }

    /// Iterates over neighbor sequences in node order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[Index]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Borrows the underlying nested representation.
    pub fn as_nested(&self) -> &[Vec<Index>] {
        &self.rows
    }

    /// Consumes the list and returns the nested representation.
    pub fn into_nested(self) -> Vec<Vec<Index>> {
        self.rows
    }
}

impl Adjacency for AdjacencyList {
    fn node_count(&self) -> usize {
        self.rows.len()
    }

    fn neighbors_of(&self, node: usize) -> &[Index] {
        &self.rows[node]
    }
}

impl From<Vec<Vec<Index>>> for AdjacencyList {
    fn from(rows: Vec<Vec<Index>>) -> Self {
        Self::from_nested(rows)
    }
}

impl From<AdjacencyList> for Vec<Vec<Index>> {
    fn from(list: AdjacencyList) -> Self {
        list.into_nested()
    }
}

impl<R> FromIterator<R> for AdjacencyList
where
    R: IntoIterator<Item = Index>,
{
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().map(|row| row.into_iter().collect()).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = &'a Vec<Index>;
    type IntoIter = std::slice::Iter<'a, Vec<Index>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
