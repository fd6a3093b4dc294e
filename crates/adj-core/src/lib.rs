#![deny(missing_docs)]
#![doc = "Core data model and error surface for the adj index algebra."]

mod adjacency;
pub mod errors;
mod options;
pub mod rng;
pub mod schema;

pub use adjacency::AdjacencyList;
pub use errors::{AdjError, ErrorInfo};
pub use options::{IndexBase, QuotientOptions};
pub use rng::RngHandle;
pub use schema::SchemaVersion;

/// Integer type used for neighbor values, renumbering entries and group labels.
///
/// Signed so that base conversions and arbitrary offsets stay representable
/// even when they move a value below zero.
pub type Index = i64;

/// Read-only view over an adjacency structure.
///
/// Every transformation in `adj-graph` is written against this trait so hosts
/// can pass their own nested storage without first copying it into an
/// [`AdjacencyList`].
pub trait Adjacency {
    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns the neighbor sequence of `node`.
    ///
    /// Panics when `node >= self.node_count()`.
    fn neighbors_of(&self, node: usize) -> &[Index];

    /// Iterates over neighbor sequences in node order.
    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows {
            source: self,
            next: 0,
        }
    }
}

impl Adjacency for [Vec<Index>] {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn neighbors_of(&self, node: usize) -> &[Index] {
        &self[node]
    }
}

impl Adjacency for Vec<Vec<Index>> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn neighbors_of(&self, node: usize) -> &[Index] {
        &self[node]
    }
}

/// Iterator returned by [`Adjacency::rows`].
#[derive(Debug)]
pub struct Rows<'a, A: ?Sized> {
    source: &'a A,
    next: usize,
}

impl<'a, A: Adjacency + ?Sized> Iterator for Rows<'a, A> {
    type Item = &'a [Index];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.source.node_count() {
            return None;
        }
        let row = self.source.neighbors_of(self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.node_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<'a, A: Adjacency + ?Sized> ExactSizeIterator for Rows<'a, A> {}
