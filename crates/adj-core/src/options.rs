use serde::{Deserialize, Serialize};

use crate::Index;

/// Configuration controlling which edges survive a quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuotientOptions {
    /// Keep repeated edges between the same pair of groups.
    pub allow_duplicates: bool,
    /// Keep edges whose endpoints fall in the same group.
    pub allow_self_loops: bool,
}

impl QuotientOptions {
    /// Options producing a simple quotient graph: no repeats, no self-loops.
    pub const fn simple() -> Self {
        Self {
            allow_duplicates: false,
            allow_self_loops: false,
        }
    }

    /// Options that keep every induced edge.
    pub const fn multigraph() -> Self {
        Self {
            allow_duplicates: true,
            allow_self_loops: true,
        }
    }

    /// Returns whether the fill pass may discard any edge.
    pub const fn suppresses_edges(&self) -> bool {
        !self.allow_duplicates || !self.allow_self_loops
    }
}

impl Default for QuotientOptions {
    fn default() -> Self {
        Self::simple()
    }
}

/// Numbering convention used for neighbor values at an API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IndexBase {
    /// The first node is referred to as `0`.
    #[default]
    Zero,
    /// The first node is referred to as `1`.
    One,
}

impl IndexBase {
    /// Value that refers to the first node under this convention.
    pub const fn first(self) -> Index {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }

    /// Offset that converts values from `self` into `target`.
    pub const fn offset_to(self, target: IndexBase) -> Index {
        target.first() - self.first()
    }
}
