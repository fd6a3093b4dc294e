#![deny(missing_docs)]
#![doc = include_str!("../docs/adj-graph-api.md")]

//! Index algebra over adjacency lists implementing the `adj-core` contracts.

mod generators;
mod hash;
mod ids;
mod quotient;
mod reindex;
mod serialization;
mod shift;
mod validate;

pub use quotient::quotient;
pub use reindex::reindex;
pub use shift::{
    one_index, one_index_values, rebase, rebase_values, shift_index, zero_index,
    zero_index_values,
};
pub use validate::{check_groups, check_map, check_neighbors, quotient_checked, reindex_checked};

/// Re-export hashing helpers for comparing transformation results.
pub use hash::canonical_hash;

/// Deterministic input generators for property tests and benchmarks.
pub use generators::{gen_group_assignment, gen_permutation, gen_random_list};

/// Re-export serialization helpers for downstream crates.
pub use serialization::{list_from_bytes, list_from_json, list_to_bytes, list_to_json};
