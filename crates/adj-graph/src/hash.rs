use adj_core::{Adjacency, Index};
use sha2::{Digest, Sha256};

/// Computes the canonical structural hash for the provided list.
///
/// The digest covers node count, each row's length and each stored value in
/// order. Two lists hash equal exactly when they are equal row by row, so the
/// hash distinguishes neighbor orders that shift and reindex promise to keep.
pub fn canonical_hash<A>(list: &A) -> String
where
    A: Adjacency + ?Sized,
{
    let mut hasher = Sha256::new();
    hasher.update(b"adj:v1");
    hasher.update((list.node_count() as u64).to_le_bytes());
    for node in 0..list.node_count() {
        update_slice(list.neighbors_of(node), &mut hasher);
    }
    format!("{:x}", hasher.finalize())
}

fn update_slice(values: &[Index], hasher: &mut Sha256) {
    hasher.update((values.len() as u64).to_le_bytes());
    for value in values {
        hasher.update(value.to_le_bytes());
    }
}
