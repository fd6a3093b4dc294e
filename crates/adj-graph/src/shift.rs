use adj_core::{Adjacency, AdjacencyList, Index, IndexBase};

/// Adds `shift` to every stored neighbor value.
///
/// The result has the same node count, the same degree per node and the same
/// neighbor order. Node positions are untouched; only the values stored as
/// neighbor references move. Nothing checks that shifted values stay in
/// range, and arithmetic wraps on `i64` overflow.
pub fn shift_index<A>(list: &A, shift: Index) -> AdjacencyList
where
    A: Adjacency + ?Sized,
{
    let nodes = list.node_count();
    let mut shifted = AdjacencyList::with_capacity(nodes);
    for node in 0..nodes {
        let row = list
            .neighbors_of(node)
            .iter()
            .map(|value| value.wrapping_add(shift))
            .collect();
        shifted.push_node(row);
    }
    log::debug!("shifted {nodes} nodes by {shift}");
    shifted
}

/// Converts a 1-based adjacency list into the 0-based convention.
pub fn zero_index<A>(list: &A) -> AdjacencyList
where
    A: Adjacency + ?Sized,
{
    shift_index(list, -1)
}

/// Converts a 0-based adjacency list back into the 1-based host convention.
pub fn one_index<A>(list: &A) -> AdjacencyList
where
    A: Adjacency + ?Sized,
{
    shift_index(list, 1)
}

/// Re-expresses neighbor values written under `from` in the `to` convention.
pub fn rebase<A>(list: &A, from: IndexBase, to: IndexBase) -> AdjacencyList
where
    A: Adjacency + ?Sized,
{
    shift_index(list, from.offset_to(to))
}

/// Re-expresses a flat sequence of node references, such as a renumbering
/// map or a group assignment, written under `from` in the `to` convention.
pub fn rebase_values(values: &[Index], from: IndexBase, to: IndexBase) -> Vec<Index> {
    let offset = from.offset_to(to);
    values.iter().map(|value| value.wrapping_add(offset)).collect()
}

/// Converts a 1-based renumbering map or group assignment to 0-based values.
pub fn zero_index_values(values: &[Index]) -> Vec<Index> {
    rebase_values(values, IndexBase::One, IndexBase::Zero)
}

/// Converts 0-based node references back to the 1-based host convention.
pub fn one_index_values(values: &[Index]) -> Vec<Index> {
    rebase_values(values, IndexBase::Zero, IndexBase::One)
}
