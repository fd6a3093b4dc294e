use adj_core::errors::{AdjError, ErrorInfo};
use adj_core::rng::RngHandle;
use adj_core::{AdjacencyList, Index};

use crate::ids::make_index;

/// Generates a 0-based adjacency list with deterministic randomness.
///
/// Every node receives between `0` and `max_degree` neighbors drawn uniformly
/// from `[0, n_nodes)`; repeats and self-references are allowed, matching what
/// hosts may hand to the transformations.
pub fn gen_random_list(n_nodes: usize, max_degree: usize, rng: &mut RngHandle) -> AdjacencyList {
    let mut list = AdjacencyList::with_capacity(n_nodes);
    if n_nodes == 0 {
        return list;
    }
    for _ in 0..n_nodes {
        let degree = rng.up_to(max_degree);
        let row = (0..degree)
            .map(|_| make_index(rng.below(n_nodes)))
            .collect();
        list.push_node(row);
    }
    list
}

/// Assigns each of `n_nodes` nodes to one of `group_count` groups.
pub fn gen_group_assignment(
    n_nodes: usize,
    group_count: usize,
    rng: &mut RngHandle,
) -> Result<Vec<Index>, AdjError> {
    if group_count == 0 && n_nodes > 0 {
        return Err(AdjError::IndexOutOfRange(
            ErrorInfo::new(
                "index-out-of-range",
                "cannot place nodes when no group is available",
            )
            .with_context("nodes", n_nodes)
            .with_context("group_count", group_count),
        ));
    }
    Ok((0..n_nodes)
        .map(|_| make_index(rng.below(group_count)))
        .collect())
}

/// Draws a renumbering map that keeps `keep` distinct nodes in random order.
///
/// `keep` is clamped to `n_nodes`.
pub fn gen_permutation(n_nodes: usize, keep: usize, rng: &mut RngHandle) -> Vec<Index> {
    let mut order: Vec<Index> = (0..n_nodes).map(make_index).collect();
    rng.shuffle(&mut order);
    order.truncate(keep.min(n_nodes));
    order
}
