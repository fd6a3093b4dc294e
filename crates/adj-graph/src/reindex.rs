use adj_core::errors::{AdjError, ErrorInfo};
use adj_core::{Adjacency, AdjacencyList, Index};

use crate::ids::{make_index, position};

/// Builds the adjacency list induced by a renumbering map.
///
/// Output position `j` holds the neighbors of source node `map[j]`, each
/// rewritten to its new position. Neighbors whose source node is not listed
/// in `map` are omitted; the survivors keep their original order. Source
/// nodes absent from `map` contribute nothing.
///
/// Fails with [`AdjError::DuplicateMapping`] before building any output when
/// two entries of `map` name the same source node.
///
/// Entries of `map` and stored neighbor values must lie in
/// `[0, list.node_count())`. Out-of-range values are not reported; they
/// panic on the bounds-checked lookup. See
/// [`reindex_checked`](crate::reindex_checked) for a reporting variant.
pub fn reindex<A>(list: &A, map: &[Index]) -> Result<AdjacencyList, AdjError>
where
    A: Adjacency + ?Sized,
{
    let lookup = build_lookup(list.node_count(), map)?;

    let mut output = AdjacencyList::with_capacity(map.len());
    for &source in map {
        let row = list
            .neighbors_of(position(source))
            .iter()
            .filter_map(|&neighbor| lookup[position(neighbor)])
            .map(make_index)
            .collect();
        output.push_node(row);
    }

    log::debug!(
        "reindexed {} nodes into {} ({} -> {} neighbor entries)",
        list.node_count(),
        output.len(),
        total_entries(list, map),
        output.edge_count()
    );
    Ok(output)
}

/// Maps each source node to the output position it takes, if any.
fn build_lookup(nodes: usize, map: &[Index]) -> Result<Vec<Option<usize>>, AdjError> {
    let mut lookup: Vec<Option<usize>> = vec![None; nodes];
    for (target, &source) in map.iter().enumerate() {
        let slot = &mut lookup[position(source)];
        if let Some(first) = *slot {
            log::warn!("renumbering map lists source node {source} twice");
            return Err(AdjError::DuplicateMapping(
                ErrorInfo::new(
                    "duplicate-mapping",
                    "renumbering map names the same source node more than once",
                )
                .with_context("source", source)
                .with_context("first_position", first)
                .with_context("second_position", target)
                .with_hint("every output position must draw from a distinct source node"),
            ));
        }
        *slot = Some(target);
    }
    Ok(lookup)
}

fn total_entries<A>(list: &A, map: &[Index]) -> usize
where
    A: Adjacency + ?Sized,
{
    map.iter()
        .map(|&source| list.neighbors_of(position(source)).len())
        .sum()
}
