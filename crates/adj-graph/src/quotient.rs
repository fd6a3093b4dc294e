use adj_core::errors::{AdjError, ErrorInfo};
use adj_core::{Adjacency, AdjacencyList, Index, QuotientOptions};

use crate::ids::position;

/// Contracts the nodes of `list` into `group_count` groups.
///
/// Row `g` of the result lists the groups reached by any member of group `g`.
/// Members are visited in source order and each member's neighbors in stored
/// order, so a group's row records destination groups in the order they were
/// first reached. With `allow_self_loops == false` edges that stay inside a
/// group are dropped; with `allow_duplicates == false` a destination group is
/// recorded at most once per row.
///
/// Fails with [`AdjError::LengthMismatch`] when `groups` does not hold one
/// entry per node. Group labels must lie in `[0, group_count)` and neighbor
/// values in `[0, list.node_count())`; violations panic on the bounds-checked
/// accesses rather than being reported. See
/// [`quotient_checked`](crate::quotient_checked) for a reporting variant.
pub fn quotient<A>(
    list: &A,
    groups: &[Index],
    group_count: usize,
    options: QuotientOptions,
) -> Result<AdjacencyList, AdjError>
where
    A: Adjacency + ?Sized,
{
    ensure_group_length(list.node_count(), groups)?;

    let mut rows = allocate_rows(list, groups, group_count, options);
    let mut dropped = 0usize;

    for (node, &group) in groups.iter().enumerate() {
        let source = position(group);
        for &neighbor in list.neighbors_of(node) {
            let destination = groups[position(neighbor)];
            if !options.allow_self_loops && position(destination) == source {
                log::trace!("group {group}: dropping self-loop from node {node}");
                dropped += 1;
                continue;
            }
            let row = &mut rows[source];
            if !options.allow_duplicates && row.contains(&destination) {
                log::trace!("group {group}: dropping repeated edge to group {destination}");
                dropped += 1;
                continue;
            }
            row.push(destination);
        }
    }

    if options.suppresses_edges() {
        for row in &mut rows {
            row.shrink_to_fit();
        }
    }

    let output = AdjacencyList::from_nested(rows);
    log::debug!(
        "contracted {} nodes into {} groups ({} kept, {} dropped)",
        list.node_count(),
        group_count,
        output.edge_count(),
        dropped
    );
    Ok(output)
}

pub(crate) fn ensure_group_length(nodes: usize, groups: &[Index]) -> Result<(), AdjError> {
    if groups.len() == nodes {
        return Ok(());
    }
    log::warn!(
        "group assignment covers {} nodes but the list has {nodes}",
        groups.len()
    );
    Err(AdjError::LengthMismatch(
        ErrorInfo::new(
            "length-mismatch",
            "group assignment length differs from the node count",
        )
        .with_context("nodes", nodes)
        .with_context("groups", groups.len())
        .with_hint("supply exactly one group label per node"),
    ))
}

/// Reserves each group's row at its worst-case size.
///
/// The bound is the summed degree of the group's members, capped at
/// `group_count` when repeated destinations are removed.
fn allocate_rows<A>(
    list: &A,
    groups: &[Index],
    group_count: usize,
    options: QuotientOptions,
) -> Vec<Vec<Index>>
where
    A: Adjacency + ?Sized,
{
    let mut sizes = vec![0usize; group_count];
    for (node, &group) in groups.iter().enumerate() {
        sizes[position(group)] += list.neighbors_of(node).len();
    }

    sizes
        .into_iter()
        .map(|size| {
            if options.allow_duplicates {
                Vec::with_capacity(size)
            } else {
                Vec::with_capacity(size.min(group_count))
            }
        })
        .collect()
}
