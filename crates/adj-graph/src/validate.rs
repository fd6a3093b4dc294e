//! Opt-in range checks.
//!
//! [`reindex`](fn@crate::reindex) and [`quotient`](fn@crate::quotient) trust their
//! inputs apart from the duplicate-mapping and length checks. The helpers
//! here report the remaining precondition violations as
//! [`AdjError::IndexOutOfRange`] for callers that cannot vouch for their data.

use adj_core::errors::{AdjError, ErrorInfo};
use adj_core::{Adjacency, AdjacencyList, Index, QuotientOptions};

use crate::ids::checked_position;
use crate::quotient::ensure_group_length;
use crate::{quotient, reindex};

/// Verifies that every stored neighbor addresses a node of `list`.
pub fn check_neighbors<A>(list: &A) -> Result<(), AdjError>
where
    A: Adjacency + ?Sized,
{
    let nodes = list.node_count();
    for node in 0..nodes {
        for (slot, &neighbor) in list.neighbors_of(node).iter().enumerate() {
            if checked_position(neighbor, nodes).is_none() {
                return Err(report(
                    out_of_range("neighbor", neighbor, nodes)
                        .with_context("node", node)
                        .with_context("slot", slot),
                ));
            }
        }
    }
    Ok(())
}

/// Verifies that every renumbering entry addresses a node of `list`.
pub fn check_map<A>(list: &A, map: &[Index]) -> Result<(), AdjError>
where
    A: Adjacency + ?Sized,
{
    let nodes = list.node_count();
    match map
        .iter()
        .enumerate()
        .find(|&(_, &source)| checked_position(source, nodes).is_none())
    {
        Some((target, &source)) => Err(report(
            out_of_range("map entry", source, nodes).with_context("position", target),
        )),
        None => Ok(()),
    }
}

/// Verifies that every group label lies in `[0, group_count)`.
pub fn check_groups(groups: &[Index], group_count: usize) -> Result<(), AdjError> {
    match groups
        .iter()
        .enumerate()
        .find(|&(_, &group)| checked_position(group, group_count).is_none())
    {
        Some((node, &group)) => Err(report(
            out_of_range("group label", group, group_count).with_context("node", node),
        )),
        None => Ok(()),
    }
}

/// [`reindex`](fn@crate::reindex) preceded by [`check_neighbors`] and [`check_map`].
pub fn reindex_checked<A>(list: &A, map: &[Index]) -> Result<AdjacencyList, AdjError>
where
    A: Adjacency + ?Sized,
{
    check_neighbors(list)?;
    check_map(list, map)?;
    reindex(list, map)
}

/// [`quotient`](fn@crate::quotient) preceded by the length check, [`check_neighbors`] and
/// [`check_groups`].
pub fn quotient_checked<A>(
    list: &A,
    groups: &[Index],
    group_count: usize,
    options: QuotientOptions,
) -> Result<AdjacencyList, AdjError>
where
    A: Adjacency + ?Sized,
{
    ensure_group_length(list.node_count(), groups)?;
    check_neighbors(list)?;
    check_groups(groups, group_count)?;
    quotient(list, groups, group_count, options)
}

fn out_of_range(what: &str, value: Index, bound: usize) -> ErrorInfo {
    ErrorInfo::new(
        "index-out-of-range",
        format!("{what} {value} is outside [0, {bound})"),
    )
    .with_context("value", value)
    .with_context("bound", bound)
}

fn report(info: ErrorInfo) -> AdjError {
    log::warn!("{info}");
    AdjError::IndexOutOfRange(info)
}
