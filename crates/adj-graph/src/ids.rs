use adj_core::Index;

/// Converts a stored value into a position within a node-indexed table.
///
/// Negative values map to `usize::MAX` so that the subsequent bounds-checked
/// access fails loudly instead of wrapping onto a real node.
pub(crate) fn position(value: Index) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Creates a stored value from a position.
pub(crate) fn make_index(position: usize) -> Index {
    position as Index
}

/// Returns the position addressed by `value` if it lies in `[0, bound)`.
pub(crate) fn checked_position(value: Index, bound: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&slot| slot < bound)
}
