//! Cyclic index helper shared by focus rings, dropdowns, and radio groups.

/// Compute the next index in a circular list.
#[must_use]
pub(crate) fn cycle_index(current_idx: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let len_i64 = i64::try_from(len).unwrap_or(1);
    let current_i64 = i64::try_from(current_idx).unwrap_or(0);
    let next_i64 = (current_i64 + i64::from(direction)).rem_euclid(len_i64);
    usize::try_from(next_i64).unwrap_or(0)
}
