use std::hash::Hash;

use itertools::Itertools;

/// Removes duplicate values from `values`.
///
/// With `sorted` unset the distinct values keep the order of their first
/// occurrence, otherwise they come back in ascending order.
///
/// # Examples
///
/// ```
/// use cmdkit_core::collections::unique_ints;
///
/// assert_eq!(unique_ints(&[4, 3, 4, 3, 2, 2], false), vec![4, 3, 2]);
/// assert_eq!(unique_ints(&[4, 3, 4, 3, 2, 2], true), vec![2, 3, 4]);
/// ```
#[must_use]
pub fn unique_ints<T>(values: &[T], sorted: bool) -> Vec<T>
where
    T: Copy + Ord + Hash,
{
    if sorted {
        values.iter().copied().sorted_unstable().dedup().collect()
    } else {
        values.iter().copied().unique().collect()
    }
}
