//! Helpers for sorted sequences (station lists, knot vectors).

/// Sort direction for [`is_sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Returns whether `values` is sorted in the given order (non-strict).
pub fn is_sorted<T: PartialOrd>(values: &[T], order: SortOrder) -> bool {
    values.windows(2).all(|w| match order {
        SortOrder::Ascending => w[0] <= w[1],
        SortOrder::Descending => w[0] >= w[1],
    })
}

/// Returns the leftmost index at which `x` can be inserted into the
/// ascending-sorted slice `values` while keeping it sorted.
///
/// Equal elements end up to the right of the returned index. The caller is
/// responsible for `values` being sorted ascending.
pub fn insertion_index<T: PartialOrd>(values: &[T], x: &T) -> usize {
    values.partition_point(|v| v < x)
}

/// Inserts `x` into the ascending-sorted `values` at its insertion index.
pub fn insert_sorted<T: PartialOrd>(values: &mut Vec<T>, x: T) {
    let idx = insertion_index(values, &x);
    values.insert(idx, x);
}
