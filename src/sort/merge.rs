//! Top-down merge sort
//!
//! Splits at the midpoint, sorts each half recursively and merges them.
//! Each merge owns two buffers sized to its halves; they are dropped when
//! the merge returns, so auxiliary space stays O(n).

use std::cmp::Ordering;

use super::SortStats;

/// Merge-sort `items`, returning the sorted vector
pub fn merge_sort<T, F>(items: Vec<T>, cmp: &mut F, stats: &mut SortStats) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    // Left half takes the middle element on odd lengths
    let mut left = items;
    let right = left.split_off((left.len() + 1) / 2);

    let left = merge_sort(left, cmp, stats);
    let right = merge_sort(right, cmp, stats);
    merge(left, right, cmp, stats)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &mut F, stats: &mut SortStats) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    stats.passes += 1;
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => {
                stats.comparisons += 1;
                // Ties go left to keep the sort stable
                cmp(l, r) != Ordering::Greater
            }
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
        stats.moves += 1;
    }

    merged
}
